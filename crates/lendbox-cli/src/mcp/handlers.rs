//! MCP tool handlers implementation

use std::sync::Arc;

use lendbox_core::{display::Items, params as core, Lender};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Parameter wrappers
// ============================================================================
//
// Core parameter types stay free of MCP concerns. `McpParams` passes a core
// type straight through; `Acting` adds the id of the user a tool call acts
// for, since an MCP client has no `--as` flag.

/// Transparent MCP wrapper for core parameter types.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

/// Core parameters plus the acting user.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct Acting<T>
where
    T: JsonSchema,
{
    /// ID of the user performing the operation
    pub user_id: u64,
    #[serde(flatten)]
    pub params: T,
}

pub type Id = McpParams<core::Id>;
pub type CreateUser = McpParams<core::CreateUser>;
pub type ActingId = Acting<core::Id>;
pub type CreateItem = Acting<core::CreateItem>;
pub type UpdateItem = Acting<core::UpdateItem>;
pub type ListItems = Acting<core::ListItems>;
pub type SearchItems = McpParams<core::SearchItems>;
pub type CreateRequest = Acting<core::CreateRequest>;
pub type ListRequests = Acting<core::ListRequests>;
pub type CanComment = Acting<core::CanComment>;
pub type CreateBooking = Acting<core::CreateBooking>;
pub type DecideBooking = Acting<core::DecideBooking>;
pub type ListBookings = Acting<core::ListBookings>;
pub type AddComment = Acting<core::AddComment>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(markdown.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    lender: Arc<Mutex<Lender>>,
}

impl McpHandlers {
    pub fn new(lender: Arc<Mutex<Lender>>) -> Self {
        Self { lender }
    }

    pub async fn create_user(&self, Parameters(params): Parameters<CreateUser>) -> McpResult {
        debug!("create_user: {params:?}");

        let result = self
            .lender
            .lock()
            .await
            .create_user_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create user", &e))?;

        text(result.to_string())
    }

    pub async fn show_user(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_user: {params:?}");

        let lender = self.lender.lock().await;
        let user = lender
            .get_user(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get user", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("User with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;
        let owned = lender
            .owner_items(user.id, &core::ListItems::default())
            .await
            .map_err(|e| to_mcp_error("Failed to list items", &e))?;
        let items = Items(owned.into_iter().map(|summary| summary.item).collect());

        let mut output = user.to_string();
        if !items.is_empty() {
            output.push_str(&format!("\n## Items\n\n{items}"));
        }
        text(output)
    }

    pub async fn create_item(&self, Parameters(params): Parameters<CreateItem>) -> McpResult {
        debug!("create_item: {params:?}");

        let result = self
            .lender
            .lock()
            .await
            .create_item_result(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to create item", &e))?;

        text(result.to_string())
    }

    pub async fn update_item(&self, Parameters(params): Parameters<UpdateItem>) -> McpResult {
        debug!("update_item: {params:?}");

        let result = self
            .lender
            .lock()
            .await
            .update_item_result(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to update item", &e))?;

        text(result.to_string())
    }

    pub async fn list_items(&self, Parameters(params): Parameters<ListItems>) -> McpResult {
        debug!("list_items: {params:?}");

        let items = self
            .lender
            .lock()
            .await
            .owner_items_result(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to list items", &e))?;

        text(format!("# Your items\n\n{items}"))
    }

    pub async fn search_items(&self, Parameters(params): Parameters<SearchItems>) -> McpResult {
        debug!("search_items: {params:?}");

        let items = self
            .lender
            .lock()
            .await
            .search_items_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to search items", &e))?;

        text(format!("# Available items\n\n{items}"))
    }

    pub async fn show_item(&self, Parameters(params): Parameters<ActingId>) -> McpResult {
        debug!("show_item: {params:?}");

        let summary = self
            .lender
            .lock()
            .await
            .item_bookings(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to show item", &e))?;

        text(summary.to_string())
    }

    pub async fn create_booking(&self, Parameters(params): Parameters<CreateBooking>) -> McpResult {
        debug!("create_booking: {params:?}");

        let result = self
            .lender
            .lock()
            .await
            .create_booking_result(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to create booking", &e))?;

        text(result.to_string())
    }

    pub async fn decide_booking(&self, Parameters(params): Parameters<DecideBooking>) -> McpResult {
        debug!("decide_booking: {params:?}");

        let result = self
            .lender
            .lock()
            .await
            .decide_booking_result(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to decide booking", &e))?;

        text(result.to_string())
    }

    pub async fn show_booking(&self, Parameters(params): Parameters<ActingId>) -> McpResult {
        debug!("show_booking: {params:?}");

        let details = self
            .lender
            .lock()
            .await
            .get_booking(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to get booking", &e))?;

        text(details.to_string())
    }

    pub async fn list_bookings(&self, Parameters(params): Parameters<ListBookings>) -> McpResult {
        debug!("list_bookings: {params:?}");

        let inner = &params.params;
        let bookings = self
            .lender
            .lock()
            .await
            .list_bookings_result(params.user_id, inner)
            .await
            .map_err(|e| to_mcp_error("Failed to list bookings", &e))?;

        let scope = if inner.owner {
            "Bookings of your items"
        } else {
            "Your bookings"
        };
        text(format!(
            "# {scope} ({})\n\n{bookings}",
            inner.state.to_uppercase()
        ))
    }

    pub async fn add_comment(&self, Parameters(params): Parameters<AddComment>) -> McpResult {
        debug!("add_comment: {params:?}");

        let result = self
            .lender
            .lock()
            .await
            .add_comment_result(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to add comment", &e))?;

        text(result.to_string())
    }

    pub async fn can_comment(&self, Parameters(params): Parameters<CanComment>) -> McpResult {
        debug!("can_comment: {params:?}");

        let (user_id, item_id) = (params.user_id, params.params.item_id);
        let allowed = self
            .lender
            .lock()
            .await
            .can_comment(user_id, item_id)
            .await
            .map_err(|e| to_mcp_error("Failed to check comment eligibility", &e))?;

        if allowed {
            text(format!("User {user_id} may comment on item {item_id}.\n"))
        } else {
            text(format!(
                "User {user_id} may not comment on item {item_id} yet: no approved booking has started.\n"
            ))
        }
    }

    pub async fn create_request(&self, Parameters(params): Parameters<CreateRequest>) -> McpResult {
        debug!("create_request: {params:?}");

        let result = self
            .lender
            .lock()
            .await
            .create_request_result(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to create request", &e))?;

        text(result.to_string())
    }

    pub async fn show_request(&self, Parameters(params): Parameters<ActingId>) -> McpResult {
        debug!("show_request: {params:?}");

        let request = self
            .lender
            .lock()
            .await
            .get_request(params.user_id, &params.params)
            .await
            .map_err(|e| to_mcp_error("Failed to show request", &e))?;

        text(request.to_string())
    }

    pub async fn list_requests(&self, Parameters(params): Parameters<ListRequests>) -> McpResult {
        debug!("list_requests: {params:?}");

        let inner = &params.params;
        let requests = self
            .lender
            .lock()
            .await
            .list_requests_result(params.user_id, inner)
            .await
            .map_err(|e| to_mcp_error("Failed to list requests", &e))?;

        let scope = if inner.others {
            "Requests from other users"
        } else {
            "Your requests"
        };
        text(format!("# {scope}\n\n{requests}"))
    }

    pub async fn list_comments(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("list_comments: {params:?}");

        let comments = self
            .lender
            .lock()
            .await
            .list_comments_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list comments", &e))?;

        text(format!("# Comments on item {}\n\n{comments}", params.as_ref().id))
    }
}
