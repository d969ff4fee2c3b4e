//! MCP server for lendbox
//!
//! Exposes the lender operations as Model Context Protocol tools over stdio.
//! Every tool except `create_user`, `show_user`, `search_items` and
//! `list_comments` takes the acting `user_id` next to its own parameters.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use lendbox_core::Lender;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    ActingId, AddComment, CanComment, CreateBooking, CreateItem, CreateRequest, CreateUser,
    DecideBooking, Id, ListBookings, ListItems, ListRequests, McpResult, SearchItems, UpdateItem,
};

/// MCP server for lendbox
#[derive(Clone)]
pub struct LendboxMcpServer {
    lender: Arc<Mutex<Lender>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LendboxMcpServer {
    pub fn new(lender: Lender) -> Self {
        Self {
            lender: Arc::new(Mutex::new(lender)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.lender.clone())
    }

    #[tool(
        name = "create_user",
        description = "Register a new user with a display name and a unique email address. Returns the new user ID, which other tools take as user_id."
    )]
    async fn create_user(&self, params: Parameters<CreateUser>) -> McpResult {
        self.handlers().create_user(params).await
    }

    #[tool(
        name = "show_user",
        description = "Show a user and the items they own."
    )]
    async fn show_user(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_user(params).await
    }

    #[tool(
        name = "create_item",
        description = "List a new item owned by user_id. Provide a name, an optional description and whether it is available (default true). Set request_id to offer the item in answer to an item request. Only available items accept booking requests."
    )]
    async fn create_item(&self, params: Parameters<CreateItem>) -> McpResult {
        self.handlers().create_item(params).await
    }

    #[tool(
        name = "update_item",
        description = "Edit an item owned by user_id. Any of name, description and available may be given; omitted fields are left unchanged and a blank description clears it. Closing an item stops new booking requests but leaves existing bookings alone."
    )]
    async fn update_item(&self, params: Parameters<UpdateItem>) -> McpResult {
        self.handlers().update_item(params).await
    }

    #[tool(
        name = "list_items",
        description = "List the items owned by user_id in creation order, each with its comments and its latest started and next upcoming approved bookings. Paged with from (offset, default 0) and size (default 20)."
    )]
    async fn list_items(&self, params: Parameters<ListItems>) -> McpResult {
        self.handlers().list_items(params).await
    }

    #[tool(
        name = "search_items",
        description = "Find available items whose name or description contains text, case-insensitively. Blank text matches nothing. Paged with from (offset, default 0) and size (default 20)."
    )]
    async fn search_items(&self, params: Parameters<SearchItems>) -> McpResult {
        self.handlers().search_items(params).await
    }

    #[tool(
        name = "show_item",
        description = "Show an item with its comments, newest first. When user_id owns the item, the latest approved booking that has started and the next approved booking yet to start are included."
    )]
    async fn show_item(&self, params: Parameters<ActingId>) -> McpResult {
        self.handlers().show_item(params).await
    }

    #[tool(
        name = "create_booking",
        description = "Request a booking of someone else's item for user_id. start and end are RFC 3339 timestamps; start must not be in the past and end must be after start. New bookings are WAITING until the owner decides."
    )]
    async fn create_booking(&self, params: Parameters<CreateBooking>) -> McpResult {
        self.handlers().create_booking(params).await
    }

    #[tool(
        name = "decide_booking",
        description = "Approve (approved=true) or reject (approved=false) a WAITING booking of an item owned by user_id. A booking is decided exactly once; later decisions fail and the status stays unchanged."
    )]
    async fn decide_booking(&self, params: Parameters<DecideBooking>) -> McpResult {
        self.handlers().decide_booking(params).await
    }

    #[tool(
        name = "show_booking",
        description = "Show a booking with its item and booker. Visible only to the booker and the item's owner."
    )]
    async fn show_booking(&self, params: Parameters<ActingId>) -> McpResult {
        self.handlers().show_booking(params).await
    }

    #[tool(
        name = "list_bookings",
        description = "List bookings made by user_id, or with owner=true the bookings of items user_id owns. state is one of ALL (default), CURRENT, PAST, FUTURE, WAITING, REJECTED, case-insensitive. Results are ordered by start, newest first, paged with from (offset, default 0) and size (default 20)."
    )]
    async fn list_bookings(&self, params: Parameters<ListBookings>) -> McpResult {
        self.handlers().list_bookings(params).await
    }

    #[tool(
        name = "add_comment",
        description = "Comment on an item as user_id. Allowed only once user_id has an APPROVED booking of the item that has already started."
    )]
    async fn add_comment(&self, params: Parameters<AddComment>) -> McpResult {
        self.handlers().add_comment(params).await
    }

    #[tool(
        name = "can_comment",
        description = "Check whether user_id may comment on an item, which needs an APPROVED booking of it that has already started."
    )]
    async fn can_comment(&self, params: Parameters<CanComment>) -> McpResult {
        self.handlers().can_comment(params).await
    }

    #[tool(
        name = "create_request",
        description = "Post a request as user_id describing an item they would like to borrow. Owners answer by creating an item with request_id set."
    )]
    async fn create_request(&self, params: Parameters<CreateRequest>) -> McpResult {
        self.handlers().create_request(params).await
    }

    #[tool(
        name = "show_request",
        description = "Show an item request with the items offered in answer to it."
    )]
    async fn show_request(&self, params: Parameters<ActingId>) -> McpResult {
        self.handlers().show_request(params).await
    }

    #[tool(
        name = "list_requests",
        description = "List the requests posted by user_id, or with others=true the requests of every other user, newest first. Paged with from (offset, default 0) and size (default 20)."
    )]
    async fn list_requests(&self, params: Parameters<ListRequests>) -> McpResult {
        self.handlers().list_requests(params).await
    }

    #[tool(
        name = "list_comments",
        description = "List the comments on an item, newest first."
    )]
    async fn list_comments(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().list_comments(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for LendboxMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "lendbox".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Lendbox is a peer-to-peer item sharing service. Users list items, other users request time-bounded bookings, owners approve or reject each request once, and renters comment on items they have used.

## Core Concepts
- **Users**: identified by ID; most tools take the acting `user_id`
- **Items**: owned by one user; only available items accept booking requests
- **Item requests**: a user describes what they want to borrow; owners answer with a new item
- **Bookings**: a window [start, end] on an item, WAITING until the owner approves or rejects it
- **Comments**: allowed once the author has an approved booking of the item that has started

## Typical Flow
1. `create_user` for the owner and the renter
2. `create_item` as the owner
3. `create_booking` as the renter
4. `decide_booking` as the owner
5. `list_bookings` with state CURRENT, PAST or FUTURE to follow the rental
6. `can_comment`, then `add_comment` as the renter once the rental has started

Use `search_items` to find something to borrow, and `create_request` when nothing fits.

Bookings and items of other users are reported as not found."#
                .to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: LendboxMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting lendbox MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_server_registers_tools() {
        let temp_dir = TempDir::new().unwrap();
        let lender = lendbox_core::LenderBuilder::new()
            .with_database_path(Some(temp_dir.path().join("serve.db")))
            .build()
            .await
            .unwrap();
        let server = LendboxMcpServer::new(lender);

        let names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        for expected in [
            "create_user",
            "create_item",
            "create_booking",
            "decide_booking",
            "show_booking",
            "list_bookings",
            "add_comment",
            "show_item",
            "update_item",
            "list_items",
            "search_items",
            "create_request",
            "show_request",
            "list_requests",
            "can_comment",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing tool {expected}");
        }

        let info = server.get_info();
        assert_eq!(info.server_info.name, "lendbox");
        assert!(info.capabilities.tools.is_some());
    }
}
