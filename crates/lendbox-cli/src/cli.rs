//! Command handlers for the lendbox CLI
//!
//! [`Cli`] turns parsed arguments into lender calls and renders the markdown
//! each call produces.

use anyhow::{anyhow, Context, Result};
use lendbox_core::{
    display::{Comments, Items},
    params::{CanComment, Id, ListBookings, ListItems, ListRequests},
    Lender,
};
use log::debug;

use crate::{
    args::{BookingCommands, CommentCommands, ItemCommands, RequestCommands, UserCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    lender: Lender,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(lender: Lender, renderer: TerminalRenderer) -> Self {
        Self { lender, renderer }
    }

    pub async fn handle_user_command(&self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::Add(args) => {
                let result = self
                    .lender
                    .create_user_result(&args.into())
                    .await
                    .context("Failed to create user")?;
                self.renderer.render(&result.to_string())
            }
            UserCommands::Show(args) => {
                let params: Id = args.into();
                let user = self
                    .lender
                    .get_user(&params)
                    .await
                    .context("Failed to get user")?
                    .ok_or_else(|| anyhow!("User with ID {} not found", params.id))?;
                let owned = self
                    .lender
                    .owner_items(user.id, &ListItems::default())
                    .await
                    .context("Failed to list items")?;
                let items = Items(owned.into_iter().map(|summary| summary.item).collect());

                let mut output = user.to_string();
                if items.is_empty() {
                    output.push_str("\nNo items listed.\n");
                } else {
                    output.push_str(&format!("\n## Items\n\n{items}"));
                }
                self.renderer.render(&output)
            }
        }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => {
                let owner_id = args.acting.user_id;
                let result = self
                    .lender
                    .create_item_result(owner_id, &args.into())
                    .await
                    .context("Failed to create item")?;
                self.renderer.render(&result.to_string())
            }
            ItemCommands::Show(args) => {
                let requester_id = args.acting.user_id;
                let summary = self
                    .lender
                    .item_bookings(requester_id, &args.into())
                    .await
                    .context("Failed to show item")?;
                self.renderer.render(&summary.to_string())
            }
            ItemCommands::Edit(args) => {
                let requester_id = args.acting.user_id;
                let result = self
                    .lender
                    .update_item_result(requester_id, &args.into())
                    .await
                    .context("Failed to update item")?;
                self.renderer.render(&result.to_string())
            }
            ItemCommands::List(args) => {
                let owner_id = args.acting.user_id;
                let params: ListItems = args.into();
                debug!("listing items of user {owner_id}: {params:?}");

                let items = self
                    .lender
                    .owner_items_result(owner_id, &params)
                    .await
                    .context("Failed to list items")?;
                self.renderer.render_section("Your items", &items.to_string())
            }
            ItemCommands::Search(args) => {
                let items = self
                    .lender
                    .search_items_result(&args.into())
                    .await
                    .context("Failed to search items")?;
                self.renderer.render_section("Available items", &items.to_string())
            }
        }
    }

    pub async fn handle_request_command(&self, command: RequestCommands) -> Result<()> {
        match command {
            RequestCommands::Add(args) => {
                let requester_id = args.acting.user_id;
                let result = self
                    .lender
                    .create_request_result(requester_id, &args.into())
                    .await
                    .context("Failed to create request")?;
                self.renderer.render(&result.to_string())
            }
            RequestCommands::Show(args) => {
                let requester_id = args.acting.user_id;
                let request = self
                    .lender
                    .get_request(requester_id, &args.into())
                    .await
                    .context("Failed to show request")?;
                self.renderer.render(&request.to_string())
            }
            RequestCommands::List(args) => {
                let requester_id = args.acting.user_id;
                let params: ListRequests = args.into();
                debug!("listing requests for user {requester_id}: {params:?}");

                let requests = self
                    .lender
                    .list_requests_result(requester_id, &params)
                    .await
                    .context("Failed to list requests")?;

                let title = if params.others {
                    "Requests from other users"
                } else {
                    "Your requests"
                };
                self.renderer.render_section(title, &requests.to_string())
            }
        }
    }

    pub async fn handle_booking_command(&self, command: BookingCommands) -> Result<()> {
        match command {
            BookingCommands::Create(args) => {
                let requester_id = args.acting.user_id;
                let result = self
                    .lender
                    .create_booking_result(requester_id, &args.into())
                    .await
                    .context("Failed to create booking")?;
                self.renderer.render(&result.to_string())
            }
            BookingCommands::Approve(args) => {
                let requester_id = args.acting.user_id;
                let result = self
                    .lender
                    .decide_booking_result(requester_id, &args.into_params(true))
                    .await
                    .context("Failed to approve booking")?;
                self.renderer.render(&result.to_string())
            }
            BookingCommands::Reject(args) => {
                let requester_id = args.acting.user_id;
                let result = self
                    .lender
                    .decide_booking_result(requester_id, &args.into_params(false))
                    .await
                    .context("Failed to reject booking")?;
                self.renderer.render(&result.to_string())
            }
            BookingCommands::Show(args) => {
                let requester_id = args.acting.user_id;
                let details = self
                    .lender
                    .get_booking(requester_id, &args.into())
                    .await
                    .context("Failed to show booking")?;
                self.renderer.render(&details.to_string())
            }
            BookingCommands::List(args) => {
                let requester_id = args.acting.user_id;
                let params: ListBookings = args.into();
                debug!("listing bookings for user {requester_id}: {params:?}");

                let bookings = self
                    .lender
                    .list_bookings_result(requester_id, &params)
                    .await
                    .context("Failed to list bookings")?;

                let title = if params.owner {
                    format!("Bookings of your items ({})", params.state.to_uppercase())
                } else {
                    format!("Your bookings ({})", params.state.to_uppercase())
                };
                self.renderer.render_section(&title, &bookings.to_string())
            }
        }
    }

    pub async fn handle_comment_command(&self, command: CommentCommands) -> Result<()> {
        match command {
            CommentCommands::Add(args) => {
                let author_id = args.acting.user_id;
                let result = self
                    .lender
                    .add_comment_result(author_id, &args.into())
                    .await
                    .context("Failed to add comment")?;
                self.renderer.render(&result.to_string())
            }
            CommentCommands::Check(args) => {
                let user_id = args.acting.user_id;
                let params: CanComment = args.into();
                let allowed = self
                    .lender
                    .can_comment(user_id, params.item_id)
                    .await
                    .context("Failed to check comment eligibility")?;

                let verdict = if allowed {
                    format!("User {user_id} may comment on item {}.", params.item_id)
                } else {
                    format!(
                        "User {user_id} may not comment on item {} yet: no approved booking has started.",
                        params.item_id
                    )
                };
                self.renderer.render(&format!("{verdict}\n"))
            }
            CommentCommands::List(args) => {
                let params: Id = args.into();
                let comments: Comments = self
                    .lender
                    .list_comments_result(&params)
                    .await
                    .context("Failed to list comments")?;
                self.renderer
                    .render_section(&format!("Comments on item {}", params.id), &comments.to_string())
            }
        }
    }
}
