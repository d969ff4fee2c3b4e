//! Command-line interface definitions using clap
//!
//! Each subcommand has its own clap wrapper that converts into the core
//! parameter type with `From`, so clap attributes never leak into
//! `lendbox_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Lender
//! ```
//!
//! The acting user is passed per command with `--as <USER_ID>` and handed to
//! the lender separately from the parameters.

use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use jiff::Timestamp;
use lendbox_core::params::*;

/// Peer-to-peer item sharing: list items, book them, approve requests and
/// comment on what you rented.
#[derive(Parser)]
#[command(version, about, name = "lendbox")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lendbox/lendbox.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Report authority failures as forbidden instead of not found
    #[arg(long, global = true)]
    pub strict_access: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register and inspect users
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// List and manage items
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Request, decide and list bookings
    #[command(alias = "b")]
    Booking {
        #[command(subcommand)]
        command: BookingCommands,
    },
    /// Ask for items nobody has listed yet
    #[command(alias = "r")]
    Request {
        #[command(subcommand)]
        command: RequestCommands,
    },
    /// Comment on rented items
    #[command(alias = "c")]
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },
    /// Start the MCP server
    Serve,
}

/// The user a command acts on behalf of.
#[derive(ClapArgs)]
pub struct ActingUser {
    /// ID of the acting user
    #[arg(long = "as", value_name = "USER_ID")]
    pub user_id: u64,
}

// ============================================================================
// Users
// ============================================================================

/// Register a new user
#[derive(ClapArgs)]
pub struct AddUserArgs {
    /// Display name
    pub name: String,
    /// Email address, unique across users
    pub email: String,
}

impl From<AddUserArgs> for CreateUser {
    fn from(val: AddUserArgs) -> Self {
        CreateUser {
            name: val.name,
            email: val.email,
        }
    }
}

/// Show a user and the items they own
#[derive(ClapArgs)]
pub struct ShowUserArgs {
    /// ID of the user
    pub id: u64,
}

impl From<ShowUserArgs> for Id {
    fn from(val: ShowUserArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    #[command(alias = "a")]
    Add(AddUserArgs),
    /// Show a user and their items
    #[command(alias = "s")]
    Show(ShowUserArgs),
}

// ============================================================================
// Items
// ============================================================================

/// List a new item for others to book
#[derive(ClapArgs)]
pub struct AddItemArgs {
    #[command(flatten)]
    pub acting: ActingUser,
    /// Name of the item
    pub name: String,
    /// Optional description of the item
    #[arg(short, long)]
    pub description: Option<String>,
    /// List the item closed to bookings
    #[arg(long)]
    pub unavailable: bool,
    /// ID of the item request this item answers
    #[arg(long = "request", value_name = "REQUEST_ID")]
    pub request_id: Option<u64>,
}

impl From<AddItemArgs> for CreateItem {
    fn from(val: AddItemArgs) -> Self {
        CreateItem {
            name: val.name,
            description: val.description,
            available: !val.unavailable,
            request_id: val.request_id,
        }
    }
}

/// Show an item with its comments; owners also see the surrounding
/// approved bookings
#[derive(ClapArgs)]
pub struct ShowItemArgs {
    /// ID of the item
    pub id: u64,
    #[command(flatten)]
    pub acting: ActingUser,
}

impl From<ShowItemArgs> for Id {
    fn from(val: ShowItemArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit one of your items; options left out stay unchanged
#[derive(ClapArgs)]
pub struct EditItemArgs {
    /// ID of the item
    pub id: u64,
    #[command(flatten)]
    pub acting: ActingUser,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New description; an empty value clears it
    #[arg(short, long)]
    pub description: Option<String>,
    /// Whether the item accepts new bookings
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub available: Option<bool>,
}

impl From<EditItemArgs> for UpdateItem {
    fn from(val: EditItemArgs) -> Self {
        UpdateItem {
            item_id: val.id,
            name: val.name,
            description: val.description,
            available: val.available,
        }
    }
}

/// List your items with their comments and surrounding approved bookings
#[derive(ClapArgs)]
pub struct ListItemsArgs {
    #[command(flatten)]
    pub acting: ActingUser,
    /// Offset of the first item
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub from: i64,
    /// Maximum number of items
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub size: i64,
}

impl From<ListItemsArgs> for ListItems {
    fn from(val: ListItemsArgs) -> Self {
        ListItems {
            from: val.from,
            size: val.size,
        }
    }
}

/// Find available items by name or description
#[derive(ClapArgs)]
pub struct SearchItemsArgs {
    /// Text to look for, ignoring case
    pub text: String,
    /// Offset of the first match
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub from: i64,
    /// Maximum number of matches
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub size: i64,
}

impl From<SearchItemsArgs> for SearchItems {
    fn from(val: SearchItemsArgs) -> Self {
        SearchItems {
            text: val.text,
            from: val.from,
            size: val.size,
        }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// List a new item
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Show an item
    #[command(alias = "s")]
    Show(ShowItemArgs),
    /// Edit an item's name, description or availability
    #[command(alias = "e")]
    Edit(EditItemArgs),
    /// List your items
    #[command(aliases = ["l", "ls"])]
    List(ListItemsArgs),
    /// Search available items
    Search(SearchItemsArgs),
}

// ============================================================================
// Item requests
// ============================================================================

/// Ask for an item nobody has listed yet
#[derive(ClapArgs)]
pub struct AddRequestArgs {
    #[command(flatten)]
    pub acting: ActingUser,
    /// What you are looking for
    pub description: String,
}

impl From<AddRequestArgs> for CreateRequest {
    fn from(val: AddRequestArgs) -> Self {
        CreateRequest {
            description: val.description,
        }
    }
}

/// Show a request with the items offered for it
#[derive(ClapArgs)]
pub struct ShowRequestArgs {
    /// ID of the request
    pub id: u64,
    #[command(flatten)]
    pub acting: ActingUser,
}

impl From<ShowRequestArgs> for Id {
    fn from(val: ShowRequestArgs) -> Self {
        Id { id: val.id }
    }
}

/// List requests, newest first
#[derive(ClapArgs)]
pub struct ListRequestsArgs {
    #[command(flatten)]
    pub acting: ActingUser,
    /// List requests of other users instead of your own
    #[arg(long)]
    pub others: bool,
    /// Offset of the first request
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub from: i64,
    /// Maximum number of requests
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub size: i64,
}

impl From<ListRequestsArgs> for ListRequests {
    fn from(val: ListRequestsArgs) -> Self {
        ListRequests {
            others: val.others,
            from: val.from,
            size: val.size,
        }
    }
}

#[derive(Subcommand)]
pub enum RequestCommands {
    /// Post a request
    #[command(alias = "a")]
    Add(AddRequestArgs),
    /// Show a request
    #[command(alias = "s")]
    Show(ShowRequestArgs),
    /// List requests
    #[command(aliases = ["l", "ls"])]
    List(ListRequestsArgs),
}

// ============================================================================
// Bookings
// ============================================================================

/// Request a booking of someone else's item
#[derive(ClapArgs)]
pub struct CreateBookingArgs {
    #[command(flatten)]
    pub acting: ActingUser,
    /// ID of the item to book
    #[arg(long = "item", value_name = "ITEM_ID")]
    pub item_id: u64,
    /// Start of the rental window (RFC 3339, e.g. 2030-01-01T10:00:00Z)
    #[arg(long)]
    pub start: Timestamp,
    /// End of the rental window (RFC 3339)
    #[arg(long)]
    pub end: Timestamp,
}

impl From<CreateBookingArgs> for CreateBooking {
    fn from(val: CreateBookingArgs) -> Self {
        CreateBooking {
            item_id: val.item_id,
            start: val.start,
            end: val.end,
        }
    }
}

/// Approve or reject a waiting booking of one of your items
#[derive(ClapArgs)]
pub struct DecideBookingArgs {
    /// ID of the booking
    pub id: u64,
    #[command(flatten)]
    pub acting: ActingUser,
}

impl DecideBookingArgs {
    pub fn into_params(self, approved: bool) -> DecideBooking {
        DecideBooking {
            booking_id: self.id,
            approved,
        }
    }
}

/// Show a booking you made or one of your items' bookings
#[derive(ClapArgs)]
pub struct ShowBookingArgs {
    /// ID of the booking
    pub id: u64,
    #[command(flatten)]
    pub acting: ActingUser,
}

impl From<ShowBookingArgs> for Id {
    fn from(val: ShowBookingArgs) -> Self {
        Id { id: val.id }
    }
}

/// List bookings, newest start first
#[derive(ClapArgs)]
pub struct ListBookingsArgs {
    #[command(flatten)]
    pub acting: ActingUser,
    /// List bookings of items you own instead of your own requests
    #[arg(long)]
    pub owner: bool,
    /// ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED (any case)
    #[arg(long, default_value = "ALL")]
    pub state: String,
    /// Offset of the first booking
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub from: i64,
    /// Maximum number of bookings
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub size: i64,
}

impl From<ListBookingsArgs> for ListBookings {
    fn from(val: ListBookingsArgs) -> Self {
        ListBookings {
            state: val.state,
            from: val.from,
            size: val.size,
            owner: val.owner,
        }
    }
}

#[derive(Subcommand)]
pub enum BookingCommands {
    /// Request a booking
    #[command(alias = "c")]
    Create(CreateBookingArgs),
    /// Approve a waiting booking
    Approve(DecideBookingArgs),
    /// Reject a waiting booking
    Reject(DecideBookingArgs),
    /// Show a booking
    #[command(alias = "s")]
    Show(ShowBookingArgs),
    /// List bookings
    #[command(aliases = ["l", "ls"])]
    List(ListBookingsArgs),
}

// ============================================================================
// Comments
// ============================================================================

/// Comment on an item you have rented
#[derive(ClapArgs)]
pub struct AddCommentArgs {
    #[command(flatten)]
    pub acting: ActingUser,
    /// ID of the item
    #[arg(long = "item", value_name = "ITEM_ID")]
    pub item_id: u64,
    /// Comment text
    pub text: String,
}

impl From<AddCommentArgs> for AddComment {
    fn from(val: AddCommentArgs) -> Self {
        AddComment {
            item_id: val.item_id,
            text: val.text,
        }
    }
}

/// List comments on an item, newest first
#[derive(ClapArgs)]
pub struct ListCommentsArgs {
    /// ID of the item
    #[arg(long = "item", value_name = "ITEM_ID")]
    pub item_id: u64,
}

impl From<ListCommentsArgs> for Id {
    fn from(val: ListCommentsArgs) -> Self {
        Id { id: val.item_id }
    }
}

/// Check whether you may comment on an item yet
#[derive(ClapArgs)]
pub struct CheckCommentArgs {
    #[command(flatten)]
    pub acting: ActingUser,
    /// ID of the item
    #[arg(long = "item", value_name = "ITEM_ID")]
    pub item_id: u64,
}

impl From<CheckCommentArgs> for CanComment {
    fn from(val: CheckCommentArgs) -> Self {
        CanComment {
            item_id: val.item_id,
        }
    }
}

#[derive(Subcommand)]
pub enum CommentCommands {
    /// Add a comment
    #[command(alias = "a")]
    Add(AddCommentArgs),
    /// Check whether you may comment on an item
    Check(CheckCommentArgs),
    /// List comments on an item
    #[command(aliases = ["l", "ls"])]
    List(ListCommentsArgs),
}
