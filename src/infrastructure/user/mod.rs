//! User infrastructure module
//!
//! This module provides the HTTP client for the remote user service, the
//! list and detail services that drive the views, and the dialog trait used
//! for delete confirmation and inline detail notices.

mod details_service;
mod http_client;
mod list_service;
mod prompter;

pub use details_service::UserDetailsService;
pub use http_client::HttpUserApi;
pub use list_service::{DeleteOutcome, UserListService, DELETE_CONFIRMATION};
pub use prompter::{AssumeYes, Prompter};
