//! List command - fetch and print the user table

use std::sync::Arc;

use clap::Args;

use crate::infrastructure::user::{HttpUserApi, UserListService};

use super::render::render_list;

/// Arguments for the list command
#[derive(Args, Clone, Debug)]
pub struct ListArgs {
    /// Only show users whose name contains this text (case-insensitive)
    #[arg(long, short)]
    pub search: Option<String>,
}

/// Run the list command
pub async fn run(api: Arc<HttpUserApi>, args: ListArgs) -> anyhow::Result<()> {
    let mut service = UserListService::new(api);
    service.mount().await;

    if let Some(term) = args.search {
        service.search(term);
    }

    print!("{}", render_list(service.state()));
    Ok(())
}
