//! Show command - detail view for one user

use std::sync::Arc;

use clap::Args;

use crate::domain::UserId;
use crate::infrastructure::user::{HttpUserApi, UserDetailsService};

use super::render::render_details;

/// Arguments for the show command
#[derive(Args, Clone, Debug)]
pub struct ShowArgs {
    /// User id
    pub id: UserId,
}

/// Run the show command
pub async fn run(api: Arc<HttpUserApi>, args: ShowArgs) -> anyhow::Result<()> {
    let details = UserDetailsService::new(api).load(args.id).await;
    print!("{}", render_details(&details));
    Ok(())
}
