//! Delete command - confirm and remove one user remotely

use std::sync::Arc;

use clap::Args;

use crate::domain::UserId;
use crate::infrastructure::user::{
    AssumeYes, DeleteOutcome, HttpUserApi, Prompter, UserListService,
};

use super::prompt::StdinPrompter;
use super::render::render_list;

/// Arguments for the delete command
#[derive(Args, Clone, Debug)]
pub struct DeleteArgs {
    /// User id
    pub id: UserId,

    /// Skip the confirmation question
    #[arg(long, short)]
    pub yes: bool,
}

/// Run the delete command
pub async fn run(api: Arc<HttpUserApi>, args: DeleteArgs) -> anyhow::Result<()> {
    let mut service = UserListService::new(api);
    service.mount().await;

    let prompter: &dyn Prompter = if args.yes { &AssumeYes } else { &StdinPrompter };

    match service.delete(args.id, prompter).await {
        DeleteOutcome::Cancelled => println!("Cancelled"),
        DeleteOutcome::Failed => anyhow::bail!("Could not delete user {}", args.id),
        DeleteOutcome::Deleted => {
            println!("Deleted user {}\n", args.id);
            print!("{}", render_list(service.state()));
        }
    }

    Ok(())
}
