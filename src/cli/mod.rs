//! CLI module for the user directory
//!
//! Provides one-shot subcommands for each view and an interactive shell:
//! - `list`: user table, optionally filtered
//! - `show`: detail view for one user
//! - `delete`: confirm and delete one user remotely
//! - `open`: render whatever view a path routes to
//! - `shell`: interactive session with local create/edit

pub mod delete;
pub mod list;
pub mod open;
pub mod prompt;
pub mod render;
pub mod shell;
pub mod show;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::user::HttpUserApi;

/// User directory - browse and manage users from a REST placeholder API
#[derive(Parser)]
#[command(name = "user-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the REST service (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the user table
    List(list::ListArgs),

    /// Show details for one user
    Show(show::ShowArgs),

    /// Delete one user on the server
    Delete(delete::DeleteArgs),

    /// Render the view for a path such as `/` or `/user/3`
    Open(open::OpenArgs),

    /// Start an interactive session
    Shell,
}

/// Load configuration, start logging and build the API client
pub fn bootstrap(base_url: Option<&str>) -> anyhow::Result<Arc<HttpUserApi>> {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&config);

    if let Err(e) = &loaded {
        warn!("Falling back to default configuration: {}", e);
    }

    let base_url = base_url
        .map(str::to_string)
        .unwrap_or_else(|| config.api.base_url.clone());

    let api = match config.api.timeout_secs {
        Some(secs) => HttpUserApi::with_timeout(base_url, Duration::from_secs(secs))?,
        None => HttpUserApi::new(base_url),
    };

    debug!(base_url = api.base_url(), "API client ready");

    Ok(Arc::new(api))
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delete_with_global_base_url() {
        let cli = Cli::try_parse_from([
            "user-directory",
            "delete",
            "3",
            "--yes",
            "--base-url",
            "http://localhost:3000",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:3000"));
        match cli.command {
            Command::Delete(args) => {
                assert_eq!(args.id, UserId::new(3));
                assert!(args.yes);
            }
            _ => panic!("expected delete command"),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["user-directory", "show", "abc"]).is_err());
    }

    #[test]
    fn test_parse_list_search() {
        let cli = Cli::try_parse_from(["user-directory", "list", "-s", "lea"]).unwrap();
        match cli.command {
            Command::List(args) => assert_eq!(args.search.as_deref(), Some("lea")),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_bootstrap_prefers_base_url_override() {
        let api = bootstrap(Some("http://localhost:3000/")).unwrap();
        assert_eq!(api.base_url(), "http://localhost:3000");
    }
}
