use clap::Parser;
use user_directory::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let api = cli::bootstrap(cli.base_url.as_deref())?;

    match cli.command {
        Command::List(args) => cli::list::run(api, args).await,
        Command::Show(args) => cli::show::run(api, args).await,
        Command::Delete(args) => cli::delete::run(api, args).await,
        Command::Open(args) => cli::open::run(api, args).await,
        Command::Shell => cli::shell::run(api).await,
    }
}
