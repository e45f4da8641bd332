//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use cricket_dash::{
    cli::{Commands, CricketDash},
    commands::{import::handle_import, scrape::handle_scrape, show::handle_show},
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = CricketDash::parse();

    match app.command {
        Commands::Scrape {
            site_url,
            timeout_secs,
            backup,
            survey,
            verbose,
        } => handle_scrape(site_url, timeout_secs, backup, survey, verbose).await?,

        Commands::Import { backup, verbose } => handle_import(backup, verbose).await?,

        Commands::Show { kind, limit, json } => handle_show(kind, limit, json)?,
    }

    Ok(())
}
