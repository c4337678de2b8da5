//! Movie Catalog CLI
//!
//! A command-line tool for browsing and editing a movie catalog.

use clap::Parser;
use movie_catalog::cli::{
    args::{Cli, Commands},
    commands::{browse, delete, draft, show},
};
use movie_catalog::models::config::{load_config, ApiConfig};
use movie_catalog::models::credential::Credential;
use movie_catalog::preflight;
use movie_catalog::services::catalog_api::CatalogApiClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = load_config();
    let credential = Credential::resolve(cli.token.as_deref());

    // Run preflight checks unless skipped
    if !cli.skip_preflight {
        run_preflight_checks(&config.api, credential.as_ref(), cli.command.is_mutating()).await?;
    }

    let client = Arc::new(CatalogApiClient::new(config.api)?.with_credential(credential.clone()));

    // Run the appropriate command
    match cli.command {
        Commands::List => {
            browse::list(client, cli.format).await?;
        }

        Commands::Search { query } => {
            browse::search(client, &query, cli.format).await?;
        }

        Commands::Show { id, external } => {
            show::show(&*client, &id, external, cli.format).await?;
        }

        Commands::New { draft: args } => {
            draft::run(
                &*client,
                &*client,
                None,
                &args,
                credential.as_ref(),
                cli.format,
            )
            .await?;
        }

        Commands::Edit { id, draft: args } => {
            draft::run(
                &*client,
                &*client,
                Some(id.as_str()),
                &args,
                credential.as_ref(),
                cli.format,
            )
            .await?;
        }

        Commands::Delete { id, confirm } => {
            delete::delete(&*client, &id, confirm, credential.as_ref()).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("movie_catalog=debug")
    } else {
        EnvFilter::new("movie_catalog=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(
    config: &ApiConfig,
    credential: Option<&Credential>,
    needs_credential: bool,
) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config, credential, needs_credential).await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
