//! List and search command implementations.

use crate::cli::args::OutputFormat;
use crate::core::orchestrator::{CatalogQueryOrchestrator, QueryState, Snapshot};
use crate::models::record::{MovieRecord, SourceKind};
use crate::services::backend::CatalogSource;
use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

/// List the local catalog.
pub async fn list(source: Arc<dyn CatalogSource>, format: OutputFormat) -> Result<()> {
    let orchestrator = CatalogQueryOrchestrator::new(source);
    let outcome = orchestrator.mount().await;
    print_snapshot(&orchestrator.snapshot(), format)?;
    outcome?;
    Ok(())
}

/// Search the external movie database.
pub async fn search(
    source: Arc<dyn CatalogSource>,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let orchestrator = CatalogQueryOrchestrator::new(source);
    let outcome = orchestrator.submit_search(query).await;
    print_snapshot(&orchestrator.snapshot(), format)?;
    outcome?;
    Ok(())
}

/// Print the orchestrator state in the requested format.
pub fn print_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(snapshot),
        OutputFormat::Table => {
            print_table(snapshot);
            Ok(())
        }
    }
}

/// Print results as JSON.
fn print_json(snapshot: &Snapshot) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        state: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        query: Option<&'a str>,
        items: Vec<ItemJson<'a>>,
    }

    #[derive(serde::Serialize)]
    struct ItemJson<'a> {
        kind: SourceKind,
        record: &'a MovieRecord,
        route: Option<String>,
    }

    let (state, message) = match &snapshot.state {
        QueryState::Loading => ("loading", None),
        QueryState::LocalListing => ("local", None),
        QueryState::SearchResults => ("search", None),
        QueryState::Failed(failure) => ("error", Some(failure.to_string())),
    };

    let output = JsonOutput {
        state,
        message,
        query: snapshot.query.as_deref(),
        items: snapshot
            .items
            .iter()
            .map(|item| ItemJson {
                kind: item.kind(),
                record: item.record(),
                route: item.detail_route().map(|r| r.path()),
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print results as table.
fn print_table(snapshot: &Snapshot) {
    if let QueryState::Failed(failure) = &snapshot.state {
        println!("{}", failure.to_string().yellow());
        return;
    }

    if snapshot.items.is_empty() {
        println!("{}", "No movies found.".yellow());
        println!("Add some with: movie-catalog new --title <TITLE>");
        return;
    }

    let heading = match &snapshot.query {
        Some(query) => format!("Found {} results for \"{}\":", snapshot.items.len(), query),
        None => format!(
            "{} {} in catalog:",
            snapshot.items.len(),
            if snapshot.items.len() == 1 { "movie" } else { "movies" }
        ),
    };
    println!("{}", heading.bold().cyan());
    println!();

    println!(
        " {:>4} | {:>4} | {:<40} | {:<20} | {}",
        "#", "Year", "Title", "Genre", "Details"
    );
    println!("{}", "-".repeat(90));

    for (i, item) in snapshot.items.iter().enumerate() {
        let record = item.record();
        let route = item
            .detail_route()
            .map(|r| r.path())
            .unwrap_or_else(|| "-".to_string());

        println!(
            " {:>4} | {:>4} | {:<40} | {:<20} | {}",
            i + 1,
            record.release_year.map(|y| y.to_string()).unwrap_or_default(),
            truncate(&record.title, 40),
            truncate(&record.genre, 20),
            route
        );
    }
}

/// Shorten text to `width` characters, marking the cut with "...".
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width.saturating_sub(3)).collect::<String>())
    } else {
        text.to_string()
    }
}
