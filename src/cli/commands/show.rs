//! Show command implementation.

use crate::cli::args::OutputFormat;
use crate::core::detail::load_detail;
use crate::models::record::{DetailRoute, MovieRecord, SourceKind, TaggedRecord};
use crate::services::backend::CatalogSource;
use anyhow::Result;
use colored::Colorize;

/// Show details of a local or external movie.
pub async fn show(
    source: &dyn CatalogSource,
    id: &str,
    external: bool,
    format: OutputFormat,
) -> Result<()> {
    let kind = if external {
        SourceKind::External
    } else {
        SourceKind::Local
    };
    let route = DetailRoute::new(kind, id);
    let detail = load_detail(source, &route).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        OutputFormat::Table => print_detail(&detail),
    }
    Ok(())
}

/// Print one record.
fn print_detail(detail: &TaggedRecord) {
    let record = detail.record();

    println!(
        "{} ({})",
        record.title.bold().cyan(),
        record.display_year()
    );
    if let TaggedRecord::External(_) = detail {
        println!("{}", "From the external movie database".dimmed());
    }
    println!();

    print_field("Genre", &record.genre);
    print_field("Director", &record.director);
    print_field("Poster", record.poster_or_placeholder());
    if let Some(url) = record.trailer_embed_url() {
        print_field("Trailer", &url);
    }

    println!();
    println!("{}", synopsis(record));
}

fn print_field(name: &str, value: &str) {
    if !value.is_empty() {
        println!("{:>10}: {}", name.bold(), value);
    }
}

fn synopsis(record: &MovieRecord) -> &str {
    if record.synopsis.is_empty() {
        "No synopsis available."
    } else {
        &record.synopsis
    }
}
