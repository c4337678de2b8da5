//! New and edit command implementations.

use crate::cli::args::{DraftArgs, OutputFormat};
use crate::core::editor::{DraftEditor, DraftField};
use crate::core::normalizer::normalize;
use crate::models::credential::Credential;
use crate::services::backend::{CatalogSource, RecordStore};
use anyhow::{anyhow, bail, Result};
use colored::Colorize;

/// Create a movie (`id == None`) or edit movie `id`.
pub async fn run(
    source: &dyn CatalogSource,
    store: &dyn RecordStore,
    id: Option<&str>,
    args: &DraftArgs,
    credential: Option<&Credential>,
    format: OutputFormat,
) -> Result<()> {
    let mut editor = match id {
        Some(id) => DraftEditor::edit(source, id).await?,
        None => DraftEditor::create(),
    };

    if let Some(query) = args.lookup.as_deref() {
        adopt_lookup(&mut editor, source, query, args.pick).await?;
    }

    // Explicit field flags win over adopted lookup values.
    apply_fields(&mut editor, args)?;

    if args.dry_run {
        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(editor.draft())?)
            }
            OutputFormat::Table => print_draft(&editor),
        }
        if let Err(e) = editor.validate() {
            println!("{} {}", "[WARN]".yellow(), e);
        }
        return Ok(());
    }

    let credential = credential.ok_or_else(|| {
        crate::Error::Unauthorized("no admin token; pass --token or set MOVIE_CATALOG_TOKEN".into())
    })?;

    let is_update = editor.draft().is_update();
    let record = editor.submit(store, credential).await?;
    println!(
        "{}",
        format!(
            "Movie '{}' {} successfully!",
            record.title,
            if is_update { "updated" } else { "created" }
        )
        .green()
    );
    Ok(())
}

async fn adopt_lookup(
    editor: &mut DraftEditor,
    source: &dyn CatalogSource,
    query: &str,
    pick: usize,
) -> Result<()> {
    let results = editor.lookup(source, query).await?;
    if results.is_empty() {
        bail!("No results found for \"{}\".", query);
    }

    for (i, raw) in results.iter().enumerate() {
        let candidate = normalize(raw);
        let marker = if i + 1 == pick { "*" } else { " " };
        println!(
            "{} {:>3}. {} ({})",
            marker,
            i + 1,
            candidate.title,
            candidate.display_year()
        );
    }

    let index = pick
        .checked_sub(1)
        .ok_or_else(|| anyhow!("--pick starts at 1"))?;
    editor.select(index)?;
    Ok(())
}

fn apply_fields(editor: &mut DraftEditor, args: &DraftArgs) -> Result<()> {
    let fields = [
        (DraftField::Title, &args.title),
        (DraftField::Genre, &args.genre),
        (DraftField::ReleaseYear, &args.year),
        (DraftField::PosterUrl, &args.poster),
        (DraftField::Synopsis, &args.synopsis),
        (DraftField::Director, &args.director),
        (DraftField::TrailerReferenceId, &args.trailer),
    ];

    for (field, value) in fields {
        if let Some(value) = value {
            editor.set_field(field, value)?;
        }
    }
    Ok(())
}

fn print_draft(editor: &DraftEditor) {
    let draft = editor.draft();
    let record = &draft.record;

    let heading = match draft.record.id.as_deref() {
        Some(id) if draft.is_update() => format!("Edit movie #{} (dry run)", id),
        _ => "Add new movie (dry run)".to_string(),
    };
    println!("{}", heading.bold());

    println!("{:>17}: {}", DraftField::Title, record.title);
    println!("{:>17}: {}", DraftField::Genre, record.genre);
    println!("{:>17}: {}", DraftField::ReleaseYear, record.display_year());
    println!("{:>17}: {}", DraftField::PosterUrl, record.poster_url);
    println!("{:>17}: {}", DraftField::Director, record.director);
    println!("{:>17}: {}", DraftField::TrailerReferenceId, record.trailer_reference_id);
    println!("{:>17}: {}", DraftField::Synopsis, record.synopsis);
}
