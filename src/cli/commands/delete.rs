//! Delete command implementation.

use crate::models::credential::Credential;
use crate::services::backend::RecordStore;
use anyhow::Result;
use colored::Colorize;

/// Delete a movie from the catalog.
pub async fn delete(
    store: &dyn RecordStore,
    id: &str,
    confirm: bool,
    credential: Option<&Credential>,
) -> Result<()> {
    if !confirm {
        println!(
            "{}",
            format!("This will delete movie {}. Re-run with --confirm to proceed.", id).yellow()
        );
        return Ok(());
    }

    let credential = credential.ok_or_else(|| {
        crate::Error::Unauthorized("no admin token; pass --token or set MOVIE_CATALOG_TOKEN".into())
    })?;

    store.delete_record(id, credential).await?;
    println!("{}", "Movie deleted successfully!".green());
    Ok(())
}
