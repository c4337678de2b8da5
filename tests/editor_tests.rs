//! Integration tests for the draft editing flow.
//!
//! Tests cover:
//! - Seeding drafts in create and edit mode
//! - Field edits and lookup adoption
//! - Validation before submit
//! - Credential forwarding

mod common;

use common::{raw, MockCatalog, ADMIN_TOKEN};
use movie_catalog::core::editor::{validate, DraftEditor, DraftField};
use movie_catalog::models::credential::Credential;
use movie_catalog::models::draft::{Draft, DraftMode};
use movie_catalog::Error;
use serde_json::json;

fn catalog() -> MockCatalog {
    MockCatalog::with_local(vec![raw(json!({
        "id": 7,
        "title": "Dune",
        "genre": "Sci-Fi",
        "releaseYear": 1984,
        "posterUrl": "https://example.com/dune-1984.jpg",
        "synopsis": "A duke's son.",
        "director": "David Lynch",
        "trailerYoutubeId": "KwPTIEWTYEI"
    }))])
    .search_result(
        "dune",
        vec![
            raw(json!({
                "id": 438631,
                "title": "Dune",
                "release_date": "2021-09-15",
                "overview": "Paul Atreides leads nomadic tribes.",
                "fullPosterUrl": "https://image.tmdb.org/t/p/w500/d5NXSklXo0qyIYkgV94XAgMIckC.jpg"
            })),
            raw(json!({
                "id": 693134,
                "title": "Dune: Part Two",
                "release_date": "2024-02-27",
                "overview": "Paul unites with Chani.",
                "fullPosterUrl": "https://image.tmdb.org/t/p/w500/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg"
            })),
        ],
    )
}

fn admin() -> Credential {
    Credential::new(ADMIN_TOKEN)
}

// ========== SEEDING TESTS ==========

#[tokio::test]
async fn test_create_starts_empty() {
    let editor = DraftEditor::create();
    assert_eq!(editor.draft().mode, DraftMode::Create);
    assert_eq!(editor.draft().record.title, "");
    assert!(!editor.draft().is_update());
}

#[tokio::test]
async fn test_edit_seeds_from_local_record() {
    let mock = catalog();
    let editor = DraftEditor::edit(&mock, "7").await.unwrap();

    let draft = editor.draft();
    assert_eq!(draft.mode, DraftMode::Edit { id: "7".to_string() });
    assert_eq!(draft.record.id.as_deref(), Some("7"));
    assert_eq!(draft.record.title, "Dune");
    assert_eq!(draft.record.release_year, Some(1984));
    assert_eq!(draft.record.director, "David Lynch");
}

#[tokio::test]
async fn test_edit_missing_record_is_not_found() {
    let mock = catalog();
    let err = DraftEditor::edit(&mock, "404").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_edit_empty_title_is_not_found() {
    let mock = MockCatalog::with_local(vec![raw(json!({
        "id": 2,
        "title": "",
        "releaseYear": 2000
    }))]);

    let err = DraftEditor::edit(&mock, "2").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

// ========== FIELD EDIT TESTS ==========

#[test]
fn test_set_release_year() {
    let mut editor = DraftEditor::create();

    editor.set_field(DraftField::ReleaseYear, "2021").unwrap();
    assert_eq!(editor.draft().record.release_year, Some(2021));

    editor.set_field(DraftField::ReleaseYear, "").unwrap();
    assert_eq!(editor.draft().record.release_year, None);

    let err = editor.set_field(DraftField::ReleaseYear, "next year").unwrap_err();
    assert!(matches!(err, Error::ValidationFailure(_)));
}

#[test]
fn test_set_trailer_accepts_url() {
    let mut editor = DraftEditor::create();
    editor
        .set_field(
            DraftField::TrailerReferenceId,
            "https://www.youtube.com/watch?v=YoHD9XEInc0",
        )
        .unwrap();

    assert_eq!(editor.draft().record.trailer_reference_id, "YoHD9XEInc0");
    assert_eq!(
        editor.draft().record.trailer_embed_url().as_deref(),
        Some("https://www.youtube.com/embed/YoHD9XEInc0?autoplay=0")
    );
}

// ========== LOOKUP TESTS ==========

#[tokio::test]
async fn test_lookup_and_select_merges_into_edit_draft() {
    let mock = catalog();
    let mut editor = DraftEditor::edit(&mock, "7").await.unwrap();

    let results = editor.lookup(&mock, "dune").await.unwrap();
    assert_eq!(results.len(), 2);

    let draft = editor.select(1).unwrap().clone();
    assert_eq!(draft.record.title, "Dune: Part Two");
    assert_eq!(draft.record.release_year, Some(2024));
    assert_eq!(draft.record.synopsis, "Paul unites with Chani.");
    assert_eq!(draft.record.genre, "Sci-Fi");
    assert_eq!(draft.record.director, "David Lynch");
    assert_eq!(draft.record.trailer_reference_id, "KwPTIEWTYEI");
    assert_eq!(draft.mode, DraftMode::Edit { id: "7".to_string() });
    assert!(editor.lookup_results().is_empty());
}

#[tokio::test]
async fn test_lookup_without_matches_is_empty() {
    let mock = catalog();
    let mut editor = DraftEditor::create();

    let results = editor.lookup(&mock, "nothing").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_blank_lookup_keeps_results() {
    let mock = catalog();
    let mut editor = DraftEditor::create();
    editor.lookup(&mock, "dune").await.unwrap();

    let results = editor.lookup(&mock, "  ").await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_failed_lookup_clears_results() {
    let mut editor = DraftEditor::create();
    editor.lookup(&catalog(), "dune").await.unwrap();

    let failing = MockCatalog {
        fail_search: true,
        ..catalog()
    };
    let err = editor.lookup(&failing, "dune").await.unwrap_err();
    assert!(err.is_transient());
    assert!(editor.lookup_results().is_empty());
}

#[test]
fn test_select_out_of_range() {
    let mut editor = DraftEditor::create();
    let err = editor.select(0).unwrap_err();
    assert!(matches!(err, Error::ValidationFailure(_)));
}

// ========== VALIDATION TESTS ==========

#[test]
fn test_validate_requires_title() {
    let err = validate(&Draft::create()).unwrap_err();
    assert!(matches!(err, Error::ValidationFailure(_)));
}

#[test]
fn test_validate_release_year_range() {
    let mut editor = DraftEditor::create();
    editor.set_field(DraftField::Title, "Roundhay Garden Scene").unwrap();

    editor.set_field(DraftField::ReleaseYear, "1888").unwrap();
    assert!(editor.validate().is_ok());

    editor.set_field(DraftField::ReleaseYear, "1887").unwrap();
    assert!(editor.validate().is_err());

    editor.set_field(DraftField::ReleaseYear, "9999").unwrap();
    assert!(editor.validate().is_err());
}

#[test]
fn test_validate_poster_url() {
    let mut editor = DraftEditor::create();
    editor.set_field(DraftField::Title, "Dune").unwrap();

    editor.set_field(DraftField::PosterUrl, "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg").unwrap();
    assert!(editor.validate().is_err());

    editor.set_field(DraftField::PosterUrl, "https://image.tmdb.org/t/p/w500/d5N.jpg").unwrap();
    assert!(editor.validate().is_ok());

    editor.set_field(DraftField::PosterUrl, "").unwrap();
    assert!(editor.validate().is_ok());
}

#[test]
fn test_validate_edit_requires_matching_id() {
    let mut draft = Draft::edit("7", Default::default());
    draft.record.title = "Dune".to_string();
    assert!(validate(&draft).is_ok());

    draft.record.id = None;
    assert!(validate(&draft).is_err());
}

// ========== SUBMIT TESTS ==========

#[tokio::test]
async fn test_submit_create() {
    let mock = catalog();
    let mut editor = DraftEditor::create();
    editor.lookup(&mock, "dune").await.unwrap();
    editor.select(0).unwrap();
    editor.set_field(DraftField::Genre, "Science Fiction").unwrap();

    let record = editor.submit(&mock, &admin()).await.unwrap();
    assert_eq!(record.title, "Dune");

    let submitted = mock.submitted();
    assert_eq!(submitted.len(), 1);
    assert!(!submitted[0].1);
    assert_eq!(submitted[0].0.genre, "Science Fiction");
    assert_eq!(submitted[0].0.release_year, Some(2021));
    assert_eq!(submitted[0].0.id, None);
}

#[tokio::test]
async fn test_submit_update() {
    let mock = catalog();
    let mut editor = DraftEditor::edit(&mock, "7").await.unwrap();
    editor.set_field(DraftField::Synopsis, "Updated.").unwrap();

    editor.submit(&mock, &admin()).await.unwrap();

    let submitted = mock.submitted();
    assert!(submitted[0].1);
    assert_eq!(submitted[0].0.id.as_deref(), Some("7"));
    assert_eq!(submitted[0].0.synopsis, "Updated.");
}

#[tokio::test]
async fn test_invalid_draft_is_never_sent() {
    let mock = catalog();
    let editor = DraftEditor::create();

    let err = editor.submit(&mock, &admin()).await.unwrap_err();
    assert!(matches!(err, Error::ValidationFailure(_)));
    assert!(mock.submitted().is_empty());
}

#[tokio::test]
async fn test_rejected_credential_is_unauthorized() {
    let mock = catalog();
    let mut editor = DraftEditor::create();
    editor.set_field(DraftField::Title, "Dune").unwrap();

    let err = editor
        .submit(&mock, &Credential::new("expired"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unauthorized(_)));
    assert!(mock.submitted().is_empty());
}
