//! Record normalization.
//!
//! Maps a raw record of unknown origin onto the canonical [`MovieRecord`]
//! shape. Each canonical field has an ordered list of source keys; the first
//! key that yields a non-empty value wins. Normalization never fails: fields
//! without a usable source become `""` (or `None` for the release year).

use crate::models::record::{MovieRecord, RawRecord};
use serde_json::Value;

const TITLE_KEYS: &[&str] = &["title", "name"];
const POSTER_KEYS: &[&str] = &["posterUrl", "fullPosterUrl", "poster_path"];
const SYNOPSIS_KEYS: &[&str] = &["synopsis", "overview", "description"];
const DIRECTOR_KEYS: &[&str] = &["director", "directorName"];
const TRAILER_KEYS: &[&str] = &["trailerYoutubeId", "trailer_youtube_id"];
const YEAR_KEYS: &[&str] = &["releaseYear", "release_year"];

/// Separator used when flattening a genre list.
pub const GENRE_SEPARATOR: &str = ", ";

/// Normalize a raw record into a canonical movie record.
pub fn normalize(raw: &RawRecord) -> MovieRecord {
    MovieRecord {
        id: text(raw, "id"),
        title: first_text(raw, TITLE_KEYS).unwrap_or_default(),
        genre: normalize_genre(raw).unwrap_or_default(),
        release_year: normalize_year(raw),
        poster_url: first_text(raw, POSTER_KEYS).unwrap_or_default(),
        synopsis: first_text(raw, SYNOPSIS_KEYS).unwrap_or_default(),
        director: first_text(raw, DIRECTOR_KEYS).unwrap_or_default(),
        trailer_reference_id: first_text(raw, TRAILER_KEYS).unwrap_or_default(),
    }
}

/// Genre: `genre`, then the `genres` list joined, then `category`.
fn normalize_genre(raw: &RawRecord) -> Option<String> {
    text(raw, "genre")
        .or_else(|| joined_genres(raw))
        .or_else(|| text(raw, "category"))
}

/// Release year: `releaseYear`, `release_year`, then the year of `release_date`.
///
/// A candidate that does not parse as a year is skipped.
fn normalize_year(raw: &RawRecord) -> Option<u16> {
    YEAR_KEYS
        .iter()
        .find_map(|key| raw.get(key).and_then(year_value))
        .or_else(|| text(raw, "release_date").and_then(|date| year_from_date(&date)))
}

/// Extract the year from a `YYYY-MM-DD` style date.
pub fn year_from_date(date: &str) -> Option<u16> {
    let prefix: String = date.chars().take(4).collect();
    parse_year(&prefix)
}

/// Parse a year from user or upstream text. Zero and non-numeric input yield `None`.
pub fn parse_year(s: &str) -> Option<u16> {
    s.trim().parse::<u16>().ok().filter(|y| *y > 0)
}

fn year_value(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => {
            let year = match n.as_u64() {
                Some(year) => year,
                None => n.as_f64().filter(|f| f.fract() == 0.0 && *f > 0.0)? as u64,
            };
            u16::try_from(year).ok().filter(|y| *y > 0)
        }
        Value::String(s) => parse_year(s),
        _ => None,
    }
}

/// `genres` may be a list of names or of `{ "name": ... }` objects.
fn joined_genres(raw: &RawRecord) -> Option<String> {
    let genres = raw.get("genres")?.as_array()?;
    let names: Vec<&str> = genres
        .iter()
        .filter_map(|genre| match genre {
            Value::String(name) => Some(name.as_str()),
            Value::Object(obj) => obj.get("name").and_then(Value::as_str),
            _ => None,
        })
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(GENRE_SEPARATOR))
    }
}

fn first_text(raw: &RawRecord, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text(raw, key))
}

/// Non-empty string value of a field. Numbers are rendered in decimal.
fn text(raw: &RawRecord, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
