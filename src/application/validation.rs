//! Schema validation for movie payloads.
//!
//! Pure functions over a candidate JSON value: no I/O, no shared state.
//! Failures come back as the full list of per-field errors, not just the
//! first one, so callers can surface everything wrong with a payload in a
//! single response.

use serde_json::Value;
use url::Url;

use crate::domain::{
    errors::FieldError,
    movie::{Genre, MoviePatch, NewMovie},
};

const YEAR_MIN: i64 = 1900;
const YEAR_MAX: i64 = 2024;
const RATE_MIN: f64 = 0.0;
const RATE_MAX: f64 = 10.0;

/// Rating applied when a creation payload omits `rate`.
pub const DEFAULT_RATE: f64 = 5.0;

/// Validates a full creation payload. Every schema field except `rate`
/// must be present and well-typed; `rate` falls back to [`DEFAULT_RATE`].
pub fn validate_movie(candidate: &Value) -> Result<NewMovie, Vec<FieldError>> {
    let Some(fields) = candidate.as_object() else {
        return Err(vec![non_object_body()]);
    };

    let mut errors = Vec::new();

    let title = match fields.get("title") {
        Some(value) => collect(parse_title(value), &mut errors),
        None => missing(&mut errors, "title", "Title is required"),
    };
    let year = match fields.get("year") {
        Some(value) => collect(parse_year(value), &mut errors),
        None => missing(&mut errors, "year", "Year is required"),
    };
    let director = match fields.get("director") {
        Some(value) => collect(parse_director(value), &mut errors),
        None => missing(&mut errors, "director", "Director is required"),
    };
    let duration = match fields.get("duration") {
        Some(value) => collect(parse_duration(value), &mut errors),
        None => missing(&mut errors, "duration", "Duration is required"),
    };
    let poster = match fields.get("poster") {
        Some(value) => collect(parse_poster(value), &mut errors),
        None => missing(&mut errors, "poster", "Poster is required"),
    };
    let genre = match fields.get("genre") {
        Some(value) => match parse_genre(value) {
            Ok(genres) => Some(genres),
            Err(mut genre_errors) => {
                errors.append(&mut genre_errors);
                None
            }
        },
        None => missing(&mut errors, "genre", "Genre is required"),
    };
    let rate = match fields.get("rate") {
        Some(value) => collect(parse_rate(value), &mut errors),
        None => Some(DEFAULT_RATE),
    };

    match (title, year, director, duration, poster, genre, rate) {
        (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(poster),
            Some(genre),
            Some(rate),
        ) if errors.is_empty() => Ok(NewMovie {
            title,
            year,
            director,
            duration,
            poster,
            genre,
            rate,
        }),
        _ => Err(errors),
    }
}

/// Validates a partial update. Absent fields are not errors; fields that
/// are present must satisfy the same rules as on creation.
pub fn validate_partial_movie(candidate: &Value) -> Result<MoviePatch, Vec<FieldError>> {
    let Some(fields) = candidate.as_object() else {
        return Err(vec![non_object_body()]);
    };

    let mut errors = Vec::new();
    let mut patch = MoviePatch::default();

    if let Some(value) = fields.get("title") {
        patch.title = collect(parse_title(value), &mut errors);
    }
    if let Some(value) = fields.get("year") {
        patch.year = collect(parse_year(value), &mut errors);
    }
    if let Some(value) = fields.get("director") {
        patch.director = collect(parse_director(value), &mut errors);
    }
    if let Some(value) = fields.get("duration") {
        patch.duration = collect(parse_duration(value), &mut errors);
    }
    if let Some(value) = fields.get("poster") {
        patch.poster = collect(parse_poster(value), &mut errors);
    }
    if let Some(value) = fields.get("genre") {
        match parse_genre(value) {
            Ok(genres) => patch.genre = Some(genres),
            Err(mut genre_errors) => errors.append(&mut genre_errors),
        }
    }
    if let Some(value) = fields.get("rate") {
        patch.rate = collect(parse_rate(value), &mut errors);
    }

    if errors.is_empty() { Ok(patch) } else { Err(errors) }
}

fn parse_title(value: &Value) -> Result<String, FieldError> {
    let Some(title) = value.as_str() else {
        return Err(FieldError::new("title", "Title must be a string"));
    };
    if title.is_empty() {
        return Err(FieldError::new("title", "Title must not be empty"));
    }
    Ok(title.to_string())
}

fn parse_year(value: &Value) -> Result<i32, FieldError> {
    let Some(year) = value.as_i64() else {
        return Err(FieldError::new("year", "Year must be an integer"));
    };
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(FieldError::new(
            "year",
            format!("Year must be between {YEAR_MIN} and {YEAR_MAX}"),
        ));
    }
    Ok(year as i32)
}

fn parse_director(value: &Value) -> Result<String, FieldError> {
    let Some(director) = value.as_str() else {
        return Err(FieldError::new("director", "Director must be a string"));
    };
    Ok(director.to_string())
}

fn parse_duration(value: &Value) -> Result<u32, FieldError> {
    let refused = || FieldError::new("duration", "Duration must be a positive integer");

    let Some(duration) = value.as_i64() else {
        return Err(refused());
    };
    if duration <= 0 {
        return Err(refused());
    }
    u32::try_from(duration).map_err(|_| refused())
}

fn parse_poster(value: &Value) -> Result<String, FieldError> {
    let Some(poster) = value.as_str() else {
        return Err(FieldError::new("poster", "Poster must be a string"));
    };
    if Url::parse(poster).is_err() {
        return Err(FieldError::new("poster", "Must be a valid URL"));
    }
    Ok(poster.to_string())
}

fn parse_genre(value: &Value) -> Result<Vec<Genre>, Vec<FieldError>> {
    let Some(entries) = value.as_array() else {
        return Err(vec![FieldError::new(
            "genre",
            "Genre must be an array of strings",
        )]);
    };
    if entries.is_empty() {
        return Err(vec![FieldError::new(
            "genre",
            "Genre must contain at least one entry",
        )]);
    }

    let mut genres = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let field = format!("genre[{index}]");
        let Some(name) = entry.as_str() else {
            errors.push(FieldError::new(field, "Genre must be an array of strings"));
            continue;
        };
        match Genre::parse(name) {
            Some(genre) => genres.push(genre),
            None => errors.push(FieldError::new(
                field,
                format!("Genre must be one of: {}", genre_names()),
            )),
        }
    }

    if errors.is_empty() { Ok(genres) } else { Err(errors) }
}

fn parse_rate(value: &Value) -> Result<f64, FieldError> {
    let Some(rate) = value.as_f64() else {
        return Err(FieldError::new("rate", "Rate must be a number"));
    };
    if !(RATE_MIN..=RATE_MAX).contains(&rate) {
        return Err(FieldError::new("rate", "Rate must be between 0 and 10"));
    }
    Ok(rate)
}

fn genre_names() -> String {
    Genre::ALL
        .iter()
        .map(|genre| genre.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_object_body() -> FieldError {
    FieldError::new("body", "Request body must be a JSON object")
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

fn missing<T>(errors: &mut Vec<FieldError>, field: &str, message: &str) -> Option<T> {
    errors.push(FieldError::new(field, message));
    None
}
