use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::{
    application::validation::{validate_movie, validate_partial_movie},
    domain::{
        errors::DomainError,
        movie::{Movie, MovieListQuery},
    },
    infrastructure::MovieRepository,
};

const MOVIE_NOT_FOUND: &str = "Movie not found";

/// Use-case layer over the movie collection. Handlers hand it raw JSON
/// bodies and raw path ids; it validates, resolves and delegates to the
/// injected repository.
#[derive(Clone)]
pub struct MovieService {
    repository: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_movie(&self, payload: Value) -> Result<Movie, DomainError> {
        let new_movie = validate_movie(&payload).map_err(DomainError::validation)?;
        Ok(self.repository.insert(new_movie).await)
    }

    pub async fn get_movie(&self, id: &str) -> Result<Movie, DomainError> {
        let movie_id = resolve_id(id)?;
        let Some(movie) = self.repository.get(movie_id).await else {
            return Err(DomainError::not_found(MOVIE_NOT_FOUND));
        };
        Ok(movie)
    }

    pub async fn list_movies(&self, query: MovieListQuery) -> Vec<Movie> {
        self.repository.list(query).await
    }

    /// The body is validated before the id is resolved, consistently with
    /// create: a malformed body is a validation failure even when the id
    /// matches nothing.
    pub async fn update_movie(&self, id: &str, payload: Value) -> Result<Movie, DomainError> {
        let patch = validate_partial_movie(&payload).map_err(DomainError::validation)?;
        let movie_id = resolve_id(id)?;
        let Some(updated) = self.repository.update(movie_id, patch).await else {
            return Err(DomainError::not_found(MOVIE_NOT_FOUND));
        };
        Ok(updated)
    }

    pub async fn delete_movie(&self, id: &str) -> Result<(), DomainError> {
        let movie_id = resolve_id(id)?;
        if !self.repository.delete(movie_id).await {
            return Err(DomainError::not_found(MOVIE_NOT_FOUND));
        }
        Ok(())
    }
}

// Ids are matched exactly: a path segment that is not a well-formed UUID
// cannot equal any stored id, so it reports the same miss as an unknown id.
fn resolve_id(id: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(id).map_err(|_| DomainError::not_found(MOVIE_NOT_FOUND))
}
