use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::movie::{Movie, MovieListQuery, MoviePatch, NewMovie};

pub mod in_memory_movie_repository;

pub use in_memory_movie_repository::InMemoryMovieRepository;

/// Storage boundary for the movie collection. Lookup misses are `None` /
/// `false`, not errors; the in-memory store itself cannot fail.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Assigns a fresh random id and appends the record.
    async fn insert(&self, movie: NewMovie) -> Movie;

    async fn get(&self, id: Uuid) -> Option<Movie>;

    async fn list(&self, query: MovieListQuery) -> Vec<Movie>;

    /// Merges the present patch fields over the stored record.
    async fn update(&self, id: Uuid, patch: MoviePatch) -> Option<Movie>;

    async fn delete(&self, id: Uuid) -> bool;
}
