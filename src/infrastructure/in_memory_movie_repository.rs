use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::movie::{Movie, MovieListQuery, MoviePatch, NewMovie},
    infrastructure::MovieRepository,
};

/// Process-lifetime movie store. A single `Vec` behind one lock: listing
/// returns insertion order and deletion keeps the order of the remaining
/// records. Every mutation happens under one write-guard acquisition, so
/// no two mutations interleave.
#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn insert(&self, movie: NewMovie) -> Movie {
        let created = Movie {
            id: Uuid::new_v4(),
            title: movie.title,
            year: movie.year,
            director: movie.director,
            duration: movie.duration,
            poster: movie.poster,
            genre: movie.genre,
            rate: movie.rate,
        };

        self.movies.write().await.push(created.clone());
        created
    }

    async fn get(&self, id: Uuid) -> Option<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
    }

    async fn list(&self, query: MovieListQuery) -> Vec<Movie> {
        let movies = self.movies.read().await;

        match query.genre {
            Some(genre) => movies
                .iter()
                .filter(|movie| {
                    movie
                        .genre
                        .iter()
                        .any(|entry| entry.as_str().eq_ignore_ascii_case(&genre))
                })
                .cloned()
                .collect(),
            None => movies.clone(),
        }
    }

    async fn update(&self, id: Uuid, patch: MoviePatch) -> Option<Movie> {
        let mut movies = self.movies.write().await;
        let movie = movies.iter_mut().find(|movie| movie.id == id)?;

        if let Some(title) = patch.title {
            movie.title = title;
        }
        if let Some(year) = patch.year {
            movie.year = year;
        }
        if let Some(director) = patch.director {
            movie.director = director;
        }
        if let Some(duration) = patch.duration {
            movie.duration = duration;
        }
        if let Some(poster) = patch.poster {
            movie.poster = poster;
        }
        if let Some(genre) = patch.genre {
            movie.genre = genre;
        }
        if let Some(rate) = patch.rate {
            movie.rate = rate;
        }

        Some(movie.clone())
    }

    async fn delete(&self, id: Uuid) -> bool {
        let mut movies = self.movies.write().await;
        let Some(index) = movies.iter().position(|movie| movie.id == id) else {
            return false;
        };
        movies.remove(index);
        true
    }
}
