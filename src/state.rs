use std::sync::Arc;

use crate::application::movie_service::MovieService;

#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
}

impl AppState {
    pub fn new(movie_service: Arc<MovieService>) -> Self {
        Self { movie_service }
    }
}
