pub mod movie_service;
pub mod validation;
