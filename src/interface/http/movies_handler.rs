use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::movie::{Movie, MovieListQuery},
    interface::http::error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub hello: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    #[serde(default)]
    pub genre: Option<String>,
}

pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse { hello: "world" })
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let created = state
        .movie_service
        .create_movie(payload)
        .await
        .map_err(ApiError::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let movie = state
        .movie_service
        .get_movie(&id)
        .await
        .map_err(ApiError::from_domain)?;

    Ok(Json(movie))
}

pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> Json<Vec<Movie>> {
    let movies = state
        .movie_service
        .list_movies(MovieListQuery { genre: query.genre })
        .await;

    Json(movies)
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Movie>> {
    let updated = state
        .movie_service
        .update_movie(&id, payload)
        .await
        .map_err(ApiError::from_domain)?;

    Ok(Json(updated))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    state
        .movie_service
        .delete_movie(&id)
        .await
        .map_err(ApiError::from_domain)?;

    Ok(Json(DeletedResponse {
        message: "Movie deleted",
    }))
}

// Genuine preflights are answered by the CORS layer before they reach the
// router; this keeps plain OPTIONS probes on the id route at 200 as well.
pub async fn preflight_movie() -> StatusCode {
    StatusCode::OK
}
