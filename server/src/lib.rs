use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use reelmatch_core::dataset::load_movies;
use reelmatch_core::{CorpusIndex, MovieRecord, RecommendError, Recommendation, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct RecommendParams {
    pub title: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize { DEFAULT_TOP_N }

#[derive(Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub took_s: f64,
    pub results: Vec<Recommendation>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Recommend(#[from] RecommendError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Recommend(RecommendError::MovieNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Recommend(RecommendError::EmptyCorpus) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<CorpusIndex>,
}

/// Load the dataset at `data_path`, build the index and wire up routes.
pub fn build_app(data_path: &str) -> Result<Router> {
    let index = CorpusIndex::build(load_movies(data_path)?)?;
    tracing::info!(num_movies = index.len(), vocabulary = index.vector_space().vocabulary_len(), "index built");
    Ok(router(Arc::new(index)))
}

pub fn router(index: Arc<CorpusIndex>) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/recommend", get(recommend_handler))
        .route("/movies/:title", get(movie_handler))
        .with_state(AppState { index })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn recommend_handler(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let start = std::time::Instant::now();
    let k = params.k.clamp(1, MAX_K);
    let results = state.index.query().recommend(&params.title, k).map_err(|e| {
        tracing::debug!(title = %params.title, "lookup miss");
        e
    })?;
    let elapsed = start.elapsed();
    Ok(Json(RecommendResponse { query: params.title, took_s: elapsed.as_secs_f64(), results }))
}

pub async fn movie_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<MovieRecord>, ApiError> {
    let (_, movie) = state.index.query().lookup(&title)?;
    Ok(Json(movie.clone()))
}
