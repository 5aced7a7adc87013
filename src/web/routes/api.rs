//! REST API route definitions.

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::handlers::{algorithms, random, sort};
use crate::web::state::WebAppState;

/// Build the API router with all REST endpoints.
pub fn api_routes() -> Router<WebAppState> {
    Router::new()
        .route("/sort", post(sort::sort_array))
        // Algorithm catalog
        .route("/algorithms", get(algorithms::list_algorithms))
        .route("/algorithms/{id}", get(algorithms::get_algorithm))
        // Sample input
        .route("/random", get(random::random_array))
}
