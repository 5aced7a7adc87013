//! Algorithm catalog handlers for the sortviz web API.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::engine::{Algorithm, AlgorithmCatalog, AlgorithmInfo};
use crate::web::error::WebError;

/// Response for listing all algorithms.
#[derive(Debug, Serialize)]
pub struct ListAlgorithmsResponse {
    pub algorithms: Vec<AlgorithmInfo>,
}

/// List every supported algorithm with its complexity and stability.
pub async fn list_algorithms() -> Json<ListAlgorithmsResponse> {
    Json(ListAlgorithmsResponse {
        algorithms: AlgorithmCatalog::all(),
    })
}

/// Get a single algorithm by ID.
pub async fn get_algorithm(Path(id): Path<String>) -> Result<Json<AlgorithmInfo>, WebError> {
    let algorithm: Algorithm = id
        .parse()
        .map_err(|_| WebError::NotFound(format!("Algorithm {} not found", id)))?;
    Ok(Json(AlgorithmCatalog::info(algorithm)))
}
