//! Sort handler for the sortviz web API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::engine::{self, Algorithm, SortOutcome};
use crate::web::error::WebError;
use crate::web::state::WebAppState;

/// Request to trace a sort.
#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub array: Vec<i64>,
    /// Parsed by the handler so an unknown name is a 400, not a 422.
    pub algorithm: String,
}

/// Run the requested algorithm and return its full step history.
pub async fn sort_array(
    State(state): State<WebAppState>,
    Json(req): Json<SortRequest>,
) -> Result<Json<SortOutcome>, WebError> {
    let algorithm: Algorithm = req.algorithm.parse()?;

    let max_len = state.config().engine.max_array_len;
    if req.array.len() > max_len {
        return Err(WebError::BadRequest(format!(
            "Array has {} elements; the limit is {}",
            req.array.len(),
            max_len
        )));
    }

    let len = req.array.len();
    let array = req.array;
    let outcome = tokio::task::spawn_blocking(move || engine::sort(&array, algorithm)).await??;

    tracing::info!(
        algorithm = %algorithm,
        len,
        steps = outcome.history.len(),
        comparisons = outcome.stats.comparisons,
        swaps = outcome.stats.swaps,
        "Sorted array"
    );

    Ok(Json(outcome))
}
