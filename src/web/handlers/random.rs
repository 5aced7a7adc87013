//! Random input handler for the sortviz web API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::util::{self, ArrayKind};
use crate::web::error::WebError;
use crate::web::state::WebAppState;

const DEFAULT_SIZE: usize = 20;
const DEFAULT_MAX: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    pub size: Option<usize>,
    pub max: Option<i64>,
    #[serde(default)]
    pub kind: ArrayKind,
}

#[derive(Debug, Serialize)]
pub struct RandomArrayResponse {
    pub array: Vec<i64>,
}

/// Generate an input array. `kind` picks the shape; `max` bounds random values.
pub async fn random_array(
    State(state): State<WebAppState>,
    Query(query): Query<RandomQuery>,
) -> Result<Json<RandomArrayResponse>, WebError> {
    let size = query.size.unwrap_or(DEFAULT_SIZE);
    let max = query.max.unwrap_or(DEFAULT_MAX);

    let max_len = state.config().engine.max_array_len;
    if size > max_len {
        return Err(WebError::BadRequest(format!(
            "Size {} exceeds the limit of {}",
            size, max_len
        )));
    }
    if max < 1 {
        return Err(WebError::BadRequest(format!(
            "Max must be at least 1, got {}",
            max
        )));
    }

    Ok(Json(RandomArrayResponse {
        array: util::generate(query.kind, size, max),
    }))
}
