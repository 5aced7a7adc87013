//! Step-instrumented sorting engine.
//!
//! [`sort`] runs one algorithm over an integer array and returns the full
//! animation trace together with step-counted statistics. Every call owns
//! its trace; nothing is shared between invocations.

mod algorithm;
mod algorithms;
mod catalog;
mod context;
mod error;
mod stats;
mod step;

pub use algorithm::Algorithm;
pub use catalog::{AlgorithmCatalog, AlgorithmInfo, TimeComplexity};
pub use error::EngineError;
pub use stats::SortStats;
pub use step::{History, Step, StepPatch};

use serde::Serialize;

/// A finished trace and its statistics, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOutcome {
    pub history: Vec<Step>,
    pub stats: SortStats,
}

/// Sort `input` with `algorithm`, recording every step.
pub fn sort(input: &[i64], algorithm: Algorithm) -> Result<SortOutcome, EngineError> {
    let history = algorithm.trace(input)?.into_steps();
    let stats = SortStats::from_steps(&history);

    tracing::debug!(
        algorithm = %algorithm,
        len = input.len(),
        steps = history.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "Sort trace complete"
    );

    Ok(SortOutcome { history, stats })
}
