//! Errors surfaced by the sorting engine.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The algorithm name is not one of the supported engines.
    #[error("Algorithm {0} not supported")]
    UnsupportedAlgorithm(String),

    /// The engine only accepts non-negative integers.
    #[error("{algorithm} sort requires non-negative integers, got {value}")]
    NegativeValue { algorithm: &'static str, value: i64 },
}
