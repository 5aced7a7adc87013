use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::algorithms;
use super::error::EngineError;
use super::step::History;

/// Supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
    Bucket,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::Bucket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Radix => "radix",
            Algorithm::Bucket => "bucket",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Bucket => "Bucket Sort",
        }
    }

    /// Whether the engine accepts negative values.
    pub fn accepts_negative(&self) -> bool {
        !matches!(self, Algorithm::Radix)
    }

    /// Check the engine's input preconditions.
    pub fn validate(&self, input: &[i64]) -> Result<(), EngineError> {
        if !self.accepts_negative() {
            if let Some(&value) = input.iter().find(|&&v| v < 0) {
                return Err(EngineError::NegativeValue {
                    algorithm: self.as_str(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Validate `input`, then run the matching engine to completion.
    ///
    /// Empty and single-element inputs skip the engine: the trace is the
    /// initial step plus, when it differs, the terminal step.
    pub fn trace(&self, input: &[i64]) -> Result<History, EngineError> {
        self.validate(input)?;
        if input.len() < 2 {
            let mut history = History::new(input);
            history.finish();
            return Ok(history);
        }
        let history = match self {
            Algorithm::Bubble => algorithms::bubble_sort(input),
            Algorithm::Selection => algorithms::selection_sort(input),
            Algorithm::Insertion => algorithms::insertion_sort(input),
            Algorithm::Merge => algorithms::merge_sort(input),
            Algorithm::Quick => algorithms::quick_sort(input),
            Algorithm::Heap => algorithms::heap_sort(input),
            Algorithm::Radix => algorithms::radix_sort(input),
            Algorithm::Bucket => algorithms::bucket_sort(input),
        };
        Ok(history)
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| EngineError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
