//! Random input arrays for demos and tests.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fraction of `size` used as the swap count for nearly-sorted input.
const NEARLY_SORTED_SWAP_RATIO: f64 = 0.1;

/// Shape of a generated input array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrayKind {
    /// Uniform values in `1..=max`
    #[default]
    Random,
    /// `1..=size` with a few random swaps
    NearlySorted,
    /// `size` down to `1`
    Reversed,
}

impl ArrayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrayKind::Random => "random",
            ArrayKind::NearlySorted => "nearly-sorted",
            ArrayKind::Reversed => "reversed",
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArrayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(ArrayKind::Random),
            "nearly-sorted" => Ok(ArrayKind::NearlySorted),
            "reversed" => Ok(ArrayKind::Reversed),
            other => Err(format!(
                "unknown array kind '{}' (expected random, nearly-sorted or reversed)",
                other
            )),
        }
    }
}

/// Generate an array of the given shape. `max` only applies to
/// [`ArrayKind::Random`]; the other shapes hold `1..=size`.
pub fn generate(kind: ArrayKind, size: usize, max: i64) -> Vec<i64> {
    generate_with(&mut rand::rng(), kind, size, max)
}

/// Like [`generate`], with a caller-supplied generator.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    kind: ArrayKind,
    size: usize,
    max: i64,
) -> Vec<i64> {
    match kind {
        ArrayKind::Random => random_array_with(rng, size, max),
        ArrayKind::NearlySorted => nearly_sorted_array_with(rng, size),
        ArrayKind::Reversed => reversed_array(size),
    }
}

/// `size` values drawn uniformly from `1..=max`.
pub fn random_array(size: usize, max: i64) -> Vec<i64> {
    random_array_with(&mut rand::rng(), size, max)
}

/// Like [`random_array`], with a caller-supplied generator.
pub fn random_array_with<R: Rng + ?Sized>(rng: &mut R, size: usize, max: i64) -> Vec<i64> {
    let max = max.max(1);
    (0..size).map(|_| rng.random_range(1..=max)).collect()
}

/// `1..=size` with `floor(size * 0.1)` swaps of two random positions.
pub fn nearly_sorted_array_with<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (1..=size as i64).collect();
    if size == 0 {
        return values;
    }

    let swaps = (size as f64 * NEARLY_SORTED_SWAP_RATIO).floor() as usize;
    for _ in 0..swaps {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        values.swap(a, b);
    }
    values
}

/// `size` down to `1`.
pub fn reversed_array(size: usize) -> Vec<i64> {
    (1..=size as i64).rev().collect()
}
