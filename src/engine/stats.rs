use serde::{Deserialize, Serialize};

use super::step::Step;

/// Step-counted operation totals for a finished trace.
///
/// `comparisons` counts steps with a non-empty comparison pair and `swaps`
/// counts steps writing two or more positions. Both are proxies derived
/// from the trace, not exact operation counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
}

impl SortStats {
    pub fn from_steps(steps: &[Step]) -> Self {
        steps.iter().fold(Self::default(), |mut stats, step| {
            if !step.comparing_indices.is_empty() {
                stats.comparisons += 1;
            }
            if step.selected_indices.len() >= 2 {
                stats.swaps += 1;
            }
            stats
        })
    }
}
