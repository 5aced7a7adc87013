//! Trace invariant checks
//!
//! Every algorithm must satisfy the same structural rules regardless of how
//! it narrates its progress. These helpers return a description of the first
//! violation so property tests can report it.

use sortviz::{Algorithm, SortOutcome, Step};

/// Inputs that exercise the usual edge shapes.
pub fn sample_inputs() -> Vec<Vec<i64>> {
    vec![
        vec![],
        vec![7],
        vec![2, 1],
        vec![5, 3, 8, 1],
        vec![1, 2, 3, 4],
        vec![4, 3, 2, 1],
        vec![4, 4, 4],
        vec![3, 1, 2],
        vec![170, 45, 75, 90, 802, 24, 2, 66],
        vec![10, 0, 10, 0, 10, 0, 5, 5, 5, 99, 1, 42],
    ]
}

/// Check every structural invariant of a finished trace.
///
/// Pivot markers are positions for every algorithm except radix, where they
/// carry the digit exponent instead.
pub fn check_trace(
    algorithm: Algorithm,
    input: &[i64],
    outcome: &SortOutcome,
) -> Result<(), String> {
    let steps = &outcome.history;
    let n = input.len();

    let first = steps.first().ok_or("empty history")?;
    if first != &Step::initial(input) {
        return Err(format!("first step is not the raw input: {:?}", first));
    }

    let last = steps.last().ok_or("empty history")?;
    if !last.is_terminal() {
        return Err(format!("last step is not terminal: {:?}", last));
    }

    let mut expected = input.to_vec();
    expected.sort();
    if last.array != expected {
        return Err(format!("final array {:?} != {:?}", last.array, expected));
    }

    for (idx, step) in steps.iter().enumerate() {
        if step.array.len() != n {
            return Err(format!("step {} has length {}", idx, step.array.len()));
        }
        let out_of_range = step
            .comparing_indices
            .iter()
            .chain(&step.selected_indices)
            .chain(&step.sorted_indices)
            .find(|&&i| i >= n);
        if let Some(i) = out_of_range {
            return Err(format!("step {} names index {} outside 0..{}", idx, i, n));
        }
        if algorithm != Algorithm::Radix {
            if let Some(i) = step.pivot_indices.iter().find(|&&i| i >= n) {
                return Err(format!("step {} marks pivot {} outside 0..{}", idx, i, n));
            }
        }
    }

    for (idx, pair) in steps.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.sorted_indices.len() < prev.sorted_indices.len() {
            return Err(format!("sorted set shrank at step {}", idx + 1));
        }
        for (pos, (a, b)) in prev.array.iter().zip(&next.array).enumerate() {
            if a != b && !next.selected_indices.contains(&pos) {
                return Err(format!(
                    "step {} rewrote index {} without selecting it",
                    idx + 1,
                    pos
                ));
            }
        }
    }

    Ok(())
}
