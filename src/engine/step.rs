//! Step snapshots and the append-only history log.
//!
//! Every engine records progress through [`History::append_step`], which
//! clones the most recent step and applies a [`StepPatch`] on top of it.
//! Appended steps are never handed out mutably, so earlier frames of an
//! animation cannot be altered after the fact.

use serde::{Deserialize, Serialize};

/// One frame of a sort trace: the array plus four index annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub array: Vec<i64>,
    pub comparing_indices: Vec<usize>,
    pub sorted_indices: Vec<usize>,
    pub selected_indices: Vec<usize>,
    /// Structural marker: partition pivot, merge midpoint, radix digit
    /// exponent or bucket id depending on the algorithm.
    pub pivot_indices: Vec<usize>,
}

impl Step {
    /// The raw input with every annotation empty.
    pub fn initial(array: &[i64]) -> Self {
        Self {
            array: array.to_vec(),
            comparing_indices: Vec::new(),
            sorted_indices: Vec::new(),
            selected_indices: Vec::new(),
            pivot_indices: Vec::new(),
        }
    }

    /// True when every index is sorted and no other annotation is set.
    pub fn is_terminal(&self) -> bool {
        self.comparing_indices.is_empty()
            && self.selected_indices.is_empty()
            && self.pivot_indices.is_empty()
            && self.sorted_indices.len() == self.array.len()
            && self
                .sorted_indices
                .iter()
                .enumerate()
                .all(|(pos, &idx)| pos == idx)
    }
}

/// Field overrides applied on top of the previous step.
///
/// Fields left as `None` are carried over unchanged.
#[derive(Debug, Clone, Default)]
pub struct StepPatch {
    array: Option<Vec<i64>>,
    comparing: Option<Vec<usize>>,
    sorted: Option<Vec<usize>>,
    selected: Option<Vec<usize>>,
    pivot: Option<Vec<usize>>,
}

impl StepPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn array(mut self, array: &[i64]) -> Self {
        self.array = Some(array.to_vec());
        self
    }

    pub fn comparing(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.comparing = Some(indices.into());
        self
    }

    pub fn sorted(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.sorted = Some(indices.into());
        self
    }

    pub fn selected(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.selected = Some(indices.into());
        self
    }

    pub fn pivot(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.pivot = Some(indices.into());
        self
    }

    fn apply(self, base: &Step) -> Step {
        Step {
            array: self.array.unwrap_or_else(|| base.array.clone()),
            comparing_indices: self
                .comparing
                .unwrap_or_else(|| base.comparing_indices.clone()),
            sorted_indices: self.sorted.unwrap_or_else(|| base.sorted_indices.clone()),
            selected_indices: self
                .selected
                .unwrap_or_else(|| base.selected_indices.clone()),
            pivot_indices: self.pivot.unwrap_or_else(|| base.pivot_indices.clone()),
        }
    }
}

/// Ordered, append-only sequence of steps for a single sort invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    steps: Vec<Step>,
}

impl History {
    /// Start a log whose first step is the untouched input.
    pub fn new(input: &[i64]) -> Self {
        Self {
            steps: vec![Step::initial(input)],
        }
    }

    /// Clone the most recent step, apply `overrides`, and append the result.
    pub fn append_step(&mut self, overrides: StepPatch) {
        let next = overrides.apply(self.last());
        self.steps.push(next);
    }

    /// Append the terminal "everything sorted" step unless the log already
    /// ends with one.
    pub fn finish(&mut self) {
        if self.last().is_terminal() {
            return;
        }
        let n = self.last().array.len();
        self.append_step(
            StepPatch::new()
                .sorted((0..n).collect::<Vec<_>>())
                .comparing(Vec::new())
                .selected(Vec::new())
                .pivot(Vec::new()),
        );
    }

    pub fn last(&self) -> &Step {
        // The log is created with one step and only ever grows.
        &self.steps[self.steps.len() - 1]
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
