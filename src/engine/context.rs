//! Per-invocation state shared by an engine's recursive calls.

use std::collections::BTreeSet;

use super::step::{History, StepPatch};

/// Working array, history log and settled-index accumulator for one sort.
///
/// Owned by the top-level engine call and lent by `&mut` to every helper,
/// so there is exactly one writer for the duration of the trace.
#[derive(Debug)]
pub(crate) struct SortContext {
    pub array: Vec<i64>,
    pub history: History,
    settled: BTreeSet<usize>,
}

impl SortContext {
    pub fn new(input: &[i64]) -> Self {
        Self {
            array: input.to_vec(),
            history: History::new(input),
            settled: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn record(&mut self, patch: StepPatch) {
        self.history.append_step(patch);
    }

    /// Record that positions `a` and `b` are being compared.
    pub fn compare(&mut self, a: usize, b: usize) {
        self.record(StepPatch::new().comparing([a, b]));
    }

    /// Highlight `indices` without touching the array.
    pub fn select(&mut self, indices: impl Into<Vec<usize>>) {
        self.record(StepPatch::new().selected(indices));
    }

    /// Exchange two positions and record the new array.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.record(StepPatch::new().array(&self.array).selected([a, b]));
    }

    /// Copy the value at `from` into `to` (one slot of an insertion shift).
    pub fn shift(&mut self, from: usize, to: usize) {
        self.array[to] = self.array[from];
        self.record(StepPatch::new().array(&self.array).selected([from, to]));
    }

    /// Write `value` into slot `k` and record the new array.
    pub fn place(&mut self, k: usize, value: i64) {
        self.array[k] = value;
        self.record(StepPatch::new().array(&self.array).selected([k]));
    }

    /// Add `indices` to the settled set and publish it as `sortedIndices`.
    pub fn settle(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.settled.extend(indices);
        let sorted: Vec<usize> = self.settled.iter().copied().collect();
        self.record(StepPatch::new().sorted(sorted));
    }

    /// Like [`settle`](Self::settle), but also clears the comparison and
    /// selection highlights.
    pub fn settle_and_clear(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.settled.extend(indices);
        let sorted: Vec<usize> = self.settled.iter().copied().collect();
        self.record(
            StepPatch::new()
                .sorted(sorted)
                .comparing(Vec::new())
                .selected(Vec::new()),
        );
    }

    /// Append the terminal step and hand back the finished log.
    pub fn finish(mut self) -> History {
        self.history.finish();
        self.history
    }
}
