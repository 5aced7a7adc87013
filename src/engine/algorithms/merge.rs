//! Top-down merge sort with an auxiliary buffer per merge.

use crate::engine::context::SortContext;
use crate::engine::step::{History, StepPatch};

pub(crate) fn merge_sort(input: &[i64]) -> History {
    let mut ctx = SortContext::new(input);
    if ctx.len() > 1 {
        let right = ctx.len() - 1;
        sort_range(&mut ctx, 0, right);
    }
    ctx.finish()
}

/// Sort the inclusive range `left..=right`.
fn sort_range(ctx: &mut SortContext, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;

    ctx.record(
        StepPatch::new()
            .selected((left..=right).collect::<Vec<_>>())
            .pivot([mid]),
    );

    sort_range(ctx, left, mid);
    sort_range(ctx, mid + 1, right);
    merge(ctx, left, mid, right);
}

fn merge(ctx: &mut SortContext, left: usize, mid: usize, right: usize) {
    let lhs = ctx.array[left..=mid].to_vec();
    let rhs = ctx.array[mid + 1..=right].to_vec();

    ctx.select((left..=right).collect::<Vec<_>>());

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < lhs.len() && j < rhs.len() {
        ctx.compare(left + i, mid + 1 + j);
        // Left half wins ties, which keeps the sort stable.
        if lhs[i] <= rhs[j] {
            ctx.place(k, lhs[i]);
            i += 1;
        } else {
            ctx.place(k, rhs[j]);
            j += 1;
        }
        k += 1;
    }

    for &value in lhs[i..].iter().chain(&rhs[j..]) {
        ctx.place(k, value);
        k += 1;
    }

    ctx.settle_and_clear(left..=right);
}
