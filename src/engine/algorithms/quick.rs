//! Quick sort using the Lomuto partition scheme (rightmost pivot).

use crate::engine::context::SortContext;
use crate::engine::step::{History, StepPatch};

pub(crate) fn quick_sort(input: &[i64]) -> History {
    let mut ctx = SortContext::new(input);
    if !ctx.array.is_empty() {
        let high = ctx.len() - 1;
        sort_range(&mut ctx, 0, high);
    }
    // Terminal step for the top-level range; a no-op if the trace is
    // already terminal.
    ctx.finish()
}

/// Sort the inclusive range `low..=high`, settling indices post-order.
fn sort_range(ctx: &mut SortContext, low: usize, high: usize) {
    if low > high {
        return;
    }
    if low == high {
        ctx.settle([low]);
        return;
    }

    let pivot = partition(ctx, low, high);
    if pivot > low {
        sort_range(ctx, low, pivot - 1);
    }
    sort_range(ctx, pivot + 1, high);

    // Both sides are in place, so the pivot slot is final.
    ctx.settle([pivot]);
}

/// Partition `low..=high` around `array[high]` and return the pivot's
/// final index.
fn partition(ctx: &mut SortContext, low: usize, high: usize) -> usize {
    let pivot = ctx.array[high];

    ctx.record(
        StepPatch::new()
            .pivot([high])
            .selected((low..=high).collect::<Vec<_>>()),
    );

    // Next slot for an element <= pivot.
    let mut store = low;
    for j in low..high {
        ctx.compare(j, high);
        if ctx.array[j] <= pivot {
            if store != j {
                ctx.swap(store, j);
            }
            store += 1;
        }
    }

    if store != high {
        ctx.swap(store, high);
    }
    store
}
