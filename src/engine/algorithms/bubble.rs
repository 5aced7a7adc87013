//! Bubble sort with early exit on a swap-free pass.

use crate::engine::context::SortContext;
use crate::engine::step::History;

pub(crate) fn bubble_sort(input: &[i64]) -> History {
    let mut ctx = SortContext::new(input);
    let n = ctx.len();

    for pass in 0..n {
        let mut swapped = false;

        for j in 0..n - pass - 1 {
            ctx.compare(j, j + 1);
            // Strict `>` keeps equal keys in their original order.
            if ctx.array[j] > ctx.array[j + 1] {
                ctx.swap(j, j + 1);
                swapped = true;
            }
        }

        // The largest remaining value has bubbled into place.
        ctx.settle(n - pass - 1..n);

        if !swapped {
            break;
        }
    }

    ctx.finish()
}
