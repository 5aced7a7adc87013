//! Selection sort tracking the running minimum of the unsorted suffix.

use crate::engine::context::SortContext;
use crate::engine::step::History;

pub(crate) fn selection_sort(input: &[i64]) -> History {
    let mut ctx = SortContext::new(input);
    let n = ctx.len();

    for i in 0..n {
        let mut min_index = i;
        ctx.select([min_index]);

        for j in i + 1..n {
            ctx.compare(j, min_index);
            if ctx.array[j] < ctx.array[min_index] {
                min_index = j;
                ctx.select([min_index]);
            }
        }

        if min_index != i {
            ctx.swap(i, min_index);
        }

        ctx.settle(0..=i);
    }

    ctx.finish()
}
