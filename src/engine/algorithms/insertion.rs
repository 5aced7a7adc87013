//! Insertion sort that shifts larger predecessors one slot at a time.

use crate::engine::context::SortContext;
use crate::engine::step::History;

pub(crate) fn insertion_sort(input: &[i64]) -> History {
    let mut ctx = SortContext::new(input);
    let n = ctx.len();

    for i in 1..n {
        let key = ctx.array[i];
        ctx.select([i]);

        // `slot` is where the key lands; everything in slot..i moves right.
        // The comparison that stops the scan is recorded too.
        let mut slot = i;
        while slot > 0 {
            ctx.compare(slot - 1, slot);
            if ctx.array[slot - 1] <= key {
                break;
            }
            ctx.shift(slot - 1, slot);
            slot -= 1;
        }

        ctx.place(slot, key);
        ctx.settle(0..=i);
    }

    ctx.finish()
}
