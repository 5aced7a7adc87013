//! LSD radix sort, base 10, for non-negative integers.
//!
//! Each digit pass is a stable counting sort. The pivot field carries the
//! current digit's power-of-ten exponent.

use crate::engine::context::SortContext;
use crate::engine::step::{History, StepPatch};

const BASE: i64 = 10;

/// Callers guarantee every value is non-negative.
pub(crate) fn radix_sort(input: &[i64]) -> History {
    let mut ctx = SortContext::new(input);
    let n = ctx.len();
    let max = ctx.array.iter().copied().max().unwrap_or(0);

    let mut exp: i64 = 1;
    let mut exponent: usize = 0;
    while max / exp > 0 {
        ctx.record(StepPatch::new().pivot([exponent]));

        let digit = |value: i64| ((value / exp) % BASE) as usize;
        let mut count = [0usize; BASE as usize];

        for i in 0..n {
            count[digit(ctx.array[i])] += 1;
            ctx.select([i]);
        }

        for d in 1..count.len() {
            count[d] += count[d - 1];
        }

        // Walk backwards so equal digits keep their relative order.
        let mut output = vec![0i64; n];
        for i in (0..n).rev() {
            let d = digit(ctx.array[i]);
            count[d] -= 1;
            output[count[d]] = ctx.array[i];
            ctx.select([i]);
        }

        for (i, &value) in output.iter().enumerate() {
            if ctx.array[i] != value {
                ctx.place(i, value);
            }
        }

        match exp.checked_mul(BASE) {
            Some(next) => exp = next,
            None => break,
        }
        exponent += 1;
    }

    ctx.finish()
}
