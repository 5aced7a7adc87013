//! Bucket sort: distribute by value range, sort buckets, concatenate.

use crate::engine::context::SortContext;
use crate::engine::step::{History, StepPatch};

const MAX_BUCKETS: usize = 10;

pub(crate) fn bucket_sort(input: &[i64]) -> History {
    let mut ctx = SortContext::new(input);
    let n = ctx.len();
    if n == 0 {
        return ctx.finish();
    }
    let min = ctx.array.iter().copied().min().unwrap_or_default();
    let max = ctx.array.iter().copied().max().unwrap_or_default();

    let bucket_count = n.min(MAX_BUCKETS);
    // The `+ 1` keeps the width non-zero when every value is equal.
    let width = (i128::from(max) - i128::from(min)) as f64 / bucket_count as f64 + 1.0;

    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); bucket_count];
    for i in 0..n {
        let value = ctx.array[i];
        let offset = (i128::from(value) - i128::from(min)) as f64;
        let bucket = ((offset / width) as usize).min(bucket_count - 1);

        ctx.record(StepPatch::new().selected([i]).pivot([bucket]));
        buckets[bucket].push(value);
    }

    // Bucket contents are not visualised while they are sorted.
    for bucket in &mut buckets {
        insertion_sort_in_place(bucket);
    }

    let mut index = 0;
    for (bucket_id, bucket) in buckets.iter().enumerate() {
        for &value in bucket {
            ctx.array[index] = value;
            ctx.record(
                StepPatch::new()
                    .array(&ctx.array)
                    .selected([index])
                    .pivot([bucket_id]),
            );
            ctx.settle([index]);
            index += 1;
        }
    }

    ctx.finish()
}

fn insertion_sort_in_place(values: &mut [i64]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}
