//! Heap sort over an implicit max-heap (`children of i are 2i+1, 2i+2`).

use crate::engine::context::SortContext;
use crate::engine::step::History;

pub(crate) fn heap_sort(input: &[i64]) -> History {
    let mut ctx = SortContext::new(input);
    let n = ctx.len();

    for root in (0..n / 2).rev() {
        heapify(&mut ctx, n, root);
    }

    for end in (1..n).rev() {
        ctx.swap(0, end);
        ctx.settle([end]);
        heapify(&mut ctx, end, 0);
    }

    ctx.finish()
}

/// Sift `root` down within the first `heap_len` slots.
fn heapify(ctx: &mut SortContext, heap_len: usize, root: usize) {
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    let subtree: Vec<usize> = [root, left, right]
        .into_iter()
        .filter(|&idx| idx == root || idx < heap_len)
        .collect();
    ctx.select(subtree);

    let mut largest = root;
    if left < heap_len {
        ctx.compare(root, left);
        if ctx.array[left] > ctx.array[largest] {
            largest = left;
        }
    }
    if right < heap_len {
        ctx.compare(largest, right);
        if ctx.array[right] > ctx.array[largest] {
            largest = right;
        }
    }

    if largest != root {
        ctx.swap(root, largest);
        heapify(ctx, heap_len, largest);
    }
}
