//! The eight step-instrumented engines.

mod bubble;
mod bucket;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

pub(crate) use bubble::bubble_sort;
pub(crate) use bucket::bucket_sort;
pub(crate) use heap::heap_sort;
pub(crate) use insertion::insertion_sort;
pub(crate) use merge::merge_sort;
pub(crate) use quick::quick_sort;
pub(crate) use radix::radix_sort;
pub(crate) use selection::selection_sort;
