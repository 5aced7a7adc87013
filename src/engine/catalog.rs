//! Reference information about each algorithm for display alongside a trace.

use serde::Serialize;

use super::algorithm::Algorithm;

/// Best, average and worst case running time.
#[derive(Debug, Clone, Serialize)]
pub struct TimeComplexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// Descriptive metadata for one algorithm.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub time_complexity: TimeComplexity,
    pub space_complexity: &'static str,
    pub description: &'static str,
    pub is_stable: bool,
}

impl AlgorithmInfo {
    fn new(
        algorithm: Algorithm,
        (best, average, worst): (&'static str, &'static str, &'static str),
        space_complexity: &'static str,
        is_stable: bool,
        description: &'static str,
    ) -> Self {
        Self {
            id: algorithm.as_str(),
            name: algorithm.display_name(),
            time_complexity: TimeComplexity {
                best,
                average,
                worst,
            },
            space_complexity,
            description,
            is_stable,
        }
    }
}

/// Registry of algorithm metadata.
#[derive(Debug, Default)]
pub struct AlgorithmCatalog;

impl AlgorithmCatalog {
    /// Metadata for a single algorithm.
    pub fn info(algorithm: Algorithm) -> AlgorithmInfo {
        match algorithm {
            Algorithm::Bubble => AlgorithmInfo::new(
                algorithm,
                ("O(n)", "O(n²)", "O(n²)"),
                "O(1)",
                true,
                "Repeatedly steps through the list, compares adjacent elements and swaps \
                 them if they are in the wrong order. Passes repeat until one makes no swaps.",
            ),
            Algorithm::Selection => AlgorithmInfo::new(
                algorithm,
                ("O(n²)", "O(n²)", "O(n²)"),
                "O(1)",
                false,
                "Splits the input into a sorted and an unsorted region, then repeatedly \
                 moves the smallest unsorted element to the end of the sorted region.",
            ),
            Algorithm::Insertion => AlgorithmInfo::new(
                algorithm,
                ("O(n)", "O(n²)", "O(n²)"),
                "O(1)",
                true,
                "Builds the sorted array one item at a time by shifting larger elements \
                 right until the new item fits. Efficient for small or nearly sorted data.",
            ),
            Algorithm::Merge => AlgorithmInfo::new(
                algorithm,
                ("O(n log n)", "O(n log n)", "O(n log n)"),
                "O(n)",
                true,
                "Divides the input into two halves, sorts each half recursively and \
                 merges the two sorted halves.",
            ),
            Algorithm::Quick => AlgorithmInfo::new(
                algorithm,
                ("O(n log n)", "O(n log n)", "O(n²)"),
                "O(log n)",
                false,
                "Picks a pivot and partitions the array so smaller elements sit to its \
                 left and larger ones to its right, then sorts each side recursively.",
            ),
            Algorithm::Heap => AlgorithmInfo::new(
                algorithm,
                ("O(n log n)", "O(n log n)", "O(n log n)"),
                "O(1)",
                false,
                "Builds a binary max-heap, then repeatedly moves the largest element \
                 to the end of the array and restores the heap on the remainder.",
            ),
            Algorithm::Radix => AlgorithmInfo::new(
                algorithm,
                ("O(nk)", "O(nk)", "O(nk)"),
                "O(n+k)",
                true,
                "Sorts non-negative integers digit by digit, least significant first, \
                 using a stable counting sort for each digit.",
            ),
            Algorithm::Bucket => AlgorithmInfo::new(
                algorithm,
                ("O(n+k)", "O(n+k)", "O(n²)"),
                "O(n+k)",
                true,
                "Distributes elements into buckets by value range, sorts each bucket \
                 and concatenates them. Works best on uniformly distributed input.",
            ),
        }
    }

    /// Metadata for every supported algorithm, in menu order.
    pub fn all() -> Vec<AlgorithmInfo> {
        Algorithm::ALL.into_iter().map(Self::info).collect()
    }
}
