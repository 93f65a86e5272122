//! Step generators for the visualized algorithms
//!
//! Each generator takes the input values by reference and returns the full,
//! owned step sequence. Generation is eager and never fails: every finite
//! numeric input, including an empty one, yields a non-empty sequence.
//!
//! - [`bubble`]: adjacent compare-and-swap passes
//! - [`quick`]: recursive quicksort with Lomuto partitioning
//! - [`binary_search`]: search over a sorted copy, target chosen separately
//! - `trace`: the append-only collector shared by all three

pub mod binary_search;
pub mod bubble;
pub mod quick;
mod trace;

use crate::errors::InputError;
use crate::step::Step;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

pub use binary_search::{search, select_target};
pub use bubble::bubble_sort;
pub use quick::quick_sort;

/// Smallest and largest value produced by [`random_input`]
pub const RANDOM_VALUE_RANGE: (u32, u32) = (5, 99);

/// Longest input accepted from the command line.
///
/// Sort step counts grow quadratically with the length and every step owns a
/// copy of the array, so the history for `n` values holds on the order of
/// `n³` numbers.
pub const MAX_INPUT_LEN: usize = 100;

/// Which algorithm to generate steps for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    QuickSort,
    BinarySearch,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BubbleSort,
        Algorithm::QuickSort,
        Algorithm::BinarySearch,
    ];

    /// Cycle to the next algorithm (bubble -> quick -> binary -> bubble)
    pub fn next(self) -> Self {
        match self {
            Algorithm::BubbleSort => Algorithm::QuickSort,
            Algorithm::QuickSort => Algorithm::BinarySearch,
            Algorithm::BinarySearch => Algorithm::BubbleSort,
        }
    }

    /// Name accepted on the command line
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubbleSort",
            Algorithm::QuickSort => "quickSort",
            Algorithm::BinarySearch => "binarySearch",
        }
    }

    pub fn is_sort(self) -> bool {
        !matches!(self, Algorithm::BinarySearch)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Algorithm::BubbleSort => bubble::NAME,
            Algorithm::QuickSort => quick::NAME,
            Algorithm::BinarySearch => "Binary Search",
        };
        f.write_str(title)
    }
}

impl FromStr for Algorithm {
    type Err = InputError;

    /// Accepts `bubbleSort`, `bubble-sort`, `bubble_sort` and `bubble`
    /// (likewise for the other two), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "bubblesort" | "bubble" => Ok(Algorithm::BubbleSort),
            "quicksort" | "quick" => Ok(Algorithm::QuickSort),
            "binarysearch" | "binary" => Ok(Algorithm::BinarySearch),
            _ => Err(InputError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Generate the step sequence for `algorithm` over `input`.
///
/// Binary search draws its target from the thread-local generator; use
/// [`generate_with_rng`] for reproducible output.
pub fn generate(algorithm: Algorithm, input: &[f64]) -> Vec<Step> {
    generate_with_rng(algorithm, input, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    algorithm: Algorithm,
    input: &[f64],
    rng: &mut R,
) -> Vec<Step> {
    let steps = match algorithm {
        Algorithm::BubbleSort => bubble_sort(input),
        Algorithm::QuickSort => quick_sort(input),
        Algorithm::BinarySearch => binary_search::binary_search(input, rng),
    };

    tracing::debug!(
        algorithm = algorithm.key(),
        input_len = input.len(),
        steps = steps.len(),
        "generated step sequence"
    );

    steps
}

/// Like [`generate_with_rng`], but a binary search uses `target` when one is
/// given instead of drawing it from the input.
pub fn generate_targeted<R: Rng + ?Sized>(
    algorithm: Algorithm,
    input: &[f64],
    target: Option<f64>,
    rng: &mut R,
) -> Vec<Step> {
    match (algorithm, target) {
        (Algorithm::BinarySearch, Some(target)) => {
            tracing::debug!(search_target = target, "searching for injected target");
            search(input, Some(target))
        }
        _ => generate_with_rng(algorithm, input, rng),
    }
}

/// `len` integral values drawn uniformly from [`RANDOM_VALUE_RANGE`]
pub fn random_input<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    let (low, high) = RANDOM_VALUE_RANGE;
    (0..len).map(|_| f64::from(rng.gen_range(low..=high))).collect()
}
