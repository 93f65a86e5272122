//! Bubble sort step generator

use super::trace::Trace;
use crate::step::{Narration, Step};

pub(crate) const NAME: &str = "Bubble Sort";

/// Generate the steps of a plain O(n²) bubble sort over `input`.
///
/// Each pass compares adjacent pairs, records a swap step before every
/// exchange and a plain step after it, then marks the tail that has
/// settled into place.
pub fn bubble_sort(input: &[f64]) -> Vec<Step> {
    let mut trace = Trace::new(input);
    let n = trace.len();

    trace.push(trace.snapshot(Narration::Start { algorithm: NAME }));

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            let (left, right) = (trace.value(j), trace.value(j + 1));
            trace.push(
                trace
                    .snapshot(Narration::Compare { left, right })
                    .comparing([j, j + 1]),
            );

            if left > right {
                trace.push(
                    trace
                        .snapshot(Narration::Swap { left, right })
                        .swapping(j, j + 1),
                );
                trace.swap(j, j + 1);
                trace.push(trace.snapshot(Narration::Swapped {
                    left: trace.value(j),
                    right: trace.value(j + 1),
                }));
            }
        }

        trace.push(
            trace
                .snapshot(Narration::PassComplete { pass: i })
                .sorted(n - i - 1..n),
        );
    }

    trace.finish_sorted()
}
