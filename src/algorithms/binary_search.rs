//! Binary search step generator
//!
//! Target selection and search execution are separate: [`select_target`]
//! draws a value from the sorted array, [`search`] runs against any target
//! (including one that is not in the array), and [`binary_search`] composes
//! the two.

use super::trace::Trace;
use crate::step::{Narration, Step};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Ascending copy of `input`
pub fn sorted_copy(input: &[f64]) -> Vec<f64> {
    let mut sorted = input.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Pick one of the array's own values, or `None` if it is empty
pub fn select_target<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> Option<f64> {
    values.choose(rng).copied()
}

/// Sort `input`, pick a target from it and search for it
pub fn binary_search<R: Rng + ?Sized>(input: &[f64], rng: &mut R) -> Vec<Step> {
    let target = select_target(input, rng);
    search(input, target)
}

/// Search a sorted copy of `input` for `target`.
///
/// The emitted arrays are the sorted copy from the first step onward. A
/// `None` target (empty input) records only the start and not-found steps.
pub fn search(input: &[f64], target: Option<f64>) -> Vec<Step> {
    let mut trace = Trace::new(&sorted_copy(input));

    trace.push(trace.snapshot(Narration::SearchStart {
        target: if trace.is_empty() { None } else { target },
    }));

    let target = match target {
        Some(t) if !trace.is_empty() => t,
        _ => {
            trace.push(trace.snapshot(Narration::NotFound { target }));
            return trace.into_steps();
        }
    };

    let mut left = 0;
    let mut right = trace.len() - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        let value = trace.value(mid);

        trace.push(
            trace
                .snapshot(Narration::Probe {
                    index: mid,
                    value,
                    target,
                })
                .comparing([mid])
                .range(Some((left, right))),
        );

        match value.partial_cmp(&target) {
            Some(Ordering::Equal) => {
                trace.push(
                    trace
                        .snapshot(Narration::Found { index: mid, target })
                        .sorted([mid]),
                );
                return trace.into_steps();
            }
            Some(Ordering::Less) => {
                let narrowed = (mid < right).then_some((mid + 1, right));
                trace.push(
                    trace
                        .snapshot(Narration::SearchRight { value, target })
                        .comparing([mid])
                        .range(narrowed),
                );
                left = mid + 1;
            }
            _ => {
                let narrowed = (mid > left).then(|| (left, mid - 1));
                trace.push(
                    trace
                        .snapshot(Narration::SearchLeft { value, target })
                        .comparing([mid])
                        .range(narrowed),
                );
                match mid.checked_sub(1) {
                    Some(r) => right = r,
                    None => break,
                }
            }
        }
    }

    trace.push(trace.snapshot(Narration::NotFound {
        target: Some(target),
    }));
    trace.into_steps()
}
