//! Quicksort step generator (Lomuto partition scheme)

use super::trace::Trace;
use crate::step::{Narration, Step};

pub(crate) const NAME: &str = "Quick Sort";

/// Generate the steps of a recursive Lomuto quicksort over `input`.
///
/// The last element of each range is the pivot. Left sub-ranges are fully
/// processed before right ones.
pub fn quick_sort(input: &[f64]) -> Vec<Step> {
    let mut trace = Trace::new(input);

    trace.push(trace.snapshot(Narration::Start { algorithm: NAME }));

    if trace.len() > 1 {
        let high = trace.len() - 1;
        sort_range(&mut trace, 0, high, 0);
    }

    trace.finish_sorted()
}

fn sort_range(trace: &mut Trace, low: usize, high: usize, depth: usize) {
    if low >= high {
        return;
    }

    let placed = partition(trace, low, high, depth);

    if placed > low {
        sort_range(trace, low, placed - 1, depth + 1);
    }
    sort_range(trace, placed + 1, high, depth + 1);
}

/// Partition `[low, high]` around `array[high]`, returning the pivot's final index
fn partition(trace: &mut Trace, low: usize, high: usize, depth: usize) -> usize {
    let pivot = trace.value(high);
    let range = Some((low, high));

    trace.push(
        trace
            .snapshot(Narration::Partition { pivot, depth })
            .pivot(high)
            .range(range),
    );

    // Next slot for a value smaller than the pivot
    let mut store = low;

    for j in low..high {
        let value = trace.value(j);
        trace.push(
            trace
                .snapshot(Narration::CompareWithPivot { value, pivot })
                .comparing([j])
                .pivot(high)
                .range(range),
        );

        if value < pivot {
            if store != j {
                let (left, right) = (trace.value(store), value);
                trace.push(
                    trace
                        .snapshot(Narration::Swap { left, right })
                        .swapping(store, j),
                );
                trace.swap(store, j);
                trace.push(trace.snapshot(Narration::Swapped {
                    left: trace.value(store),
                    right: trace.value(j),
                }));
            }
            store += 1;
        }
    }

    // Recorded even when the pivot is already in place (store == high)
    trace.push(
        trace
            .snapshot(Narration::PlacePivot {
                pivot,
                index: store,
            })
            .swapping(store, high),
    );
    trace.swap(store, high);
    trace.push(
        trace
            .snapshot(Narration::PivotPlaced {
                pivot,
                index: store,
            })
            .sorted([store]),
    );

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{StepKind, StepSummary};

    #[test]
    fn test_four_elements() {
        let steps = quick_sort(&[4.0, 2.0, 7.0, 1.0]);

        assert_eq!(steps[0].array, vec![4.0, 2.0, 7.0, 1.0]);
        assert!(steps.iter().any(|s| s.pivot.is_some()));

        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![1.0, 2.0, 4.0, 7.0]);
        assert_eq!(last.sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_first_partition_sequence() {
        // pivot 2: 3 is not smaller, 1 is and moves to slot 0
        let steps = quick_sort(&[3.0, 1.0, 2.0]);

        assert_eq!(steps[1].pivot, Some(2));
        assert_eq!(steps[1].highlight_range, Some((0, 2)));
        assert_eq!(steps[2].comparing, vec![0]);
        assert_eq!(steps[3].comparing, vec![1]);
        assert_eq!(steps[4].swapping, Some((0, 1)));
        assert_eq!(steps[4].array, vec![3.0, 1.0, 2.0]);
        assert_eq!(steps[5].array, vec![1.0, 3.0, 2.0]);
        assert_eq!(steps[6].swapping, Some((1, 2)));
        assert_eq!(steps[7].sorted, vec![1]);
        assert_eq!(steps[7].array, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_depth_increases_on_recursion() {
        let steps = quick_sort(&[5.0, 4.0, 3.0, 2.0, 1.0]);
        let depths: Vec<usize> = steps
            .iter()
            .filter_map(|s| match s.narration {
                Narration::Partition { depth, .. } => Some(depth),
                _ => None,
            })
            .collect();

        assert_eq!(depths.first(), Some(&0));
        assert!(depths.iter().skip(1).all(|d| *d >= 1));
    }

    #[test]
    fn test_all_equal_values() {
        let steps = quick_sort(&[2.0, 2.0, 2.0]);
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![2.0, 2.0, 2.0]);
        assert_eq!(last.sorted, vec![0, 1, 2]);
        // nothing is strictly smaller than the pivot, so only pivot moves occur
        assert!(steps
            .iter()
            .filter(|s| s.kind() == StepKind::Swapping)
            .all(|s| matches!(s.narration, Narration::PlacePivot { pivot, .. } if pivot == 2.0)));
        assert!(steps.iter().all(|s| !s.description().contains('>')));
    }

    #[test]
    fn test_sorted_input_places_pivot_in_place() {
        let steps = quick_sort(&[1.0, 2.0, 3.0]);

        let moves: Vec<&Step> = steps
            .iter()
            .filter(|s| s.kind() == StepKind::Swapping)
            .collect();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].swapping, Some((2, 2)));
        assert_eq!(moves[0].description(), "Moving pivot 3 into index 2");
        assert_eq!(moves[1].swapping, Some((1, 1)));
        assert_eq!(moves[1].description(), "Moving pivot 2 into index 1");

        // Nothing moved, so nothing counts as a swap
        assert_eq!(StepSummary::of(&steps).swaps, 0);
    }

    #[test]
    fn test_pivot_move_counts_when_it_moves() {
        let steps = quick_sort(&[3.0, 1.0, 2.0]);
        let placed = steps
            .iter()
            .find(|s| matches!(s.narration, Narration::PlacePivot { .. }))
            .unwrap();
        assert_eq!(placed.swapping, Some((1, 2)));
        assert_eq!(placed.description(), "Moving pivot 2 into index 1");
        // scan swap (0, 1) plus the pivot move (1, 2)
        assert_eq!(StepSummary::of(&steps).swaps, 2);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(quick_sort(&[]).len(), 2);

        let single = quick_sort(&[9.0]);
        assert_eq!(single.len(), 2);
        assert_eq!(single[1].sorted, vec![0]);
    }
}
