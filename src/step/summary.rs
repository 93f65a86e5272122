//! Aggregate counts over a step sequence

use super::{Step, StepKind};
use rustc_hash::FxHashMap;

/// Counts of steps by kind for one generated sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub total: usize,
    pub comparisons: usize,
    /// Exchanges of two distinct positions; a pivot already in place is not counted
    pub swaps: usize,
    pub by_kind: FxHashMap<StepKind, usize>,
}

impl StepSummary {
    pub fn of(steps: &[Step]) -> Self {
        let mut by_kind: FxHashMap<StepKind, usize> = FxHashMap::default();
        for step in steps {
            *by_kind.entry(step.kind()).or_insert(0) += 1;
        }

        StepSummary {
            total: steps.len(),
            comparisons: by_kind.get(&StepKind::Comparing).copied().unwrap_or(0),
            swaps: steps
                .iter()
                .filter(|s| s.swapping.is_some_and(|(a, b)| a != b))
                .count(),
            by_kind,
        }
    }

    pub fn count(&self, kind: StepKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Per-kind counts in state-machine order, omitting kinds that never occur
    pub fn breakdown(&self) -> Vec<(StepKind, usize)> {
        let mut entries: Vec<(StepKind, usize)> =
            self.by_kind.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(kind, _)| *kind);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Narration;

    #[test]
    fn test_summary_counts() {
        let array = [2.0, 1.0];
        let steps = vec![
            Step::new(&array, Narration::Start { algorithm: "Bubble Sort" }),
            Step::new(&array, Narration::Compare { left: 2.0, right: 1.0 }).comparing([0, 1]),
            Step::new(&array, Narration::Swap { left: 2.0, right: 1.0 }).swapping(0, 1),
            Step::new(&[1.0, 2.0], Narration::Sorted).sorted([0, 1]),
        ];

        let summary = StepSummary::of(&steps);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.comparisons, 1);
        assert_eq!(summary.swaps, 1);
        assert_eq!(summary.count(StepKind::Terminal), 1);
        assert_eq!(summary.count(StepKind::Narrowing), 0);
        assert_eq!(
            summary.breakdown(),
            vec![
                (StepKind::Start, 1),
                (StepKind::Comparing, 1),
                (StepKind::Swapping, 1),
                (StepKind::Terminal, 1),
            ]
        );
    }

    #[test]
    fn test_self_swap_is_not_counted() {
        let array = [1.0, 2.0];
        let steps = vec![
            Step::new(&array, Narration::PlacePivot { pivot: 2.0, index: 1 }).swapping(1, 1),
            Step::new(&array, Narration::PlacePivot { pivot: 2.0, index: 0 }).swapping(0, 1),
        ];

        let summary = StepSummary::of(&steps);
        assert_eq!(summary.count(StepKind::Swapping), 2);
        assert_eq!(summary.swaps, 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = StepSummary::of(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.breakdown().is_empty());
    }
}
