// Step snapshots consumed by the playback layer

pub mod summary;

pub use summary::StepSummary;

use std::fmt;

/// Format a value the way it is shown to the user: integral values
/// print without a fractional part.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Coarse state of a step, shared by every generator.
///
/// `Start` and `Terminal` occur once per sequence; the rest occur zero or
/// more times in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepKind {
    Start,
    Comparing,
    Swapping,
    /// Plain step showing the array after an exchange
    Update,
    PartialSorted,
    Narrowing,
    Terminal,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Start => "start",
            StepKind::Comparing => "compare",
            StepKind::Swapping => "swap",
            StepKind::Update => "update",
            StepKind::PartialSorted => "sorted",
            StepKind::Narrowing => "narrow",
            StepKind::Terminal => "done",
        }
    }
}

/// Structured meaning of a step.
///
/// Carries the values a renderer needs to describe the step; `Display`
/// produces the English narration.
#[derive(Debug, Clone, PartialEq)]
pub enum Narration {
    /// Sorting run begins on the unmodified input
    Start { algorithm: &'static str },
    /// Binary search begins; `None` when the input was empty
    SearchStart { target: Option<f64> },
    Compare { left: f64, right: f64 },
    Swap { left: f64, right: f64 },
    /// Values now sitting at the two exchanged positions
    Swapped { left: f64, right: f64 },
    PassComplete { pass: usize },
    Partition { pivot: f64, depth: usize },
    CompareWithPivot { value: f64, pivot: f64 },
    /// Pivot exchanged into its final slot; `index` may be its current one
    PlacePivot { pivot: f64, index: usize },
    PivotPlaced { pivot: f64, index: usize },
    Probe { index: usize, value: f64, target: f64 },
    SearchRight { value: f64, target: f64 },
    SearchLeft { value: f64, target: f64 },
    Found { index: usize, target: f64 },
    NotFound { target: Option<f64> },
    Sorted,
}

impl Narration {
    pub fn kind(&self) -> StepKind {
        match self {
            Narration::Start { .. } | Narration::SearchStart { .. } => StepKind::Start,
            Narration::Compare { .. }
            | Narration::CompareWithPivot { .. }
            | Narration::Probe { .. } => StepKind::Comparing,
            Narration::Swap { .. } | Narration::PlacePivot { .. } => StepKind::Swapping,
            Narration::Swapped { .. } => StepKind::Update,
            Narration::PassComplete { .. } | Narration::PivotPlaced { .. } => {
                StepKind::PartialSorted
            }
            Narration::Partition { .. }
            | Narration::SearchRight { .. }
            | Narration::SearchLeft { .. } => StepKind::Narrowing,
            Narration::Found { .. } | Narration::NotFound { .. } | Narration::Sorted => {
                StepKind::Terminal
            }
        }
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = |x: &f64| format_value(*x);
        match self {
            Narration::Start { algorithm } => write!(f, "Starting {}", algorithm),
            Narration::SearchStart { target: Some(t) } => {
                write!(f, "Sorted the array, searching for {}", v(t))
            }
            Narration::SearchStart { target: None } => {
                write!(f, "Array is empty, nothing to search")
            }
            Narration::Compare { left, right } => {
                write!(f, "Comparing {} and {}", v(left), v(right))
            }
            Narration::Swap { left, right } => {
                write!(f, "{} > {}, swapping", v(left), v(right))
            }
            Narration::Swapped { left, right } => {
                write!(f, "Swapped: now {} and {}", v(left), v(right))
            }
            Narration::PassComplete { pass } => {
                write!(f, "Pass {} complete, largest remaining value in place", pass + 1)
            }
            Narration::Partition { pivot, depth } => {
                write!(f, "Partitioning around pivot {} (depth {})", v(pivot), depth)
            }
            Narration::CompareWithPivot { value, pivot } => {
                write!(f, "Comparing {} with pivot {}", v(value), v(pivot))
            }
            Narration::PlacePivot { pivot, index } => {
                write!(f, "Moving pivot {} into index {}", v(pivot), index)
            }
            Narration::PivotPlaced { pivot, index } => {
                write!(f, "Pivot {} placed at index {}", v(pivot), index)
            }
            Narration::Probe {
                index,
                value,
                target,
            } => write!(
                f,
                "Checking middle index {}: {} vs target {}",
                index,
                v(value),
                v(target)
            ),
            Narration::SearchRight { value, target } => {
                write!(f, "{} < {}, searching the right half", v(value), v(target))
            }
            Narration::SearchLeft { value, target } => {
                write!(f, "{} > {}, searching the left half", v(value), v(target))
            }
            Narration::Found { index, target } => {
                write!(f, "Found {} at index {}", v(target), index)
            }
            Narration::NotFound { target: Some(t) } => write!(f, "{} not found", v(t)),
            Narration::NotFound { target: None } => write!(f, "Nothing to search"),
            Narration::Sorted => write!(f, "Array is sorted"),
        }
    }
}

/// Snapshot of algorithm state at one point in its execution
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Owned copy of the working array at this instant
    pub array: Vec<f64>,
    /// Zero, one or two indices under comparison
    pub comparing: Vec<usize>,
    pub swapping: Option<(usize, usize)>,
    /// Indices known to be in final position
    pub sorted: Vec<usize>,
    pub pivot: Option<usize>,
    /// Inclusive `[low, high]` window under consideration
    pub highlight_range: Option<(usize, usize)>,
    pub narration: Narration,
}

impl Step {
    /// A step with no highlighted indices
    pub fn new(array: &[f64], narration: Narration) -> Self {
        Step {
            array: array.to_vec(),
            comparing: Vec::new(),
            swapping: None,
            sorted: Vec::new(),
            pivot: None,
            highlight_range: None,
            narration,
        }
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparing = indices.into_iter().collect();
        self
    }

    pub fn swapping(mut self, a: usize, b: usize) -> Self {
        self.swapping = Some((a, b));
        self
    }

    pub fn sorted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.sorted = indices.into_iter().collect();
        self
    }

    pub fn pivot(mut self, index: usize) -> Self {
        self.pivot = Some(index);
        self
    }

    pub fn range(mut self, range: Option<(usize, usize)>) -> Self {
        self.highlight_range = range;
        self
    }

    pub fn kind(&self) -> StepKind {
        self.narration.kind()
    }

    /// Human-readable narration of this step
    pub fn description(&self) -> String {
        self.narration.to_string()
    }

    /// Every index referenced by a highlight field
    pub fn referenced_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let swap = self.swapping.into_iter().flat_map(|(a, b)| [a, b]);
        let range = self.highlight_range.into_iter().flat_map(|(l, h)| [l, h]);
        self.comparing
            .iter()
            .copied()
            .chain(swap)
            .chain(self.sorted.iter().copied())
            .chain(self.pivot)
            .chain(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(-12.0), "-12");
        assert_eq!(format_value(2.5), "2.5");
    }

    #[test]
    fn test_step_owns_array_copy() {
        let mut working = vec![3.0, 1.0, 2.0];
        let step = Step::new(&working, Narration::Sorted);
        working.swap(0, 1);

        assert_eq!(step.array, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_referenced_indices() {
        let step = Step::new(&[1.0, 2.0, 3.0, 4.0], Narration::Sorted)
            .comparing([1])
            .swapping(0, 2)
            .sorted([3])
            .pivot(3)
            .range(Some((0, 3)));

        let mut indices: Vec<usize> = step.referenced_indices().collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 0, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_narration_text() {
        let n = Narration::Partition {
            pivot: 7.0,
            depth: 1,
        };
        assert_eq!(n.to_string(), "Partitioning around pivot 7 (depth 1)");
        assert_eq!(n.kind(), StepKind::Narrowing);

        let n = Narration::NotFound { target: Some(4.5) };
        assert_eq!(n.to_string(), "4.5 not found");
        assert_eq!(n.kind(), StepKind::Terminal);
    }
}
