// Append-only step collector used while an algorithm runs

use crate::step::{Narration, Step};

/// Owns the working array and the steps recorded so far.
///
/// Every recorded step is built from a copy of the working array, so later
/// exchanges never reach back into earlier steps.
#[derive(Debug)]
pub struct Trace {
    array: Vec<f64>,
    steps: Vec<Step>,
}

impl Trace {
    pub fn new(input: &[f64]) -> Self {
        Trace {
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn value(&self, index: usize) -> f64 {
        self.array[index]
    }

    /// Start a step from the current working array
    pub fn snapshot(&self, narration: Narration) -> Step {
        Step::new(&self.array, narration)
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
    }

    /// Record the terminal step marking every index sorted
    pub fn finish_sorted(mut self) -> Vec<Step> {
        let step = self.snapshot(Narration::Sorted).sorted(0..self.len());
        self.push(step);
        self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshots_are_independent() {
        let mut trace = Trace::new(&[2.0, 1.0]);
        trace.push(trace.snapshot(Narration::Start { algorithm: "test" }));
        trace.swap(0, 1);
        let steps = trace.finish_sorted();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].array, vec![2.0, 1.0]);
        assert_eq!(steps[1].array, vec![1.0, 2.0]);
        assert_eq!(steps[1].sorted, vec![0, 1]);
    }
}
