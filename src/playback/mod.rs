// Cursor over a finished step sequence

use crate::errors::PlaybackError;
use crate::step::Step;

/// Walks a generated step sequence by index.
///
/// The sequence is never empty, so there is always a current step. Moves
/// that would leave the sequence return an error and keep the cursor where
/// it was.
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<Step>,
    position: usize,
}

impl Playback {
    pub fn new(steps: Vec<Step>) -> Result<Self, PlaybackError> {
        if steps.is_empty() {
            return Err(PlaybackError::EmptySequence);
        }
        Ok(Playback { steps, position: 0 })
    }

    /// Step at the cursor
    pub fn current(&self) -> &Step {
        &self.steps[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true once constructed
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_start() {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        for _ in 0..n {
            if self.step_forward().is_err() {
                break;
            }
            stepped += 1;
        }
        stepped
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.steps.len() - 1;
    }

    pub fn seek(&mut self, index: usize) -> Result<(), PlaybackError> {
        if index >= self.steps.len() {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.position = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Narration;

    fn three_steps() -> Vec<Step> {
        (0..3)
            .map(|i| Step::new(&[i as f64], Narration::PassComplete { pass: i }))
            .collect()
    }

    #[test]
    fn test_rejects_empty_sequence() {
        assert_eq!(
            Playback::new(Vec::new()).unwrap_err(),
            PlaybackError::EmptySequence
        );
    }

    #[test]
    fn test_step_bounds() {
        let mut playback = Playback::new(three_steps()).unwrap();
        assert!(playback.is_at_start());
        assert_eq!(playback.step_backward(), Err(PlaybackError::AtStart));

        playback.step_forward().unwrap();
        playback.step_forward().unwrap();
        assert!(playback.is_at_end());
        assert_eq!(playback.step_forward(), Err(PlaybackError::AtEnd));
        assert_eq!(playback.position(), 2);
        assert_eq!(playback.current().array, vec![2.0]);
    }

    #[test]
    fn test_step_forward_by_stops_at_end() {
        let mut playback = Playback::new(three_steps()).unwrap();
        assert_eq!(playback.step_forward_by(9), 2);
        assert!(playback.is_at_end());
    }

    #[test]
    fn test_seek_and_jumps() {
        let mut playback = Playback::new(three_steps()).unwrap();
        playback.jump_to_end();
        assert_eq!(playback.position(), 2);
        playback.rewind_to_start();
        assert_eq!(playback.position(), 0);

        playback.seek(1).unwrap();
        assert_eq!(playback.position(), 1);
        assert_eq!(
            playback.seek(3),
            Err(PlaybackError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(playback.position(), 1);
    }
}
