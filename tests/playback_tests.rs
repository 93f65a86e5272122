// Integration tests for walking a generated sequence

use algotty::algorithms::{generate, Algorithm};
use algotty::errors::PlaybackError;
use algotty::playback::Playback;
use algotty::step::StepKind;

#[test]
fn test_walk_to_end_and_back() {
    let steps = generate(Algorithm::QuickSort, &[5.0, 1.0, 4.0, 2.0, 3.0]);
    let total = steps.len();
    let mut playback = Playback::new(steps).expect("sequence is never empty");

    assert_eq!(playback.current().kind(), StepKind::Start);

    let mut moves = 0;
    while playback.step_forward().is_ok() {
        moves += 1;
    }
    assert_eq!(moves, total - 1);
    assert_eq!(playback.current().kind(), StepKind::Terminal);
    assert_eq!(playback.step_forward(), Err(PlaybackError::AtEnd));

    while playback.step_backward().is_ok() {}
    assert_eq!(playback.position(), 0);
    assert_eq!(playback.current().array, vec![5.0, 1.0, 4.0, 2.0, 3.0]);
}

#[test]
fn test_seek_shows_recorded_snapshot() {
    let steps = generate(Algorithm::BubbleSort, &[2.0, 1.0]);
    let mut playback = Playback::new(steps).unwrap();

    // start, compare, swap, swapped, pass, done
    playback.seek(2).unwrap();
    assert_eq!(playback.current().swapping, Some((0, 1)));
    assert_eq!(playback.current().array, vec![2.0, 1.0]);

    playback.seek(3).unwrap();
    assert_eq!(playback.current().array, vec![1.0, 2.0]);

    // Earlier snapshot is unchanged after visiting later ones
    playback.step_backward().unwrap();
    assert_eq!(playback.current().array, vec![2.0, 1.0]);
}

#[test]
fn test_jump_to_end_on_minimal_sequence() {
    let mut playback = Playback::new(generate(Algorithm::BubbleSort, &[])).unwrap();
    assert_eq!(playback.len(), 2);
    playback.jump_to_end();
    assert!(playback.is_at_end());
    assert!(playback.current().sorted.is_empty());
}
