//! # Introduction
//!
//! AlgoTTY turns a run of a textbook algorithm into a sequence of immutable
//! snapshots ("steps") and plays them back in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Algorithm + values → Generator → Vec<Step> → Playback → TUI
//! ```
//!
//! 1. [`algorithms`] — bubble sort, Lomuto quicksort and binary search step
//!    generators, plus the [`algorithms::Algorithm`] selector and
//!    [`algorithms::generate`].
//! 2. [`step`] — the [`step::Step`] snapshot, its structured
//!    [`step::Narration`], and [`step::StepSummary`] counters.
//! 3. [`playback`] — a cursor over a finished step sequence.
//! 4. [`errors`] — value parsing and playback errors.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Generation is pure: the same algorithm and input always produce the same
//! steps, except that binary search draws its target at random unless one is
//! injected or a seeded generator is supplied.
//!
//! ```
//! use algotty::algorithms::{generate, Algorithm};
//!
//! let steps = generate(Algorithm::BubbleSort, &[3.0, 1.0, 2.0]);
//! let last = steps.last().unwrap();
//! assert_eq!(last.array, vec![1.0, 2.0, 3.0]);
//! assert_eq!(last.sorted, vec![0, 1, 2]);
//! ```

pub mod algorithms;
pub mod errors;
pub mod playback;
pub mod step;
pub mod ui;

pub use algorithms::{generate, Algorithm};
pub use step::Step;
