//! Main TUI application state and logic

use crate::algorithms::{generate_targeted, random_input, Algorithm};
use crate::errors::PlaybackError;
use crate::playback::Playback;
use crate::step::StepSummary;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{
    render_bars_pane, render_history_pane, render_narration_pane, render_status_bar,
    NarrationRenderData, StatusRenderData,
};

/// Length used when regenerating from an empty input
const DEFAULT_RANDOM_LEN: usize = 10;

/// Steps skipped by PageUp/PageDown
const PAGE_STEPS: usize = 10;

/// Timing settings for playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Delay between steps while auto-playing
    pub play_interval: Duration,
    /// Minimum gap between two play/pause toggles
    pub toggle_debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            play_interval: Duration::from_millis(800),
            toggle_debounce: Duration::from_millis(200),
        }
    }
}

/// The main application state
pub struct App {
    pub algorithm: Algorithm,

    /// Values the current sequence was generated from
    pub input: Vec<f64>,

    /// Injected binary-search target, if any
    pub target: Option<f64>,

    pub playback: Playback,
    pub summary: StepSummary,
    pub config: AppConfig,

    rng: StdRng,

    /// Scroll offset of the step history pane
    pub history_scroll: usize,

    /// Whether the history pane tracks the current step
    pub follow_current: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app and generate the first step sequence
    pub fn new(
        algorithm: Algorithm,
        input: Vec<f64>,
        target: Option<f64>,
        mut rng: StdRng,
        config: AppConfig,
    ) -> Result<Self, PlaybackError> {
        let steps = generate_targeted(algorithm, &input, target, &mut rng);
        let summary = StepSummary::of(&steps);
        let playback = Playback::new(steps)?;
        let now = Instant::now();

        Ok(App {
            algorithm,
            input,
            target,
            playback,
            summary,
            config,
            rng,
            history_scroll: 0,
            follow_current: true,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: now,
            last_space_press: now.checked_sub(config.toggle_debounce).unwrap_or(now),
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.config.play_interval {
                if self.playback.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.follow_current = true;
                } else {
                    // No more steps available
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        // Left column: bars (top) | narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(columns[0]);

        let step = self.playback.current();

        render_bars_pane(frame, left_rows[0], step, &self.algorithm.to_string());

        render_narration_pane(
            frame,
            left_rows[1],
            NarrationRenderData {
                step,
                summary: &self.summary,
                input: &self.input,
                is_search: !self.algorithm.is_sort(),
            },
        );

        render_history_pane(
            frame,
            columns[1],
            self.playback.steps(),
            self.playback.position(),
            &mut self.history_scroll,
            self.follow_current,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                current_step: self.playback.position(),
                total_steps: self.playback.len(),
                is_playing: self.is_playing,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.playback.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.follow_current = true;
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => {
                self.follow_current = false;
                self.history_scroll = self.history_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.follow_current = false;
                self.history_scroll = self.history_scroll.saturating_add(1);
            }
            KeyCode::PageDown => {
                self.is_playing = false;
                let last = self.playback.len() - 1;
                self.seek((self.playback.position() + PAGE_STEPS).min(last));
            }
            KeyCode::PageUp => {
                self.is_playing = false;
                self.seek(self.playback.position().saturating_sub(PAGE_STEPS));
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (debounced to prevent key repeat spam)
                if self.last_space_press.elapsed() >= self.config.toggle_debounce {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.follow_current = true;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.playback.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.follow_current = true;
            }
            KeyCode::Tab => {
                let next = self.algorithm.next();
                self.switch(next, self.input.clone());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let len = match self.input.len() {
                    0 => DEFAULT_RANDOM_LEN,
                    n => n,
                };
                let input = random_input(len, &mut self.rng);
                // An injected target is unlikely to be in a fresh array
                self.target = None;
                self.switch(self.algorithm, input);
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if !self.is_playing && self.playback.is_at_end() {
            self.playback.rewind_to_start();
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            let now = Instant::now();
            self.last_play_time = now.checked_sub(self.config.play_interval).unwrap_or(now);
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    /// Regenerate the step sequence and restart playback
    fn switch(&mut self, algorithm: Algorithm, input: Vec<f64>) {
        let steps = generate_targeted(algorithm, &input, self.target, &mut self.rng);
        let summary = StepSummary::of(&steps);

        match Playback::new(steps) {
            Ok(playback) => {
                tracing::info!(
                    algorithm = algorithm.key(),
                    steps = playback.len(),
                    "loaded step sequence"
                );
                self.algorithm = algorithm;
                self.input = input;
                self.playback = playback;
                self.summary = summary;
                self.is_playing = false;
                self.history_scroll = 0;
                self.follow_current = true;
                self.status_message = format!("Loaded {}", algorithm);
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load step sequence");
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Move the cursor straight to `index`
    fn seek(&mut self, index: usize) {
        match self.playback.seek(index) {
            Ok(()) => {
                self.status_message = format!("Jumped to step {}", index + 1);
                self.follow_current = true;
            }
            Err(e) => {
                self.status_message = format!("Cannot jump: {}", e);
            }
        }
    }

    /// Step forward in playback
    fn step_forward(&mut self) {
        match self.playback.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.follow_current = true;
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    /// Step backward in playback
    fn step_backward(&mut self) {
        match self.playback.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.follow_current = true;
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}
