//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: Bar chart of the current step's array with per-index highlighting
//! - [`narration`]: Step description, colour legend and comparison/swap counters
//! - [`history`]: Scrollable list of every step with the current one marked
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function; panes hold no state
//! of their own beyond the scroll offsets the caller passes in.

pub mod bars;
pub mod history;
pub mod narration;
pub mod status;

pub use bars::render_bars_pane;
pub use history::render_history_pane;
pub use narration::{render_narration_pane, NarrationRenderData};
pub use status::{render_status_bar, StatusRenderData};
