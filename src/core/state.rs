//! # Application State
//!
//! Core game state for pegcross. No TUI-specific types live here; the
//! renderer reads this and never writes it.
//!
//! ```text
//! App
//! ├── board: Board                  // grid + active position
//! ├── viewport: Option<Viewport>    // terminal size, unknown until first resize
//! └── run_state: RunState           // Running | Terminated
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::board::Board;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct App {
    pub board: Board,
    pub viewport: Option<Viewport>,
    pub run_state: RunState,
}

impl App {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            viewport: None,
            run_state: RunState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
