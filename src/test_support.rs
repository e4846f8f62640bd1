//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use ratatui::buffer::Buffer;

use crate::core::state::App;
use crate::tui::event::{EventSource, TuiEvent};

/// Creates a test App on the standard starting board.
pub fn test_app() -> App {
    App::new()
}

/// Replays a fixed list of events. `None` entries stand for keys that map to
/// nothing. Once drained, reads fail with `UnexpectedEof` so a loop that
/// never quits ends the test instead of spinning.
pub struct ScriptedEvents {
    queue: VecDeque<Option<TuiEvent>>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Option<TuiEvent>>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
        self.queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// All symbols in the buffer, row by row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
