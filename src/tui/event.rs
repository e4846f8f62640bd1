use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::board::Direction;
use crate::core::state::Viewport;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Move(Direction),
    Resize(u16, u16),
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Quit => Action::Quit,
            TuiEvent::Move(direction) => Action::Move(direction),
            TuiEvent::Resize(width, height) => Action::Resize(Viewport { width, height }),
        }
    }
}

/// Where the event loop gets its input from.
pub trait EventSource {
    /// Block until the next event arrives. `Ok(None)` means the event was
    /// read but maps to nothing.
    fn next_event(&mut self) -> io::Result<Option<TuiEvent>>;
}

/// Reads events from the real terminal.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
        Ok(map_event(event::read()?))
    }
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::trace!(
                "Key event: {:?} with modifiers {:?} ({:?})",
                key_event.code,
                key_event.modifiers,
                key_event.kind
            );
            map_key(key_event)
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Enhanced keyboard protocols also report releases and repeats
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match (key_event.modifiers, key_event.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => Some(TuiEvent::Quit),
        (m, _) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::Move(Direction::Up)),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::Move(Direction::Down)),
        (_, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::Move(Direction::Left)),
        (_, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::Move(Direction::Right)),
        _ => None,
    }
}
