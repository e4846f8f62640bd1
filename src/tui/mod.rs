//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly sequential: block on the next terminal event, apply it through
//! `core::action::update`, redraw, repeat. One frame is drawn up front so the
//! board appears before the first key press. Quit stops the loop before any
//! further drawing. Keys that map to nothing cause no redraw.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use std::io;

use log::{debug, info};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Viewport};
use crate::tui::event::{CrosstermEvents, EventSource};

/// Restores the normal screen buffer and cooked mode on drop, so error
/// returns leave the terminal usable too.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("Terminal restored");
    }
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let mut app = App::new();

    let mut terminal = ratatui::try_init()?;
    let _terminal_guard = TerminalGuard;
    info!("Terminal initialized (alternate screen, raw mode)");

    // crossterm only reports changes, so seed the first size by hand
    let (width, height) = crossterm::terminal::size()?;
    update(&mut app, Action::Resize(Viewport { width, height }));

    let theme = &config.theme;
    let frames = run_loop(&mut app, &mut CrosstermEvents, |app| {
        terminal
            .draw(|f| ui::draw_ui(f, app, theme))
            .map(|_| ())
    })?;

    info!("Exiting after {} frames", frames);
    Ok(())
}

/// Drive `app` from `events` until quit, calling `draw` for every frame.
/// Returns the number of frames drawn.
pub fn run_loop<S, D>(app: &mut App, events: &mut S, mut draw: D) -> io::Result<usize>
where
    S: EventSource,
    D: FnMut(&App) -> io::Result<()>,
{
    draw(app)?;
    let mut frames = 1;

    while app.is_running() {
        let Some(event) = events.next_event()? else {
            continue;
        };
        match update(app, event.into()) {
            Effect::Quit => break,
            Effect::Render => {
                draw(app)?;
                frames += 1;
            }
        }
    }

    Ok(frames)
}
