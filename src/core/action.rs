//! # Actions
//!
//! Everything that can happen in pegcross becomes an `Action`.
//! User presses `k`? That's `Action::Move(Direction::Up)`.
//! Terminal resized? That's `Action::Resize(viewport)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and tells the caller what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, trace};

use crate::core::board::Direction;
use crate::core::state::{App, RunState, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Resize(Viewport),
    Move(Direction),
}

/// What the event loop should do once `update()` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Redraw and wait for the next event.
    Render,
    /// Stop the loop without drawing again.
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => {
            info!("Quit requested");
            app.run_state = RunState::Terminated;
            Effect::Quit
        }
        Action::Resize(viewport) => {
            debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
            app.viewport = Some(viewport);
            Effect::Render
        }
        Action::Move(direction) => {
            let from = app.board.active();
            if app.board.try_move(direction) {
                debug!("Moved {:?}: {} -> {}", direction, from, app.board.active());
            } else {
                trace!("Move {:?} from {} rejected", direction, from);
            }
            Effect::Render
        }
    }
}
