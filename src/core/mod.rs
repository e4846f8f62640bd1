//! # Core Game Logic
//!
//! This module contains pegcross's game rules and settings.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board (grid + piece) │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: The `Board` grid and the move rule
//! - [`state`]: The `App` struct, all game state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings file, env vars and CLI flags collapsed into one struct

pub mod action;
pub mod board;
pub mod config;
pub mod state;
