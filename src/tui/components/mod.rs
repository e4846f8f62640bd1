//! # TUI Components
//!
//! Stateless, props-based components for the board:
//! - `CellView`: one 10x5 box whose border encodes the cell state
//! - `BoardView`: the 10x6 grid of `CellView`s inside a decorative frame
//!
//! Components receive data as props (struct fields), never by reaching into
//! global state, so each can be rendered into a `TestBackend` on its own.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── cell.rs        (single cell box)
//! └── board_view.rs  (framed grid of cells)
//! ```

pub mod board_view;
pub mod cell;

pub use board_view::BoardView;
pub use cell::CellView;
