//! # CellView Component
//!
//! One board cell drawn as a box with an 8x3 interior. The border alone
//! tells the states apart:
//!
//! ```text
//!  Spacer        Vacant        Active
//!               ┌────────┐    ╭────────╮
//!               │        │    │        │   (active border is colored)
//!               │        │    │        │
//!               │        │    │        │
//!               └────────┘    ╰────────╯
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::core::board::Cell;
use crate::core::config::Theme;

pub const CELL_INNER_WIDTH: u16 = 8;
pub const CELL_INNER_HEIGHT: u16 = 3;
/// Interior plus one border column on each side.
pub const CELL_WIDTH: u16 = CELL_INNER_WIDTH + 2;
pub const CELL_HEIGHT: u16 = CELL_INNER_HEIGHT + 2;

pub struct CellView<'a> {
    pub cell: Cell,
    pub theme: &'a Theme,
}

impl<'a> CellView<'a> {
    pub fn new(cell: Cell, theme: &'a Theme) -> Self {
        Self { cell, theme }
    }

    /// The block for this cell, or `None` for a spacer (nothing is drawn, the
    /// area stays blank).
    fn block(&self) -> Option<Block<'static>> {
        match self.cell {
            Cell::Spacer => None,
            Cell::Vacant => Some(Block::bordered().border_type(BorderType::Plain)),
            Cell::Active => Some(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Indexed(self.theme.active_color))),
            ),
        }
    }
}

impl Widget for CellView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(block) = self.block() {
            block.render(area, buf);
        }
    }
}
