//! # BoardView Component
//!
//! Lays the board's cells out as a grid of `CellView` boxes (rows joined
//! horizontally, rows stacked vertically) and wraps the grid in a frame.
//!
//! The board always has the full [`BOARD_WIDTH`] x [`BOARD_HEIGHT`] footprint.
//! It is drawn into an off-screen buffer of that size, and the part that falls
//! inside the given area, centered, is copied into the frame. A terminal
//! smaller than the board therefore shows a window onto the middle of the
//! board, with cut-off edges rather than a squeezed grid.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Widget};

use crate::core::board::{Board, COLS, ROWS};
use crate::core::config::{FrameStyle, Theme};
use crate::tui::component::Component;
use crate::tui::components::cell::{CELL_HEIGHT, CELL_WIDTH, CellView};

pub const BOARD_WIDTH: u16 = COLS as u16 * CELL_WIDTH + 2;
pub const BOARD_HEIGHT: u16 = ROWS as u16 * CELL_HEIGHT + 2;

pub struct BoardView<'a> {
    pub board: &'a Board,
    pub theme: &'a Theme,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, theme: &'a Theme) -> Self {
        Self { board, theme }
    }
}

fn frame_border(style: FrameStyle) -> BorderType {
    match style {
        FrameStyle::Double => BorderType::Double,
        FrameStyle::Rounded => BorderType::Rounded,
        FrameStyle::Thick => BorderType::Thick,
        FrameStyle::Plain => BorderType::Plain,
    }
}

/// Where the board starts along one axis, relative to the area, when
/// centered. Negative when the board is larger than the area.
fn centered_offset(area_len: u16, board_len: u16) -> i32 {
    (i32::from(area_len) - i32::from(board_len)) / 2
}

/// Board coordinate shown at `screen` (area-relative) for a given offset.
fn board_coord(screen: u16, offset: i32, board_len: u16) -> Option<u16> {
    u16::try_from(i32::from(screen) - offset)
        .ok()
        .filter(|&c| c < board_len)
}

impl BoardView<'_> {
    /// Draw the whole board into `buf`, which must be board-sized.
    fn draw_board(&self, buf: &mut Buffer) {
        let area = buf.area;
        let block = Block::bordered().border_type(frame_border(self.theme.frame));
        let inner = block.inner(area);
        block.render(area, buf);

        for (row, cells) in self.board.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let cell_area = Rect::new(
                    inner.x + col as u16 * CELL_WIDTH,
                    inner.y + row as u16 * CELL_HEIGHT,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                );
                CellView::new(cell, self.theme).render(cell_area, buf);
            }
        }
    }
}

impl Component for BoardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut board = Buffer::empty(Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT));
        self.draw_board(&mut board);

        let dx = centered_offset(area.width, BOARD_WIDTH);
        let dy = centered_offset(area.height, BOARD_HEIGHT);
        let screen = frame.buffer_mut();

        for y in 0..area.height {
            let Some(by) = board_coord(y, dy, BOARD_HEIGHT) else {
                continue;
            };
            for x in 0..area.width {
                let Some(bx) = board_coord(x, dx, BOARD_WIDTH) else {
                    continue;
                };
                screen[(area.x + x, area.y + y)] = board[(bx, by)].clone();
            }
        }
    }
}
