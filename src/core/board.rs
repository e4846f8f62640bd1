//! # Board
//!
//! The 10x6 cross-shaped grid and the single active piece on it.
//!
//! ```text
//!   col: 0 1 2 3 4 5
//! row 0: . . . . . .      . = Spacer
//! row 1: . . o o . .      o = Vacant
//! row 2: . o o o . .      @ = Active
//! row 3: . o o o o .
//! row 4: . o o o o .
//! row 5: . o o o o .
//! row 6: . o o o o .
//! row 7: . . o o o .
//! row 8: . . @ o . .
//! row 9: . . . . . .
//! ```
//!
//! Cells are stored flat, row-major (`row * COLS + col`). The board owns the
//! active position so the "exactly one Active cell" invariant can only be
//! broken from inside this module.

use std::fmt;

pub const ROWS: usize = 10;
pub const COLS: usize = 6;

const BOARD_SIZE: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Outside the playable cross.
    Spacer,
    /// Playable, unoccupied.
    Vacant,
    /// The selected piece.
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `direction`, or `None` when it
    /// would leave the grid.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
        };
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Where the active piece sits on a fresh board.
pub const START: Position = Position::new(8, 2);

use Cell::{Active as A, Spacer as S, Vacant as V};

pub const INITIAL_LAYOUT: [[Cell; COLS]; ROWS] = [
    [S, S, S, S, S, S],
    [S, S, V, V, S, S],
    [S, V, V, V, S, S],
    [S, V, V, V, V, S],
    [S, V, V, V, V, S],
    [S, V, V, V, V, S],
    [S, V, V, V, V, S],
    [S, S, V, V, V, S],
    [S, S, A, V, S, S],
    [S, S, S, S, S, S],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    NoActiveCell,
    MultipleActiveCells(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NoActiveCell => write!(f, "layout has no active cell"),
            BoardError::MultipleActiveCells(n) => {
                write!(f, "layout has {n} active cells, expected exactly one")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
    active: Position,
}

impl Board {
    /// The standard cross with the piece at [`START`].
    pub fn new() -> Self {
        let mut cells = [Cell::Spacer; BOARD_SIZE];
        for (row, line) in INITIAL_LAYOUT.iter().enumerate() {
            cells[row * COLS..(row + 1) * COLS].copy_from_slice(line);
        }
        Self {
            cells,
            active: START,
        }
    }

    /// Build a board from an arbitrary layout. Exactly one cell must be Active.
    pub fn from_layout(layout: &[[Cell; COLS]; ROWS]) -> Result<Self, BoardError> {
        let mut cells = [Cell::Spacer; BOARD_SIZE];
        let mut active = None;
        let mut active_count = 0;

        for (row, line) in layout.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell == Cell::Active {
                    active_count += 1;
                    active = Some(Position::new(row, col));
                }
                cells[row * COLS + col] = cell;
            }
        }

        match (active, active_count) {
            (Some(active), 1) => Ok(Self { cells, active }),
            (None, _) => Err(BoardError::NoActiveCell),
            (Some(_), n) => Err(BoardError::MultipleActiveCells(n)),
        }
    }

    #[inline]
    fn index(pos: Position) -> Option<usize> {
        (pos.row < ROWS && pos.col < COLS).then_some(pos.row * COLS + pos.col)
    }

    /// Cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    pub fn active(&self) -> Position {
        self.active
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Active).count()
    }

    /// Iterate rows top to bottom, each as a slice of `COLS` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(COLS)
    }

    /// Move the active piece one step. Only a Vacant target accepts the
    /// piece; anything else (Spacer, off the grid) leaves the board as is.
    /// Returns whether the piece moved.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        let Some(target) = self.active.step(direction) else {
            return false;
        };
        let (Some(from), Some(to)) = (Self::index(self.active), Self::index(target)) else {
            return false;
        };
        if self.cells[to] != Cell::Vacant {
            return false;
        }

        self.cells[from] = Cell::Vacant;
        self.cells[to] = Cell::Active;
        self.active = target;
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
