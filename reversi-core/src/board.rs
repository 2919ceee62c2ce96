//! Board types and capture rules

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// CORE TYPES
// ============================================================================

/// The eight ray directions as (dcol, drow) offsets
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Disc color, one per side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    Black,
    White,
}

impl Disc {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
        }
    }

    /// Cell occupied by this disc
    pub fn to_cell(self) -> Cell {
        match self {
            Disc::Black => Cell::Black,
            Disc::White => Cell::White,
        }
    }
}

/// Contents of a single board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

/// A move: the column and row where a disc is placed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub col: usize,
    pub row: usize,
}

impl Move {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// ============================================================================
// BOARD CONTRACT
// ============================================================================

/// The board surface move-selection code runs against.
///
/// A board reports its dimensions and cells, answers legality queries,
/// applies moves in place and counts discs. The `Clone` supertrait must
/// produce an independent deep copy sharing no mutable state with the
/// original; search code mutates clones it owns, never a caller's board.
pub trait Board: Clone {
    fn cols(&self) -> usize;
    fn rows(&self) -> usize;
    fn cell(&self, col: usize, row: usize) -> Cell;

    /// Whether placing `disc` at (col, row) is legal in this position
    fn is_legal_move(&self, col: usize, row: usize, disc: Disc) -> bool;

    /// Place `disc` at `mv` and flip every captured disc.
    ///
    /// The move must be legal for `disc`; callers check with
    /// [`is_legal_move`](Board::is_legal_move) first. An illegal call is a
    /// contract violation, not a recoverable error.
    fn apply_move(&mut self, mv: Move, disc: Disc);

    /// Number of `disc` discs on the board
    fn score(&self, disc: Disc) -> u32;
}

// ============================================================================
// GRID BOARD
// ============================================================================

/// Board construction error
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions {0}x{1} must be even and at least 4x4")]
    InvalidDimensions(usize, usize),
    #[error("row {0} has {1} cells, expected {2}")]
    RaggedRow(usize, usize, usize),
    #[error("unknown cell character {0:?}")]
    UnknownCell(char),
    #[error("position text has no rows")]
    Empty,
}

/// A rectangular board with the standard bracket-and-flip capture rules
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBoard {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl GridBoard {
    /// Create a board with the standard four-disc center setup.
    ///
    /// Both dimensions must be even (the setup needs a true center) and at
    /// least 4.
    pub fn new(cols: usize, rows: usize) -> Result<Self, BoardError> {
        if cols < 4 || rows < 4 || cols % 2 != 0 || rows % 2 != 0 {
            return Err(BoardError::InvalidDimensions(cols, rows));
        }
        let mut board = Self {
            cols,
            rows,
            cells: vec![Cell::Empty; cols * rows],
        };
        let (c, r) = (cols / 2 - 1, rows / 2 - 1);
        board.set(c, r, Cell::White);
        board.set(c + 1, r, Cell::Black);
        board.set(c, r + 1, Cell::Black);
        board.set(c + 1, r + 1, Cell::White);
        Ok(board)
    }

    /// Build a position from rows of `.`/`B`/`W` characters.
    ///
    /// One line per row, columns left to right; surrounding blank lines and
    /// per-line whitespace are ignored. Any rectangular shape is accepted,
    /// so mid-game fixtures need not satisfy [`new`](GridBoard::new)'s
    /// dimension rules.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let rows = lines.len();
        if rows == 0 {
            return Err(BoardError::Empty);
        }
        let cols = lines[0].chars().count();
        let mut cells = Vec::with_capacity(cols * rows);
        for (row, line) in lines.iter().enumerate() {
            let count = line.chars().count();
            if count != cols {
                return Err(BoardError::RaggedRow(row, count, cols));
            }
            for ch in line.chars() {
                cells.push(match ch {
                    '.' => Cell::Empty,
                    'B' => Cell::Black,
                    'W' => Cell::White,
                    other => return Err(BoardError::UnknownCell(other)),
                });
            }
        }
        Ok(Self { cols, rows, cells })
    }

    fn idx(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        let idx = self.idx(col, row);
        self.cells[idx] = cell;
    }

    fn in_bounds(&self, col: isize, row: isize) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows
    }

    /// Whether the ray from (col, row) in direction (dcol, drow) starts with
    /// one or more opponent discs and ends on a `disc` disc
    fn brackets(&self, col: usize, row: usize, disc: Disc, dcol: isize, drow: isize) -> bool {
        let own = disc.to_cell();
        let theirs = disc.opponent().to_cell();
        let mut c = col as isize + dcol;
        let mut r = row as isize + drow;
        let mut saw_opponent = false;
        while self.in_bounds(c, r) {
            let cell = self.cells[self.idx(c as usize, r as usize)];
            if cell == theirs {
                saw_opponent = true;
                c += dcol;
                r += drow;
            } else if cell == own {
                return saw_opponent;
            } else {
                return false;
            }
        }
        false
    }

    /// Flip the opponent run from (col, row) toward (dcol, drow), if bracketed
    fn flip_ray(&mut self, col: usize, row: usize, disc: Disc, dcol: isize, drow: isize) {
        if !self.brackets(col, row, disc, dcol, drow) {
            return;
        }
        let theirs = disc.opponent().to_cell();
        let mut c = col as isize + dcol;
        let mut r = row as isize + drow;
        while self.in_bounds(c, r) && self.cells[self.idx(c as usize, r as usize)] == theirs {
            self.set(c as usize, r as usize, disc.to_cell());
            c += dcol;
            r += drow;
        }
    }
}

impl Board for GridBoard {
    fn cols(&self) -> usize {
        self.cols
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[self.idx(col, row)]
    }

    fn is_legal_move(&self, col: usize, row: usize, disc: Disc) -> bool {
        if col >= self.cols || row >= self.rows {
            return false;
        }
        if self.cells[self.idx(col, row)] != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dcol, drow)| self.brackets(col, row, disc, dcol, drow))
    }

    fn apply_move(&mut self, mv: Move, disc: Disc) {
        debug_assert!(self.is_legal_move(mv.col, mv.row, disc));
        self.set(mv.col, mv.row, disc.to_cell());
        for (dcol, drow) in DIRECTIONS {
            self.flip_ray(mv.col, mv.row, disc, dcol, drow);
        }
    }

    fn score(&self, disc: Disc) -> u32 {
        let own = disc.to_cell();
        self.cells.iter().filter(|&&cell| cell == own).count() as u32
    }
}

impl fmt::Display for GridBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cell(col, row).as_char())?;
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
