//! The 3×3 sliding-tile puzzle world.
//!
//! State is a [`Board`]: nine tiles with `0` as the blank square. The action
//! is the numbered tile that swaps places with the blank. Goal: tiles in
//! ascending order with the blank in the top-left corner.

use std::fmt;

use wavefront_search::contract::SearchProblem;

/// Board side length.
const SIDE: usize = 3;

/// The solved configuration: rows `012`, `345`, `678`.
const GOAL: Board = Board {
    tiles: [0, 1, 2, 3, 4, 5, 6, 7, 8],
};

/// One configuration of the puzzle. Tile `0` is the blank.
///
/// Construction via [`Board::from_rows`] guarantees every tile `0..=8`
/// appears exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; 9],
}

/// Typed failure for board parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// A row does not have exactly three cells.
    RowLength { row: usize, len: usize },
    /// A cell is not a digit in `0..=8`.
    BadTile { tile: char },
    /// A tile value appears more than once.
    DuplicateTile { tile: u8 },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowLength { row, len } => {
                write!(f, "row {row} has {len} cells, expected {SIDE}")
            }
            Self::BadTile { tile } => write!(f, "cell {tile:?} is not a digit in 0..=8"),
            Self::DuplicateTile { tile } => write!(f, "tile {tile} appears more than once"),
        }
    }
}

impl std::error::Error for BoardParseError {}

impl Board {
    /// Parse three rows of digits, e.g. `["312", "065", "748"]`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardParseError`] if any row is not exactly three cells,
    /// a cell is not a digit in `0..=8`, or a tile repeats.
    pub fn from_rows(rows: [&str; 3]) -> Result<Self, BoardParseError> {
        let mut tiles = [0u8; 9];
        let mut seen = [false; 9];
        for (row_number, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != SIDE {
                return Err(BoardParseError::RowLength {
                    row: row_number,
                    len: cells.len(),
                });
            }
            for (column_number, &cell) in cells.iter().enumerate() {
                let tile = cell
                    .to_digit(10)
                    .filter(|&d| d <= 8)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(BoardParseError::BadTile { tile: cell })?;
                if seen[usize::from(tile)] {
                    return Err(BoardParseError::DuplicateTile { tile });
                }
                seen[usize::from(tile)] = true;
                tiles[row_number * SIDE + column_number] = tile;
            }
        }
        // Nine cells, no duplicates, all in 0..=8: the permutation is complete.
        Ok(Self { tiles })
    }

    /// Row and column of `tile`. Construction guarantees every tile is
    /// present, so the fallback is unreachable on valid boards.
    fn position_of(&self, tile: u8) -> (usize, usize) {
        let index = self.tiles.iter().position(|&t| t == tile).unwrap_or(0);
        (index / SIDE, index % SIDE)
    }

    /// The tile at the given row and column.
    fn tile_at(&self, row: usize, column: usize) -> u8 {
        self.tiles[row * SIDE + column]
    }

    /// The board with `tile` and the blank swapped.
    fn swapped_with_blank(&self, tile: u8) -> Self {
        let mut tiles = self.tiles;
        let blank = self.tiles.iter().position(|&t| t == 0).unwrap_or(0);
        let other = self.tiles.iter().position(|&t| t == tile).unwrap_or(blank);
        tiles.swap(blank, other);
        Self { tiles }
    }
}

impl fmt::Display for Board {
    /// Three digit rows separated by newlines, e.g. `"312\n065\n748"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_number, row) in self.tiles.chunks(SIDE).enumerate() {
            if row_number > 0 {
                f.write_str("\n")?;
            }
            for tile in row {
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

/// The action: the numbered tile that swaps places with the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSlide {
    /// The tile that moves into the blank square.
    pub tile: u8,
}

impl fmt::Display for TileSlide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tile)
    }
}

/// The eight-puzzle problem: reach [`EightPuzzle::goal_board`] from a given
/// initial configuration.
#[derive(Debug, Clone)]
pub struct EightPuzzle {
    initial: Board,
}

impl EightPuzzle {
    /// Create the problem for a given initial board.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        Self { initial }
    }

    /// The initial board for this instance.
    #[must_use]
    pub fn initial_board(&self) -> Board {
        self.initial
    }

    /// The solved configuration.
    #[must_use]
    pub fn goal_board() -> Board {
        GOAL
    }
}

impl SearchProblem for EightPuzzle {
    type State = Board;
    type Action = TileSlide;

    fn initial(&self) -> Board {
        self.initial
    }

    fn actions(&self, state: &Board) -> Vec<TileSlide> {
        let (row, column) = state.position_of(0);
        let mut actions = Vec::with_capacity(4);
        // Enumeration order fixes frontier tie-breaking: the tile below the
        // blank first, then above, then right, then left.
        if row + 1 < SIDE {
            actions.push(TileSlide {
                tile: state.tile_at(row + 1, column),
            });
        }
        if row > 0 {
            actions.push(TileSlide {
                tile: state.tile_at(row - 1, column),
            });
        }
        if column + 1 < SIDE {
            actions.push(TileSlide {
                tile: state.tile_at(row, column + 1),
            });
        }
        if column > 0 {
            actions.push(TileSlide {
                tile: state.tile_at(row, column - 1),
            });
        }
        actions
    }

    fn result(&self, state: &Board, action: &TileSlide) -> Board {
        state.swapped_with_blank(action.tile)
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == GOAL
    }
}
