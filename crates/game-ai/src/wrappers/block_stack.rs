//! Placement scoring for falling-block (Tetris-like) games.
//!
//! A placement is judged by four board features measured after the piece
//! lands and completed lines are cleared:
//!
//! | Feature          | Meaning                                        |
//! |------------------|------------------------------------------------|
//! | `holes`          | empty cells with a filled cell somewhere above |
//! | `max_height`     | tallest column                                 |
//! | `bumpiness`      | sum of height deltas between adjacent columns  |
//! | `complete_lines` | lines the placement cleared                    |
//!
//! The first three are penalties and the last is a reward. Their weights come
//! from a per-difficulty table: lower tiers care less about holes and height,
//! so they stack messily without ever playing randomly.

use std::fmt;

use tracing::debug;

use crate::config::Difficulty;
use crate::error::{AiError, AiResult};

/// Cell coordinates of a piece in one rotation, as `(column, row)` with rows
/// growing downward. Offsets are normalized so the top-left is `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<(usize, usize)>,
}

impl Shape {
    pub fn new(cells: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let cells: Vec<_> = cells.into_iter().collect();
        let min_col = cells.iter().map(|&(c, _)| c).min().unwrap_or(0);
        let min_row = cells.iter().map(|&(_, r)| r).min().unwrap_or(0);
        Self {
            cells: cells
                .into_iter()
                .map(|(c, r)| (c - min_col, r - min_row))
                .collect(),
        }
    }

    /// Parses a shape drawn with `#` cells, one string per row.
    pub fn from_rows(rows: &[&str]) -> Self {
        Self::new(rows.iter().enumerate().flat_map(|(r, row)| {
            row.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == '#')
                .map(move |(c, _)| (c, r))
        }))
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(c, _)| c + 1).max().unwrap_or(0)
    }
}

/// Playfield, row 0 at the top.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Parses a board drawn with `#` (filled) and `.` (empty), top row first.
    pub fn from_rows(rows: &[&str]) -> AiResult<Self> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut board = Self::new(width, rows.len());

        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(AiError::InvalidGrid(format!(
                    "row {r} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    '#' => board.set(c, r, true),
                    '.' => {}
                    other => {
                        return Err(AiError::InvalidGrid(format!(
                            "unexpected `{other}` at ({c}, {r})"
                        )));
                    }
                }
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        self.cells[row * self.width + col]
    }

    pub fn set(&mut self, col: usize, row: usize, filled: bool) {
        self.cells[row * self.width + col] = filled;
    }

    /// Height of every column, counted from the floor.
    pub fn column_heights(&self) -> Vec<usize> {
        (0..self.width)
            .map(|c| {
                (0..self.height)
                    .find(|&r| self.is_filled(c, r))
                    .map_or(0, |top| self.height - top)
            })
            .collect()
    }

    fn row_complete(&self, row: usize) -> bool {
        (0..self.width).all(|c| self.is_filled(c, row))
    }

    /// Removes completed rows, shifting everything above down. Returns the
    /// number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        let kept: Vec<usize> = (0..self.height).filter(|&r| !self.row_complete(r)).collect();
        let cleared = self.height - kept.len();
        if cleared == 0 {
            return 0;
        }

        let mut cells = vec![false; self.width * self.height];
        for (i, &r) in kept.iter().enumerate() {
            let dest = cleared + i;
            cells[dest * self.width..(dest + 1) * self.width]
                .copy_from_slice(&self.cells[r * self.width..(r + 1) * self.width]);
        }
        self.cells = cells;
        cleared
    }

    fn fits(&self, shape: &Shape, col: usize, row: usize) -> bool {
        shape.cells().iter().all(|&(dc, dr)| {
            let (c, r) = (col + dc, row + dr);
            c < self.width && r < self.height && !self.is_filled(c, r)
        })
    }

    /// Row at which `shape` comes to rest when hard-dropped in `col`, or
    /// `None` if it does not fit at the top.
    pub fn drop_row(&self, shape: &Shape, col: usize) -> Option<usize> {
        if !self.fits(shape, col, 0) {
            return None;
        }
        let mut row = 0;
        while self.fits(shape, col, row + 1) {
            row += 1;
        }
        Some(row)
    }

    /// Board after dropping `shape` in `col` and clearing lines, plus the
    /// number of lines cleared.
    pub fn with_drop(&self, shape: &Shape, col: usize) -> Option<(Board, usize)> {
        let row = self.drop_row(shape, col)?;
        let mut next = self.clone();
        for &(dc, dr) in shape.cells() {
            next.set(col + dc, row + dr, true);
        }
        let cleared = next.clear_lines();
        Some((next, cleared))
    }

    /// Measures the board as it stands; `complete_lines` counts full rows.
    pub fn features(&self) -> BoardFeatures {
        let heights = self.column_heights();
        let holes = (0..self.width)
            .map(|c| {
                let top = self.height - heights[c];
                (top..self.height).filter(|&r| !self.is_filled(c, r)).count()
            })
            .sum();
        let bumpiness = heights.windows(2).map(|w| w[0].abs_diff(w[1])).sum();

        BoardFeatures {
            holes,
            max_height: heights.iter().copied().max().unwrap_or(0),
            bumpiness,
            complete_lines: (0..self.height).filter(|&r| self.row_complete(r)).count(),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            for c in 0..self.width {
                f.write_str(if self.is_filled(c, r) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Board features used by the placement score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardFeatures {
    pub holes: usize,
    pub max_height: usize,
    pub bumpiness: usize,
    pub complete_lines: usize,
}

/// Per-feature weights. Penalties are negative, the line reward positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureWeights {
    pub holes: f64,
    pub max_height: f64,
    pub bumpiness: f64,
    pub complete_lines: f64,
}

impl FeatureWeights {
    /// Weight table row for `difficulty`.
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        WEIGHTS[difficulty.index()]
    }

    pub fn score(&self, features: &BoardFeatures) -> f64 {
        self.holes * features.holes as f64
            + self.max_height * features.max_height as f64
            + self.bumpiness * features.bumpiness as f64
            + self.complete_lines * features.complete_lines as f64
    }
}

const WEIGHTS: [FeatureWeights; 5] = [
    // easy
    FeatureWeights {
        holes: -0.2,
        max_height: -0.1,
        bumpiness: -0.05,
        complete_lines: 0.3,
    },
    // medium
    FeatureWeights {
        holes: -0.5,
        max_height: -0.3,
        bumpiness: -0.1,
        complete_lines: 0.5,
    },
    // hard
    FeatureWeights {
        holes: -0.8,
        max_height: -0.4,
        bumpiness: -0.18,
        complete_lines: 0.76,
    },
    // expert
    FeatureWeights {
        holes: -1.0,
        max_height: -0.5,
        bumpiness: -0.2,
        complete_lines: 0.9,
    },
    // impossible
    FeatureWeights {
        holes: -1.2,
        max_height: -0.5,
        bumpiness: -0.25,
        complete_lines: 1.0,
    },
];

/// A scored hard drop.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Index into the rotation list passed to [`best_placement`].
    pub rotation: usize,
    /// Column of the shape's left edge.
    pub column: usize,
    pub score: f64,
    pub features: BoardFeatures,
}

/// Scores dropping `shape` in `col` for `difficulty`.
///
/// Holes, height and bumpiness are measured after cleared lines are
/// removed. Returns `None` when the shape does not fit in that column.
pub fn placement_score(
    board: &Board,
    shape: &Shape,
    col: usize,
    difficulty: Difficulty,
) -> Option<(f64, BoardFeatures)> {
    let (after, cleared) = board.with_drop(shape, col)?;
    let features = BoardFeatures {
        complete_lines: cleared,
        ..after.features()
    };
    Some((FeatureWeights::for_difficulty(difficulty).score(&features), features))
}

/// Tries every rotation in every column and returns the best hard drop.
///
/// Ties keep the first placement found (lowest rotation, then leftmost
/// column). Returns `None` when nothing fits.
pub fn best_placement(
    board: &Board,
    rotations: &[Shape],
    difficulty: Difficulty,
) -> Option<Placement> {
    let mut best: Option<Placement> = None;
    let mut candidates = 0usize;

    for (rotation, shape) in rotations.iter().enumerate() {
        let span = shape.width();
        if span == 0 || span > board.width() {
            continue;
        }
        for column in 0..=board.width() - span {
            let Some((score, features)) = placement_score(board, shape, column, difficulty)
            else {
                continue;
            };
            candidates += 1;
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(Placement {
                    rotation,
                    column,
                    score,
                    features,
                });
            }
        }
    }

    debug!(
        %difficulty,
        candidates,
        best_score = best.as_ref().map(|p| p.score),
        "block placement search"
    );
    best
}
