use std::fmt;
use std::str::FromStr;

use crate::error::AiError;
use crate::search::{GameState, Player};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Score of a decided game before the quick-win bonus.
const WIN_SCORE: f64 = 100.0;

/// 3×3 tic-tac-toe. [`Player::One`] plays `X` and moves first.
///
/// Scores are reported from a fixed perspective player, regardless of the
/// flag [`GameState::evaluate`] receives. Searches should set the perspective
/// to the side they are choosing a move for.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    cells: [Option<Player>; 9],
    to_move: Player,
    perspective: Player,
}

impl TicTacToe {
    /// Empty board, `X` to move and scoring for `X`.
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            to_move: Player::One,
            perspective: Player::One,
        }
    }

    /// Same position, scored for `player`.
    #[must_use]
    pub fn with_perspective(mut self, player: Player) -> Self {
        self.perspective = player;
        self
    }

    pub fn perspective(&self) -> Player {
        self.perspective
    }

    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let owner = self.cells[a]?;
            (self.cells[b] == Some(owner) && self.cells[c] == Some(owner)).then_some(owner)
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Lines still winnable by `player`, weighted by marks already placed.
    fn line_potential(&self, player: Player) -> f64 {
        LINES
            .iter()
            .filter(|line| line.iter().all(|&i| self.cells[i] != Some(player.opponent())))
            .map(|line| line.iter().filter(|&&i| self.cells[i] == Some(player)).count() as f64)
            .sum()
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToe {
    type Move = usize;

    fn possible_moves(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..9).filter(|&i| self.cells[i].is_none()).collect()
    }

    fn make_move(&self, mv: &usize) -> Self {
        let mut next = *self;
        next.cells[*mv] = Some(self.to_move);
        next.to_move = self.to_move.opponent();
        next
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Wins score `100 + empty cells` so quicker wins rank higher; losses
    /// mirror that. Open positions compare line potential, which always
    /// stays well inside `±100`.
    fn evaluate(&self, _maximizing_player: bool) -> f64 {
        let bonus = self.empty_cells() as f64;
        match self.winner() {
            Some(p) if p == self.perspective => WIN_SCORE + bonus,
            Some(_) => -(WIN_SCORE + bonus),
            None => {
                self.line_potential(self.perspective)
                    - self.line_potential(self.perspective.opponent())
            }
        }
    }

    fn current_player(&self) -> Player {
        self.to_move
    }
}

fn glyph(cell: Option<Player>) -> char {
    match cell {
        Some(Player::One) => 'X',
        Some(Player::Two) => 'O',
        None => '.',
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            for &cell in row {
                write!(f, "{}", glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board: String = self.cells.iter().map(|&c| glyph(c)).collect();
        f.debug_struct("TicTacToe")
            .field("board", &board)
            .field("to_move", &self.to_move)
            .field("perspective", &self.perspective)
            .finish()
    }
}

/// Parses nine cells of `X`, `O` or `.`, whitespace ignored. The side to
/// move follows from the mark counts; perspective defaults to the side to
/// move.
impl FromStr for TicTacToe {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if glyphs.len() != 9 {
            return Err(AiError::InvalidGrid(format!(
                "expected 9 cells, found {}",
                glyphs.len()
            )));
        }

        let mut cells = [None; 9];
        for (cell, glyph) in cells.iter_mut().zip(glyphs) {
            *cell = match glyph.to_ascii_uppercase() {
                'X' => Some(Player::One),
                'O' => Some(Player::Two),
                '.' => None,
                other => return Err(AiError::InvalidGrid(format!("unexpected `{other}`"))),
            };
        }

        let xs = cells.iter().filter(|&&c| c == Some(Player::One)).count();
        let os = cells.iter().filter(|&&c| c == Some(Player::Two)).count();
        let to_move = match xs.checked_sub(os) {
            Some(0) => Player::One,
            Some(1) => Player::Two,
            _ => {
                return Err(AiError::InvalidGrid(format!(
                    "{xs} X marks and {os} O marks cannot occur in play"
                )));
            }
        };

        Ok(Self {
            cells,
            to_move,
            perspective: to_move,
        })
    }
}
