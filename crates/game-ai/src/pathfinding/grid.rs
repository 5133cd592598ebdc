//! Text-backed grid used by tests and tools.

use super::{PathfindingGrid, Point};
use crate::error::{AiError, AiResult};

/// Rectangular grid with per-cell walls and terrain costs.
///
/// # Text Format
///
/// One row per line, one glyph per cell:
///
/// - `#`: wall
/// - `.`: floor with cost 1
/// - `1`-`9`: floor with that terrain cost
/// - `S` / `G`: floor marking the start / goal
///
/// Blank lines are ignored; every other line must have the same width.
#[derive(Clone, Debug, PartialEq)]
pub struct AsciiGrid {
    width: i32,
    height: i32,
    cells: Vec<Option<f64>>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl AsciiGrid {
    /// Grid of the given size with no walls.
    pub fn open(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Some(1.0); (width * height) as usize],
            start: None,
            goal: None,
        }
    }

    /// Parses the text format described on the type.
    pub fn parse(text: &str) -> AiResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(AiError::InvalidGrid("grid has no rows".to_string()));
        };
        let width = first.chars().count();

        let mut grid = Self::open(width as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(AiError::InvalidGrid(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }

            for (x, glyph) in row.chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                let cell = match glyph {
                    '#' => None,
                    '.' => Some(1.0),
                    'S' => {
                        grid.start = Some(point);
                        Some(1.0)
                    }
                    'G' => {
                        grid.goal = Some(point);
                        Some(1.0)
                    }
                    digit @ '1'..='9' => digit.to_digit(10).map(f64::from),
                    other => {
                        return Err(AiError::InvalidGrid(format!(
                            "unknown glyph `{other}` at ({x}, {y})"
                        )));
                    }
                };
                let index = grid.index(point);
                grid.cells[index] = cell;
            }
        }

        Ok(grid)
    }

    /// Start cell marked with `S`, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Goal cell marked with `G`, if any.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Turns an in-bounds cell into a wall.
    pub fn set_wall(&mut self, point: Point) {
        if self.in_bounds(point) {
            let index = self.index(point);
            self.cells[index] = None;
        }
    }

    /// Sets the terrain cost of an in-bounds cell, making it walkable.
    pub fn set_cost(&mut self, point: Point, cost: f64) {
        if self.in_bounds(point) {
            let index = self.index(point);
            self.cells[index] = Some(cost.max(1.0));
        }
    }

    /// Renders the grid with `path` drawn as `*`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let point = Point::new(x, y);
                let glyph = if Some(point) == self.start {
                    'S'
                } else if Some(point) == self.goal {
                    'G'
                } else if path.contains(&point) {
                    '*'
                } else {
                    match self.cells[self.index(point)] {
                        None => '#',
                        Some(cost) if cost > 1.0 => {
                            char::from_digit(cost.min(9.0) as u32, 10).unwrap_or('.')
                        }
                        Some(_) => '.',
                    }
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, point: Point) -> usize {
        (point.y * self.width + point.x) as usize
    }
}

impl PathfindingGrid for AsciiGrid {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(Point::new(x, y))].is_some()
    }

    fn cost(&self, x: i32, y: i32) -> f64 {
        self.cells[self.index(Point::new(x, y))].unwrap_or(1.0)
    }
}
