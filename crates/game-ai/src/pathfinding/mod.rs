//! Grid pathfinding.
//!
//! All searches read a [`PathfindingGrid`] and never mutate or retain it:
//!
//! - [`astar`]: weighted shortest path, optionally with diagonal steps
//! - [`bfs`]: unweighted 4-directional shortest path
//! - [`flood_fill`]: hop distance to every reachable cell
//!
//! Paths are returned start to goal inclusive. `None` means the goal cannot
//! be reached; cells outside the grid are silently skipped.

mod astar;
mod bfs;
mod grid;

pub use astar::astar;
pub use bfs::{bfs, flood_fill};
pub use grid::AsciiGrid;

/// Integer grid coordinate. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// `|dx| + |dy|`.
    pub const fn manhattan(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Walkability grid read by the pathfinding functions.
pub trait PathfindingGrid {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Whether an agent may stand on `(x, y)`. Only called for in-bounds cells.
    fn is_walkable(&self, x: i32, y: i32) -> bool;

    /// Terrain multiplier for entering `(x, y)`, at least `1.0`.
    fn cost(&self, _x: i32, _y: i32) -> f64 {
        1.0
    }

    fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x < self.width() && point.y < self.height()
    }

    /// In bounds and walkable.
    fn is_open(&self, point: Point) -> bool {
        self.in_bounds(point) && self.is_walkable(point.x, point.y)
    }
}

pub(crate) const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
pub(crate) const DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// Walks a predecessor map back from `goal` and returns the path in order.
pub(crate) fn reconstruct(
    came_from: &std::collections::HashMap<Point, Point>,
    start: Point,
    goal: Point,
) -> Vec<Point> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(Point::new(0, 0).manhattan(Point::new(3, -4)), 7);
        assert_eq!(Point::new(2, 2).offset(-1, 1), Point::new(1, 3));
    }

    #[test]
    fn bounds_are_filtered() {
        let grid = AsciiGrid::open(3, 2);
        assert!(grid.is_open(Point::new(2, 1)));
        assert!(!grid.is_open(Point::new(3, 1)));
        assert!(!grid.is_open(Point::new(-1, 0)));
    }
}
