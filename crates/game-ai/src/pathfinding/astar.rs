//! A* search.
//!
//! The heuristic is Manhattan distance. It is admissible for 4-directional
//! movement only; with diagonals enabled it can overestimate, so diagonal
//! paths are not guaranteed to be the cheapest. The search still terminates
//! and still finds a path whenever one exists.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::{DIAGONAL, ORTHOGONAL, PathfindingGrid, Point, reconstruct};

const ORTHOGONAL_STEP: f64 = 1.0;
const DIAGONAL_STEP: f64 = 1.414;

/// Frontier entry ordered so the heap pops the lowest `f` first, then the
/// earliest pushed among equals.
#[derive(Debug)]
struct Open {
    f: f64,
    g: f64,
    seq: u64,
    point: Point,
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Open {}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cheapest path from `start` to `goal`, or `None` if unreachable.
///
/// Entering a cell costs `1` orthogonally or `1.414` diagonally, multiplied
/// by the destination's [`PathfindingGrid::cost`]. Diagonal steps only
/// require the destination to be walkable.
pub fn astar<G>(grid: &G, start: Point, goal: Point, allow_diagonal: bool) -> Option<Vec<Point>>
where
    G: PathfindingGrid + ?Sized,
{
    if !grid.is_open(start) || !grid.is_open(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut open = BinaryHeap::new();
    let mut g_score: HashMap<Point, f64> = HashMap::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut closed: HashSet<Point> = HashSet::new();
    let mut seq = 0;

    g_score.insert(start, 0.0);
    open.push(Open {
        f: f64::from(start.manhattan(goal)),
        g: 0.0,
        seq,
        point: start,
    });

    while let Some(Open { g, point, .. }) = open.pop() {
        if point == goal {
            tracing::debug!(expanded = closed.len(), cost = g, "astar reached goal");
            return Some(reconstruct(&came_from, start, goal));
        }
        if !closed.insert(point) {
            // Stale entry superseded by a cheaper push
            continue;
        }

        let diagonal: &[(i32, i32)] = if allow_diagonal { &DIAGONAL } else { &[] };
        let steps = ORTHOGONAL
            .iter()
            .map(|&d| (d, ORTHOGONAL_STEP))
            .chain(diagonal.iter().map(|&d| (d, DIAGONAL_STEP)));

        for ((dx, dy), step) in steps {
            let next = point.offset(dx, dy);
            if !grid.is_open(next) || closed.contains(&next) {
                continue;
            }

            let tentative = g + step * grid.cost(next.x, next.y);
            if tentative < g_score.get(&next).copied().unwrap_or(f64::INFINITY) {
                g_score.insert(next, tentative);
                came_from.insert(next, point);
                seq += 1;
                open.push(Open {
                    f: tentative + f64::from(next.manhattan(goal)),
                    g: tentative,
                    seq,
                    point: next,
                });
            }
        }
    }

    tracing::debug!(expanded = closed.len(), "astar exhausted frontier");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::AsciiGrid;

    fn cost(grid: &AsciiGrid, path: &[Point]) -> f64 {
        path.windows(2)
            .map(|w| {
                let step = if w[0].manhattan(w[1]) == 2 { DIAGONAL_STEP } else { ORTHOGONAL_STEP };
                step * grid.cost(w[1].x, w[1].y)
            })
            .sum()
    }

    #[test]
    fn straight_line_on_open_grid() {
        let grid = AsciiGrid::open(5, 1);
        let path = astar(&grid, Point::new(0, 0), Point::new(4, 0), false).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(4, 0)));
    }

    #[test]
    fn routes_around_walls() {
        let grid = AsciiGrid::parse(
            "
            S#...
            .#.#.
            ...#G
            ",
        )
        .unwrap();
        let path = astar(&grid, grid.start().unwrap(), grid.goal().unwrap(), false).unwrap();

        for step in path.windows(2) {
            assert_eq!(step[0].manhattan(step[1]), 1);
        }
        assert!(path.iter().all(|p| grid.is_open(*p)));
        assert_eq!(path.len(), 11);
    }

    #[test]
    fn avoids_expensive_terrain() {
        let grid = AsciiGrid::parse(
            "
            S9G
            ...
            ",
        )
        .unwrap();
        let path = astar(&grid, grid.start().unwrap(), grid.goal().unwrap(), false).unwrap();

        assert_eq!(path.len(), 5);
        assert_eq!(cost(&grid, &path), 4.0);
    }

    #[test]
    fn diagonal_moves_shorten_path() {
        let grid = AsciiGrid::open(4, 4);
        let path = astar(&grid, Point::new(0, 0), Point::new(3, 3), true).unwrap();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn start_equals_goal() {
        let grid = AsciiGrid::open(2, 2);
        assert_eq!(
            astar(&grid, Point::new(1, 1), Point::new(1, 1), false),
            Some(vec![Point::new(1, 1)])
        );
    }

    #[test]
    fn blocked_or_out_of_bounds_goal() {
        let grid = AsciiGrid::parse("..#").unwrap();
        assert_eq!(astar(&grid, Point::new(0, 0), Point::new(2, 0), false), None);
        assert_eq!(astar(&grid, Point::new(0, 0), Point::new(7, 0), true), None);
    }
}
