//! Breadth-first search and flood fill (4-directional).

use std::collections::{HashMap, VecDeque};

use super::{ORTHOGONAL, PathfindingGrid, Point, reconstruct};

/// Fewest-steps path from `start` to `goal`, ignoring terrain cost.
pub fn bfs<G>(grid: &G, start: Point, goal: Point) -> Option<Vec<Point>>
where
    G: PathfindingGrid + ?Sized,
{
    if !grid.is_open(start) || !grid.is_open(goal) {
        return None;
    }

    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    came_from.insert(start, start);

    while let Some(point) = queue.pop_front() {
        if point == goal {
            return Some(reconstruct(&came_from, start, goal));
        }
        for (dx, dy) in ORTHOGONAL {
            let next = point.offset(dx, dy);
            if grid.is_open(next) && !came_from.contains_key(&next) {
                came_from.insert(next, point);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Hop distance from `start` to every cell reachable within `max_dist` steps.
///
/// `None` for `max_dist` means unbounded. The start cell maps to `0`; an
/// unwalkable or out-of-bounds start yields an empty map.
pub fn flood_fill<G>(grid: &G, start: Point, max_dist: Option<u32>) -> HashMap<Point, u32>
where
    G: PathfindingGrid + ?Sized,
{
    let mut distances = HashMap::new();
    if !grid.is_open(start) {
        return distances;
    }

    let limit = max_dist.unwrap_or(u32::MAX);
    let mut queue = VecDeque::from([start]);
    distances.insert(start, 0);

    while let Some(point) = queue.pop_front() {
        let dist = distances[&point];
        if dist >= limit {
            continue;
        }
        for (dx, dy) in ORTHOGONAL {
            let next = point.offset(dx, dy);
            if grid.is_open(next) && !distances.contains_key(&next) {
                distances.insert(next, dist + 1);
                queue.push_back(next);
            }
        }
    }

    distances
}
