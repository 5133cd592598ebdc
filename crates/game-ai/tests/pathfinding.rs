use game_ai::{AsciiGrid, PathfindingGrid, Point, astar, bfs, flood_fill};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, width: i32, height: i32, wall_chance: f64) -> AsciiGrid {
    let mut grid = AsciiGrid::open(width, height);
    for y in 0..height {
        for x in 0..width {
            if rng.gen_bool(wall_chance) {
                grid.set_wall(Point::new(x, y));
            }
        }
    }
    grid
}

fn assert_connected<G: PathfindingGrid>(grid: &G, path: &[Point], diagonal: bool) {
    for step in path.windows(2) {
        let (dx, dy) = ((step[1].x - step[0].x).abs(), (step[1].y - step[0].y).abs());
        let limit = if diagonal { 1 } else { 0 };
        assert!(dx <= 1 && dy <= 1 && dx + dy >= 1 && dx.min(dy) <= limit);
        assert!(grid.is_open(step[1]));
    }
}

#[test]
fn astar_matches_bfs_length_without_diagonals() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut compared = 0;

    for _ in 0..60 {
        let grid = random_grid(&mut rng, 12, 9, 0.3);
        let start = Point::new(rng.gen_range(0..12), rng.gen_range(0..9));
        let goal = Point::new(rng.gen_range(0..12), rng.gen_range(0..9));

        match (astar(&grid, start, goal, false), bfs(&grid, start, goal)) {
            (Some(a), Some(b)) => {
                assert_eq!(a.len(), b.len(), "{start:?} -> {goal:?}");
                assert_eq!(a.first(), Some(&start));
                assert_eq!(a.last(), Some(&goal));
                assert_connected(&grid, &a, false);
                compared += 1;
            }
            (None, None) => {}
            (a, b) => panic!("astar {a:?} disagrees with bfs {b:?}"),
        }
    }
    assert!(compared > 10);
}

#[test]
fn searches_fail_only_when_flood_fill_says_unreachable() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let grid = random_grid(&mut rng, 8, 8, 0.35);
        let start = Point::new(0, 0);
        let reachable = flood_fill(&grid, start, None);

        for y in 0..8 {
            for x in 0..8 {
                let goal = Point::new(x, y);
                let expected = reachable.contains_key(&goal);
                assert_eq!(astar(&grid, start, goal, false).is_some(), expected);
                assert_eq!(bfs(&grid, start, goal).is_some(), expected);
            }
        }
    }
}

#[test]
fn walled_off_corner_is_unreachable() {
    let grid = AsciiGrid::parse(
        "
        S#..
        .#..
        .#..
        .#.G
        ",
    )
    .unwrap();
    let (start, goal) = (Point::new(0, 0), Point::new(3, 3));
    assert_eq!(grid.start(), Some(start));
    assert_eq!(grid.goal(), Some(goal));

    assert_eq!(astar(&grid, start, goal, false), None);
    assert_eq!(astar(&grid, start, goal, true), None);
    assert_eq!(bfs(&grid, start, goal), None);
}

#[test]
fn enclosed_start_in_five_by_five() {
    let grid = AsciiGrid::parse(
        "
        .#...
        #....
        .....
        .....
        ....G
        ",
    )
    .unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(4, 4);
    assert_eq!(flood_fill(&grid, start, None).len(), 1);
    assert_eq!(bfs(&grid, start, goal), None);
    assert_eq!(astar(&grid, start, goal, false), None);
    // Diagonal steps only check the destination cell.
    assert!(astar(&grid, start, goal, true).is_some());
}

#[test]
fn flood_fill_radius_two_on_open_grid() {
    let grid = AsciiGrid::open(3, 3);
    let distances = flood_fill(&grid, Point::new(0, 0), Some(2));

    let mut cells: Vec<(Point, u32)> = distances.into_iter().collect();
    cells.sort();
    assert_eq!(
        cells,
        vec![
            (Point::new(0, 0), 0),
            (Point::new(0, 1), 1),
            (Point::new(0, 2), 2),
            (Point::new(1, 0), 1),
            (Point::new(1, 1), 2),
            (Point::new(2, 0), 2),
        ]
    );
}

#[test]
fn diagonal_paths_are_connected() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..30 {
        let grid = random_grid(&mut rng, 10, 10, 0.25);
        let start = Point::new(0, 0);
        let goal = Point::new(9, 9);
        if let Some(path) = astar(&grid, start, goal, true) {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
            assert_connected(&grid, &path, true);
        }
    }
}

#[test]
fn terrain_cost_steers_around_mud() {
    let grid = AsciiGrid::parse(
        "
        S9G
        ...
        ",
    )
    .unwrap();
    let path = astar(&grid, Point::new(0, 0), Point::new(2, 0), false).unwrap();
    assert_eq!(path.len(), 5);
    assert!(!path.contains(&Point::new(1, 0)));
}
