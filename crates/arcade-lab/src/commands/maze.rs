//! Solve an ASCII maze and draw the path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use game_ai::{AsciiGrid, PathfindingGrid, Point, astar, bfs};

/// Solve an ASCII maze and draw the path
#[derive(Parser)]
pub struct Maze {
    /// Maze file (`#` wall, `.` floor, `1`-`9` terrain cost, `S`/`G` markers)
    #[arg(long, value_name = "FILE")]
    map: PathBuf,

    /// Start cell as `x,y` (defaults to the `S` marker)
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    from: Option<Point>,

    /// Goal cell as `x,y` (defaults to the `G` marker)
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    to: Option<Point>,

    /// Search algorithm
    #[arg(long, value_enum, default_value = "astar")]
    algo: Algorithm,

    /// Allow diagonal steps (A* only)
    #[arg(long)]
    diagonal: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Algorithm {
    /// Weighted A* with Manhattan heuristic
    Astar,
    /// Unweighted breadth-first search
    Bfs,
}

/// Result of a maze run.
#[derive(Debug)]
struct Solution {
    grid: AsciiGrid,
    path: Option<Vec<Point>>,
}

impl Maze {
    pub fn execute(self) -> Result<()> {
        let solution = self.solve()?;
        match &solution.path {
            Some(path) => {
                print!("{}", solution.grid.render_path(path));
                println!("steps: {}  cost: {:.3}", path.len() - 1, path_cost(&solution.grid, path));
            }
            None => println!("goal is unreachable"),
        }
        Ok(())
    }

    fn solve(&self) -> Result<Solution> {
        let grid = load_grid(&self.map)?;
        let start = self
            .from
            .or(grid.start())
            .context("no start given and the map has no `S` marker")?;
        let goal = self
            .to
            .or(grid.goal())
            .context("no goal given and the map has no `G` marker")?;

        if self.diagonal && self.algo == Algorithm::Bfs {
            bail!("--diagonal is only supported with --algo astar");
        }

        let path = match self.algo {
            Algorithm::Astar => astar(&grid, start, goal, self.diagonal),
            Algorithm::Bfs => bfs(&grid, start, goal),
        };
        tracing::info!(?start, ?goal, algo = ?self.algo, found = path.is_some(), "maze solved");

        Ok(Solution { grid, path })
    }
}

fn load_grid(path: &Path) -> Result<AsciiGrid> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read maze file: {}", path.display()))?;
    AsciiGrid::parse(&text).with_context(|| format!("Failed to parse maze: {}", path.display()))
}

fn path_cost(grid: &AsciiGrid, path: &[Point]) -> f64 {
    path.windows(2)
        .map(|w| {
            let step = if w[0].manhattan(w[1]) == 2 { 1.414 } else { 1.0 };
            step * grid.cost(w[1].x, w[1].y)
        })
        .sum()
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate `{v}`: {e}"))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}
