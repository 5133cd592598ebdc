//! Subcommand implementations.
//!
//! Each command owns its CLI args and execution logic.

mod duel;
mod maze;
mod presets;

pub use duel::Duel;
pub use maze::Maze;
pub use presets::Presets;
