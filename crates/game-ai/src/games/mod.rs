//! Reference games implementing [`GameState`](crate::GameState).
//!
//! Real games live with their own rules elsewhere; these exist so the search
//! code has something concrete to play in tests and the lab CLI.

mod tictactoe;

pub use tictactoe::TicTacToe;
