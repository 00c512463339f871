//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be checked against hand-built boards.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::check_winner;
