//! Test game implementations for MCTS validation.
//!
//! These games are used to verify search correctness; they are not part of
//! the search itself, which only sees the `GameState` contract.

pub mod tictactoe;

pub use tictactoe::{tic_tac_toe_reward, Player, TicTacToeState};
