//! MCTS Core - Game contract and common types
//!
//! This crate provides the [`GameState`] trait that a game must implement to
//! be searched, together with the value types shared by the search engine.
//!
//! # Types
//!
//! - [`GameState`] - Trait for game positions (successors and terminal check)
//! - [`Outcome`] - Ongoing or concluded-with-score
//! - [`ExplorationStats`] - Per-node playout count and cumulative reward
//! - [`MctsError`] - Contract violations and collaborator failures

mod error;
mod game;
mod types;

pub use error::{BoxError, MctsError, Result};
pub use game::{GameState, Outcome};
pub use types::ExplorationStats;
