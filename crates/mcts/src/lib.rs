//! Monte Carlo Tree Search over any turn-based game.
//!
//! This crate provides a generic MCTS implementation that can be used with
//! any game implementing the `mcts_core::GameState` trait.
//!
//! # Features
//!
//! - **Generic**: Works with any `GameState` implementation
//! - **Arena tree**: Nodes live in one arena; parents are indices, so there
//!   is no reference cycle and the tree is freed in one step
//! - **Pluggable policies**: descent is driven by any `MovePolicy`
//!   (first child, uniform random and UCB1 are provided)
//! - **Perspective-relative rewards**: every node on the path is credited
//!   through a `RewardFn` evaluated at its own state
//! - **Fail fast**: contract violations by the game or policy end the
//!   session with a distinct error instead of corrupting statistics
//!
//! # Example
//!
//! ```
//! use mcts::{games::{tic_tac_toe_reward, TicTacToeState}, Mcts, SearchConfig, Ucb1};
//!
//! let config = SearchConfig::with_iterations(500);
//! let mut mcts = Mcts::with_config(
//!     TicTacToeState::new(),
//!     Ucb1::default(),
//!     tic_tac_toe_reward,
//!     config,
//! )
//! .expect("valid config");
//!
//! let summary = mcts.run().expect("tic-tac-toe honours the state contract");
//! assert_eq!(summary.root_stats.visits(), 500);
//!
//! let best = mcts.best_child().expect("root was expanded");
//! println!("Most visited reply: {:?}", mcts.tree().get(best).state());
//! ```

pub mod config;
pub mod games;
mod node;
pub mod parallel;
pub mod policy;
pub mod reward;
pub mod search;
mod tree;

pub use config::SearchConfig;
pub use node::{Node, NodeId};
pub use policy::{FirstChild, MovePolicy, Ucb1, UniformRandom};
pub use reward::RewardFn;
pub use search::{Mcts, Playout, SearchSummary};
pub use tree::{Ancestors, Tree};

pub use mcts_core::{ExplorationStats, GameState, MctsError, Outcome, Result};
