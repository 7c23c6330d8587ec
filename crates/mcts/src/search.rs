//! Monte Carlo Tree Search orchestration.
//!
//! One exploration iteration is:
//! 1. Selection: from the root, expand the current node and let the move
//!    policy choose a child, until a terminal node is reached
//! 2. Scoring: read the terminal outcome at that leaf
//! 3. Backpropagation: update every node from the leaf up to the root with
//!    the reward the outcome is worth to the player to move there
//!
//! A session repeats this on one growing tree.

use crate::config::SearchConfig;
use crate::node::NodeId;
use crate::policy::MovePolicy;
use crate::reward::RewardFn;
use crate::tree::Tree;
use mcts_core::{ExplorationStats, GameState, MctsError, Outcome, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace, warn};

/// Record of one completed exploration iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playout {
    /// Terminal node the descent reached.
    pub leaf: NodeId,

    /// Plies from the root to the leaf.
    pub depth: usize,

    /// Absolute terminal score of the leaf.
    pub score: f32,
}

/// Summary of a search session, for logging and inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSummary {
    /// Completed iterations over the session's lifetime.
    pub iterations: usize,

    /// Statistics accumulated at the root.
    pub root_stats: ExplorationStats,

    /// Nodes materialized so far.
    pub total_nodes: usize,

    /// Depth of the deepest materialized node.
    pub max_depth: usize,
}

/// Monte Carlo Tree Search session.
///
/// Generic over:
/// - `S`: The game state being searched
/// - `P`: The move-selection policy used during descent
/// - `R`: The reward function used during backpropagation
///
/// The session owns its tree exclusively. Independent sessions can run on
/// separate threads (see [`crate::parallel`]); nothing is shared between
/// them.
pub struct Mcts<S, P, R> {
    tree: Tree<S>,
    policy: P,
    reward_fn: R,
    config: SearchConfig,
    iterations: usize,
    failed: bool,
}

impl<S, P, R> Mcts<S, P, R>
where
    S: GameState,
    P: MovePolicy<S>,
    R: RewardFn<S>,
{
    /// Create a new session rooted at `initial_state` with default config.
    pub fn new(initial_state: S, policy: P, reward_fn: R) -> Self {
        Self {
            tree: Tree::new(initial_state),
            policy,
            reward_fn,
            config: SearchConfig::default(),
            iterations: 0,
            failed: false,
        }
    }

    /// Create a new session with an explicit config.
    ///
    /// # Errors
    /// Returns `MctsError::InvalidConfig` if the config fails validation.
    pub fn with_config(initial_state: S, policy: P, reward_fn: R, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let mut mcts = Self::new(initial_state, policy, reward_fn);
        mcts.config = config;
        Ok(mcts)
    }

    /// Run `config.iterations` exploration iterations and summarize.
    pub fn run(&mut self) -> Result<SearchSummary> {
        self.explore(self.config.iterations)?;
        Ok(self.summary())
    }

    /// Run `count` exploration iterations.
    ///
    /// Stops at the first error; iterations completed before it keep their
    /// statistics, but the session refuses to continue afterwards.
    pub fn explore(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            self.explore_once()?;
        }

        debug!(
            iterations = self.iterations,
            root_visits = self.tree.stats(NodeId::ROOT).visits(),
            nodes = self.tree.len(),
            "exploration batch complete"
        );
        Ok(())
    }

    /// Run up to `count` iterations, checking `cancel` before each one.
    ///
    /// An iteration that has started always runs to completion. Returns how
    /// many iterations this call completed.
    pub fn explore_until_cancelled(&mut self, count: usize, cancel: &AtomicBool) -> Result<usize> {
        for done in 0..count {
            if cancel.load(Ordering::Relaxed) {
                debug!(completed = done, requested = count, "exploration cancelled");
                return Ok(done);
            }
            self.explore_once()?;
        }
        Ok(count)
    }

    /// Run a single exploration iteration: select -> score -> backpropagate.
    ///
    /// # Errors
    /// Contract violations by the game or the policy, policy failures and
    /// the depth guard all abort the iteration before any statistics are
    /// written, and mark the session as failed. Calling this on a failed
    /// session returns `MctsError::SessionFailed`.
    pub fn explore_once(&mut self) -> Result<Playout> {
        if self.failed {
            return Err(MctsError::SessionFailed);
        }

        match self.iterate() {
            Ok(playout) => Ok(playout),
            Err(err) => {
                warn!(error = %err, iterations = self.iterations, "search session aborted");
                self.failed = true;
                Err(err)
            }
        }
    }

    fn iterate(&mut self) -> Result<Playout> {
        let (leaf, depth) = self.select()?;

        let outcome = self.tree.get(leaf).state().is_over();
        let score = match outcome {
            Outcome::Concluded(score) => score,
            Outcome::Ongoing => return Err(MctsError::LeafNotTerminal { node: leaf.index() }),
        };

        let updated = self.tree.backpropagate(leaf, outcome, &self.reward_fn);
        debug_assert_eq!(updated, depth + 1);
        self.iterations += 1;

        trace!(
            leaf = leaf.index(),
            depth,
            score,
            iteration = self.iterations,
            "exploration iteration complete"
        );

        Ok(Playout { leaf, depth, score })
    }

    /// Descend from the root until a leaf, returning it and its depth.
    fn select(&mut self) -> Result<(NodeId, usize)> {
        let mut current = NodeId::ROOT;
        let mut depth = 0;

        while !self.tree.is_leaf(current) {
            if let Some(limit) = self.config.max_depth {
                if depth >= limit {
                    return Err(MctsError::DepthLimitExceeded { limit });
                }
            }

            self.tree.expand(current)?;
            let children = self.tree.children(current);
            let picked = self
                .policy
                .pick(&self.tree, children)
                .map_err(|e| MctsError::Policy(Box::new(e)))?;

            if !children.contains(&picked) {
                return Err(MctsError::PolicyReturnedNonMember {
                    parent: current.index(),
                    picked: picked.index(),
                });
            }

            current = picked;
            depth += 1;
        }

        Ok((current, depth))
    }
}

impl<S, P, R> Mcts<S, P, R> {
    /// The search tree (for inspection and downstream move choice).
    pub fn tree(&self) -> &Tree<S> {
        &self.tree
    }

    /// Consume the session, keeping only its tree.
    pub fn into_tree(self) -> Tree<S> {
        self.tree
    }

    /// Statistics accumulated at the root.
    pub fn root_stats(&self) -> ExplorationStats {
        self.tree.stats(NodeId::ROOT)
    }

    /// Completed iterations over the session's lifetime.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether an earlier error has ended this session.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Most visited child of the root, first in order on ties.
    pub fn best_child(&self) -> Option<NodeId> {
        self.tree.most_visited_child(NodeId::ROOT)
    }

    /// Summarize the session so far.
    pub fn summary(&self) -> SearchSummary {
        SearchSummary {
            iterations: self.iterations,
            root_stats: self.root_stats(),
            total_nodes: self.tree.len(),
            max_depth: self.tree.max_depth(),
        }
    }
}
