//! Move-selection policies for tree descent.
//!
//! The `MovePolicy` trait allows swapping between different selection
//! strategies without the search knowing how they decide:
//! - `FirstChild`: deterministic, always the first child
//! - `UniformRandom`: uniform choice driven by a caller-supplied RNG
//! - `Ucb1`: the classic upper-confidence bound on accumulated statistics

use crate::node::NodeId;
use crate::tree::Tree;
use rand::Rng;
use std::convert::Infallible;

/// Chooses which child to descend into during an exploration iteration.
///
/// The search calls `pick` only with a non-empty slice of children of one
/// node, in the order the game produced them. The returned ID must be an
/// element of that slice; anything else aborts the session with a contract
/// violation.
///
/// Errors returned by `pick` are passed to the caller of the search
/// unchanged (boxed) and end the session.
pub trait MovePolicy<S> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn pick(&mut self, tree: &Tree<S>, children: &[NodeId]) -> Result<NodeId, Self::Error>;
}

impl<S, P: MovePolicy<S> + ?Sized> MovePolicy<S> for &mut P {
    type Error = P::Error;

    fn pick(&mut self, tree: &Tree<S>, children: &[NodeId]) -> Result<NodeId, Self::Error> {
        (**self).pick(tree, children)
    }
}

/// Policy that always descends into the first child.
///
/// Useful for deterministic replay and tests: every iteration follows the
/// same line of play.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChild;

impl<S> MovePolicy<S> for FirstChild {
    type Error = Infallible;

    fn pick(&mut self, _tree: &Tree<S>, children: &[NodeId]) -> Result<NodeId, Self::Error> {
        Ok(children[0])
    }
}

/// Policy that picks a child uniformly at random.
#[derive(Clone, Debug)]
pub struct UniformRandom<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformRandom<R> {
    /// Create a new random policy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the RNG, for example to continue a seeded sequence.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<S, R: Rng> MovePolicy<S> for UniformRandom<R> {
    type Error = Infallible;

    fn pick(&mut self, _tree: &Tree<S>, children: &[NodeId]) -> Result<NodeId, Self::Error> {
        let idx = self.rng.gen_range(0..children.len());
        Ok(children[idx])
    }
}

/// Default UCB1 exploration constant, √2.
pub const DEFAULT_EXPLORATION: f32 = std::f32::consts::SQRT_2;

/// Upper Confidence Bound (UCB1) selection.
///
/// Unvisited children are tried first, in order. Once every child has been
/// visited the policy maximises
///
/// `UCB(c) = -Q(c) + k * sqrt(ln N_parent / N(c))`
///
/// Q is negated because a child's statistics hold rewards for the player to
/// move at the child, the opponent of the player choosing between children.
/// This assumes an alternating two-player game with a perspective-relative
/// reward function.
#[derive(Clone, Copy, Debug)]
pub struct Ucb1 {
    exploration: f32,
}

impl Ucb1 {
    /// Create a UCB1 policy with exploration constant `k`.
    pub fn new(exploration: f32) -> Self {
        Self { exploration }
    }

    pub fn exploration(&self) -> f32 {
        self.exploration
    }

    fn score<S>(&self, tree: &Tree<S>, child: NodeId, ln_parent_visits: f32) -> f32 {
        let stats = tree.stats(child);
        let n = stats.visits() as f32;
        -stats.mean_score() + self.exploration * (ln_parent_visits / n).sqrt()
    }
}

impl Default for Ucb1 {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLORATION)
    }
}

impl<S> MovePolicy<S> for Ucb1 {
    type Error = Infallible;

    fn pick(&mut self, tree: &Tree<S>, children: &[NodeId]) -> Result<NodeId, Self::Error> {
        if let Some(&unvisited) = children.iter().find(|&&c| tree.stats(c).is_unvisited()) {
            return Ok(unvisited);
        }

        let parent_visits: u32 = children.iter().map(|&c| tree.stats(c).visits()).sum();
        let ln_parent_visits = (parent_visits as f32).ln();

        let mut best = children[0];
        let mut best_score = f32::NEG_INFINITY;
        for &child in children {
            let score = self.score(tree, child, ln_parent_visits);
            if score > best_score {
                best_score = score;
                best = child;
            }
        }

        Ok(best)
    }
}
