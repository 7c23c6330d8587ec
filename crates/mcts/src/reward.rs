//! Reward functions.
//!
//! A reward function answers "how good was this terminal outcome for the
//! player about to move at this state". The same outcome therefore yields
//! opposite rewards at adjacent nodes of a two-player game.

use mcts_core::Outcome;

/// Maps a terminal outcome, seen from one state, to a scalar reward.
///
/// Implementations must be deterministic and free of side effects. The
/// search only calls them with concluded outcomes.
///
/// Any closure `Fn(&S, Outcome) -> f32` is a reward function.
pub trait RewardFn<S> {
    fn reward(&self, state: &S, outcome: Outcome) -> f32;
}

impl<S, F> RewardFn<S> for F
where
    F: Fn(&S, Outcome) -> f32,
{
    fn reward(&self, state: &S, outcome: Outcome) -> f32 {
        self(state, outcome)
    }
}

/// Reward equal to the outcome's absolute score, whatever the state.
pub fn identity<S>(_state: &S, outcome: Outcome) -> f32 {
    outcome.score().unwrap_or(0.0)
}

/// Reward for an alternating two-player game whose score is positive when
/// the first player wins.
///
/// `first_player_to_move` tells whether the first player moves at a state.
/// The score is returned unchanged for that player and negated for the
/// other, so draws always reward zero.
///
/// # Example
/// ```
/// use mcts::reward::{for_player_to_move, RewardFn};
/// use mcts::Outcome;
///
/// // State: number of plies played so far.
/// let reward = for_player_to_move(|plies: &u32| plies % 2 == 0);
///
/// assert_eq!(reward.reward(&0, Outcome::Concluded(1.0)), 1.0);
/// assert_eq!(reward.reward(&1, Outcome::Concluded(1.0)), -1.0);
/// ```
pub fn for_player_to_move<S, F>(first_player_to_move: F) -> impl Fn(&S, Outcome) -> f32
where
    F: Fn(&S) -> bool,
{
    move |state: &S, outcome: Outcome| {
        let score = outcome.score().unwrap_or(0.0);
        if first_player_to_move(state) {
            score
        } else {
            -score
        }
    }
}
