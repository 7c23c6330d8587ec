//! Exploration statistics with enforced invariants.
//!
//! Statistics are a pure value type: every update returns a new value and
//! leaves the old one untouched, so a node's slot is only ever overwritten
//! as a whole.

/// Playout count and cumulative reward accumulated at one search node.
///
/// Invariant: `visits == 0` implies `cumulative_score == 0.0`. The fields are
/// private so the invariant can only be reached through
/// [`ExplorationStats::update_with_score`] and [`ExplorationStats::merge`].
///
/// # Example
/// ```
/// use mcts_core::ExplorationStats;
///
/// let stats = ExplorationStats::new();
/// let updated = stats.update_with_score(1.0);
///
/// assert_eq!(stats.visits(), 0);
/// assert_eq!(updated.visits(), 1);
/// assert_eq!(updated.cumulative_score(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExplorationStats {
    cumulative_score: f32,
    visits: u32,
}

impl ExplorationStats {
    /// Empty statistics for a node that has never been visited.
    pub const fn new() -> Self {
        Self {
            cumulative_score: 0.0,
            visits: 0,
        }
    }

    /// Returns the statistics after one more playout scoring `score`.
    #[must_use]
    pub fn update_with_score(self, score: f32) -> Self {
        Self {
            cumulative_score: self.cumulative_score + score,
            visits: self.visits + 1,
        }
    }

    /// Combines two accumulators, as if every playout of both had been
    /// recorded in one.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            cumulative_score: self.cumulative_score + other.cumulative_score,
            visits: self.visits + other.visits,
        }
    }

    /// Sum of all rewards recorded so far.
    pub fn cumulative_score(self) -> f32 {
        self.cumulative_score
    }

    /// Number of playouts recorded so far.
    pub fn visits(self) -> u32 {
        self.visits
    }

    /// Returns true if no playout has been recorded.
    pub fn is_unvisited(self) -> bool {
        self.visits == 0
    }

    /// Average reward per playout.
    ///
    /// Returns 0.0 if the node has never been visited.
    pub fn mean_score(self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.cumulative_score / self.visits as f32
        }
    }
}

impl std::fmt::Display for ExplorationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}/{}", self.cumulative_score, self.visits)
    }
}
