/// Result of asking a game state whether play has ended.
///
/// The score of a concluded game is absolute: its sign convention is defined
/// by the game (for example, positive favours the first player). Rewards
/// relative to a particular player are derived from it by a reward function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The game is still in progress; there is no meaningful score.
    Ongoing,

    /// The game has ended with the given score.
    Concluded(f32),
}

impl Outcome {
    /// A concluded game with a zero score.
    pub const DRAW: Self = Outcome::Concluded(0.0);

    /// Returns true if the game has ended.
    pub fn is_over(self) -> bool {
        matches!(self, Outcome::Concluded(_))
    }

    /// The final score, or `None` while the game is ongoing.
    pub fn score(self) -> Option<f32> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Concluded(score) => Some(score),
        }
    }

    /// Returns true for a concluded game with a nonzero score.
    pub fn is_decisive(self) -> bool {
        matches!(self, Outcome::Concluded(score) if score != 0.0)
    }
}

/// A position in a two-player, perfect-information, turn-based game.
///
/// This trait is the only thing the search needs to know about a game. Values
/// are treated as immutable: the search never mutates a state, it only asks
/// for successors.
///
/// Implementations must keep the two methods consistent. A state is terminal
/// exactly when it has no legal successors, and the search reports a
/// contract violation when that does not hold.
pub trait GameState: Sized {
    /// Returns every state reachable by exactly one legal move.
    ///
    /// The order is significant: children are created in this order, and
    /// deterministic policies rely on it for replay.
    fn all_legal_moves(&self) -> Vec<Self>;

    /// Returns whether the game has ended and, if so, its score.
    fn is_over(&self) -> Outcome;
}
