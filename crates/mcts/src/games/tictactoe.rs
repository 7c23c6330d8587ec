//! Tic-tac-toe implementation for MCTS validation.
//!
//! Tic-tac-toe is a solved game where perfect play always results in a draw.
//! Its tree is small enough to enumerate, which makes it ideal for checking
//! the search's invariants on every reachable position.

use mcts_core::{GameState, Outcome};

/// Tic-tac-toe player.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposing player.
    pub fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Absolute score when this player wins: +1 for X, -1 for O.
    pub fn winning_score(self) -> f32 {
        match self {
            Player::X => 1.0,
            Player::O => -1.0,
        }
    }
}

/// Winning lines, as cell indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Tic-tac-toe board state.
///
/// Cells are indexed 0-8, row-major:
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TicTacToeState {
    board: [Option<Player>; 9],
    current: Player,
    winner: Option<Player>,
}

impl TicTacToeState {
    /// Create a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: Player::X,
            winner: None,
        }
    }

    /// Play a sequence of cells from the empty board.
    ///
    /// Returns `None` if any move is illegal.
    pub fn from_moves(cells: &[usize]) -> Option<Self> {
        cells
            .iter()
            .try_fold(Self::new(), |state, &cell| state.apply(cell))
    }

    /// Get the player whose turn it is.
    pub fn players_turn(&self) -> Player {
        self.current
    }

    /// Get the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Get the piece at a cell, if any.
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.board.get(cell).copied().flatten()
    }

    /// Whether the player to move may play at `cell`.
    pub fn is_legal_move(&self, cell: usize) -> bool {
        self.winner.is_none() && cell < 9 && self.board[cell].is_none()
    }

    /// Returns the state after the player to move plays at `cell`, or
    /// `None` if that move is illegal.
    pub fn apply(&self, cell: usize) -> Option<Self> {
        if !self.is_legal_move(cell) {
            return None;
        }
        let mut next = self.clone();
        next.board[cell] = Some(self.current);
        next.current = self.current.opposite();
        next.winner = next.check_winner();
        Some(next)
    }

    /// Cells the player to move may play, in ascending order.
    pub fn legal_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..9).filter(move |&cell| self.is_legal_move(cell))
    }

    /// Check for a winner on the current board.
    fn check_winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let player = self.board[line[0]]?;
            (self.board[line[1]] == Some(player) && self.board[line[2]] == Some(player))
                .then_some(player)
        })
    }

    /// Check if the board is full (draw if no winner).
    fn is_full(&self) -> bool {
        self.board.iter().all(|c| c.is_some())
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToeState {
    fn all_legal_moves(&self) -> Vec<Self> {
        self.legal_cells().filter_map(|cell| self.apply(cell)).collect()
    }

    fn is_over(&self) -> Outcome {
        if let Some(winner) = self.winner {
            Outcome::Concluded(winner.winning_score())
        } else if self.is_full() {
            Outcome::DRAW
        } else {
            Outcome::Ongoing
        }
    }
}

/// Reward for the player to move at `state`: the score as-is when X is to
/// move, negated when O is.
pub fn tic_tac_toe_reward(state: &TicTacToeState, outcome: Outcome) -> f32 {
    let score = outcome.score().unwrap_or(0.0);
    match state.players_turn() {
        Player::X => score,
        Player::O => -score,
    }
}
