use thiserror::Error;

/// Boxed collaborator error, kept intact so callers can downcast it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building or searching an MCTS tree.
///
/// Every variant except [`MctsError::InvalidConfig`] is fatal to the search
/// session that produced it.
#[derive(Error, Debug)]
pub enum MctsError {
    #[error("node {node} is a leaf but its state reports the game as ongoing")]
    LeafNotTerminal { node: usize },

    #[error("terminal state at node {node} produced {count} legal successor states")]
    TerminalHasMoves { node: usize, count: usize },

    #[error("non-terminal state at node {node} produced no legal successor states")]
    NoLegalMoves { node: usize },

    #[error("move policy picked node {picked}, which is not a child of node {parent}")]
    PolicyReturnedNonMember { parent: usize, picked: usize },

    #[error("descent exceeded the depth limit of {limit} plies")]
    DepthLimitExceeded { limit: usize },

    #[error("move policy failed: {0}")]
    Policy(#[source] BoxError),

    #[error("search session already failed and cannot run further iterations")]
    SessionFailed,

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

impl MctsError {
    /// Whether this error reports a broken collaborator contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            MctsError::LeafNotTerminal { .. }
                | MctsError::TerminalHasMoves { .. }
                | MctsError::NoLegalMoves { .. }
                | MctsError::PolicyReturnedNonMember { .. }
        )
    }
}

/// Convenience Result type for MCTS operations
pub type Result<T> = std::result::Result<T, MctsError>;
