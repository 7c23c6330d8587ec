//! MCTS node types for tree storage.
//!
//! Uses arena allocation with indices, so the parent link is a plain index
//! and never keeps anything alive.

use mcts_core::ExplorationStats;

/// Index into the node arena.
///
/// This is a lightweight handle that references a node in the tree.
/// Using indices instead of pointers avoids Rc/RefCell overhead and the
/// parent/child reference cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the MCTS tree.
///
/// Each node owns one game state. Children are empty until the node is
/// expanded and are stored in the order the game produced them.
#[derive(Clone, Debug)]
pub struct Node<S> {
    state: S,
    parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) stats: ExplorationStats,
}

impl<S> Node<S> {
    /// Create the root node for a search session.
    pub(crate) fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            children: Vec::new(),
            stats: ExplorationStats::new(),
        }
    }

    /// Create an unexpanded, unvisited child of `parent`.
    pub(crate) fn child(state: S, parent: NodeId) -> Self {
        Self {
            state,
            parent: Some(parent),
            children: Vec::new(),
            stats: ExplorationStats::new(),
        }
    }

    /// The game state at this node.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Parent node (None for root).
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in the order the game produced them; empty until expanded.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Accumulated playout statistics.
    pub fn stats(&self) -> ExplorationStats {
        self.stats
    }

    /// Whether this node's children have been materialized.
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node() {
        let root = Node::root(7u8);
        assert_eq!(*root.state(), 7);
        assert!(root.is_root());
        assert!(root.children().is_empty());
        assert!(!root.is_expanded());
        assert!(root.stats().is_unvisited());
    }

    #[test]
    fn test_child_node() {
        let child = Node::child(3u8, NodeId::ROOT);
        assert_eq!(child.parent(), Some(NodeId::ROOT));
        assert!(!child.is_root());
        assert!(child.stats().is_unvisited());
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(12).to_string(), "#12");
        assert_eq!(NodeId::ROOT.index(), 0);
    }
}
