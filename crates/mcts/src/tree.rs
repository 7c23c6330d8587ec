//! Arena-allocated MCTS tree.
//!
//! Using a Vec<Node> with indices provides better cache locality and simpler
//! ownership compared to Rc<RefCell<Node>>. Nodes are appended and never
//! removed, so a `NodeId` stays valid for the lifetime of the tree, and the
//! whole tree is freed in one step when it is dropped.

use crate::node::{Node, NodeId};
use crate::reward::RewardFn;
use mcts_core::{ExplorationStats, GameState, MctsError, Outcome, Result};
use tracing::debug;

/// Arena-allocated MCTS tree.
///
/// The root is always at [`NodeId::ROOT`]. Children are allocated after
/// their parent, so a node's index is always greater than its parent's.
#[derive(Clone, Debug)]
pub struct Tree<S> {
    nodes: Vec<Node<S>>,
}

impl<S> Tree<S> {
    /// Create a tree holding only an unexpanded root for `root_state`.
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![Node::root(root_state)],
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId does not belong to this tree.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.0]
    }

    /// Get a node by ID, or `None` if the ID does not belong to this tree.
    pub fn try_get(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id.0)
    }

    /// Children of a node, empty until it is expanded.
    ///
    /// # Panics
    /// Panics if the NodeId does not belong to this tree.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).children()
    }

    /// Statistics of a node.
    ///
    /// # Panics
    /// Panics if the NodeId does not belong to this tree.
    #[inline]
    pub fn stats(&self, id: NodeId) -> ExplorationStats {
        self.get(id).stats()
    }

    /// Get the number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true, the root always exists).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all node IDs in allocation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Walk from `id` up to the root, yielding `id` first and the root last.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, S> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Number of plies between the root and `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count() - 1
    }

    /// Depth of the deepest materialized node.
    pub fn max_depth(&self) -> usize {
        // Parents are always allocated before their children, so one
        // forward pass sees every parent's depth first.
        let mut depths = vec![0usize; self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent() {
                depths[i] = depths[parent.0] + 1;
            }
        }
        depths.into_iter().max().unwrap_or(0)
    }

    /// The child of `id` with the most visits, first in order on ties.
    ///
    /// Returns `None` if the node has not been expanded.
    pub fn most_visited_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .fold(None, |best: Option<NodeId>, child| match best {
                Some(b) if self.stats(b).visits() >= self.stats(child).visits() => Some(b),
                _ => Some(child),
            })
    }

    /// Allocate a new node and return its ID.
    fn allocate(&mut self, node: Node<S>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl<S: GameState> Tree<S> {
    /// Whether the node's state is terminal.
    ///
    /// This only consults the game state, so a node can be a leaf before it
    /// was ever expanded.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.get(id).state().is_over().is_over()
    }

    /// Materialize the children of `id`, once.
    ///
    /// If the node already has children they are returned unchanged.
    /// Otherwise one child is created per legal successor state, in the
    /// order the game produced them. A terminal node yields an empty slice.
    ///
    /// # Errors
    /// - [`MctsError::TerminalHasMoves`] if a terminal state has successors
    /// - [`MctsError::NoLegalMoves`] if a non-terminal state has none
    pub fn expand(&mut self, id: NodeId) -> Result<&[NodeId]> {
        if self.get(id).is_expanded() {
            return Ok(self.get(id).children());
        }

        let node = self.get(id);
        let terminal = node.state().is_over().is_over();
        let successors = node.state().all_legal_moves();

        match (terminal, successors.is_empty()) {
            (true, true) => return Ok(&[]),
            (true, false) => {
                return Err(MctsError::TerminalHasMoves {
                    node: id.0,
                    count: successors.len(),
                })
            }
            (false, true) => return Err(MctsError::NoLegalMoves { node: id.0 }),
            (false, false) => {}
        }

        let children: Vec<NodeId> = successors
            .into_iter()
            .map(|state| self.allocate(Node::child(state, id)))
            .collect();

        debug!(node = id.0, children = children.len(), "expanded node");

        let node = &mut self.nodes[id.0];
        node.children = children;
        Ok(node.children())
    }

    /// Record one playout ending in `outcome` on every node from `leaf` up
    /// to and including the root.
    ///
    /// Each node's reward is computed from its own state, so players at
    /// different depths see the outcome from their own side. Returns the
    /// number of nodes updated.
    pub(crate) fn backpropagate<R>(&mut self, leaf: NodeId, outcome: Outcome, reward_fn: &R) -> usize
    where
        R: RewardFn<S> + ?Sized,
    {
        let mut current = Some(leaf);
        let mut updated = 0;

        while let Some(id) = current {
            let node = &mut self.nodes[id.0];
            let reward = reward_fn.reward(node.state(), outcome);
            node.stats = node.stats.update_with_score(reward);
            current = node.parent();
            updated += 1;
        }

        updated
    }
}

/// Iterator over a node and its ancestors, ending at the root.
pub struct Ancestors<'a, S> {
    tree: &'a Tree<S>,
    next: Option<NodeId>,
}

impl<S> Iterator for Ancestors<'_, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.get(id).parent();
        Some(id)
    }
}
