//! End-to-end search scenarios on tic-tac-toe.
//!
//! These tests pin down exact statistics on tiny trees, then check that
//! UCB1 finds the forced move in a few tactical positions.

use mcts::games::{tic_tac_toe_reward, Player, TicTacToeState};
use mcts::{reward, FirstChild, GameState, Mcts, NodeId, Outcome, SearchConfig, Ucb1, UniformRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// X to move with a single empty cell (7) that completes the centre column.
///
/// ```text
/// X | X | O
/// ---------
/// O | X | X
/// ---------
/// O | . | O
/// ```
fn one_move_from_win() -> TicTacToeState {
    TicTacToeState::from_moves(&[0, 2, 1, 3, 4, 6, 5, 8]).unwrap()
}

/// Cell played by X or O in the child `id` of the root.
fn cell_of(mcts: &Mcts<TicTacToeState, Ucb1, fn(&TicTacToeState, Outcome) -> f32>, id: NodeId) -> usize {
    let root = mcts.tree().get(NodeId::ROOT).state();
    let child = mcts.tree().get(id).state();
    (0..9)
        .find(|&cell| root.get(cell).is_none() && child.get(cell).is_some())
        .unwrap()
}

fn ucb1_session(moves: &[usize]) -> Mcts<TicTacToeState, Ucb1, fn(&TicTacToeState, Outcome) -> f32> {
    let state = TicTacToeState::from_moves(moves).unwrap();
    Mcts::new(state, Ucb1::default(), tic_tac_toe_reward as fn(&TicTacToeState, Outcome) -> f32)
}

// =============================================================================
// Exact statistics
// =============================================================================

#[test]
fn test_one_ply_win_with_identity_reward() {
    let mut mcts = Mcts::new(one_move_from_win(), FirstChild, reward::identity);

    let playout = mcts.explore_once().unwrap();

    assert_eq!(playout.depth, 1);
    assert_eq!(playout.score, 1.0);
    assert_eq!(mcts.root_stats().visits(), 1);
    assert_eq!(mcts.root_stats().cumulative_score(), 1.0);

    let leaf = mcts.tree().get(playout.leaf);
    assert_eq!(leaf.state().winner(), Some(Player::X));
    assert_eq!(leaf.stats().visits(), 1);
    assert_eq!(leaf.stats().cumulative_score(), 1.0);
}

#[test]
fn test_one_ply_win_with_perspective_reward() {
    let mut mcts = Mcts::new(one_move_from_win(), FirstChild, tic_tac_toe_reward);

    let playout = mcts.explore_once().unwrap();

    // X moved into the win: good for X at the root, bad for O at the leaf
    assert_eq!(mcts.root_stats().cumulative_score(), 1.0);
    assert_eq!(mcts.tree().stats(playout.leaf).cumulative_score(), -1.0);
    assert_eq!(mcts.tree().get(playout.leaf).state().players_turn(), Player::O);
}

#[test]
fn test_zero_iterations_from_empty_board() {
    let mut mcts = Mcts::new(TicTacToeState::new(), FirstChild, tic_tac_toe_reward);

    mcts.explore(0).unwrap();

    assert_eq!(mcts.tree().len(), 1);
    assert!(mcts.root_stats().is_unvisited());
    assert_eq!(mcts.root_stats().cumulative_score(), 0.0);
    assert!(mcts.best_child().is_none());
}

#[test]
fn test_first_child_line_credits_whole_path() {
    // First children play cells 0..=6 in order; X completes 2-4-6 on ply 7.
    let mut mcts = Mcts::new(TicTacToeState::new(), FirstChild, tic_tac_toe_reward);

    mcts.explore(10).unwrap();

    assert_eq!(mcts.root_stats().visits(), 10);
    assert_eq!(mcts.root_stats().cumulative_score(), 10.0);

    let leaf = mcts.tree().node_ids().find(|&id| mcts.tree().is_leaf(id)).unwrap();
    let path: Vec<NodeId> = mcts.tree().ancestors(leaf).collect();
    assert_eq!(path.len(), 8);
    assert_eq!(mcts.tree().depth(leaf), 7);
    assert_eq!(mcts.tree().get(leaf).state().is_over(), Outcome::Concluded(1.0));

    for &id in &path {
        let stats = mcts.tree().stats(id);
        assert_eq!(stats.visits(), 10);
        let expected = match mcts.tree().get(id).state().players_turn() {
            Player::X => 10.0,
            Player::O => -10.0,
        };
        assert_eq!(stats.cumulative_score(), expected);
    }

    // Siblings of the path were materialized but never visited
    let visited = mcts
        .tree()
        .node_ids()
        .filter(|&id| !mcts.tree().stats(id).is_unvisited())
        .count();
    assert_eq!(visited, path.len());
}

#[test]
fn test_drawn_game_scores_zero_everywhere() {
    // One cell left; filling it draws.
    let state = TicTacToeState::from_moves(&[0, 1, 2, 4, 3, 5, 7, 6]).unwrap();
    let mut mcts = Mcts::new(state, FirstChild, tic_tac_toe_reward);

    mcts.explore(3).unwrap();

    for id in mcts.tree().node_ids() {
        assert_eq!(mcts.tree().stats(id).visits(), 3);
        assert_eq!(mcts.tree().stats(id).cumulative_score(), 0.0);
    }
}

#[test]
fn test_finished_game_root_is_its_own_leaf() {
    let state = TicTacToeState::from_moves(&[0, 3, 1, 4, 2]).unwrap();
    let mut mcts = Mcts::new(state, FirstChild, tic_tac_toe_reward);

    let playout = mcts.explore_once().unwrap();

    assert_eq!(playout.leaf, NodeId::ROOT);
    assert_eq!(playout.depth, 0);
    assert_eq!(mcts.tree().len(), 1);
    // O is to move after X's winning line
    assert_eq!(mcts.root_stats().cumulative_score(), -1.0);
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_ucb1_takes_immediate_win() {
    // X: 0, 2  O: 3, 4  -- X to move, cell 1 completes the top row
    let mut mcts = ucb1_session(&[0, 3, 2, 4]);

    mcts.explore(2000).unwrap();

    let best = mcts.best_child().unwrap();
    assert_eq!(cell_of(&mcts, best), 1);
    assert_eq!(mcts.tree().get(best).state().winner(), Some(Player::X));
}

#[test]
fn test_ucb1_blocks_diagonal() {
    // X: 0, 4  O: 2  -- O to move must take 8
    let mut mcts = ucb1_session(&[0, 2, 4]);

    mcts.explore(5000).unwrap();

    let best = mcts.best_child().unwrap();
    assert_eq!(cell_of(&mcts, best), 8);
}

#[test]
fn test_ucb1_takes_centre_after_corner_exchange() {
    // X: 0, 2  O: 1  -- O to move, only the centre holds
    let mut mcts = ucb1_session(&[0, 1, 2]);

    mcts.explore(5000).unwrap();

    let best = mcts.best_child().unwrap();
    assert_eq!(cell_of(&mcts, best), 4);
}

// =============================================================================
// Sessions and policies
// =============================================================================

#[test]
fn test_seeded_random_sessions_are_reproducible() {
    let run = |seed: u64| {
        let policy = UniformRandom::new(ChaCha8Rng::seed_from_u64(seed));
        let config = SearchConfig::with_iterations(300);
        let mut mcts = Mcts::with_config(TicTacToeState::new(), policy, tic_tac_toe_reward, config).unwrap();
        let summary = mcts.run().unwrap();
        (summary, mcts.best_child())
    };

    let (first, best_a) = run(42);
    let (second, best_b) = run(42);

    assert_eq!(first, second);
    assert_eq!(best_a, best_b);
    assert_eq!(first.iterations, 300);
    assert_eq!(first.root_stats.visits(), 300);
}

#[test]
fn test_borrowed_policy_keeps_rng_state_across_sessions() {
    let mut shared = UniformRandom::new(ChaCha8Rng::seed_from_u64(7));
    let mut fresh = UniformRandom::new(ChaCha8Rng::seed_from_u64(7));

    let mut first = Mcts::new(TicTacToeState::new(), &mut shared, tic_tac_toe_reward);
    first.explore(50).unwrap();
    drop(first);

    let mut replay = Mcts::new(TicTacToeState::new(), &mut fresh, tic_tac_toe_reward);
    replay.explore(50).unwrap();
    drop(replay);

    // Both RNGs advanced identically
    let mut a = shared.into_inner();
    let mut b = fresh.into_inner();
    assert_eq!(rand::RngCore::next_u64(&mut a), rand::RngCore::next_u64(&mut b));
}

#[test]
fn test_search_continues_across_calls() {
    let mut mcts = Mcts::new(TicTacToeState::new(), Ucb1::default(), tic_tac_toe_reward);

    mcts.explore(100).unwrap();
    let nodes_after_first = mcts.tree().len();
    mcts.explore(100).unwrap();

    assert_eq!(mcts.iterations(), 200);
    assert_eq!(mcts.root_stats().visits(), 200);
    assert!(mcts.tree().len() >= nodes_after_first);
    // Every root reply has been tried at least once
    for &child in mcts.tree().children(NodeId::ROOT) {
        assert!(mcts.tree().stats(child).visits() > 0);
    }
}
