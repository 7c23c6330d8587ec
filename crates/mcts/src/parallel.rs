//! Independent search sessions on separate threads.
//!
//! Each session owns its own tree, so sessions are explored in parallel
//! with no shared mutable state. One session failing does not affect the
//! others.

use crate::policy::MovePolicy;
use crate::reward::RewardFn;
use crate::search::Mcts;
use mcts_core::{GameState, Result};
use rayon::prelude::*;

/// Run `iterations` exploration iterations on every session in parallel.
///
/// Returns one result per session, in the same order as `sessions`.
pub fn explore_sessions<S, P, R>(sessions: &mut [Mcts<S, P, R>], iterations: usize) -> Vec<Result<()>>
where
    S: GameState + Send,
    P: MovePolicy<S> + Send,
    R: RewardFn<S> + Send,
{
    sessions
        .par_iter_mut()
        .map(|session| session.explore(iterations))
        .collect()
}

/// Build one session per seed with `make_session` and run each for its
/// configured iteration count, in parallel.
///
/// Seeds make every session reproducible regardless of thread scheduling.
pub fn run_seeded<S, P, R, F>(seeds: &[u64], make_session: F) -> Vec<Result<Mcts<S, P, R>>>
where
    S: GameState + Send,
    P: MovePolicy<S> + Send,
    R: RewardFn<S> + Send,
    F: Fn(u64) -> Result<Mcts<S, P, R>> + Sync,
{
    seeds
        .par_iter()
        .map(|&seed| {
            let mut session = make_session(seed)?;
            session.run()?;
            Ok(session)
        })
        .collect()
}
