//! Depth-limited minimax with alpha-beta pruning

use crate::config::{Heuristic, SearchConfig};
use crate::eval::{evaluate, is_terminal};
use crate::successors::successors;
use reversi_core::{Board, Disc, Move};

/// Diagnostic counters accumulated while searching
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Successors examined, counted once per successor across all layers
    pub nodes_visited: u64,
    /// Deepest ply below the root a layer was entered at
    pub deepest_ply: u32,
}

/// A search value paired with the move that achieves it.
///
/// The value is an extended real: heuristic scores are finite, decided
/// games are infinite. `mv` is `None` at evaluated leaves and when the
/// side to move has no successor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scored {
    pub value: f64,
    pub mv: Option<Move>,
}

/// Per-search parameters shared by every layer
struct Context {
    disc: Disc,
    heuristic: Heuristic,
    prune: bool,
    root_depth: u32,
}

/// Search `board` and return the agent-side value with the chosen move.
///
/// The root is a maximizing layer opened at (-inf, +inf) with one ply of
/// the configured depth already spent on the root's own successor
/// generation. `config` must satisfy [`SearchConfig::validate`]; a depth
/// of 0 has no defined recursion floor.
pub fn run_search<B: Board>(
    board: &B,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> Scored {
    debug_assert!(config.validate().is_ok());
    let ctx = Context {
        disc: config.disc,
        heuristic: config.heuristic,
        prune: config.prune,
        root_depth: config.max_depth - 1,
    };
    max_value(
        board,
        &ctx,
        f64::NEG_INFINITY,
        f64::INFINITY,
        ctx.root_depth,
        stats,
    )
}

/// Maximizing layer: the agent's own disc is to move.
///
/// The `>=` comparison means the last successor with the maximal value
/// wins; enumeration order makes that deterministic.
fn max_value<B: Board>(
    board: &B,
    ctx: &Context,
    mut alpha: f64,
    beta: f64,
    depth: u32,
    stats: &mut SearchStats,
) -> Scored {
    stats.deepest_ply = stats.deepest_ply.max(ctx.root_depth - depth);

    if depth == 0 || is_terminal(board) {
        return Scored {
            value: evaluate(board, ctx.disc, ctx.heuristic),
            mv: None,
        };
    }

    // No successor leaves the loop unentered: the side is stuck and the
    // layer falls through to (-inf, no move)
    let mut best = Scored {
        value: f64::NEG_INFINITY,
        mv: None,
    };

    for successor in successors(board, ctx.disc) {
        stats.nodes_visited += 1;

        let reply = min_value(&successor.board, ctx, alpha, beta, depth - 1, stats);
        if reply.value >= best.value {
            best = Scored {
                value: reply.value,
                mv: Some(successor.mv),
            };
            alpha = alpha.max(best.value);
        }

        if ctx.prune && alpha >= beta {
            return best;
        }
    }

    best
}

/// Minimizing layer: the opponent disc is to move. Mirror of
/// [`max_value`] with `<=` and the beta bound.
fn min_value<B: Board>(
    board: &B,
    ctx: &Context,
    alpha: f64,
    mut beta: f64,
    depth: u32,
    stats: &mut SearchStats,
) -> Scored {
    stats.deepest_ply = stats.deepest_ply.max(ctx.root_depth - depth);

    if depth == 0 || is_terminal(board) {
        return Scored {
            value: evaluate(board, ctx.disc, ctx.heuristic),
            mv: None,
        };
    }

    let mut best = Scored {
        value: f64::INFINITY,
        mv: None,
    };

    for successor in successors(board, ctx.disc.opponent()) {
        stats.nodes_visited += 1;

        let reply = max_value(&successor.board, ctx, alpha, beta, depth - 1, stats);
        if reply.value <= best.value {
            best = Scored {
                value: reply.value,
                mv: Some(successor.mv),
            };
            beta = beta.min(best.value);
        }

        if ctx.prune && alpha >= beta {
            return best;
        }
    }

    best
}
