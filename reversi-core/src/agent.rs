//! Agent interface for move selection

use crate::board::{Board, Disc, Move};

/// A move-selecting player for one side.
///
/// `choose_move` takes `&mut self` so implementations can keep running
/// diagnostics across calls. `None` means the side has no legal move in
/// this position; callers decide between passing and ending the game.
pub trait Agent<B: Board> {
    /// The disc this agent plays
    fn disc(&self) -> Disc;

    /// Pick a move for the current position, or `None` when the side has
    /// no legal move
    fn choose_move(&mut self, board: &B) -> Option<Move>;
}
