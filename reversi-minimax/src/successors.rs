//! Successor generation

use reversi_core::{Board, Disc, Move};

/// A position one legal move below its parent, tagged with that move.
///
/// Each successor owns an independent clone of the parent; generation
/// never touches the position it was handed.
#[derive(Clone, Debug)]
pub struct Successor<B: Board> {
    pub board: B,
    pub mv: Move,
}

/// Every position reachable by one legal `disc` move.
///
/// Cells are scanned with columns in the outer loop and rows in the inner
/// loop, and that order is the tie-break order downstream search relies
/// on. Empty when the side has no legal move anywhere.
pub fn successors<B: Board>(board: &B, disc: Disc) -> Vec<Successor<B>> {
    let mut out = Vec::new();
    for col in 0..board.cols() {
        for row in 0..board.rows() {
            if board.is_legal_move(col, row, disc) {
                let mv = Move::new(col, row);
                let mut next = board.clone();
                next.apply_move(mv, disc);
                out.push(Successor { board: next, mv });
            }
        }
    }
    out
}
