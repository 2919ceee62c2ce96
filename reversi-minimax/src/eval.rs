//! Terminal detection and static evaluation

use crate::config::Heuristic;
use reversi_core::{Board, Disc};

/// True when neither side has a legal move anywhere on the grid.
///
/// Full scan, O(cols * rows); the search calls this at every node, so it
/// dominates node cost together with the branching factor.
pub fn is_terminal<B: Board>(board: &B) -> bool {
    for col in 0..board.cols() {
        for row in 0..board.rows() {
            if board.is_legal_move(col, row, Disc::Black)
                || board.is_legal_move(col, row, Disc::White)
            {
                return false;
            }
        }
    }
    true
}

/// Value of a finished game from `disc`'s side.
///
/// A win is infinite whichever side the agent plays; the margin only picks
/// the sign. Ties are 0.
pub fn terminal_value<B: Board>(board: &B, disc: Disc) -> f64 {
    let margin = board.score(disc) as i64 - board.score(disc.opponent()) as i64;
    if margin == 0 {
        0.0
    } else if margin > 0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}

/// Score a position from `disc`'s side.
///
/// Finished games score by final margin, never through a heuristic, and the
/// value is not flipped by whose turn it would be. Anything else goes
/// through the selected heuristic. Pure; the board is never mutated.
pub fn evaluate<B: Board>(board: &B, disc: Disc, heuristic: Heuristic) -> f64 {
    if is_terminal(board) {
        return terminal_value(board, disc);
    }
    let value = match heuristic {
        Heuristic::DiscCount => disc_count_diff(board, disc),
        Heuristic::Mobility => mobility_diff(board, disc),
        Heuristic::Positional => positional_diff(board, disc),
    };
    value as f64
}

fn disc_count_diff<B: Board>(board: &B, disc: Disc) -> i64 {
    board.score(disc) as i64 - board.score(disc.opponent()) as i64
}

fn mobility_diff<B: Board>(board: &B, disc: Disc) -> i64 {
    let opponent = disc.opponent();
    let mut own = 0;
    let mut theirs = 0;
    for col in 0..board.cols() {
        for row in 0..board.rows() {
            if board.is_legal_move(col, row, disc) {
                own += 1;
            }
            if board.is_legal_move(col, row, opponent) {
                theirs += 1;
            }
        }
    }
    own - theirs
}

fn positional_diff<B: Board>(board: &B, disc: Disc) -> i64 {
    let own = disc.to_cell();
    let theirs = disc.opponent().to_cell();
    let mut value = 0;
    for col in 0..board.cols() {
        for row in 0..board.rows() {
            let cell = board.cell(col, row);
            if cell == own {
                value += cell_weight(col, row, board.cols(), board.rows());
            } else if cell == theirs {
                value -= cell_weight(col, row, board.cols(), board.rows());
            }
        }
    }
    value
}

/// Positional weight of a cell: 2 on corners, 1 along edges, 0 inside.
///
/// Corners cannot be recaptured and edges only from along the edge, so
/// weight follows how hard a cell is to take back.
fn cell_weight(col: usize, row: usize, cols: usize, rows: usize) -> i64 {
    let col_edge = col == 0 || col + 1 == cols;
    let row_edge = row == 0 || row + 1 == rows;
    match (col_edge, row_edge) {
        (true, true) => 2,
        (false, false) => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_core::GridBoard;

    #[test]
    fn test_fresh_board_is_not_terminal() {
        let board = GridBoard::new(8, 8).unwrap();
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_full_board_is_terminal() {
        let board = GridBoard::parse(
            "BBWW
             BBWW
             BBWW
             BBWW",
        )
        .unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_sparse_board_without_brackets_is_terminal() {
        // Two black discs and no white ones: no bracket exists for either
        // side even though most of the grid is empty
        let board = GridBoard::parse(
            "B...
             ....
             ....
             ...B",
        )
        .unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_terminal_value_by_margin() {
        let ahead = GridBoard::parse("BBBW").unwrap();
        assert_eq!(terminal_value(&ahead, Disc::Black), f64::INFINITY);
        assert_eq!(terminal_value(&ahead, Disc::White), f64::NEG_INFINITY);

        let tied = GridBoard::parse("BBWW").unwrap();
        assert_eq!(terminal_value(&tied, Disc::Black), 0.0);
        assert_eq!(terminal_value(&tied, Disc::White), 0.0);
    }

    #[test]
    fn test_evaluate_prefers_terminal_value_over_heuristic() {
        // Finished game: the +2 disc margin reads as a win, not a count
        let board = GridBoard::parse("BBBW").unwrap();
        assert!(is_terminal(&board));
        for heuristic in [Heuristic::DiscCount, Heuristic::Mobility, Heuristic::Positional] {
            assert_eq!(evaluate(&board, Disc::Black, heuristic), f64::INFINITY);
            assert_eq!(evaluate(&board, Disc::White, heuristic), f64::NEG_INFINITY);
        }
    }

    #[test]
    fn test_disc_count_matches_scores() {
        let board = GridBoard::parse(
            "....
             BWW.
             ....
             BW..",
        )
        .unwrap();
        assert!(!is_terminal(&board));
        let expected = board.score(Disc::Black) as f64 - board.score(Disc::White) as f64;
        assert_eq!(expected, -1.0);
        assert_eq!(evaluate(&board, Disc::Black, Heuristic::DiscCount), expected);
        assert_eq!(
            evaluate(&board, Disc::White, Heuristic::DiscCount),
            -expected
        );
    }

    #[test]
    fn test_mobility_counts_legal_cells() {
        let board = GridBoard::new(4, 4).unwrap();
        // The opening is symmetric: four moves each way
        assert_eq!(evaluate(&board, Disc::Black, Heuristic::Mobility), 0.0);

        // Black has the lone legal move here and white has none
        let endgame = GridBoard::parse(
            "WWBW
             BWBW
             WBBB
             BW.B",
        )
        .unwrap();
        assert!(!is_terminal(&endgame));
        assert_eq!(evaluate(&endgame, Disc::Black, Heuristic::Mobility), 1.0);
        assert_eq!(evaluate(&endgame, Disc::White, Heuristic::Mobility), -1.0);
    }

    #[test]
    fn test_positional_weights_match_reference_table() {
        // Weight layout on a 4x4 grid, indexed (col, row)
        let reference = [
            [2, 1, 1, 2],
            [1, 0, 0, 1],
            [1, 0, 0, 1],
            [2, 1, 1, 2],
        ];
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(
                    cell_weight(col, row, 4, 4),
                    reference[col][row],
                    "weight mismatch at ({}, {})",
                    col,
                    row
                );
            }
        }
    }

    #[test]
    fn test_positional_scores_corner_over_interior() {
        // Black corner (weight 2) against white interior (weight 0)
        let board = GridBoard::parse(
            "B...
             .W..
             ....
             ....",
        )
        .unwrap();
        assert!(!is_terminal(&board));
        assert_eq!(evaluate(&board, Disc::Black, Heuristic::Positional), 2.0);
        assert_eq!(evaluate(&board, Disc::White, Heuristic::Positional), -2.0);
    }

    #[test]
    fn test_positional_weights_on_larger_grids() {
        assert_eq!(cell_weight(0, 0, 8, 8), 2);
        assert_eq!(cell_weight(7, 0, 8, 8), 2);
        assert_eq!(cell_weight(3, 0, 8, 8), 1);
        assert_eq!(cell_weight(0, 5, 8, 8), 1);
        assert_eq!(cell_weight(4, 4, 8, 8), 0);
    }
}
