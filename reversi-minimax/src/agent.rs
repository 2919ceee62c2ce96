//! Alpha-beta agent facade

use crate::config::{ConfigError, SearchConfig};
use crate::search::{run_search, Scored, SearchStats};
use reversi_core::{Agent, Board, Disc, Move};

/// Depth-limited minimax player with optional alpha-beta pruning.
///
/// Wraps a validated [`SearchConfig`] and accumulates diagnostics across
/// every search it runs. Selecting a move on a position where the agent's
/// side is stuck reports no move; callers check the game state before
/// treating the answer as playable.
pub struct AlphaBetaAgent {
    config: SearchConfig,
    stats: SearchStats,
}

impl AlphaBetaAgent {
    /// Build an agent, rejecting configurations the search cannot run
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SearchStats::default(),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Successors examined across every search so far
    pub fn nodes_visited(&self) -> u64 {
        self.stats.nodes_visited
    }

    /// Deepest ply below a search root entered so far
    pub fn deepest_ply(&self) -> u32 {
        self.stats.deepest_ply
    }

    /// Search the position and return the agent-side value with the move
    pub fn search<B: Board>(&mut self, board: &B) -> Scored {
        let nodes_before = self.stats.nodes_visited;
        let result = run_search(board, &self.config, &mut self.stats);
        tracing::debug!(
            "search for {:?} done: move {:?}, value {}, {} nodes",
            self.config.disc,
            result.mv,
            result.value,
            self.stats.nodes_visited - nodes_before
        );
        result
    }
}

impl<B: Board> Agent<B> for AlphaBetaAgent {
    fn disc(&self) -> Disc {
        self.config.disc
    }

    fn choose_move(&mut self, board: &B) -> Option<Move> {
        self.search(board).mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_core::GridBoard;

    #[test]
    fn test_rejects_invalid_config() {
        let config = SearchConfig::new(Disc::Black).with_max_depth(0);
        assert_eq!(
            AlphaBetaAgent::new(config).err(),
            Some(ConfigError::DepthTooSmall(0))
        );
    }

    #[test]
    fn test_chooses_an_opening_move() {
        let board = GridBoard::new(4, 4).unwrap();
        let mut agent = AlphaBetaAgent::new(SearchConfig::new(Disc::Black)).unwrap();
        let mv = agent.choose_move(&board).expect("opening has moves");
        assert!(board.is_legal_move(mv.col, mv.row, Disc::Black));
    }

    #[test]
    fn test_diagnostics_accumulate() {
        let board = GridBoard::new(4, 4).unwrap();
        let mut agent =
            AlphaBetaAgent::new(SearchConfig::new(Disc::Black).with_max_depth(3)).unwrap();

        agent.choose_move(&board);
        let after_one = agent.nodes_visited();
        assert!(after_one > 0);
        assert_eq!(agent.deepest_ply(), 2);

        agent.choose_move(&board);
        assert!(agent.nodes_visited() > after_one);
    }
}
