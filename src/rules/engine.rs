//! The game-state engine.
//!
//! `GameEngine` owns one board, the score sheet and the turn, and is the only
//! way to change any of them. Every call either applies a whole move or
//! rejects it before touching anything.

use im::Vector;
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::core::{CellId, Edge, GameConfig, GameError, MoveRecord, PlayerId, PlayerMap};

use super::outcome::{ClaimOutcome, GamePhase, GameResult};

/// A single game of Dots and Boxes.
///
/// ## Example
///
/// ```
/// use dots_boxes::core::{Edge, PlayerId};
/// use dots_boxes::rules::{GameEngine, GameResult};
///
/// let mut game = GameEngine::new(1)?;
/// game.claim_edge(Edge::horizontal(0, 0))?; // First, passes
/// game.claim_edge(Edge::horizontal(1, 0))?; // Second, passes
/// game.claim_edge(Edge::vertical(0, 0))?;   // First, passes
/// let outcome = game.claim_edge(Edge::vertical(0, 1))?; // Second completes the box
///
/// assert!(outcome.finished);
/// assert_eq!(game.result()?, GameResult::Winner(PlayerId::Second));
/// # Ok::<(), dots_boxes::core::GameError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    current: PlayerId,
    scores: PlayerMap<u32>,
    /// Persistent vector so search clones stay cheap.
    history: Vector<MoveRecord>,
}

impl GameEngine {
    /// Start a game on a `dimension`×`dimension` board.
    pub fn new(dimension: usize) -> Result<Self, GameError> {
        Self::with_config(GameConfig::new(dimension))
    }

    /// Start a game from a configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config.dimension)?,
            current: PlayerId::First,
            scores: PlayerMap::with_value(0),
            history: Vector::new(),
        })
    }

    /// Rebuild a game by claiming `edges` in order on a fresh board.
    ///
    /// Fails with the first rejected claim.
    pub fn replay(
        config: GameConfig,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GameError> {
        let mut game = Self::with_config(config)?;
        for edge in edges {
            game.claim_edge(edge)?;
        }
        Ok(game)
    }

    /// Start over on a fresh `dimension`×`dimension` board.
    ///
    /// All edges, owners, scores and history are cleared and `First` moves.
    /// On error the current game is left as it was.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, dimension: usize) -> Result<(), GameError> {
        let config = self.config.with_dimension(dimension);
        *self = Self::with_config(config)?;
        debug!(dimension, "game initialized");
        Ok(())
    }

    /// Start over on a board of the current dimension.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = PlayerId::First;
        self.scores = PlayerMap::with_value(0);
        self.history = Vector::new();
    }

    /// Draw `edge` for the current player.
    ///
    /// Completing one or two cells awards them to the mover, who then keeps
    /// the turn. Completing nothing passes the turn.
    ///
    /// # Errors
    ///
    /// - `GameOver` once every cell is owned
    /// - `InvalidMove` if the edge is not on the board
    /// - `AlreadyClaimed` if the edge is already drawn
    ///
    /// A rejected claim changes nothing, including whose turn it is.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn claim_edge(&mut self, edge: Edge) -> Result<ClaimOutcome, GameError> {
        if self.is_finished() {
            debug!("claim rejected: game over");
            return Err(GameError::GameOver);
        }

        let player = self.current;
        let completed = self.board.claim(edge, player).inspect_err(|error| {
            debug!(%error, "claim rejected");
        })?;

        self.scores[player] += completed.len() as u32;
        if completed.is_empty() {
            self.current = player.opponent();
        }

        let sequence = self.history.len() as u32;
        self.history.push_back(MoveRecord::new(player, edge, &completed, sequence));

        let finished = self.is_finished();
        debug!(
            completed = completed.len(),
            next = ?self.current,
            finished,
            "edge claimed"
        );
        if finished {
            info!(
                first = self.scores[PlayerId::First],
                second = self.scores[PlayerId::Second],
                result = %GameResult::from_scores(&self.scores),
                "game finished"
            );
        }

        Ok(ClaimOutcome {
            edge,
            player,
            completed,
            scores: self.scores,
            next_player: self.current,
            finished,
        })
    }

    /// Is every cell owned?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.board.is_full()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.is_finished() {
            GamePhase::Finished
        } else {
            GamePhase::InProgress
        }
    }

    /// Final result.
    ///
    /// # Errors
    ///
    /// `NotFinished` while any cell is unowned.
    pub fn result(&self) -> Result<GameResult, GameError> {
        if !self.is_finished() {
            return Err(GameError::NotFinished);
        }
        Ok(GameResult::from_scores(&self.scores))
    }

    // === Queries ===

    /// Has this edge been drawn?
    pub fn is_claimed(&self, edge: Edge) -> Result<bool, GameError> {
        self.board.is_claimed(edge)
    }

    /// Owner of a cell, `None` while it is incomplete.
    pub fn cell_owner(&self, cell: CellId) -> Result<Option<PlayerId>, GameError> {
        self.board.owner(cell)
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Cells owned by a player.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.scores
    }

    /// Unclaimed edges, in `Edge::all` order. Empty once the game is finished.
    pub fn legal_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.board.unclaimed_edges()
    }

    /// Board dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every accepted claim, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The most recent accepted claim.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(game: &GameEngine) -> (Board, PlayerId, PlayerMap<u32>, usize) {
        (game.board().clone(), game.current_player(), game.scores(), game.history().len())
    }

    #[test]
    fn test_new_game() {
        let game = GameEngine::new(3).unwrap();

        assert_eq!(game.dimension(), 3);
        assert_eq!(game.current_player(), PlayerId::First);
        assert_eq!(game.score(PlayerId::First), 0);
        assert_eq!(game.score(PlayerId::Second), 0);
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.legal_edges().count(), 24);
        assert!(game.history().is_empty());
        assert_eq!(game.result(), Err(GameError::NotFinished));
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            GameEngine::new(0).unwrap_err(),
            GameError::InvalidConfiguration { dimension: 0 }
        );
    }

    #[test]
    fn test_oversized_dimension() {
        for dimension in [1 << 33, usize::MAX] {
            assert_eq!(
                GameEngine::new(dimension).unwrap_err(),
                GameError::InvalidConfiguration { dimension }
            );
        }

        let mut game = GameEngine::new(2).unwrap();
        assert_eq!(
            game.initialize(usize::MAX),
            Err(GameError::InvalidConfiguration { dimension: usize::MAX })
        );
        assert_eq!(game.dimension(), 2);
    }

    #[test]
    fn test_non_completing_claim_passes_turn() {
        let mut game = GameEngine::new(2).unwrap();

        let outcome = game.claim_edge(Edge::horizontal(0, 0)).unwrap();

        assert_eq!(outcome.player, PlayerId::First);
        assert_eq!(outcome.completed_count(), 0);
        assert!(!outcome.extra_turn());
        assert_eq!(outcome.next_player, PlayerId::Second);
        assert_eq!(game.current_player(), PlayerId::Second);
        assert_eq!(game.is_claimed(Edge::horizontal(0, 0)), Ok(true));
    }

    #[test]
    fn test_completing_claim_keeps_turn() {
        let mut game = GameEngine::new(2).unwrap();
        // Three sides of cell (0, 0), alternating players.
        game.claim_edge(Edge::horizontal(0, 0)).unwrap();
        game.claim_edge(Edge::vertical(0, 0)).unwrap();
        game.claim_edge(Edge::horizontal(1, 0)).unwrap();
        assert_eq!(game.current_player(), PlayerId::Second);

        let outcome = game.claim_edge(Edge::vertical(0, 1)).unwrap();

        assert_eq!(outcome.completed.as_slice(), &[CellId::new(0, 0)]);
        assert_eq!(outcome.next_player, PlayerId::Second);
        assert_eq!(outcome.scores[PlayerId::Second], 1);
        assert_eq!(game.cell_owner(CellId::new(0, 0)), Ok(Some(PlayerId::Second)));
        assert!(!outcome.finished);
    }

    #[test]
    fn test_rejected_claims_change_nothing() {
        let mut game = GameEngine::new(2).unwrap();
        game.claim_edge(Edge::vertical(1, 1)).unwrap();
        let before = snapshot(&game);

        assert_eq!(
            game.claim_edge(Edge::vertical(1, 1)),
            Err(GameError::AlreadyClaimed(Edge::vertical(1, 1)))
        );
        assert_eq!(snapshot(&game), before);

        assert_eq!(
            game.claim_edge(Edge::horizontal(3, 0)),
            Err(GameError::InvalidMove(Edge::horizontal(3, 0)))
        );
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn test_initialize_resets_everything() {
        let mut game = GameEngine::new(2).unwrap();
        game.claim_edge(Edge::horizontal(0, 0)).unwrap();

        game.initialize(3).unwrap();

        assert_eq!(game.dimension(), 3);
        assert_eq!(game.current_player(), PlayerId::First);
        assert_eq!(game.board().claimed_edge_count(), 0);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_failed_initialize_keeps_game() {
        let mut game = GameEngine::new(2).unwrap();
        game.claim_edge(Edge::horizontal(0, 0)).unwrap();
        let before = snapshot(&game);

        assert_eq!(
            game.initialize(0),
            Err(GameError::InvalidConfiguration { dimension: 0 })
        );
        assert_eq!(snapshot(&game), before);
        assert_eq!(game.dimension(), 2);
    }

    #[test]
    fn test_reset() {
        let mut game = GameEngine::new(2).unwrap();
        game.claim_edge(Edge::horizontal(0, 0)).unwrap();

        game.reset();

        assert_eq!(game.dimension(), 2);
        assert_eq!(game.current_player(), PlayerId::First);
        assert_eq!(game.legal_edges().count(), 12);
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_history_records_moves() {
        let mut game = GameEngine::new(1).unwrap();
        game.claim_edge(Edge::horizontal(0, 0)).unwrap();
        game.claim_edge(Edge::horizontal(1, 0)).unwrap();

        let history: Vec<_> = game.history().iter().cloned().collect();
        assert_eq!(
            history,
            vec![
                MoveRecord::new(PlayerId::First, Edge::horizontal(0, 0), &[], 0),
                MoveRecord::new(PlayerId::Second, Edge::horizontal(1, 0), &[], 1),
            ]
        );
        assert_eq!(game.last_move().map(|m| m.sequence), Some(1));
    }

    #[test]
    fn test_finished_game_rejects_claims() {
        let edges: Vec<_> = Edge::all(1).collect();
        let mut game = GameEngine::replay(GameConfig::new(1), edges).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.phase(), GamePhase::Finished);
        let before = snapshot(&game);

        assert_eq!(game.claim_edge(Edge::horizontal(0, 0)), Err(GameError::GameOver));
        assert_eq!(game.claim_edge(Edge::vertical(9, 9)), Err(GameError::GameOver));
        assert_eq!(snapshot(&game), before);
        assert_eq!(game.legal_edges().count(), 0);
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        let edges = [Edge::horizontal(0, 0), Edge::horizontal(0, 0)];
        assert_eq!(
            GameEngine::replay(GameConfig::new(2), edges).unwrap_err(),
            GameError::AlreadyClaimed(Edge::horizontal(0, 0))
        );
    }
}
