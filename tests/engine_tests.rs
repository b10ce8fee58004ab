//! Full-game scenarios driven through the public `GameEngine` API.

use dots_boxes::core::{CellId, Edge, GameConfig, GameError, PlayerId};
use dots_boxes::rules::{GameEngine, GamePhase, GameResult};

// =============================================================================
// Single Box
// =============================================================================

#[test]
fn test_one_by_one_game() {
    let mut game = GameEngine::new(1).unwrap();

    let moves = [
        (Edge::horizontal(0, 0), PlayerId::First, PlayerId::Second),
        (Edge::horizontal(1, 0), PlayerId::Second, PlayerId::First),
        (Edge::vertical(0, 0), PlayerId::First, PlayerId::Second),
    ];
    for (edge, mover, next) in moves {
        let outcome = game.claim_edge(edge).unwrap();
        assert_eq!(outcome.player, mover);
        assert_eq!(outcome.next_player, next);
        assert!(outcome.completed.is_empty());
        assert_eq!(game.result(), Err(GameError::NotFinished));
    }

    let outcome = game.claim_edge(Edge::vertical(0, 1)).unwrap();
    assert_eq!(outcome.player, PlayerId::Second);
    assert_eq!(outcome.completed.as_slice(), &[CellId::new(0, 0)]);
    assert!(outcome.finished);

    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.score(PlayerId::First), 0);
    assert_eq!(game.score(PlayerId::Second), 1);
    assert_eq!(game.result(), Ok(GameResult::Winner(PlayerId::Second)));
    assert_eq!(game.cell_owner(CellId::new(0, 0)), Ok(Some(PlayerId::Second)));
}

// =============================================================================
// Shared Edge
// =============================================================================

/// Leaves (0, 0) and (0, 1) each one side short of V(0, 1), First to move.
fn two_open_boxes() -> GameEngine {
    let edges = [
        Edge::horizontal(0, 0), // First
        Edge::horizontal(0, 1), // Second
        Edge::horizontal(1, 0), // First
        Edge::horizontal(1, 1), // Second
        Edge::vertical(0, 0),   // First
        Edge::vertical(0, 2),   // Second
    ];
    GameEngine::replay(GameConfig::new(2), edges).unwrap()
}

#[test]
fn test_shared_edge_completes_two_cells() {
    let mut game = two_open_boxes();
    assert_eq!(game.current_player(), PlayerId::First);
    assert_eq!(game.board().claimed_sides(CellId::new(0, 0)), Ok(3));
    assert_eq!(game.board().claimed_sides(CellId::new(0, 1)), Ok(3));

    let outcome = game.claim_edge(Edge::vertical(0, 1)).unwrap();

    assert_eq!(outcome.completed_count(), 2);
    assert!(outcome.completed.contains(&CellId::new(0, 0)));
    assert!(outcome.completed.contains(&CellId::new(0, 1)));
    assert_eq!(outcome.scores[PlayerId::First], 2);
    assert_eq!(outcome.next_player, PlayerId::First);
    assert!(!outcome.finished);

    assert_eq!(game.score(PlayerId::First), 2);
    assert_eq!(game.cell_owner(CellId::new(0, 0)), Ok(Some(PlayerId::First)));
    assert_eq!(game.cell_owner(CellId::new(0, 1)), Ok(Some(PlayerId::First)));
    assert_eq!(game.cell_owner(CellId::new(1, 0)), Ok(None));
    assert_eq!(game.last_move().map(|m| m.completed.len()), Some(2));
}

#[test]
fn test_extra_turn_then_pass() {
    let mut game = two_open_boxes();
    game.claim_edge(Edge::vertical(0, 1)).unwrap();

    // Still First; this one completes nothing.
    let outcome = game.claim_edge(Edge::horizontal(2, 0)).unwrap();
    assert_eq!(outcome.player, PlayerId::First);
    assert_eq!(outcome.next_player, PlayerId::Second);
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_two_by_two_sweep() {
    let mut game = two_open_boxes();
    game.claim_edge(Edge::vertical(0, 1)).unwrap(); // First takes two, keeps turn
    game.claim_edge(Edge::horizontal(2, 0)).unwrap(); // First, passes
    game.claim_edge(Edge::horizontal(2, 1)).unwrap(); // Second, passes
    game.claim_edge(Edge::vertical(1, 0)).unwrap(); // First, passes
    game.claim_edge(Edge::vertical(1, 2)).unwrap(); // Second, passes

    assert_eq!(game.current_player(), PlayerId::First);
    let outcome = game.claim_edge(Edge::vertical(1, 1)).unwrap();
    assert_eq!(outcome.completed_count(), 2);
    assert!(outcome.finished);

    assert_eq!(game.score(PlayerId::First), 4);
    assert_eq!(game.result(), Ok(GameResult::Winner(PlayerId::First)));
    assert_eq!(game.history().len(), 12);
    assert!(game.board().is_full());
}

#[test]
fn test_tie_game() {
    let mut game = two_open_boxes();
    game.claim_edge(Edge::vertical(0, 1)).unwrap(); // First takes the top row
    game.claim_edge(Edge::horizontal(2, 0)).unwrap(); // First, passes
    game.claim_edge(Edge::horizontal(2, 1)).unwrap(); // Second, passes
    game.claim_edge(Edge::vertical(1, 0)).unwrap(); // First, passes

    assert_eq!(game.current_player(), PlayerId::Second);
    let outcome = game.claim_edge(Edge::vertical(1, 1)).unwrap();
    assert_eq!(outcome.completed.as_slice(), &[CellId::new(1, 0)]);
    assert_eq!(outcome.next_player, PlayerId::Second);
    assert_eq!(game.result(), Err(GameError::NotFinished));

    let outcome = game.claim_edge(Edge::vertical(1, 2)).unwrap();
    assert_eq!(outcome.completed.as_slice(), &[CellId::new(1, 1)]);
    assert!(outcome.finished);

    assert_eq!(game.score(PlayerId::First), 2);
    assert_eq!(game.score(PlayerId::Second), 2);
    assert_eq!(game.result(), Ok(GameResult::Tie));
}

#[test]
fn test_replay_matches_live_play() {
    let edges: Vec<_> = Edge::all(3).collect();

    let mut live = GameEngine::new(3).unwrap();
    for &edge in &edges {
        live.claim_edge(edge).unwrap();
    }
    let replayed = GameEngine::replay(GameConfig::new(3), edges).unwrap();

    assert_eq!(live.scores(), replayed.scores());
    assert_eq!(live.result(), replayed.result());
    assert_eq!(live.board(), replayed.board());
    assert_eq!(live.history(), replayed.history());
}

#[test]
fn test_claim_after_game_over() {
    let mut game = GameEngine::replay(GameConfig::new(1), Edge::all(1)).unwrap();
    assert_eq!(game.claim_edge(Edge::horizontal(0, 0)), Err(GameError::GameOver));
    assert_eq!(game.claim_edge(Edge::horizontal(5, 5)), Err(GameError::GameOver));
}

// =============================================================================
// Queries and Errors
// =============================================================================

#[test]
fn test_out_of_range_queries() {
    let game = GameEngine::new(2).unwrap();

    assert_eq!(
        game.is_claimed(Edge::vertical(0, 3)),
        Err(GameError::InvalidMove(Edge::vertical(0, 3)))
    );
    assert_eq!(
        game.cell_owner(CellId::new(2, 0)),
        Err(GameError::InvalidCell(CellId::new(2, 0)))
    );
}

#[test]
fn test_config_from_json() {
    let config: GameConfig = serde_json::from_str(r#"{"dimension": 4}"#).unwrap();
    let game = GameEngine::with_config(config).unwrap();
    assert_eq!(game.legal_edges().count(), 40);

    let config: GameConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(GameEngine::with_config(config).unwrap().dimension(), 5);
}

#[test]
fn test_initialize_after_finish() {
    let mut game = GameEngine::replay(GameConfig::new(1), Edge::all(1)).unwrap();
    game.initialize(2).unwrap();

    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.scores()[PlayerId::Second], 0);
    assert!(game.claim_edge(Edge::horizontal(0, 0)).is_ok());
}

#[test]
fn test_board_display_after_play() {
    let game = two_open_boxes();
    let text = game.board().to_string();
    assert!(text.starts_with("+---+---+"));
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<GameEngine>();
}
