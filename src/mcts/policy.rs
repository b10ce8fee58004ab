//! MCTS policies for selection and simulation.
//!
//! - `SelectionPolicy`: which branch to follow through the explored tree
//! - `SimulationPolicy`: how to play out a position beyond the tree

use crate::core::{Edge, GameRng, PlayerId, PlayerMap};
use crate::rules::{GameEngine, GameResult};

use super::config::MCTSConfig;
use super::node::MCTSNode;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which branch to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Pick a branch index of `node`, maximizing for `player`.
    fn select(&self, node: &MCTSNode, player: PlayerId, config: &MCTSConfig) -> usize;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Formula: Q(a) + c * sqrt(ln(N) / n(a))
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    fn select(&self, node: &MCTSNode, player: PlayerId, config: &MCTSConfig) -> usize {
        let ln_parent = (node.visits.max(1) as f64).ln();

        node.branches
            .iter()
            .enumerate()
            .map(|(i, branch)| {
                let exploration = if branch.visits == 0 {
                    f64::INFINITY
                } else {
                    config.exploration_constant * (ln_parent / branch.visits as f64).sqrt()
                };
                (i, branch.mean_reward(player) + exploration)
            })
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for playing out a position from a leaf node.
pub trait SimulationPolicy: Send + Sync {
    /// Pick the next edge to claim in a rollout. `None` ends the rollout.
    fn choose(&self, game: &GameEngine, rng: &mut GameRng) -> Option<Edge>;

    /// Play until the game ends or `max_depth` claims (0 = unlimited),
    /// returning rewards per player.
    fn simulate(&self, game: &mut GameEngine, rng: &mut GameRng, max_depth: u32) -> PlayerMap<f64> {
        let mut depth = 0;

        loop {
            if let Ok(result) = game.result() {
                return result_to_rewards(&result);
            }
            if max_depth > 0 && depth >= max_depth {
                return heuristic_eval(game);
            }

            let Some(edge) = self.choose(game, rng) else {
                return heuristic_eval(game);
            };
            if game.claim_edge(edge).is_err() {
                return heuristic_eval(game);
            }

            depth += 1;
        }
    }
}

/// Claims uniformly random edges.
#[derive(Clone, Debug, Default)]
pub struct RandomSimulation;

impl SimulationPolicy for RandomSimulation {
    fn choose(&self, game: &GameEngine, rng: &mut GameRng) -> Option<Edge> {
        let edges: Vec<Edge> = game.legal_edges().collect();
        rng.choose(&edges).copied()
    }
}

/// Box-grabbing rollout that plays like a careful beginner.
///
/// In order of preference, claims a random edge that:
/// 1. completes a box,
/// 2. does not give any box its third side,
/// 3. is anything legal.
#[derive(Clone, Debug, Default)]
pub struct GreedySimulation;

impl SimulationPolicy for GreedySimulation {
    fn choose(&self, game: &GameEngine, rng: &mut GameRng) -> Option<Edge> {
        greedy_choice(game, rng)
    }
}

/// The `GreedySimulation` move, usable as a standalone easy opponent.
pub fn greedy_choice(game: &GameEngine, rng: &mut GameRng) -> Option<Edge> {
    let board = game.board();
    let dimension = board.dimension();
    let sides_after = |edge: Edge| {
        edge.adjacent_cells(dimension)
            .into_iter()
            .map(move |cell| board.claimed_sides(cell).unwrap_or(0) + 1)
    };

    let mut completing = Vec::new();
    let mut safe = Vec::new();
    let mut rest = Vec::new();

    for edge in game.legal_edges() {
        if sides_after(edge).any(|sides| sides == 4) {
            completing.push(edge);
        } else if sides_after(edge).all(|sides| sides < 3) {
            safe.push(edge);
        } else {
            rest.push(edge);
        }
    }

    [completing, safe, rest]
        .into_iter()
        .find(|edges| !edges.is_empty())
        .and_then(|edges| rng.choose(&edges).copied())
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert a game result to per-player rewards: 1 for a win, 0.5 for a tie.
pub fn result_to_rewards(result: &GameResult) -> PlayerMap<f64> {
    PlayerMap::new(|player| match result {
        GameResult::Winner(winner) if *winner == player => 1.0,
        GameResult::Winner(_) => 0.0,
        GameResult::Tie => 0.5,
    })
}

/// Score an unfinished position by each player's share of owned boxes.
pub fn heuristic_eval(game: &GameEngine) -> PlayerMap<f64> {
    let scores = game.scores();
    let total = scores[PlayerId::First] + scores[PlayerId::Second];
    if total == 0 {
        return PlayerMap::with_value(0.5);
    }
    PlayerMap::new(|player| scores[player] as f64 / total as f64)
}
