//! Monte Carlo Tree Search for Dots and Boxes.
//!
//! ## Overview
//!
//! - **Full-information search**: every position is expanded, and each node
//!   maximizes the reward of the player who moves there
//! - **Extra turns**: completing a box keeps the mover, so consecutive nodes
//!   may belong to the same player
//! - **Configurable policies**: selection (UCB1) and simulation (random or
//!   greedy box-grabbing rollouts)
//! - **Deterministic**: the same seed and position always give the same move
//!
//! ## Usage
//!
//! ```rust
//! use dots_boxes::mcts::{GreedySimulation, MCTSConfig, MCTSSearch};
//! use dots_boxes::rules::GameEngine;
//!
//! let mut game = GameEngine::new(3).unwrap();
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_seed(1))
//!     .with_simulation(GreedySimulation);
//!
//! if let Some(edge) = search.search(&game, 300) {
//!     game.claim_edge(edge).unwrap();
//! }
//!
//! for (edge, prob) in search.edge_probabilities() {
//!     println!("{edge}: {:.2}%", prob * 100.0);
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{Branch, MCTSNode, NodeId};
pub use policy::{
    greedy_choice, heuristic_eval, result_to_rewards, GreedySimulation, RandomSimulation,
    SelectionPolicy, SimulationPolicy, UCB1,
};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
