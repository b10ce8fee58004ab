//! Core MCTS search algorithm.
//!
//! Dots and Boxes has no hidden information, so every node is expanded and
//! selection at each node maximizes the reward of whoever moves there. A
//! player who completes a box moves again, so a path through the tree does
//! not strictly alternate players.

use std::time::Instant;

use tracing::debug;

use crate::core::{Edge, GameRng, PlayerId, PlayerMap};
use crate::rules::GameEngine;

use super::config::MCTSConfig;
use super::node::{Branch, MCTSNode, NodeId};
use super::policy::{
    heuristic_eval, result_to_rewards, RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1,
};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// ```
/// use dots_boxes::mcts::{MCTSConfig, MCTSSearch};
/// use dots_boxes::rules::GameEngine;
///
/// let game = GameEngine::new(2).unwrap();
/// let mut search = MCTSSearch::new(MCTSConfig::default());
///
/// let edge = search.search(&game, 200).unwrap();
/// assert!(!game.is_claimed(edge).unwrap());
/// ```
pub struct MCTSSearch {
    config: MCTSConfig,
    tree: MCTSTree,
    rng: GameRng,
    selection: Box<dyn SelectionPolicy>,
    simulation: Box<dyn SimulationPolicy>,
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a search with UCB1 selection and random rollouts.
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            tree: MCTSTree::with_capacity(PlayerId::First, config.max_nodes.min(4096)),
            rng: GameRng::new(config.seed),
            config,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomSimulation),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    #[must_use]
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    #[must_use]
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run `iterations` rounds of search from `game` and return the best
    /// edge for the player to move.
    ///
    /// Returns `None` if the game is already finished. The caller's game is
    /// never modified; every iteration works on its own clone.
    pub fn search(&mut self, game: &GameEngine, iterations: u32) -> Option<Edge> {
        let start = Instant::now();
        self.stats.reset();
        self.rng = GameRng::new(self.config.seed);

        self.tree.reset(game.current_player());
        let root = self.tree.root();
        self.expand_node(root, game);

        let root_node = self.tree.get(root);
        if root_node.is_terminal {
            return None;
        }
        if root_node.branches.len() == 1 {
            return Some(root_node.branches[0].edge);
        }

        for _ in 0..iterations {
            let mut sim = game.clone();
            self.iteration(&mut sim);
            self.stats.iterations += 1;

            if self.tree.len() >= self.config.max_nodes {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            iterations = self.stats.iterations,
            simulations = self.stats.simulations,
            nodes = self.tree.len(),
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            "search complete"
        );

        self.best_edge()
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, game: &mut GameEngine) {
        let mut path: Vec<(NodeId, usize)> = Vec::new();
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);

            if node.is_terminal {
                let rewards = node.terminal_reward;
                self.stats.terminal_hits += 1;
                if let Some(rewards) = rewards {
                    self.backpropagate(&path, rewards);
                }
                return;
            }

            if self.config.max_depth > 0 && u32::from(node.depth) >= self.config.max_depth {
                self.backpropagate(&path, heuristic_eval(game));
                return;
            }

            if node.branches.is_empty() {
                self.backpropagate(&path, PlayerMap::with_value(0.5));
                return;
            }

            // Expand an untried branch and roll out from it.
            if node.has_unexpanded() {
                let index = self.select_unexpanded(current);
                path.push((current, index));

                let edge = self.tree.get(current).branches[index].edge;
                if game.claim_edge(edge).is_err() {
                    return;
                }
                self.expand_child(current, index, game);

                let rewards = self.simulate(game);
                self.stats.simulations += 1;
                self.backpropagate(&path, rewards);
                return;
            }

            // Fully expanded: descend along the best branch for the mover.
            let index = self.selection.select(node, node.to_move, &self.config);
            path.push((current, index));

            let branch = &self.tree.get(current).branches[index];
            let (edge, child) = (branch.edge, branch.child);
            if game.claim_edge(edge).is_err() {
                return;
            }
            current = child;
        }
    }

    /// Mark a node terminal or give it one branch per legal edge.
    fn expand_node(&mut self, node_id: NodeId, game: &GameEngine) {
        if let Ok(result) = game.result() {
            let node = self.tree.get_mut(node_id);
            node.is_terminal = true;
            node.terminal_reward = Some(result_to_rewards(&result));
            return;
        }

        let node = self.tree.get_mut(node_id);
        node.branches.extend(game.legal_edges().map(Branch::new));
        self.stats.nodes_expanded += 1;
    }

    fn select_unexpanded(&mut self, node_id: NodeId) -> usize {
        let unexpanded: Vec<usize> = self.tree.get(node_id).unexpanded_branches().collect();
        match unexpanded.len() {
            0 => 0,
            1 => unexpanded[0],
            len => unexpanded[self.rng.gen_index(len)],
        }
    }

    /// Create the child reached through `branch_index`; `game` is already
    /// past that claim.
    fn expand_child(&mut self, parent_id: NodeId, branch_index: usize, game: &GameEngine) {
        let depth = self.tree.get(parent_id).depth + 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let child_id = self
            .tree
            .alloc(MCTSNode::new(parent_id, game.current_player(), depth));
        self.tree.get_mut(parent_id).branches[branch_index].child = child_id;

        self.expand_node(child_id, game);
    }

    fn simulate(&mut self, game: &mut GameEngine) -> PlayerMap<f64> {
        let mut sim_rng = self.rng.fork();
        self.simulation.simulate(game, &mut sim_rng, self.config.max_depth)
    }

    fn backpropagate(&mut self, path: &[(NodeId, usize)], rewards: PlayerMap<f64>) {
        for &(node_id, branch_index) in path.iter().rev() {
            let node = self.tree.get_mut(node_id);
            node.visits += 1;

            let branch = &mut node.branches[branch_index];
            branch.visits += 1;
            for (player, reward) in rewards.iter() {
                branch.total_reward[player] += reward;
            }
        }
    }

    /// Most visited root branch, or a visit-weighted sample when the
    /// temperature is positive.
    fn best_edge(&mut self) -> Option<Edge> {
        let root = self.tree.root_node();

        if self.config.temperature <= 0.0 {
            return root.most_visited().map(|b| b.edge);
        }

        let exponent = 1.0 / self.config.temperature;
        let weights: Vec<f64> = root
            .branches
            .iter()
            .map(|b| f64::from(b.visits).powf(exponent))
            .collect();
        let mut rng = self.rng.fork();
        rng.choose_weighted(&weights)
            .and_then(|i| root.branches.get(i))
            .map(|b| b.edge)
            .or_else(|| root.most_visited().map(|b| b.edge))
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the search tree.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree {
        &self.tree
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Visit count of every root branch.
    pub fn edge_visits(&self) -> Vec<(Edge, u32)> {
        self.tree
            .root_node()
            .branches
            .iter()
            .map(|b| (b.edge, b.visits))
            .collect()
    }

    /// Root visit distribution, summing to 1.0 (uniform before any visit).
    pub fn edge_probabilities(&self) -> Vec<(Edge, f64)> {
        let root = self.tree.root_node();
        let total: u32 = root.branches.iter().map(|b| b.visits).sum();

        if total == 0 {
            let uniform = 1.0 / root.branches.len().max(1) as f64;
            return root.branches.iter().map(|b| (b.edge, uniform)).collect();
        }

        root.branches
            .iter()
            .map(|b| (b.edge, f64::from(b.visits) / f64::from(total)))
            .collect()
    }
}
