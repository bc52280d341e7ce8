use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument, warn};

use crate::game::{Action, GridGraph, MoveGenerator, PlayerState};

/// Search depth, candidate window, and evaluator weights.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies explored from the root, counting the root move.
    pub depth: usize,
    /// Wall candidates are only generated this many junctions around either pawn.
    pub wall_radius: usize,
    /// Multiplier on the opponent's distance. Above 1.0 favors blocking over racing.
    pub aggression: f64,
    /// Weight on (agent walls left - opponent walls left).
    pub wall_weight: f64,
    /// Score of a won position; a lost one scores the negation.
    pub win_score: f64,
    /// Distance substituted for an unreachable goal row.
    pub unreachable_distance: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 2,
            wall_radius: 2,
            aggression: 1.0,
            wall_weight: 0.0,
            win_score: 999_999.0,
            unreachable_distance: 1_000,
        }
    }
}

/// A simulated position: private copies of the board and both pawns, seen
/// from the searching agent's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub graph: GridGraph,
    pub agent: PlayerState,
    pub opponent: PlayerState,
}

impl Position {
    pub fn new(graph: GridGraph, agent: PlayerState, opponent: PlayerState) -> Self {
        Position {
            graph,
            agent,
            opponent,
        }
    }

    /// Play `action` for the agent (`agent_to_move`) or the opponent.
    /// Returns `false` if a wall no longer fits; the position is then unchanged.
    pub fn apply(&mut self, action: Action, agent_to_move: bool) -> bool {
        let (mover, waiting) = if agent_to_move {
            (&mut self.agent, &self.opponent)
        } else {
            (&mut self.opponent, &self.agent)
        };
        match action {
            Action::Move(cell) => {
                mover.move_to(cell);
                true
            }
            Action::PlaceWall(wall) => {
                if !self
                    .graph
                    .place_wall(wall.anchor, wall.orientation, mover, waiting)
                {
                    return false;
                }
                mover.use_wall();
                true
            }
        }
    }
}

/// Trait for scoring a non-terminal position from the agent's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, position: &Position) -> f64;
}

/// Path race: how much further the opponent has to go than the agent.
pub struct PathRaceHeuristic {
    aggression: f64,
    wall_weight: f64,
    unreachable_distance: usize,
}

impl PathRaceHeuristic {
    pub fn from_config(config: &SearchConfig) -> Self {
        PathRaceHeuristic {
            aggression: config.aggression,
            wall_weight: config.wall_weight,
            unreachable_distance: config.unreachable_distance,
        }
    }

    fn distance(&self, position: &Position, player: &PlayerState) -> f64 {
        position
            .graph
            .path_length(player.position(), player.goal_row())
            .or_sentinel(self.unreachable_distance) as f64
    }
}

impl Heuristic for PathRaceHeuristic {
    fn evaluate(&self, position: &Position) -> f64 {
        let agent_dist = self.distance(position, &position.agent);
        let opp_dist = self.distance(position, &position.opponent);
        let wall_diff = position.agent.walls_remaining() as f64
            - position.opponent.walls_remaining() as f64;

        opp_dist * self.aggression - agent_dist + self.wall_weight * wall_diff
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Every branch works on its own clone of the position, so the caller's
/// board and players are never touched.
pub struct SearchEngine {
    config: SearchConfig,
    generator: MoveGenerator,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
    nodes: u64,
}

impl SearchEngine {
    pub fn new(config: SearchConfig, rng: StdRng) -> Self {
        let heuristic = Box::new(PathRaceHeuristic::from_config(&config));
        Self::with_heuristic(config, rng, heuristic)
    }

    pub fn with_heuristic(config: SearchConfig, rng: StdRng, heuristic: Box<dyn Heuristic>) -> Self {
        SearchEngine {
            generator: MoveGenerator::new(config.wall_radius),
            config,
            heuristic,
            rng,
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent `get_best_move`.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    fn terminal_score(&self, position: &Position) -> Option<f64> {
        if position.agent.has_won() {
            Some(self.config.win_score)
        } else if position.opponent.has_won() {
            Some(-self.config.win_score)
        } else {
            None
        }
    }

    /// Score a position: win/loss if a pawn is home, heuristic otherwise.
    pub fn evaluate(&self, position: &Position) -> f64 {
        self.terminal_score(position)
            .unwrap_or_else(|| self.heuristic.evaluate(position))
    }

    pub fn search(
        &mut self,
        position: &Position,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(position) {
            return score;
        }
        if depth == 0 {
            return self.heuristic.evaluate(position);
        }

        let (mover, waiting) = if maximizing {
            (&position.agent, &position.opponent)
        } else {
            (&position.opponent, &position.agent)
        };
        let candidates = self
            .generator
            .generate(&position.graph, mover, waiting, &mut self.rng);

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut expanded = false;

        for action in candidates {
            let mut child = position.clone();
            if !child.apply(action, maximizing) {
                continue;
            }
            expanded = true;

            let score = self.search(&child, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        if expanded {
            best
        } else {
            self.heuristic.evaluate(position)
        }
    }

    /// Pick the agent's action. Returns `None` if either pawn is already home
    /// or the agent has no legal action at all.
    #[instrument(skip_all, fields(depth = self.config.depth, agent = %agent.position()))]
    pub fn get_best_move(
        &mut self,
        graph: &GridGraph,
        agent: &PlayerState,
        opponent: &PlayerState,
    ) -> Option<Action> {
        self.nodes = 0;
        let root = Position::new(graph.clone(), agent.clone(), opponent.clone());
        if let Some(score) = self.terminal_score(&root) {
            debug!(score, "position already decided");
            return None;
        }

        let candidates = self
            .generator
            .generate(&root.graph, &root.agent, &root.opponent, &mut self.rng);

        let child_depth = self.config.depth.saturating_sub(1);
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(Action, f64)> = None;

        for &action in &candidates {
            let mut child = root.clone();
            if !child.apply(action, true) {
                continue;
            }
            let score = self.search(&child, child_depth, alpha, beta, false);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((action, score));
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }

        match best {
            Some((action, score)) => {
                debug!(
                    candidates = candidates.len(),
                    nodes = self.nodes,
                    score,
                    %action,
                    "search complete"
                );
                Some(action)
            }
            None => {
                warn!(candidates = candidates.len(), "no candidate scored, picking at random");
                candidates.choose(&mut self.rng).copied()
            }
        }
    }
}
