use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::Agent;
use super::minimax::{SearchConfig, SearchEngine};
use crate::game::{Action, GameState, GridGraph, PlayerState, Side};

/// The computer player: owns a search engine and knows which side it plays.
pub struct AgentController {
    side: Side,
    engine: SearchEngine,
}

impl AgentController {
    pub fn new(side: Side, config: SearchConfig, rng: StdRng) -> Self {
        AgentController {
            side,
            engine: SearchEngine::new(config, rng),
        }
    }

    pub fn from_seed(side: Side, config: SearchConfig, seed: u64) -> Self {
        Self::new(side, config, StdRng::seed_from_u64(seed))
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Best action for this controller's side, or `None` once the game is
    /// decided. Inputs are only read; the caller commits the returned action.
    pub fn get_best_move(
        &mut self,
        board: &GridGraph,
        player1: &PlayerState,
        player2: &PlayerState,
    ) -> Option<Action> {
        let (agent, opponent) = match self.side {
            Side::One => (player1, player2),
            Side::Two => (player2, player1),
        };
        self.engine.get_best_move(board, agent, opponent)
    }
}

impl Agent for AgentController {
    fn select_action(&mut self, state: &GameState) -> Option<Action> {
        if state.is_terminal() {
            return None;
        }
        debug_assert_eq!(state.current_side(), self.side, "asked to move out of turn");
        self.get_best_move(
            state.graph(),
            state.player(Side::One),
            state.player(Side::Two),
        )
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
