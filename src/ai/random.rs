use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::agent::Agent;
use crate::game::{Action, GameState, MoveGenerator};

/// An agent that picks uniformly among the move generator's candidates.
pub struct RandomAgent {
    rng: StdRng,
    generator: MoveGenerator,
}

impl RandomAgent {
    pub fn new(wall_radius: usize) -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
            generator: MoveGenerator::new(wall_radius),
        }
    }

    pub fn from_seed(wall_radius: usize, seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            generator: MoveGenerator::new(wall_radius),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Option<Action> {
        if state.is_terminal() {
            return None;
        }
        let side = state.current_side();
        let actions = self.generator.generate(
            state.graph(),
            state.player(side),
            state.player(side.other()),
            &mut self.rng,
        );
        actions.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
