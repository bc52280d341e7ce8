use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{Action, GameState, Side};

/// One committed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub side: Side,
    pub action: Action,
}

/// Result of playing a single match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: Option<Side>,
    pub turns: usize,
    pub actions: Vec<Turn>,
}

/// Play `state` out with `agent_one` on Side One and `agent_two` on Side Two.
///
/// Stops when a pawn reaches its goal row, when the side to move has no
/// action, or after `max_turns` turns. An illegal action from an agent is
/// returned as an error.
#[instrument(skip_all, fields(one = agent_one.name(), two = agent_two.name()))]
pub fn play_match(
    mut state: GameState,
    agent_one: &mut dyn Agent,
    agent_two: &mut dyn Agent,
    max_turns: usize,
) -> Result<MatchRecord, PlayError> {
    let mut actions = Vec::new();

    while !state.is_terminal() && actions.len() < max_turns {
        let side = state.current_side();
        let agent: &mut dyn Agent = match side {
            Side::One => &mut *agent_one,
            Side::Two => &mut *agent_two,
        };
        let Some(action) = agent.select_action(&state) else {
            warn!(side = side.name(), "no legal action, ending match");
            break;
        };
        state.apply_action(action)?;
        debug!(turn = actions.len() + 1, side = side.name(), %action, "turn");
        actions.push(Turn { side, action });
    }

    let winner = state.winner();
    info!(
        winner = winner.map_or("none", Side::name),
        turns = actions.len(),
        "match finished"
    );
    Ok(MatchRecord {
        winner,
        turns: actions.len(),
        actions,
    })
}
