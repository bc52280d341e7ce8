use tracing::{debug, info};

use super::{pawn_moves, Action, Cell, GridGraph, PlayerState, Seat, Side, WallSegment};
use crate::error::PlayError;

/// Board sizes the rules are tuned for.
pub const SUPPORTED_SIZES: [usize; 4] = [5, 7, 9, 11];

/// Board construction parameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Cells per side. Goal rows are 0 and `size - 1`.
    pub size: usize,
    /// Walls each player may place over the whole match.
    pub walls_per_player: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            size: 9,
            walls_per_player: 10,
        }
    }
}

/// Authoritative match state: the board graph, both pawns, and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    graph: GridGraph,
    players: [PlayerState; 2],
    current: Side,
    winner: Option<Side>,
}

impl GameState {
    /// Fresh match with both pawns on their home edges. Side One moves first.
    pub fn new(config: &BoardConfig, seat_one: Seat, seat_two: Seat) -> Self {
        let size = config.size;
        let walls = config.walls_per_player;
        GameState {
            graph: GridGraph::new(size),
            players: [
                PlayerState::starting(Side::One, seat_one, size, walls),
                PlayerState::starting(Side::Two, seat_two, size, walls),
            ],
            current: Side::One,
            winner: None,
        }
    }

    /// Assemble a state from parts, e.g. to set up a position.
    pub fn from_parts(graph: GridGraph, one: PlayerState, two: PlayerState, current: Side) -> Self {
        let winner = if one.has_won() {
            Some(Side::One)
        } else if two.has_won() {
            Some(Side::Two)
        } else {
            None
        };
        GameState {
            graph,
            players: [one, two],
            current,
            winner,
        }
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    pub fn walls(&self) -> &[WallSegment] {
        self.graph.walls()
    }

    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side.index()]
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Legal pawn destinations for the side to move.
    pub fn pawn_moves(&self) -> Vec<Cell> {
        if self.is_terminal() {
            return Vec::new();
        }
        let side = self.current;
        pawn_moves(&self.graph, self.player(side), self.player(side.other()))
    }

    /// Validate and commit an action for the side to move, then pass the turn.
    /// A rejected action leaves the state unchanged.
    pub fn apply_action(&mut self, action: Action) -> Result<(), PlayError> {
        if self.is_terminal() {
            return Err(PlayError::GameOver);
        }

        let side = self.current;
        match action {
            Action::Move(to) => {
                if !self.pawn_moves().contains(&to) {
                    return Err(PlayError::IllegalMove {
                        from: self.player(side).position(),
                        to,
                    });
                }
                self.players[side.index()].move_to(to);
            }
            Action::PlaceWall(wall) => {
                if !self.player(side).has_walls() {
                    return Err(PlayError::NoWallsRemaining);
                }
                let [one, two] = &self.players;
                if !self.graph.place_wall(wall.anchor, wall.orientation, one, two) {
                    return Err(PlayError::IllegalWall(wall));
                }
                self.players[side.index()].use_wall();
            }
        }
        debug!(side = side.name(), %action, "action committed");

        if self.player(side).has_won() {
            info!(winner = side.name(), "goal row reached");
            self.winner = Some(side);
        }
        self.current = side.other();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Orientation;

    fn new_game(size: usize) -> GameState {
        let config = BoardConfig {
            size,
            walls_per_player: 10,
        };
        GameState::new(&config, Seat::HumanSeat1, Seat::Computer)
    }

    #[test]
    fn test_initial_state() {
        let state = new_game(9);
        assert_eq!(state.current_side(), Side::One);
        assert!(!state.is_terminal());
        assert_eq!(state.player(Side::One).position(), Cell::new(4, 8));
        assert_eq!(state.player(Side::Two).position(), Cell::new(4, 0));
        assert_eq!(state.pawn_moves().len(), 3);
        assert!(state.walls().is_empty());
    }

    #[test]
    fn test_board_size_scales_goal_rows() {
        let state = new_game(5);
        assert_eq!(state.player(Side::One).goal_row(), 0);
        assert_eq!(state.player(Side::Two).goal_row(), 4);
        assert_eq!(state.player(Side::Two).walls_remaining(), 10);
    }

    #[test]
    fn test_pawn_move_advances_turn() {
        let mut state = new_game(9);
        state.apply_action(Action::Move(Cell::new(4, 7))).unwrap();
        assert_eq!(state.player(Side::One).position(), Cell::new(4, 7));
        assert_eq!(state.current_side(), Side::Two);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut state = new_game(9);
        let before = state.clone();
        let err = state.apply_action(Action::Move(Cell::new(4, 5))).unwrap_err();
        assert_eq!(
            err,
            PlayError::IllegalMove {
                from: Cell::new(4, 8),
                to: Cell::new(4, 5)
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_wall_spends_budget() {
        let mut state = new_game(9);
        state
            .apply_action(Action::wall(Cell::new(4, 1), Orientation::Horizontal))
            .unwrap();
        assert_eq!(state.player(Side::One).walls_remaining(), 9);
        assert_eq!(state.walls().len(), 1);
        assert_eq!(state.current_side(), Side::Two);

        // Side Two tries the same spot
        let err = state
            .apply_action(Action::wall(Cell::new(4, 1), Orientation::Horizontal))
            .unwrap_err();
        assert!(matches!(err, PlayError::IllegalWall(_)));
        assert_eq!(state.player(Side::Two).walls_remaining(), 10);
        assert_eq!(state.current_side(), Side::Two);
    }

    #[test]
    fn test_no_walls_remaining() {
        let config = BoardConfig {
            size: 5,
            walls_per_player: 0,
        };
        let mut state = GameState::new(&config, Seat::HumanSeat1, Seat::HumanSeat2);
        assert_eq!(
            state.apply_action(Action::wall(Cell::new(0, 0), Orientation::Vertical)),
            Err(PlayError::NoWallsRemaining)
        );
    }

    #[test]
    fn test_reaching_goal_ends_game() {
        let graph = GridGraph::new(5);
        let one = PlayerState::new(Seat::HumanSeat1, Cell::new(0, 1), 0, 10);
        let two = PlayerState::new(Seat::Computer, Cell::new(4, 0), 4, 10);
        let mut state = GameState::from_parts(graph, one, two, Side::One);

        state.apply_action(Action::Move(Cell::new(0, 0))).unwrap();
        assert_eq!(state.winner(), Some(Side::One));
        assert!(state.pawn_moves().is_empty());
        assert_eq!(
            state.apply_action(Action::Move(Cell::new(4, 1))),
            Err(PlayError::GameOver)
        );
    }
}
