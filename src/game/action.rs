use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Cell, Orientation, WallSegment};

/// One turn's worth of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the pawn to the given cell (step or jump).
    Move(Cell),
    /// Hang a wall on a junction.
    PlaceWall(WallSegment),
}

impl Action {
    pub fn wall(anchor: Cell, orientation: Orientation) -> Self {
        Action::PlaceWall(WallSegment::new(anchor, orientation))
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Action::PlaceWall(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(cell) => write!(f, "move {cell}"),
            Action::PlaceWall(wall) => write!(f, "wall {wall}"),
        }
    }
}
