use serde::{Deserialize, Serialize};

use super::board::Cell;

/// Turn-order slot. Side One starts on the bottom row, Side Two on the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::One => "Player 1",
            Side::Two => "Player 2",
        }
    }
}

/// Who is sitting in a player slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    HumanSeat1,
    HumanSeat2,
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    seat: Seat,
    position: Cell,
    goal_row: usize,
    walls_remaining: u32,
}

impl PlayerState {
    pub fn new(seat: Seat, position: Cell, goal_row: usize, walls_remaining: u32) -> Self {
        PlayerState {
            seat,
            position,
            goal_row,
            walls_remaining,
        }
    }

    /// Standard opening placement: centered on the home edge, racing to the far one.
    pub fn starting(side: Side, seat: Seat, board_size: usize, walls: u32) -> Self {
        let mid = board_size / 2;
        let last = board_size.saturating_sub(1);
        match side {
            Side::One => PlayerState::new(seat, Cell::new(mid, last), 0, walls),
            Side::Two => PlayerState::new(seat, Cell::new(mid, 0), last, walls),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn goal_row(&self) -> usize {
        self.goal_row
    }

    pub fn walls_remaining(&self) -> u32 {
        self.walls_remaining
    }

    pub fn has_walls(&self) -> bool {
        self.walls_remaining > 0
    }

    pub fn has_won(&self) -> bool {
        self.position.row == self.goal_row
    }

    pub fn move_to(&mut self, cell: Cell) {
        self.position = cell;
    }

    /// Spend one wall. No-op when none are left.
    pub fn use_wall(&mut self) {
        self.walls_remaining = self.walls_remaining.saturating_sub(1);
    }
}
