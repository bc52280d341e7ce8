//! Core board logic: the cell-adjacency graph with wall bookkeeping,
//! breadth-first path lengths, pawn/wall move generation, and the
//! authoritative turn state.

mod action;
mod board;
mod moves;
mod path;
mod player;
mod state;

pub use action::Action;
pub use board::{Cell, GridGraph, Orientation, WallSegment};
pub use moves::{pawn_moves, MoveGenerator};
pub use path::{shortest_path_len, PathLength};
pub use player::{PlayerState, Seat, Side};
pub use state::{BoardConfig, GameState, SUPPORTED_SIZES};
