use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use super::path::{shortest_path_len, PathLength};
use super::player::PlayerState;

/// A square on the board, addressed as (column, row) from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(col: usize, row: usize) -> Self {
        Cell { col, row }
    }

    /// Displace the cell by a signed step. Returns `None` below column/row 0;
    /// the upper bound is the graph's business.
    pub fn offset(self, dc: isize, dr: isize) -> Option<Cell> {
        Some(Cell {
            col: self.col.checked_add_signed(dc)?,
            row: self.row.checked_add_signed(dr)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    pub fn other(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A two-cell-long wall hung on the junction below-right of `anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallSegment {
    pub anchor: Cell,
    pub orientation: Orientation,
}

impl WallSegment {
    pub const fn new(anchor: Cell, orientation: Orientation) -> Self {
        WallSegment {
            anchor,
            orientation,
        }
    }

    /// The two edges this wall cuts.
    ///
    /// Horizontal: (c,r)-(c,r+1) and (c+1,r)-(c+1,r+1).
    /// Vertical: (c,r)-(c+1,r) and (c,r+1)-(c+1,r+1).
    pub fn severed_edges(self) -> [(Cell, Cell); 2] {
        let Cell { col: c, row: r } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => [
                (Cell::new(c, r), Cell::new(c, r + 1)),
                (Cell::new(c + 1, r), Cell::new(c + 1, r + 1)),
            ],
            Orientation::Vertical => [
                (Cell::new(c, r), Cell::new(c + 1, r)),
                (Cell::new(c, r + 1), Cell::new(c + 1, r + 1)),
            ],
        }
    }

    /// Walls that may not coexist with this one: the same wall, the
    /// perpendicular wall on the same junction, and the two collinear walls
    /// sharing half of its length.
    fn conflicting(self) -> impl Iterator<Item = WallSegment> {
        let (dc, dr) = match self.orientation {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        };
        let before = self
            .anchor
            .offset(-dc, -dr)
            .map(|anchor| WallSegment::new(anchor, self.orientation));
        let after = self
            .anchor
            .offset(dc, dr)
            .map(|anchor| WallSegment::new(anchor, self.orientation));
        [
            Some(self),
            Some(WallSegment::new(self.anchor, self.orientation.other())),
            before,
            after,
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for WallSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "{tag}@{}", self.anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction of a single orthogonal step from `from` to `to`, if any.
    fn between(from: Cell, to: Cell) -> Option<Direction> {
        DIRECTIONS
            .into_iter()
            .find(|d| from.offset(d.delta().0, d.delta().1) == Some(to))
    }
}

/// Undirected cell-adjacency graph over an N×N board, plus the walls that
/// have been cut into it.
///
/// Each cell's neighbor set is a 4-bit direction mask. Edges are always
/// symmetric: `a` lists `b` exactly when `b` lists `a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    size: usize,
    adjacency: Vec<u8>,
    walls: Vec<WallSegment>,
}

impl GridGraph {
    /// Create a fully connected `size`×`size` grid with no walls.
    pub fn new(size: usize) -> Self {
        let mut graph = GridGraph {
            size,
            adjacency: vec![0; size * size],
            walls: Vec::new(),
        };
        for row in 0..size {
            for col in 0..size {
                let cell = Cell::new(col, row);
                let mut mask = 0;
                for dir in DIRECTIONS {
                    let (dc, dr) = dir.delta();
                    if cell.offset(dc, dr).is_some_and(|n| graph.contains(n)) {
                        mask |= dir.bit();
                    }
                }
                graph.adjacency[row * size + col] = mask;
            }
        }
        graph
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Walls in the order they were committed.
    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    pub fn has_wall(&self, wall: WallSegment) -> bool {
        self.walls.contains(&wall)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.size && cell.row < self.size
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }

    /// Cells reachable from `cell` in one step. Empty for off-board cells.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let mask = if self.contains(cell) {
            self.adjacency[self.index(cell)]
        } else {
            0
        };
        DIRECTIONS
            .into_iter()
            .filter(move |d| mask & d.bit() != 0)
            .filter_map(move |d| cell.offset(d.delta().0, d.delta().1))
    }

    pub fn is_adjacent(&self, a: Cell, b: Cell) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        Direction::between(a, b).is_some_and(|d| self.adjacency[self.index(a)] & d.bit() != 0)
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let ends: u32 = self.adjacency.iter().map(|m| m.count_ones()).sum();
        ends as usize / 2
    }

    fn set_edge(&mut self, a: Cell, b: Cell, present: bool) {
        let Some(dir) = Direction::between(a, b) else {
            unreachable!("{a} and {b} are not orthogonal neighbors");
        };
        let (ia, ib) = (self.index(a), self.index(b));
        if present {
            self.adjacency[ia] |= dir.bit();
            self.adjacency[ib] |= dir.opposite().bit();
        } else {
            self.adjacency[ia] &= !dir.bit();
            self.adjacency[ib] &= !dir.opposite().bit();
        }
    }

    /// Whether `wall` sits on a valid junction and clashes with no placed wall.
    /// Says nothing about path connectivity.
    pub fn fits(&self, wall: WallSegment) -> bool {
        let limit = self.size.saturating_sub(1);
        if wall.anchor.col >= limit || wall.anchor.row >= limit {
            return false;
        }
        !wall.conflicting().any(|w| self.has_wall(w))
    }

    /// Try to place a wall. Both players must keep a route to their goal row.
    ///
    /// Returns `false` and leaves the graph untouched when the wall is out of
    /// bounds, clashes with a placed wall, or would cut either player off.
    pub fn place_wall(
        &mut self,
        anchor: Cell,
        orientation: Orientation,
        player_a: &PlayerState,
        player_b: &PlayerState,
    ) -> bool {
        let wall = WallSegment::new(anchor, orientation);
        if !self.fits(wall) {
            trace!(%wall, "wall rejected: out of bounds or overlapping");
            return false;
        }

        let edges = wall.severed_edges();
        // The overlap checks above rule this out; a missing edge means the
        // wall list and the adjacency sets disagree.
        let missing = edges
            .iter()
            .find(|(a, b)| !self.is_adjacent(*a, *b))
            .copied();
        debug_assert!(missing.is_none(), "{wall} cuts an edge that is already gone");
        if let Some((a, b)) = missing {
            error!(%wall, from = %a, to = %b, "edge already severed by an unrecorded wall");
            return false;
        }

        for (a, b) in edges {
            self.set_edge(a, b, false);
        }

        let open = self
            .path_length(player_a.position(), player_a.goal_row())
            .is_reachable()
            && self
                .path_length(player_b.position(), player_b.goal_row())
                .is_reachable();
        if !open {
            for (a, b) in edges {
                self.set_edge(a, b, true);
            }
            trace!(%wall, "wall rejected: would block a player");
            return false;
        }

        self.walls.push(wall);
        true
    }

    /// Shortest number of steps from `start` to any cell on `goal_row`.
    pub fn path_length(&self, start: Cell, goal_row: usize) -> PathLength {
        shortest_path_len(self, start, goal_row)
    }
}
