use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::board::{Cell, GridGraph};

/// Result of a shortest-path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathLength {
    Reachable(usize),
    Unreachable,
}

impl PathLength {
    pub fn is_reachable(self) -> bool {
        matches!(self, PathLength::Reachable(_))
    }

    pub fn steps(self) -> Option<usize> {
        match self {
            PathLength::Reachable(n) => Some(n),
            PathLength::Unreachable => None,
        }
    }

    /// Step count, with `Unreachable` mapped to a large finite distance.
    pub fn or_sentinel(self, sentinel: usize) -> usize {
        self.steps().unwrap_or(sentinel)
    }
}

/// Breadth-first search from `start`, stopping at the first cell on `goal_row`.
pub fn shortest_path_len(graph: &GridGraph, start: Cell, goal_row: usize) -> PathLength {
    if !graph.contains(start) {
        return PathLength::Unreachable;
    }

    let size = graph.size();
    let mut visited = vec![false; size * size];
    let mut queue = VecDeque::new();
    visited[start.row * size + start.col] = true;
    queue.push_back((start, 0));

    while let Some((cell, dist)) = queue.pop_front() {
        if cell.row == goal_row {
            return PathLength::Reachable(dist);
        }
        for next in graph.neighbors(cell) {
            let idx = next.row * size + next.col;
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back((next, dist + 1));
            }
        }
    }

    PathLength::Unreachable
}
