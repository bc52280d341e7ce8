use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::action::Action;
use super::board::{Cell, GridGraph, Orientation, WallSegment};
use super::player::PlayerState;

/// Legal pawn destinations for `active`, including straight and diagonal jumps
/// over an adjacent `waiting` pawn.
pub fn pawn_moves(graph: &GridGraph, active: &PlayerState, waiting: &PlayerState) -> Vec<Cell> {
    let from = active.position();
    let opponent = waiting.position();
    let mut moves = Vec::new();

    for next in graph.neighbors(from) {
        if next != opponent {
            moves.push(next);
            continue;
        }

        let dc = opponent.col as isize - from.col as isize;
        let dr = opponent.row as isize - from.row as isize;
        let straight = opponent
            .offset(dc, dr)
            .filter(|&landing| graph.is_adjacent(opponent, landing));

        match straight {
            Some(landing) => moves.push(landing),
            // Blocked behind the opponent: any other side of the opponent
            None => moves.extend(graph.neighbors(opponent).filter(|&c| c != from)),
        }
    }

    moves
}

/// Enumerates candidate actions for the search.
///
/// Wall candidates are limited to anchors within `wall_radius` junctions of
/// either pawn: for a pawn at (c, r) the anchors span columns
/// `c - radius ..= c + radius - 1` and the same for rows. Radius 1 covers
/// exactly the junctions touching the pawn's cell. Walls further out are
/// never proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGenerator {
    wall_radius: usize,
}

impl MoveGenerator {
    pub fn new(wall_radius: usize) -> Self {
        MoveGenerator { wall_radius }
    }

    /// Junction anchors inside the search window around both pawns.
    pub fn wall_anchors(&self, graph: &GridGraph, focus: &[Cell]) -> BTreeSet<Cell> {
        let limit = graph.size().saturating_sub(1);
        let radius = self.wall_radius as isize;
        let mut anchors = BTreeSet::new();
        for &center in focus {
            for dc in -radius..radius {
                for dr in -radius..radius {
                    if let Some(anchor) = center.offset(dc, dr) {
                        if anchor.col < limit && anchor.row < limit {
                            anchors.insert(anchor);
                        }
                    }
                }
            }
        }
        anchors
    }

    /// Walls in the window that `active` could legally place right now.
    /// Each candidate is tried on a throwaway clone of `graph`.
    pub fn wall_moves(
        &self,
        graph: &GridGraph,
        active: &PlayerState,
        waiting: &PlayerState,
    ) -> Vec<WallSegment> {
        if !active.has_walls() {
            return Vec::new();
        }

        let anchors = self.wall_anchors(graph, &[active.position(), waiting.position()]);
        let mut walls = Vec::new();
        for anchor in anchors {
            for orientation in Orientation::ALL {
                let wall = WallSegment::new(anchor, orientation);
                // Cheap overlap test first; only clone for the path check
                if !graph.fits(wall) {
                    continue;
                }
                let mut scratch = graph.clone();
                if scratch.place_wall(anchor, orientation, active, waiting) {
                    walls.push(wall);
                }
            }
        }
        walls
    }

    /// All candidate actions for `active`, uniformly shuffled with `rng`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        graph: &GridGraph,
        active: &PlayerState,
        waiting: &PlayerState,
        rng: &mut R,
    ) -> Vec<Action> {
        let mut actions: Vec<Action> = pawn_moves(graph, active, waiting)
            .into_iter()
            .map(Action::Move)
            .collect();
        actions.extend(
            self.wall_moves(graph, active, waiting)
                .into_iter()
                .map(Action::PlaceWall),
        );
        actions.shuffle(rng);
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(col: usize, row: usize, goal: usize, walls: u32) -> PlayerState {
        PlayerState::new(Seat::HumanSeat1, Cell::new(col, row), goal, walls)
    }

    fn sorted(mut cells: Vec<Cell>) -> Vec<Cell> {
        cells.sort();
        cells
    }

    #[test]
    fn test_opening_pawn_moves() {
        let graph = GridGraph::new(9);
        let p1 = at(4, 8, 0, 10);
        let p2 = at(4, 0, 8, 10);
        assert_eq!(
            sorted(pawn_moves(&graph, &p1, &p2)),
            vec![Cell::new(3, 8), Cell::new(4, 7), Cell::new(5, 8)]
        );
    }

    #[test]
    fn test_straight_jump_is_only_jump() {
        let graph = GridGraph::new(9);
        let mover = at(4, 5, 0, 10);
        let opponent = at(4, 4, 8, 10);
        let moves = sorted(pawn_moves(&graph, &mover, &opponent));
        assert_eq!(
            moves,
            vec![
                Cell::new(3, 5),
                Cell::new(4, 3),
                Cell::new(4, 6),
                Cell::new(5, 5)
            ]
        );
        assert!(!moves.contains(&Cell::new(3, 4)));
        assert!(!moves.contains(&Cell::new(5, 4)));
        assert!(!moves.contains(&Cell::new(4, 4)));
    }

    #[test]
    fn test_blocked_jump_goes_diagonal() {
        let mut graph = GridGraph::new(9);
        let mover = at(4, 5, 0, 10);
        let opponent = at(4, 4, 8, 10);
        // Wall behind the opponent cuts (4,3)-(4,4)
        assert!(graph.place_wall(Cell::new(4, 3), Orientation::Horizontal, &mover, &opponent));

        let moves = sorted(pawn_moves(&graph, &mover, &opponent));
        assert_eq!(
            moves,
            vec![
                Cell::new(3, 4),
                Cell::new(3, 5),
                Cell::new(4, 6),
                Cell::new(5, 4),
                Cell::new(5, 5)
            ]
        );
    }

    #[test]
    fn test_board_edge_blocks_straight_jump() {
        let graph = GridGraph::new(9);
        let mover = at(4, 1, 0, 10);
        let opponent = at(4, 0, 8, 10);
        let moves = sorted(pawn_moves(&graph, &mover, &opponent));
        assert_eq!(
            moves,
            vec![
                Cell::new(3, 0),
                Cell::new(3, 1),
                Cell::new(4, 2),
                Cell::new(5, 0),
                Cell::new(5, 1)
            ]
        );
    }

    #[test]
    fn test_wall_behind_mover_not_crossed() {
        let mut graph = GridGraph::new(9);
        let mover = at(4, 5, 0, 10);
        let opponent = at(0, 0, 8, 10);
        assert!(graph.place_wall(Cell::new(3, 4), Orientation::Horizontal, &mover, &opponent));
        let moves = pawn_moves(&graph, &mover, &opponent);
        assert!(!moves.contains(&Cell::new(4, 4)));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_no_walls_means_pawn_moves_only() {
        let graph = GridGraph::new(9);
        let p1 = at(4, 8, 0, 0);
        let p2 = at(4, 0, 8, 10);
        let mut rng = StdRng::seed_from_u64(7);
        let actions = MoveGenerator::new(2).generate(&graph, &p1, &p2, &mut rng);
        assert_eq!(actions.len(), 3);
        assert!(actions.iter().all(|a| !a.is_wall()));
    }

    #[test]
    fn test_wall_candidates_are_legal_and_local() {
        let graph = GridGraph::new(9);
        let p1 = at(4, 8, 0, 10);
        let p2 = at(4, 0, 8, 10);
        let generator = MoveGenerator::new(2);
        let walls = generator.wall_moves(&graph, &p1, &p2);
        assert!(!walls.is_empty());

        for wall in &walls {
            let near = |c: Cell| {
                (c.col as isize - 2..c.col as isize + 2).contains(&(wall.anchor.col as isize))
                    && (c.row as isize - 2..c.row as isize + 2).contains(&(wall.anchor.row as isize))
            };
            assert!(near(p1.position()) || near(p2.position()), "{wall} outside window");

            let mut scratch = graph.clone();
            assert!(scratch.place_wall(wall.anchor, wall.orientation, &p1, &p2));
        }
        // Generation must not touch the live graph
        assert!(graph.walls().is_empty());
    }

    #[test]
    fn test_wall_anchor_window() {
        let graph = GridGraph::new(9);
        let anchors = MoveGenerator::new(1).wall_anchors(&graph, &[Cell::new(4, 4)]);
        let expected: BTreeSet<Cell> = [(3, 3), (3, 4), (4, 3), (4, 4)]
            .into_iter()
            .map(|(c, r)| Cell::new(c, r))
            .collect();
        assert_eq!(anchors, expected);

        // Corner pawn: window clipped to the board
        let anchors = MoveGenerator::new(2).wall_anchors(&graph, &[Cell::new(8, 8)]);
        assert!(anchors.iter().all(|a| a.col < 8 && a.row < 8));
        assert_eq!(anchors.len(), 4);
    }

    #[test]
    fn test_existing_walls_excluded() {
        let mut graph = GridGraph::new(9);
        let p1 = at(4, 8, 0, 10);
        let p2 = at(4, 0, 8, 10);
        assert!(graph.place_wall(Cell::new(4, 7), Orientation::Horizontal, &p1, &p2));
        let walls = MoveGenerator::new(2).wall_moves(&graph, &p1, &p2);
        assert!(!walls.contains(&WallSegment::new(Cell::new(4, 7), Orientation::Horizontal)));
        assert!(!walls.contains(&WallSegment::new(Cell::new(4, 7), Orientation::Vertical)));
        assert!(!walls.contains(&WallSegment::new(Cell::new(3, 7), Orientation::Horizontal)));
        assert!(!walls.contains(&WallSegment::new(Cell::new(5, 7), Orientation::Horizontal)));
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let graph = GridGraph::new(9);
        let p1 = at(4, 8, 0, 10);
        let p2 = at(4, 0, 8, 10);
        let generator = MoveGenerator::new(2);

        let a = generator.generate(&graph, &p1, &p2, &mut StdRng::seed_from_u64(42));
        let b = generator.generate(&graph, &p1, &p2, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let pawn_count = a.iter().filter(|a| !a.is_wall()).count();
        assert_eq!(pawn_count, 3);
    }
}
