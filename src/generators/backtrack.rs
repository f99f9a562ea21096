use crate::maze::{Direction, Grid};
use crate::rng::Chooser;

/// Carves a maze into `grid` with randomized iterative depth-first
/// backtracking, starting from `start`.
///
/// A step opens the wall toward one unvisited neighbor of the current cell,
/// chosen uniformly by `chooser`; a cell with no unvisited neighbors
/// backtracks along the explicit stack. Every cell is entered exactly once,
/// and a wall is only ever opened toward a cell not yet visited, so the
/// open walls form a spanning tree by construction.
///
/// # Panics
/// If `start` is out of bounds (callers validate it first), or if the
/// bookkeeping invariant breaks and the stack underflows with cells still
/// unvisited.
pub fn carve(grid: &mut Grid, start: (u8, u8), chooser: &mut impl Chooser) {
    if !grid.is_in_bounds(start) {
        panic!(
            "carve start {:?} is out of bounds for a {}x{} grid",
            start,
            grid.side(),
            grid.side()
        );
    }

    let total = grid.side() as usize * grid.side() as usize;

    // Traversal bookkeeping lives here, not in the wall flags: the walls
    // describe topology only.
    let mut visited = vec![false; total];
    visited[grid.ravel_index(start.0, start.1)] = true;
    let mut visited_count = 1;

    let mut stack: Vec<(u8, u8)> = Vec::new();
    let mut current = start;

    while visited_count < total {
        let candidates: Vec<(Direction, (u8, u8))> = grid
            .neighbors_with_direction(current)
            .filter(|&(_, next)| !visited[grid.ravel_index(next.0, next.1)])
            .collect();

        if candidates.is_empty() {
            // Dead end: retreat to the most recent cell with options left.
            current = stack
                .pop()
                .expect("backtracked past the start cell with unvisited cells remaining");
            continue;
        }

        let (dir, next) = candidates[chooser.choose(candidates.len())];
        grid.open_wall(current, dir);

        stack.push(current);
        visited[grid.ravel_index(next.0, next.1)] = true;
        visited_count += 1;
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic chooser that always takes the first candidate.
    struct First;

    impl Chooser for First {
        fn choose(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_single_cell_maze_opens_no_walls() {
        let mut grid = Grid::new(1);
        carve(&mut grid, (0, 0), &mut First);
        assert!(grid[(0, 0)].is_sealed());
        assert_eq!(grid.open_edge_count(), 0);
    }

    #[test]
    fn test_first_choice_two_by_two_tree() {
        let mut grid = Grid::new(2);
        carve(&mut grid, (0, 0), &mut First);

        // Scan order is west, east, south, north. From (0,0) the first
        // unvisited neighbor is (1,0), then (1,1), then (0,1), giving the
        // tree (0,0)-(1,0)-(1,1)-(0,1).
        assert!(!grid[(0, 0)].has_wall(Direction::East));
        assert!(!grid[(1, 0)].has_wall(Direction::South));
        assert!(!grid[(1, 1)].has_wall(Direction::West));
        assert!(grid[(0, 0)].has_wall(Direction::South));

        assert_eq!(grid.open_edge_count(), 3);
    }

    #[test]
    fn test_every_cell_gets_connected() {
        let mut grid = Grid::new(5);
        carve(&mut grid, (2, 2), &mut crate::rng::get_rng(Some(3)));
        for y in 0..5 {
            for x in 0..5 {
                assert!(
                    !grid[(x, y)].is_sealed(),
                    "cell ({x}, {y}) was never reached"
                );
            }
        }
        assert_eq!(grid.open_edge_count(), 5 * 5 - 1);
    }
}
