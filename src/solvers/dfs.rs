use crate::maze::Grid;
use crate::rng::Chooser;

/// Walks the generated maze from `start` to `goal` with iterative
/// depth-first search over open walls only, and returns the committed
/// cells of the walk (`start` included, `goal` excluded).
///
/// The explicit stack holds the path committed so far; a visited set keeps
/// the walk from re-entering abandoned branches, so the maze itself stays
/// untouched. Because the passage graph is a spanning tree, the walk
/// always terminates and the surviving stack is the unique simple path.
///
/// # Panics
/// If the stack underflows before the goal is reached. That cannot happen
/// on a grid produced by [`crate::generators::generate`]; it means the
/// grid was mutated in between and is no longer a connected tree.
pub fn find_path(
    grid: &Grid,
    start: (u8, u8),
    goal: (u8, u8),
    chooser: &mut impl Chooser,
) -> Vec<(u8, u8)> {
    if start == goal {
        return Vec::new();
    }

    let total = grid.side() as usize * grid.side() as usize;
    let mut visited = vec![false; total];
    visited[grid.ravel_index(start.0, start.1)] = true;

    let mut path: Vec<(u8, u8)> = Vec::new();
    let mut current = start;

    while current != goal {
        let candidates: Vec<(u8, u8)> = grid
            .open_neighbors(current)
            .filter(|&next| !visited[grid.ravel_index(next.0, next.1)])
            .collect();

        if candidates.is_empty() {
            // Dead end: this branch cannot reach the goal. Abandon it and
            // resume from the last committed cell.
            current = path.pop().unwrap_or_else(|| {
                panic!(
                    "no path from {:?} to {:?}: the grid is not a connected spanning tree",
                    start, goal
                )
            });
            continue;
        }

        let next = candidates[chooser.choose(candidates.len())];
        visited[grid.ravel_index(next.0, next.1)] = true;
        path.push(current);
        current = next;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    /// Deterministic chooser that always takes the first candidate.
    struct First;

    impl Chooser for First {
        fn choose(&mut self, _len: usize) -> usize {
            0
        }
    }

    /// 2x2 maze shaped as the chain (0,0)-(0,1)-(1,1)-(1,0).
    fn chain_down_grid() -> Grid {
        let mut grid = Grid::new(2);
        grid.open_wall((0, 0), Direction::South);
        grid.open_wall((0, 1), Direction::East);
        grid.open_wall((1, 1), Direction::North);
        grid
    }

    #[test]
    fn test_start_equals_goal_yields_empty_path() {
        let grid = Grid::new(1);
        assert_eq!(find_path(&grid, (0, 0), (0, 0), &mut First), vec![]);
    }

    #[test]
    fn test_straight_walk_commits_every_cell_before_goal() {
        let grid = chain_down_grid();
        let path = find_path(&grid, (0, 0), (1, 1), &mut First);
        assert_eq!(path, vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn test_dead_end_is_abandoned() {
        // Tree with a dead-end arm at (1,0): (1,0)-(0,0)-(0,1)-(1,1).
        // The first-choice walk goes east into the arm, backtracks, and
        // commits the south branch.
        let mut grid = Grid::new(2);
        grid.open_wall((0, 0), Direction::East);
        grid.open_wall((0, 0), Direction::South);
        grid.open_wall((0, 1), Direction::East);

        let path = find_path(&grid, (0, 0), (1, 1), &mut First);
        assert_eq!(path, vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn test_first_choice_round_trip_on_two_by_two() {
        // With a first-candidate chooser the carved tree is
        // (0,0)-(1,0)-(1,1)-(0,1) and the walk commits two cells.
        let mut grid = Grid::new(2);
        crate::generators::carve(&mut grid, (0, 0), &mut First);
        let path = find_path(&grid, (0, 0), (1, 1), &mut First);
        assert_eq!(path, vec![(0, 0), (1, 0)]);
        for pair in path.windows(2) {
            assert!(grid.open_neighbors(pair[0]).any(|n| n == pair[1]));
        }
    }

    #[test]
    fn test_solving_leaves_the_grid_untouched() {
        let grid = chain_down_grid();
        let before = grid.clone();
        let _ = find_path(&grid, (0, 0), (1, 1), &mut First);
        assert_eq!(grid, before);
    }

    #[test]
    #[should_panic(expected = "not a connected spanning tree")]
    fn test_unreachable_goal_panics() {
        // Two cells joined east-west; the south pair is walled off.
        let mut grid = Grid::new(2);
        grid.open_wall((0, 0), Direction::East);
        let _ = find_path(&grid, (0, 0), (1, 1), &mut First);
    }
}
