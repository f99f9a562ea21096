use anyhow::ensure;

use crate::maze::Grid;
use crate::rng::get_rng;

mod dfs;

pub use dfs::find_path;

/// Recovers the unique path through a generated maze from the top-left
/// cell `(0, 0)` to the bottom-right cell `(side-1, side-1)`.
///
/// The returned sequence holds the committed cells of the walk: the start
/// and every cell up to, but not including, the goal. Its length equals
/// the number of edges traversed, and a single-cell maze yields an empty
/// path. The grid is not mutated.
pub fn solve(grid: &Grid, seed: Option<u64>) -> anyhow::Result<Vec<(u8, u8)>> {
    ensure!(grid.side() >= 1, "cannot solve an empty grid");
    let goal = (grid.side() - 1, grid.side() - 1);
    solve_between(grid, (0, 0), goal, seed)
}

/// Like [`solve`], but between explicit endpoints.
///
/// Fails fast when either endpoint lies outside the grid.
pub fn solve_between(
    grid: &Grid,
    start: (u8, u8),
    goal: (u8, u8),
    seed: Option<u64>,
) -> anyhow::Result<Vec<(u8, u8)>> {
    let side = grid.side();
    ensure!(
        grid.is_in_bounds(start),
        "path start {start:?} is outside the {side}x{side} grid"
    );
    ensure!(
        grid.is_in_bounds(goal),
        "path goal {goal:?} is outside the {side}x{side} grid"
    );
    Ok(find_path(grid, start, goal, &mut get_rng(seed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate;

    #[test]
    fn test_empty_grid_is_rejected() {
        assert!(solve(&Grid::new(0), None).is_err());
    }

    #[test]
    fn test_out_of_bounds_endpoints_are_rejected() {
        let grid = generate(3, (1, 1), Some(5)).unwrap();
        assert!(solve_between(&grid, (3, 0), (2, 2), None).is_err());
        assert!(solve_between(&grid, (0, 0), (0, 3), None).is_err());
    }

    #[test]
    fn test_single_cell_maze_has_an_empty_path() {
        let grid = generate(1, (0, 0), Some(5)).unwrap();
        assert_eq!(solve(&grid, Some(5)).unwrap(), vec![]);
    }
}
