use anyhow::ensure;

use crate::maze::Grid;
use crate::rng::get_rng;

mod backtrack;

pub use backtrack::carve;

/// Builds a fully generated `side`x`side` maze, carving from `start`.
///
/// The generated passage graph is a spanning tree over the cells: exactly
/// `side² - 1` open walls, connected and acyclic, so there is exactly one
/// simple path between any two cells.
///
/// Fails fast on invalid configuration: `side` of zero or a `start`
/// outside the grid.
pub fn generate(side: u8, start: (u8, u8), seed: Option<u64>) -> anyhow::Result<Grid> {
    ensure!(side >= 1, "maze side must be at least 1, got {side}");
    let mut grid = Grid::new(side);
    ensure!(
        grid.is_in_bounds(start),
        "generation start {start:?} is outside the {side}x{side} grid"
    );
    carve(&mut grid, start, &mut get_rng(seed));
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_side_is_rejected() {
        assert!(generate(0, (0, 0), Some(1)).is_err());
    }

    #[test]
    fn test_out_of_bounds_start_is_rejected() {
        assert!(generate(4, (4, 0), Some(1)).is_err());
        assert!(generate(4, (0, 4), Some(1)).is_err());
    }

    #[test]
    fn test_generated_maze_is_a_spanning_tree() {
        let grid = generate(8, (4, 4), Some(99)).unwrap();
        assert_eq!(grid.open_edge_count(), 8 * 8 - 1);
    }
}
