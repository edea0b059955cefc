//! Synchronous rule evaluation.
//!
//! One step maps the whole grid to its next generation at once: the input
//! grid is never mutated, so every neighbor count reads the previous
//! generation regardless of traversal order. Edges are bounded, not
//! toroidal; neighbors outside the grid count as dead.

use std::collections::HashSet;

use super::{Cell, Grid, Ruleset};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Evaluation strategies with identical observable output.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Strategy {
    /// Evaluate every cell of the grid
    FullScan,
    /// Evaluate only live cells and their Moore halo. Any cell outside
    /// that set is dead with zero live neighbors, and no registered rule
    /// births at zero neighbors, so it stays dead.
    #[default]
    LiveHalo,
}

impl Strategy {
    /// All strategies, for benchmarking or shell selection
    pub const ALL: [Strategy; 2] = [Strategy::FullScan, Strategy::LiveHalo];

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::FullScan => "FullScan",
            Strategy::LiveHalo => "LiveHalo",
        }
    }

    /// Compute the next generation of `grid` under `rule`
    pub fn step(self, grid: &Grid, rule: Ruleset) -> Grid {
        match self {
            Strategy::FullScan => step_full_scan(grid, rule),
            Strategy::LiveHalo => step_live_halo(grid, rule),
        }
    }
}

/// Compute the next generation with the default strategy
pub fn step(grid: &Grid, rule: Ruleset) -> Grid {
    Strategy::default().step(grid, rule)
}

/// Count live cells among the 8 Moore neighbors that fall inside the grid
fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            r >= 0 && c >= 0 && grid.is_alive(r as usize, c as usize)
        })
        .count() as u8
}

fn step_full_scan(grid: &Grid, rule: Ruleset) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .map(|(row, col)| rule.evolve(grid.cell(row, col), live_neighbors(grid, row, col)))
        .collect();

    Grid::from_cells(rows, cols, cells)
}

fn step_live_halo(grid: &Grid, rule: Ruleset) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut candidates: HashSet<(usize, usize)> = HashSet::new();

    for (row, col) in grid.live_cells() {
        candidates.insert((row, col));
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols {
                candidates.insert((r as usize, c as usize));
            }
        }
    }

    let mut next = grid.empty_like();
    for (row, col) in candidates {
        let cell = rule.evolve(grid.cell(row, col), live_neighbors(grid, row, col));
        if cell.is_alive() {
            next.put(row, col, Cell::Alive);
        }
    }
    next
}

/// Positions whose state differs between two generations, row-major.
/// This is what gets handed to observers instead of a full grid copy.
pub fn changed_cells(old: &Grid, new: &Grid) -> Vec<(usize, usize)> {
    debug_assert_eq!(old.dimensions(), new.dimensions());
    old.iter_cells()
        .filter(|&(row, col, cell)| cell != new.cell(row, col))
        .map(|(row, col, _)| (row, col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(row, col) in live {
            grid.set(row, col, Cell::Alive).unwrap();
        }
        grid
    }

    fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.live_cells().collect()
    }

    #[test]
    fn test_block_is_a_still_life() {
        let block = grid_with(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        let mut grid = block.clone();
        for _ in 0..5 {
            grid = step(&grid, Ruleset::Conway);
        }
        assert_eq!(grid, block);
    }

    #[test]
    fn test_glider_translates_one_diagonal_per_period() {
        // Classic glider, placed away from the edges
        let start = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
        let mut grid = grid_with(12, 12, &start);
        for _ in 0..4 {
            grid = step(&grid, Ruleset::Conway);
        }
        let expected: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(live_set(&grid), expected);
    }

    #[test]
    fn test_seeds_kills_every_live_cell() {
        let grid = grid_with(8, 8, &[(1, 1), (1, 2), (4, 4), (4, 5), (5, 4)]);
        let next = step(&grid, Ruleset::Seeds);
        for (row, col) in grid.live_cells() {
            assert!(!next.is_alive(row, col));
        }
    }

    #[test]
    fn test_corner_cell_has_bounded_neighbors() {
        // A lone cell at (0, 0) has 5 of its 8 neighbor offsets out of
        // bounds; stepping must treat them as dead, not panic.
        let grid = grid_with(4, 4, &[(0, 0)]);
        let next = step(&grid, Ruleset::Conway);
        assert_eq!(next.population(), 0);

        // Under Life without Death the corner cell survives with 0 neighbors
        let next = step(&grid, Ruleset::LifeWithoutDeath);
        assert_eq!(live_set(&next), vec![(0, 0)]);
    }

    #[test]
    fn test_step_is_deterministic() {
        let grid = grid_with(10, 10, &[(2, 2), (2, 3), (2, 4), (5, 5), (5, 6), (6, 5)]);
        for rule in Ruleset::ALL {
            assert_eq!(step(&grid, rule), step(&grid, rule));
        }
    }

    #[test]
    fn test_strategies_agree_for_all_rules() {
        let grid = grid_with(
            9,
            9,
            &[(0, 0), (0, 8), (1, 2), (2, 2), (3, 2), (4, 4), (4, 5), (5, 4), (8, 8)],
        );
        for rule in Ruleset::ALL {
            assert_eq!(
                Strategy::FullScan.step(&grid, rule),
                Strategy::LiveHalo.step(&grid, rule),
                "strategies diverged under {}",
                rule.name()
            );
        }
    }

    #[test]
    fn test_changed_cells_diff() {
        // Blinker flips its arms: two cells die, two are born
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let next = step(&grid, Ruleset::Conway);
        assert_eq!(
            changed_cells(&grid, &next),
            vec![(1, 2), (2, 1), (2, 3), (3, 2)]
        );
    }

    #[test]
    fn test_input_grid_is_untouched() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = grid.clone();
        let _ = step(&grid, Ruleset::Conway);
        assert_eq!(grid, before);
    }
}
