use super::{Cell, EngineError, Grid};

/// A named, finite rectangular boolean matrix that can be stamped onto
/// the simulation grid. Immutable after creation; the transform methods
/// return new patterns.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pattern {
    name: String,
    matrix: Vec<Vec<bool>>,
}

impl Pattern {
    /// Build a pattern from a row-major boolean matrix.
    /// Rejects empty names, empty matrices and ragged rows.
    pub fn from_rows(name: impl Into<String>, matrix: Vec<Vec<bool>>) -> Result<Self, EngineError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::MalformedPattern(
                "pattern name must not be empty".to_owned(),
            ));
        }

        let width = match matrix.first() {
            Some(row) => row.len(),
            None => {
                return Err(EngineError::MalformedPattern(
                    "pattern must have at least one row".to_owned(),
                ));
            }
        };
        if width == 0 {
            return Err(EngineError::MalformedPattern(
                "pattern rows must not be empty".to_owned(),
            ));
        }
        if matrix.iter().any(|row| row.len() != width) {
            return Err(EngineError::MalformedPattern(
                "pattern rows must all have the same width".to_owned(),
            ));
        }

        Ok(Self { name, matrix })
    }

    /// Build a pattern from the (row, col) positions of its live cells,
    /// sized to their bounding box.
    pub fn from_live_cells(
        name: impl Into<String>,
        cells: &[(usize, usize)],
    ) -> Result<Self, EngineError> {
        if cells.is_empty() {
            return Err(EngineError::MalformedPattern(
                "pattern has no live cells".to_owned(),
            ));
        }

        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;

        let mut matrix = vec![vec![false; width]; height];
        for &(row, col) in cells {
            matrix[row][col] = true;
        }
        Self::from_rows(name, matrix)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.matrix.len()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.matrix[0].len()
    }

    /// The underlying matrix, row-major. A thumbnail raster can be
    /// derived from this without further access to the pattern.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.matrix
    }

    /// Liveness at a matrix position; out-of-range positions are dead
    pub fn is_live(&self, row: usize, col: usize) -> bool {
        self.matrix
            .get(row)
            .is_some_and(|r| r.get(col).copied().unwrap_or(false))
    }

    /// Iterate the (row, col) offsets of live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.matrix.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &live)| live)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Rotate the pattern 90 degrees clockwise
    pub fn rotate_cw(&self) -> Self {
        let height = self.height();
        let width = self.width();
        let matrix = (0..width)
            .map(|col| (0..height).rev().map(|row| self.matrix[row][col]).collect())
            .collect();
        Self {
            name: self.name.clone(),
            matrix,
        }
    }

    /// Mirror the pattern left-right (reverse each row)
    pub fn flip_horizontal(&self) -> Self {
        let matrix = self
            .matrix
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Self {
            name: self.name.clone(),
            matrix,
        }
    }

    /// Mirror the pattern top-bottom (reverse the row order)
    pub fn flip_vertical(&self) -> Self {
        let matrix = self.matrix.iter().rev().cloned().collect();
        Self {
            name: self.name.clone(),
            matrix,
        }
    }

    /// Stamp the pattern's live cells onto `grid` at the given anchor.
    /// Targets outside the grid are dropped; dead pattern cells never
    /// clear live grid cells.
    pub fn stamp(&self, grid: &mut Grid, anchor_row: usize, anchor_col: usize) {
        for (dr, dc) in self.live_cells() {
            let row = anchor_row + dr;
            let col = anchor_col + dc;
            if grid.contains(row, col) {
                grid.put(row, col, Cell::Alive);
            }
        }
    }
}

/// Classic pattern library, grouped the way the pattern picker presents
/// them. All of these are made for the Conway rules.
pub mod presets {
    use super::Pattern;

    fn preset(name: &str, cells: &[(usize, usize)]) -> Pattern {
        Pattern::from_live_cells(name, cells).expect("preset patterns are well formed")
    }

    /// Glider - simplest spaceship, moves diagonally (period 4)
    pub fn glider() -> Pattern {
        preset("Glider", &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        preset("Blinker", &[(0, 0), (0, 1), (0, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        preset("Toad", &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)])
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        preset("Beacon", &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)])
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        preset(
            "Pulsar",
            &[
                (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
                (2, 0), (2, 5), (2, 7), (2, 12),
                (3, 0), (3, 5), (3, 7), (3, 12),
                (4, 0), (4, 5), (4, 7), (4, 12),
                (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
                (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
                (8, 0), (8, 5), (8, 7), (8, 12),
                (9, 0), (9, 5), (9, 7), (9, 12),
                (10, 0), (10, 5), (10, 7), (10, 12),
                (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
            ],
        )
    }

    /// Lightweight spaceship - moves horizontally (period 4)
    pub fn lwss() -> Pattern {
        preset(
            "LWSS",
            &[
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// Gosper glider gun - produces gliders indefinitely (period 30)
    pub fn glider_gun() -> Pattern {
        preset(
            "Gosper Glider Gun",
            &[
                (0, 24),
                (1, 22), (1, 24),
                (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
                (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
                (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
                (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
                (6, 10), (6, 16), (6, 24),
                (7, 11), (7, 15),
                (8, 12), (8, 13),
            ],
        )
    }

    /// R-pentomino - methuselah, stabilizes around generation 1103
    pub fn r_pentomino() -> Pattern {
        preset("R-pentomino", &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)])
    }

    /// Acorn - methuselah, stabilizes around generation 5206
    pub fn acorn() -> Pattern {
        preset(
            "Acorn",
            &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        preset("Block", &[(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// The full preset library
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}
