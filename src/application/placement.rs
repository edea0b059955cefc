use crate::domain::{Grid, Pattern};

/// A transient pattern-placement session: the pattern being placed, its
/// current orientation, and an optional anchor cell on the grid.
///
/// The session never mutates the grid. Target cells are recomputed from
/// the current anchor and orientation on demand, so moving the anchor,
/// re-orienting, or cancelling restores the prior view by construction.
/// `commit` is the only operation that writes, and it consumes the
/// session.
pub struct PlacementPreview {
    /// The pattern in its current orientation
    pattern: Pattern,
    anchor: Option<(usize, usize)>,
}

impl PlacementPreview {
    /// Start a session for `pattern` with no anchor yet
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            anchor: None,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn is_anchored(&self) -> bool {
        self.anchor.is_some()
    }

    /// Anchor the pattern's top-left corner at (row, col)
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.anchor = Some((row, col));
    }

    /// Rotate the working pattern 90 degrees clockwise, keeping the anchor
    pub fn rotate(&mut self) {
        self.pattern = self.pattern.rotate_cw();
    }

    /// Mirror the working pattern left-right, keeping the anchor
    pub fn flip_horizontal(&mut self) {
        self.pattern = self.pattern.flip_horizontal();
    }

    /// Mirror the working pattern top-bottom, keeping the anchor
    pub fn flip_vertical(&mut self) {
        self.pattern = self.pattern.flip_vertical();
    }

    /// The grid cells the oriented pattern's live cells land on, clipped
    /// to the grid. Empty while no anchor is set.
    pub fn target_cells(&self, grid: &Grid) -> Vec<(usize, usize)> {
        let Some((anchor_row, anchor_col)) = self.anchor else {
            return Vec::new();
        };

        self.pattern
            .live_cells()
            .map(|(dr, dc)| (anchor_row + dr, anchor_col + dc))
            .filter(|&(row, col)| grid.contains(row, col))
            .collect()
    }

    /// Stamp the oriented pattern onto the grid at the anchor. Dropped
    /// silently when no anchor was set. Union semantics: only live
    /// pattern cells are written, and only as Alive.
    pub fn commit(self, grid: &mut Grid) {
        if let Some((row, col)) = self.anchor {
            self.pattern.stamp(grid, row, col);
        }
    }
}
