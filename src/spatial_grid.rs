/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct for neighbor lookups.
 * It divides the viewport (plus one cell of margin on every side) into a
 * grid of cells, so a boid only has to look at the 3x3 block of cells
 * around it instead of the whole flock.
 *
 * Cell coordinates are clamped both when inserting and when querying, so
 * boids that drift past the margin still land in the border cells and two
 * boids closer than one cell size always end up in adjacent cells.
 * Query results are sorted so neighbors are visited in the same order as
 * a full scan.
 */

use nannou::prelude::*;

use crate::viewport::Viewport;

pub struct SpatialGrid {
    pub cell_size: f32,
    pub grid: Vec<Vec<usize>>,
    pub columns: usize,
    pub rows: usize,
    origin: Vec2,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, viewport: &Viewport) -> Self {
        let (cell_size, columns, rows) = Self::dimensions(cell_size, viewport);

        Self {
            cell_size,
            grid: vec![Vec::new(); columns * rows],
            columns,
            rows,
            origin: vec2(-cell_size, -cell_size),
        }
    }

    fn dimensions(cell_size: f32, viewport: &Viewport) -> (f32, usize, usize) {
        let cell_size = cell_size.max(1.0);
        let columns = (viewport.width / cell_size).ceil().max(1.0) as usize + 2;
        let rows = (viewport.height / cell_size).ceil().max(1.0) as usize + 2;
        (cell_size, columns, rows)
    }

    // True when the grid was built for this cell size and viewport
    pub fn fits(&self, cell_size: f32, viewport: &Viewport) -> bool {
        Self::dimensions(cell_size, viewport) == (self.cell_size, self.columns, self.rows)
    }

    // Convert a position to clamped (column, row) coordinates
    #[inline]
    fn cell_coords(&self, pos: Point2) -> (usize, usize) {
        let local = (pos - self.origin) / self.cell_size;
        let column = local.x.floor().clamp(0.0, (self.columns - 1) as f32) as usize;
        let row = local.y.floor().clamp(0.0, (self.rows - 1) as f32) as usize;
        (column, row)
    }

    #[inline]
    fn cell_index(&self, pos: Point2) -> usize {
        let (column, row) = self.cell_coords(pos);
        row * self.columns + column
    }

    // Clear the grid
    pub fn clear(&mut self) {
        for cell in &mut self.grid {
            cell.clear();
        }
    }

    // Insert a boid into the grid
    #[inline]
    pub fn insert(&mut self, boid_index: usize, position: Point2) {
        let cell = self.cell_index(position);
        self.grid[cell].push(boid_index);
    }

    // Move a boid that went from `from` to `to` into its new cell
    pub fn relocate(&mut self, boid_index: usize, from: Point2, to: Point2) {
        let old_cell = self.cell_index(from);
        let new_cell = self.cell_index(to);
        if old_cell == new_cell {
            return;
        }
        if let Some(slot) = self.grid[old_cell].iter().position(|&i| i == boid_index) {
            self.grid[old_cell].swap_remove(slot);
        }
        self.grid[new_cell].push(boid_index);
    }

    // Rebuild the grid from a list of positions
    pub fn rebuild(&mut self, positions: impl IntoIterator<Item = Point2>) {
        self.clear();
        for (i, position) in positions.into_iter().enumerate() {
            self.insert(i, position);
        }
    }

    // Get boid indices in and around the cell containing the position, ascending
    pub fn get_nearby_indices(&self, position: Point2) -> Vec<usize> {
        let (column, row) = self.cell_coords(position);
        let mut result = Vec::new();

        for check_row in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            let row_start = check_row * self.columns;
            for check_column in column.saturating_sub(1)..=(column + 1).min(self.columns - 1) {
                result.extend_from_slice(&self.grid[row_start + check_column]);
            }
        }

        result.sort_unstable();
        result
    }
}
