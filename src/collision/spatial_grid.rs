// Implements a uniform spatial grid over body positions.

use tracing::debug;

use crate::collision::AABB;
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::vec2::Vec2;

use super::spatial_index::{clamp_point, clamp_region, IndexEntry, Partition, SpatialIndex};

/// Largest number of cells a grid may allocate.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Columns and rows needed to cover `width` x `height` with square cells,
/// at least one in each direction. Layouts above [`MAX_GRID_CELLS`] are
/// rejected.
pub fn grid_dimensions(width: f64, height: f64, cell_size: f64) -> PhysicsResult<(usize, usize)> {
    let cols = (width / cell_size).ceil().max(1.0);
    let rows = (height / cell_size).ceil().max(1.0);
    let limit = MAX_GRID_CELLS as f64;
    let too_many = || {
        PhysicsError::invalid_argument(format!(
            "grid of {cols}x{rows} cells exceeds the limit of {MAX_GRID_CELLS} cells"
        ))
    };
    // NaN fails both comparisons, so test for the accepted range
    if !(cols <= limit && rows <= limit) {
        return Err(too_many());
    }
    let (num_cols, num_rows) = (cols as usize, rows as usize);
    match num_cols.checked_mul(num_rows) {
        Some(count) if count <= MAX_GRID_CELLS => Ok((num_cols, num_rows)),
        _ => Err(too_many()),
    }
}

/// A uniform grid of square cells covering the world bounds.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    bounds: AABB,         // The overall area covered by the grid
    cell_size: f64,
    inv_cell_size: f64,   // 1.0 / cell_size, cached
    num_cols: usize,
    num_rows: usize,
    cells: Vec<Partition>, // Row-major, flattened
    len: usize,
}

impl SpatialGrid {
    /// Creates a grid covering `bounds` with cells of side `cell_size`.
    /// The last row and column may extend past `bounds`.
    pub fn new(bounds: AABB, cell_size: f64) -> PhysicsResult<Self> {
        if !(cell_size > 0.0 && cell_size.is_finite()) {
            return Err(PhysicsError::invalid_argument(format!(
                "grid cell size must be positive, got {cell_size}"
            )));
        }
        let inv_cell_size = 1.0 / cell_size;
        let (num_cols, num_rows) = grid_dimensions(bounds.width(), bounds.height(), cell_size)?;

        let mut cells = Vec::with_capacity(num_cols * num_rows);
        for row in 0..num_rows {
            for col in 0..num_cols {
                let min = bounds.min + Vec2::new(col as f64 * cell_size, row as f64 * cell_size);
                cells.push(Partition::new(AABB::new(min, min + Vec2::new(cell_size, cell_size))));
            }
        }

        debug!(
            ?bounds,
            cell_size,
            cols = num_cols,
            rows = num_rows,
            "created spatial grid"
        );

        Ok(SpatialGrid {
            bounds,
            cell_size,
            inv_cell_size,
            num_cols,
            num_rows,
            cells,
            len: 0,
        })
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_cols, self.num_rows)
    }

    /// World coordinates to (col, row), unclamped.
    #[inline]
    fn cell_coords(&self, point: Vec2) -> (isize, isize) {
        let local = point - self.bounds.min;
        let col = (local.x * self.inv_cell_size).floor() as isize;
        let row = (local.y * self.inv_cell_size).floor() as isize;
        (col, row)
    }

    /// (col, row) to a flat index, or `None` outside the grid.
    #[inline]
    fn cell_index(&self, col: isize, row: isize) -> Option<usize> {
        if col >= 0 && col < self.num_cols as isize && row >= 0 && row < self.num_rows as isize {
            Some(col as usize + row as usize * self.num_cols)
        } else {
            None
        }
    }

    #[inline]
    fn clamp_coords(&self, (col, row): (isize, isize)) -> (isize, isize) {
        (
            col.clamp(0, self.num_cols as isize - 1),
            row.clamp(0, self.num_rows as isize - 1),
        )
    }

    /// Inclusive range of cells overlapped by `region`, clamped to the grid.
    fn cell_range(&self, region: &AABB) -> (isize, isize, isize, isize) {
        let (min_col, min_row) = self.clamp_coords(self.cell_coords(region.min));
        let (max_col, max_row) = self.clamp_coords(self.cell_coords(region.max));
        (min_col, min_row, max_col, max_row)
    }
}

impl SpatialIndex for SpatialGrid {
    fn bounds(&self) -> &AABB {
        &self.bounds
    }

    fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
        self.len = 0;
    }

    fn insert(&mut self, entry: IndexEntry) {
        let (col, row) = self.clamp_coords(self.cell_coords(entry.position));
        if let Some(index) = self.cell_index(col, row) {
            self.cells[index].push(entry);
            self.len += 1;
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn nodes_by_location(&self, point: Vec2) -> Vec<&Partition> {
        let point = clamp_point(&self.bounds, point);
        // A point on a cell boundary touches the neighbouring cells too
        let (col, row) = self.cell_coords(point);
        let mut nodes = Vec::new();
        for r in (row - 1)..=row {
            for c in (col - 1)..=col {
                if let Some(index) = self.cell_index(c, r) {
                    let cell = &self.cells[index];
                    if cell.bounds().contains_point(point) {
                        nodes.push(cell);
                    }
                }
            }
        }
        if nodes.is_empty() {
            let (c, r) = self.clamp_coords((col, row));
            if let Some(index) = self.cell_index(c, r) {
                nodes.push(&self.cells[index]);
            }
        }
        nodes
    }

    fn query(&self, region: &AABB) -> Vec<IndexEntry> {
        let (min_col, min_row, max_col, max_row) = self.cell_range(&clamp_region(&self.bounds, region));
        let mut found = Vec::new();
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                if let Some(index) = self.cell_index(col, row) {
                    found.extend(
                        self.cells[index]
                            .elements()
                            .iter()
                            .filter(|e| region.contains_point(e.position)),
                    );
                }
            }
        }
        found
    }
}
