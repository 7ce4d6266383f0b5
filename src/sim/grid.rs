//! Static obstacle grid
//!
//! The level's terrain is a rectangular (possibly jagged) matrix of cells
//! indexed `[row][col]` = `[y][x]`. Actors move in continuous coordinates;
//! cell (col, row) covers the half-open square `[col, col+1) x [row, row+1)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A static per-cell hazard or barrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Obstacle {
    /// Solid terrain, blocks movement
    Wall,
    /// Lethal terrain
    Lava,
}

/// The obstacle matrix plus its cached dimensions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<Obstacle>>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from raw rows. Rows may be jagged; `width` is the longest
    /// row and cells past a row's end count as empty.
    pub fn from_rows(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            rows,
            width,
            height,
        }
    }

    /// Grid width in cells (longest row)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells (row count)
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Obstacle stored at a single cell, empty for out-of-range indices
    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> Option<Obstacle> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Obstacle query for a bounding box at `target` with extent `size`.
    ///
    /// Boundary rules take priority over cell contents:
    /// 1. Box bottom past the grid height is `Lava` (the level has no floor).
    /// 2. Box past the top, left or right edge is `Wall`.
    /// 3. Otherwise the first occupied cell the box overlaps wins, scanning
    ///    rows outer, columns inner, matching the `[row][col]` storage.
    ///
    /// Touching a cell edge exactly does not overlap that cell: the overlapped
    /// range is `floor(left)..ceil(right)` by `floor(top)..ceil(bottom)`.
    pub fn obstacle_at(&self, target: Vec2, size: Vec2) -> Option<Obstacle> {
        let left = target.x;
        let top = target.y;
        let right = target.x + size.x;
        let bottom = target.y + size.y;

        if bottom > self.height as f32 {
            return Some(Obstacle::Lava);
        }
        if top < 0.0 || left < 0.0 || right > self.width as f32 {
            return Some(Obstacle::Wall);
        }

        let col_start = left.floor() as usize;
        let col_end = right.ceil() as usize;
        let row_start = top.floor() as usize;
        let row_end = bottom.ceil() as usize;

        for row in row_start..row_end {
            for col in col_start..col_end {
                if let Some(obstacle) = self.cell(col, row) {
                    return Some(obstacle);
                }
            }
        }

        None
    }
}
