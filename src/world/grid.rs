use glam::{Vec2, vec2};
use thiserror::Error;

use crate::defs::TILE_SIZE;

/// Content of one map cell: `0` is open floor, anything else is a wall whose
/// texture is `code - 1` in the [`TextureBank`](super::TextureBank).
pub type TileCode = u16;

pub const OPEN: TileCode = 0;

/// Shape problems detected while building a [`TileMap`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Rays are only guaranteed to stop if the arena is closed.
    #[error("border cell ({row}, {col}) is open")]
    OpenBorder { row: usize, col: usize },
}

/// Immutable, rectangular, closed grid of tile codes.
///
/// Cell `(row, col)` covers world-space
/// `[col * TILE_SIZE, (col + 1) * TILE_SIZE) × [row * TILE_SIZE, (row + 1) * TILE_SIZE)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap {
    rows: usize,
    cols: usize,
    cells: Vec<TileCode>,
}

impl TileMap {
    /// Build a map from row vectors, rejecting ragged or open-bordered input.
    pub fn new(rows: Vec<Vec<TileCode>>) -> Result<Self, MapError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(MapError::Empty);
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != cols {
                return Err(MapError::Ragged {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
        }

        let map = Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        };
        map.check_border()?;
        Ok(map)
    }

    fn check_border(&self) -> Result<(), MapError> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let edge = row == 0 || col == 0 || row == self.rows - 1 || col == self.cols - 1;
                if edge && self.cell_at(row, col) == OPEN {
                    return Err(MapError::OpenBorder { row, col });
                }
            }
        }
        Ok(())
    }

    /// The stock 13 × 20 arena with one pillar of every wall type.
    pub fn builtin() -> Self {
        #[rustfmt::skip]
        const ARENA: [[TileCode; 20]; 13] = [
            [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 8, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ];
        Self {
            rows: ARENA.len(),
            cols: ARENA[0].len(),
            cells: ARENA.iter().flatten().copied().collect(),
        }
    }

    /*──────────────────────── dimensions ────────────────────────*/

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// World-space extent along X.
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.cols as f32 * TILE_SIZE
    }

    /// World-space extent along Y.
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.rows as f32 * TILE_SIZE
    }

    /// Highest code in the map; the texture bank must hold at least this many.
    pub fn max_code(&self) -> TileCode {
        self.cells.iter().copied().max().unwrap_or(OPEN)
    }

    /*──────────────────────── queries ───────────────────────────*/

    /// Content of cell `(row, col)`. Callers must stay in bounds.
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> TileCode {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// `true` iff `(x, y)` lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn is_inside_bounds(&self, x: f32, y: f32) -> bool {
        (0.0..self.world_width()).contains(&x) && (0.0..self.world_height()).contains(&y)
    }

    /// Content of the cell containing `(x, y)`, or `None` outside the map.
    #[inline]
    pub fn code_at(&self, x: f32, y: f32) -> Option<TileCode> {
        if !self.is_inside_bounds(x, y) {
            return None;
        }
        let (row, col) = Self::world_to_cell(x, y);
        Some(self.cell_at(row, col))
    }

    /// Out-of-bounds points count as walls so every ray walk terminates.
    #[inline]
    pub fn is_wall_at(&self, x: f32, y: f32) -> bool {
        self.code_at(x, y).is_none_or(|code| code != OPEN)
    }

    /// Grid indices of a non-negative world point.
    #[inline]
    pub fn world_to_cell(x: f32, y: f32) -> (usize, usize) {
        ((y / TILE_SIZE).floor() as usize, (x / TILE_SIZE).floor() as usize)
    }

    #[inline]
    pub fn cell_center(row: usize, col: usize) -> Vec2 {
        vec2(
            (col as f32 + 0.5) * TILE_SIZE,
            (row as f32 + 0.5) * TILE_SIZE,
        )
    }

    /// World-space center of the whole map.
    pub fn center(&self) -> Vec2 {
        vec2(self.world_width() * 0.5, self.world_height() * 0.5)
    }

    /// Center of the first open cell in row-major order.
    pub fn first_open_cell(&self) -> Option<Vec2> {
        self.cells
            .iter()
            .position(|&c| c == OPEN)
            .map(|i| Self::cell_center(i / self.cols, i % self.cols))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn room(side: usize) -> TileMap {
        let rows = (0..side)
            .map(|r| {
                (0..side)
                    .map(|c| {
                        if r == 0 || c == 0 || r == side - 1 || c == side - 1 {
                            1
                        } else {
                            0
                        }
                    })
                    .collect()
            })
            .collect();
        TileMap::new(rows).unwrap()
    }

    #[test]
    fn outside_points_are_walls() {
        let map = room(5);
        let (w, h) = (map.world_width(), map.world_height());
        for (x, y) in [
            (-0.001, 100.0),
            (100.0, -0.001),
            (w, 100.0),
            (100.0, h),
            (w + 500.0, h + 500.0),
            (-1e6, -1e6),
            (f32::NAN, 10.0),
        ] {
            assert!(map.is_wall_at(x, y), "({x}, {y}) should be solid");
            assert!(!map.is_inside_bounds(x, y));
        }
    }

    #[test]
    fn interior_open_and_border_solid() {
        let map = room(5);
        let c = TileMap::cell_center(2, 2);
        assert!(!map.is_wall_at(c.x, c.y));
        assert!(map.is_wall_at(10.0, 10.0));
        // last pixel of the open cell vs first pixel of the border cell
        assert!(!map.is_wall_at(4.0 * TILE_SIZE - 0.5, 100.0));
        assert!(map.is_wall_at(4.0 * TILE_SIZE, 100.0));
    }

    #[test]
    fn bounds_are_half_open() {
        let map = room(4);
        assert!(map.is_inside_bounds(0.0, 0.0));
        assert!(!map.is_inside_bounds(map.world_width(), 0.0));
        assert!(!map.is_inside_bounds(0.0, map.world_height()));
    }

    #[test]
    fn cell_lookup_is_row_major() {
        let map = TileMap::new(vec![vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]).unwrap();
        assert_eq!(map.cell_at(0, 2), 3);
        assert_eq!(map.cell_at(2, 0), 6);
        assert_eq!(map.code_at(TILE_SIZE * 2.5, TILE_SIZE * 1.5), Some(5));
        assert_eq!(map.max_code(), 8);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(TileMap::new(vec![]), Err(MapError::Empty));
        assert_eq!(
            TileMap::new(vec![vec![1, 1, 1], vec![1, 1]]),
            Err(MapError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            TileMap::new(vec![vec![1, 1, 1], vec![1, 0, 0], vec![1, 1, 1]]),
            Err(MapError::OpenBorder { row: 1, col: 2 })
        );
    }

    #[test]
    fn builtin_arena_is_closed() {
        let map = TileMap::builtin();
        assert_eq!((map.rows(), map.cols()), (13, 20));
        assert_eq!(map.max_code(), 8);
        assert!(map.check_border().is_ok());
        let c = map.center();
        assert!(!map.is_wall_at(c.x, c.y));
        assert_eq!(map.first_open_cell(), Some(TileMap::cell_center(1, 1)));
    }
}
