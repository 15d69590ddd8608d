use std::num::NonZeroU16;

use glam::Vec2;

use crate::world::projection_distance;

/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub half_h: i32, // pre-derived for speed
    pub proj_dist: f32,
}

impl Screen {
    pub fn new(w: usize, h: usize, fov: f32) -> Self {
        Self {
            w,
            h,
            half_h: (h / 2) as i32,
            proj_dist: projection_distance(w, fov),
        }
    }
}

/// Nearest wall found along one ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallHit {
    pub point: Vec2,
    pub distance: f32,
    /// Tile code of the wall cell; never open floor.
    pub content: NonZeroU16,
    /// Hit lies on a vertical grid line (an east/west wall face).
    pub vertical: bool,
}

/// One screen column's ray, rebuilt from scratch every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Cast angle folded into `[0, 2π)`.
    pub angle: f32,
    pub hit: Option<WallHit>,
}

impl Ray {
    /// Radial distance to the hit, `+∞` when the ray found nothing.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.hit.map_or(f32::INFINITY, |h| h.distance)
    }
}
