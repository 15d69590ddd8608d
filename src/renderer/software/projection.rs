use crate::defs::TILE_SIZE;
use crate::engine::{Ray, Screen, WallHit};

/// Screen-space extent of one column's wall slice.
///
/// `top..bottom` are the rows actually covered, already clipped to the
/// screen; `height` is the unclipped projected height used for texturing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallStrip {
    pub height: i32,
    pub top: usize,
    pub bottom: usize,
}

/// Radial distance folded onto the view direction, removing fisheye.
/// `None` when the ray found no wall.
#[inline]
pub fn perp_distance(ray: &Ray, facing: f32) -> Option<f32> {
    ray.hit.map(|h| h.distance * (ray.angle - facing).cos())
}

/// Projected wall height in whole pixels for a wall `perp` units ahead.
#[inline]
pub fn strip_height(perp: f32, proj_dist: f32) -> i32 {
    // +∞ distance and NaN both cast to 0; a zero distance saturates
    ((TILE_SIZE / perp) * proj_dist).max(0.0) as i32
}

impl WallStrip {
    /// Centre a strip of `height` pixels on the screen's horizon.
    pub fn centred(height: i32, screen: &Screen) -> Self {
        let half = height / 2;
        let top = (screen.half_h - half).max(0) as usize;
        let bottom = screen.half_h.saturating_add(half).clamp(0, screen.h as i32) as usize;
        Self {
            height,
            top,
            bottom: bottom.max(top),
        }
    }

    /// Strip for `ray` seen from a viewpoint facing `facing`.
    pub fn project(ray: &Ray, facing: f32, screen: &Screen) -> Self {
        let height = perp_distance(ray, facing).map_or(0, |perp| strip_height(perp, screen.proj_dist));
        Self::centred(height, screen)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top >= self.bottom
    }

    /// Texture row sampled by screen row `y` of this strip.
    #[inline]
    pub fn texture_row(&self, y: usize, screen: &Screen, tex_h: usize) -> usize {
        let from_top = y as i64 + (self.height / 2) as i64 - screen.half_h as i64;
        let v = (from_top as f32 * (tex_h as f32 / self.height as f32)) as usize;
        v.min(tex_h.saturating_sub(1))
    }
}

/// Texture column for a hit: the wall-face coordinate along the line it
/// was found on, wrapped into the texture.
#[inline]
pub fn texture_column(hit: &WallHit, tex_w: usize) -> usize {
    let along = if hit.vertical { hit.point.y } else { hit.point.x };
    (along as i32).rem_euclid(tex_w as i32) as usize
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
