//! Grid ray caster.
//!
//! Every ray is resolved with two independent walks over the tile grid:
//! one visiting the horizontal grid lines it crosses, one visiting the
//! vertical ones. The nearer of the two hits wins.
//!
//! ```text
//!   horizontal walk: y += ±TILE,  x += ±TILE / tan(a)
//!   vertical walk:   x += ±TILE,  y += ±TILE * tan(a)
//! ```
//!
//! A ray exactly parallel to one family of lines skips that walk instead of
//! feeding `0 / 0` into the step; every other steep or shallow angle simply
//! produces a huge step that leaves the map on the next iteration.

use std::f32::consts::{FRAC_PI_2, PI};
use std::num::NonZeroU16;

use glam::{Vec2, vec2};

use crate::defs::TILE_SIZE;
use crate::engine::types::{Ray, Screen, WallHit};
use crate::world::{TileMap, Viewpoint, normalize_angle};

/// Which quadrant a normalized angle points into (screen axes, +Y down).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Facing {
    down: bool,
    right: bool,
}

impl Facing {
    fn of(a: f32) -> Self {
        Self {
            down: a > 0.0 && a < PI,
            right: a < FRAC_PI_2 || a > 3.0 * FRAC_PI_2,
        }
    }
}

/// Result of a single grid-line walk.
#[derive(Clone, Copy, Debug)]
struct GridHit {
    point: Vec2,
    content: NonZeroU16,
    steps: usize,
}

/*──────────────────────────── grid walks ────────────────────────────*/

/// Step from `p` by `step` until the cell under `p + probe` is solid.
///
/// `probe` nudges the sample one unit across the grid line so the walk
/// tests the cell the ray is *entering*, not the one it leaves.
fn walk(map: &TileMap, mut p: Vec2, step: Vec2, probe: Vec2) -> Option<GridHit> {
    let mut steps = 0;
    while map.is_inside_bounds(p.x, p.y) {
        steps += 1;
        let check = p + probe;
        if map.is_wall_at(check.x, check.y) {
            // a probe past the map edge has no content: treat as leaving it
            let content = map.code_at(check.x, check.y).and_then(NonZeroU16::new)?;
            return Some(GridHit {
                point: p,
                content,
                steps,
            });
        }
        p += step;
    }
    None
}

fn horizontal_walk(map: &TileMap, origin: Vec2, tan: f32, facing: Facing) -> Option<GridHit> {
    if tan == 0.0 {
        return None; // runs along a horizontal line, never crosses one
    }

    let mut y = (origin.y / TILE_SIZE).floor() * TILE_SIZE;
    if facing.down {
        y += TILE_SIZE;
    }
    let x = origin.x + (y - origin.y) / tan;

    let ystep = if facing.down { TILE_SIZE } else { -TILE_SIZE };
    let mut xstep = TILE_SIZE / tan;
    if (!facing.right && xstep > 0.0) || (facing.right && xstep < 0.0) {
        xstep = -xstep;
    }

    let probe = vec2(0.0, if facing.down { 0.0 } else { -1.0 });
    walk(map, vec2(x, y), vec2(xstep, ystep), probe)
}

fn vertical_walk(map: &TileMap, origin: Vec2, tan: f32, facing: Facing) -> Option<GridHit> {
    if !tan.is_finite() {
        return None; // runs along a vertical line
    }

    let mut x = (origin.x / TILE_SIZE).floor() * TILE_SIZE;
    if facing.right {
        x += TILE_SIZE;
    }
    let y = origin.y + (x - origin.x) * tan;

    let xstep = if facing.right { TILE_SIZE } else { -TILE_SIZE };
    let mut ystep = TILE_SIZE * tan;
    if (!facing.down && ystep > 0.0) || (facing.down && ystep < 0.0) {
        ystep = -ystep;
    }

    let probe = vec2(if facing.right { 0.0 } else { -1.0 }, 0.0);
    walk(map, vec2(x, y), vec2(xstep, ystep), probe)
}

/*──────────────────────────── public API ────────────────────────────*/

/// Cast one ray from `origin` at `angle` and keep the nearest wall.
///
/// Equal distances resolve to the vertical-line hit.
pub fn cast_ray(map: &TileMap, origin: Vec2, angle: f32) -> Ray {
    let angle = normalize_angle(angle);
    let facing = Facing::of(angle);
    let tan = angle.tan();

    let to_hit = |g: GridHit, vertical: bool| WallHit {
        point: g.point,
        distance: origin.distance(g.point),
        content: g.content,
        vertical,
    };
    let horz = horizontal_walk(map, origin, tan, facing).map(|g| to_hit(g, false));
    let vert = vertical_walk(map, origin, tan, facing).map(|g| to_hit(g, true));

    let hit = match (horz, vert) {
        (Some(h), Some(v)) => Some(if h.distance < v.distance { h } else { v }),
        (h, v) => h.or(v),
    };
    Ray { angle, hit }
}

/// Angle of the ray through screen column `col`.
///
/// Columns are spread evenly over the projection plane, not over the view
/// angle, so wall height depends only on perpendicular distance.
#[inline]
pub fn column_angle(facing: f32, col: usize, screen: &Screen) -> f32 {
    let offset = col as i32 - (screen.w / 2) as i32;
    facing + (offset as f32 / screen.proj_dist).atan()
}

/// Rebuild `out` with one ray per screen column, left to right.
pub fn cast_all_rays(map: &TileMap, vp: &Viewpoint, screen: &Screen, out: &mut Vec<Ray>) {
    out.clear();
    out.extend((0..screen.w).map(|col| cast_ray(map, vp.pos, column_angle(vp.angle, col, screen))));
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
