//! Top-down overlay drawn over the finished 3-D view.

use crate::{
    defs::TILE_SIZE,
    renderer::{FrameContext, Rgba, software::Software},
    world::OPEN,
};

const WALL_COL: Rgba = 0xFF_FF_FF_FF;
const OPEN_COL: Rgba = 0xFF_00_00_00;
const VIEWER_COL: Rgba = 0xFF_FF_FF_FF;
const RAY_COL: Rgba = 0xFF_FF_00_00;

/// Only every n-th ray is traced on the map.
const RAY_STRIDE: usize = 50;
/// Heading line length in overlay pixels.
const HEADING_LEN: f32 = 40.0;
/// Viewer marker side in world units.
const VIEWER_SIZE: f32 = 5.0;

pub(super) fn draw(sw: &mut Software, frame: &FrameContext, scale: f32) {
    if scale <= 0.0 {
        return;
    }
    let map = frame.map;
    let px = |v: f32| (v * scale) as i32;

    /* tiles ---------------------------------------------------------------*/
    let tile_px = px(TILE_SIZE).max(1);
    for row in 0..map.rows() {
        for col in 0..map.cols() {
            let c = if map.cell_at(row, col) == OPEN {
                OPEN_COL
            } else {
                WALL_COL
            };
            sw.fill_rect(
                px(col as f32 * TILE_SIZE),
                px(row as f32 * TILE_SIZE),
                tile_px,
                tile_px,
                c,
            );
        }
    }

    /* rays ----------------------------------------------------------------*/
    let eye = frame.viewpoint.pos;
    for ray in frame.rays.iter().step_by(RAY_STRIDE) {
        if let Some(hit) = ray.hit {
            sw.draw_line(px(eye.x), px(eye.y), px(hit.point.x), px(hit.point.y), RAY_COL);
        }
    }

    /* viewer --------------------------------------------------------------*/
    sw.fill_rect(
        px(eye.x),
        px(eye.y),
        px(VIEWER_SIZE).max(1),
        px(VIEWER_SIZE).max(1),
        VIEWER_COL,
    );
    let tip = frame.viewpoint.forward() * HEADING_LEN;
    sw.draw_line(
        px(eye.x),
        px(eye.y),
        px(eye.x).saturating_add(tip.x as i32),
        px(eye.y).saturating_add(tip.y as i32),
        VIEWER_COL,
    );
}

impl Software {
    /// Axis-aligned filled rectangle, clipped to the buffer.
    pub(super) fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, col: Rgba) {
        let (sw, sh) = (self.screen.w as i32, self.screen.h as i32);
        let x0 = x.clamp(0, sw);
        let x1 = x.saturating_add(w).clamp(x0, sw);
        let (y0, y1) = (y.max(0), y.saturating_add(h).min(sh));
        for yy in y0..y1 {
            let row = yy as usize * self.screen.w;
            self.scratch[row + x0 as usize..row + x1 as usize].fill(col);
        }
    }

    /// Integer Bresenham line. The segment is clipped to the buffer first,
    /// so far-away endpoints cost nothing.
    pub(super) fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, col: Rgba) {
        let Some((mut x0, mut y0, x1, y1)) = clip_line(x0, y0, x1, y1, self.screen.w, self.screen.h) else {
            return;
        };
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if (0..self.screen.w as i32).contains(&x0) && (0..self.screen.h as i32).contains(&y0) {
                self.scratch[y0 as usize * self.screen.w + x0 as usize] = col;
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Liang-Barsky clip of a segment to `[0, w) × [0, h)`; `None` if nothing
/// of it is visible.
fn clip_line(x0: i32, y0: i32, x1: i32, y1: i32, w: usize, h: usize) -> Option<(i32, i32, i32, i32)> {
    if w == 0 || h == 0 {
        return None;
    }
    let (fx0, fy0) = (x0 as f64, y0 as f64);
    let (dx, dy) = (x1 as f64 - fx0, y1 as f64 - fy0);
    let (xmax, ymax) = ((w - 1) as f64, (h - 1) as f64);

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [(-dx, fx0), (dx, xmax - fx0), (-dy, fy0), (dy, ymax - fy0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None; // parallel to this edge and outside it
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| {
        (
            (fx0 + t * dx).round().clamp(0.0, xmax) as i32,
            (fy0 + t * dy).round().clamp(0.0, ymax) as i32,
        )
    };
    let ((ax, ay), (bx, by)) = (at(t0), at(t1));
    Some((ax, ay, bx, by))
}

/*──────────────────────────────── Tests ───────────────────────────────*/
