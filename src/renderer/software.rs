//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0xAARRGGBB** format, row-major.
//! * One ray ⇒ one screen column: ceiling band, textured wall strip, floor
//!   band.
//! ---------------------------------------------------------------------------

mod minimap;
mod projection;

pub use projection::{WallStrip, perp_distance, strip_height, texture_column};

use crate::{
    defs::{CEILING_COLOR, FLOOR_COLOR, VERTICAL_SHADE},
    engine::{Ray, Screen},
    renderer::{FrameContext, RenderError, Renderer, Rgba, shade},
    world::TextureBank,
};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

/// Ray-caster column renderer.
#[derive(Debug)]
pub struct Software {
    scratch: Vec<Rgba>,
    screen: Screen,
}

impl Default for Software {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            screen: Screen {
                w: 0,
                h: 0,
                half_h: 0,
                proj_dist: 0.0,
            },
        }
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, screen: &Screen) {
        // (re)allocate if resolution changed
        if screen.w != self.screen.w || screen.h != self.screen.h {
            self.scratch.resize(screen.w * screen.h, 0);
        }
        self.screen = *screen;

        /* black clear */
        self.scratch.fill(0xFF_00_00_00);
    }

    fn draw_walls(&mut self, frame: &FrameContext) -> Result<(), RenderError> {
        let facing = frame.viewpoint.heading();
        for (col, ray) in frame.rays.iter().enumerate().take(self.screen.w) {
            self.draw_column(col, ray, facing, frame.bank)?;
        }
        Ok(())
    }

    fn draw_minimap(&mut self, frame: &FrameContext, scale: f32) {
        minimap::draw(self, frame, scale);
    }

    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        submit(&self.scratch, self.screen.w, self.screen.h)
    }
}

/*──────────────────────── column rendering ───────────────────────────*/

impl Software {
    /// Finished pixels of the current frame.
    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }

    #[inline(always)]
    fn put(&mut self, x: usize, y: usize, c: Rgba) {
        self.scratch[y * self.screen.w + x] = c;
    }

    /// Draw a single vertical slice (one screen column).
    fn draw_column(&mut self, col: usize, ray: &Ray, facing: f32, bank: &TextureBank) -> Result<(), RenderError> {
        let screen = self.screen;
        let strip = WallStrip::project(ray, facing, &screen);

        for y in 0..strip.top {
            self.put(col, y, CEILING_COLOR);
        }

        if let Some(hit) = ray.hit.filter(|_| !strip.is_empty()) {
            let tex = bank
                .for_code(hit.content)
                .map_err(|source| RenderError::MissingTexture { col, source })?;

            /* one texture column serves the whole strip */
            let u = texture_column(&hit, tex.w);
            for y in strip.top..strip.bottom {
                let v = strip.texture_row(y, &screen, tex.h);
                let texel = tex.texel(u, v);
                let c = if hit.vertical {
                    shade(texel, VERTICAL_SHADE)
                } else {
                    texel
                };
                self.put(col, y, c);
            }
        }

        for y in strip.bottom..screen.h {
            self.put(col, y, FLOOR_COLOR);
        }
        Ok(())
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        defs::TILE_SIZE,
        engine::{Screen, WallHit, cast_all_rays},
        renderer::{RendererExt, channels},
        world::{Texture, TextureError, TileMap, Viewpoint},
    };
    use glam::vec2;
    use std::num::NonZeroU16;

    /* tiny helpers ---------------------------------------------------*/
    const W: usize = 8;
    const H: usize = 8;

    fn tiny_screen() -> Screen {
        Screen::new(W, H, std::f32::consts::FRAC_PI_2)
    }

    fn solid_bank(color: Rgba) -> TextureBank {
        let mut bank = TextureBank::new(4);
        bank.insert("SOLID", Texture::from_fn("SOLID", 4, |_, _| color))
            .unwrap();
        bank
    }

    fn ray(distance: f32, vertical: bool) -> Ray {
        Ray {
            angle: 0.0,
            hit: Some(WallHit {
                point: vec2(10.0, 20.0),
                distance,
                content: NonZeroU16::new(1).unwrap(),
                vertical,
            }),
        }
    }

    fn render(rays: &[Ray], bank: &TextureBank) -> Result<Vec<Rgba>, RenderError> {
        let map = TileMap::builtin();
        let vp = Viewpoint::new(vec2(0.0, 0.0), 0.0, 0.0, 0.0);
        let frame = FrameContext {
            map: &map,
            viewpoint: &vp,
            rays,
            bank,
        };
        let mut sw = Software::default();
        sw.draw_frame(&tiny_screen(), &frame, None, |fb, _, _| fb.to_vec())
    }

    fn column(fb: &[Rgba], x: usize) -> Vec<Rgba> {
        (0..H).map(|y| fb[y * W + x]).collect()
    }

    #[test]
    fn empty_column_is_ceiling_over_floor() {
        let bank = solid_bank(0xFF_00_00_FF);
        let rays = vec![Ray { angle: 0.0, hit: None }; W];
        let fb = render(&rays, &bank).unwrap();
        let col = column(&fb, 3);
        assert!(col[..H / 2].iter().all(|&p| p == CEILING_COLOR));
        assert!(col[H / 2..].iter().all(|&p| p == FLOOR_COLOR));
    }

    #[test]
    fn wall_strip_is_centered_and_textured() {
        let bank = solid_bank(0xFF_00_00_FF);
        // proj_dist = 4 at 90°/8px: a wall 120 units away is 2 px tall
        let rays = vec![ray(120.0, false); W];
        let fb = render(&rays, &bank).unwrap();
        let col = column(&fb, 0);
        assert_eq!(col[2], CEILING_COLOR);
        assert_eq!(&col[3..5], &[0xFF_00_00_FF, 0xFF_00_00_FF]);
        assert_eq!(col[5], FLOOR_COLOR);
    }

    #[test]
    fn vertical_hits_are_darker() {
        let bank = solid_bank(0xFF_C8_64_32);
        let plain = render(&vec![ray(TILE_SIZE, false); W], &bank).unwrap();
        let dark = render(&vec![ray(TILE_SIZE, true); W], &bank).unwrap();
        let row = H / 2;
        let (pa, pr, pg, pb) = channels(plain[row * W]);
        let (da, dr, dg, db) = channels(dark[row * W]);
        assert_eq!(pa, da);
        assert!(dr <= pr && dg <= pg && db <= pb);
        assert!(dr < pr, "shading had no effect");
    }

    #[test]
    fn unknown_wall_code_is_fatal() {
        let bank = solid_bank(0xFF_FF_FF_FF);
        let mut rays = vec![ray(TILE_SIZE, false); W];
        if let Some(hit) = rays[5].hit.as_mut() {
            hit.content = NonZeroU16::new(7).unwrap();
        }
        assert_eq!(
            render(&rays, &bank).unwrap_err(),
            RenderError::MissingTexture {
                col: 5,
                source: TextureError::BadCode(7)
            }
        );
    }

    #[test]
    fn every_pixel_is_written() {
        let map = TileMap::builtin();
        let bank = TextureBank::builtin();
        let screen = Screen::new(64, 40, 60_f32.to_radians());
        let vp = Viewpoint::new(map.center(), 1.0, 0.0, 0.0);
        let mut rays = Vec::new();
        cast_all_rays(&map, &vp, &screen, &mut rays);
        let frame = FrameContext {
            map: &map,
            viewpoint: &vp,
            rays: &rays,
            bank: &bank,
        };
        let mut sw = Software::default();
        sw.draw_frame(&screen, &frame, None, |_, _, _| ()).unwrap();
        assert_eq!(sw.pixels().len(), 64 * 40);
        assert!(sw.pixels().iter().all(|&p| p >> 24 == 0xFF && p != 0xFF_00_00_00));
    }
}
