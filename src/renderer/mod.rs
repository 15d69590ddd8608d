//! Rendering abstraction layer.
//!
//! *The frame loop never touches a pixel buffer directly.*
//! It casts the frame's rays, bundles everything a back-end needs into a
//! [`FrameContext`] and hands it to a type that implements [`Renderer`].
//!
//! * A back-end owns its frame-buffer and only *loans* it to the presenter
//!   in [`Renderer::end_frame`].
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use thiserror::Error;

use crate::{
    engine::{Ray, Screen},
    world::{TextureBank, TextureError, TileMap, Viewpoint},
};

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Pack four channels into one pixel.
#[inline(always)]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Rgba {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Split a pixel into `(a, r, g, b)`.
#[inline(always)]
pub const fn channels(c: Rgba) -> (u8, u8, u8, u8) {
    ((c >> 24) as u8, (c >> 16) as u8, (c >> 8) as u8, c as u8)
}

/// Scale R, G and B by `factor`, clamped to `0..=255`; alpha is untouched.
#[inline]
pub fn shade(c: Rgba, factor: f32) -> Rgba {
    let (a, r, g, b) = channels(c);
    let scale = |v: u8| (v as f32 * factor).clamp(0.0, 255.0) as u8;
    argb(a, scale(r), scale(g), scale(b))
}

/// Fatal rendering failures. These only surface when the renderer's input
/// breaks an invariant the caster and loader are meant to uphold.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("column {col}: {source}")]
    MissingTexture {
        col: usize,
        #[source]
        source: TextureError,
    },
}

/// Everything one frame is rendered from. Built by the frame loop, borrowed
/// by the back-end; nothing in here is mutated while drawing.
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    pub map: &'a TileMap,
    pub viewpoint: &'a Viewpoint,
    pub rays: &'a [Ray],
    pub bank: &'a TextureBank,
}

/// A renderer that owns an internal scratch buffer for the whole frame.
pub trait Renderer {
    /// (Re)allocate internal scratch for `screen` and clear it.
    fn begin_frame(&mut self, screen: &Screen);

    /// Project every ray into a textured wall strip with ceiling and floor.
    fn draw_walls(&mut self, frame: &FrameContext) -> Result<(), RenderError>;

    /// Top-down map, viewpoint and a sample of rays, `scale` pixels per
    /// world unit, anchored at the top-left corner.
    fn draw_minimap(&mut self, frame: &FrameContext, scale: f32);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// `submit(&[Rgba], w, h)` is run exactly once per frame; its result is
    /// handed back to the caller.
    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T;
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F, T>(
        &mut self,
        screen: &Screen,
        frame: &FrameContext,
        minimap: Option<f32>,
        submit: F,
    ) -> Result<T, RenderError>
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        self.begin_frame(screen);
        self.draw_walls(frame)?;
        if let Some(scale) = minimap {
            self.draw_minimap(frame, scale);
        }
        Ok(self.end_frame(submit))
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::Software;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_split_agree() {
        let c = argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c, 0x12_34_56_78);
        assert_eq!(channels(c), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn shade_scales_rgb_and_keeps_alpha() {
        let c = shade(0x80_FF_64_0A, 0.5);
        assert_eq!(channels(c), (0x80, 127, 50, 5));
        assert_eq!(shade(0xFF_10_20_30, 1.0), 0xFF_10_20_30);
        assert_eq!(shade(0xFF_FF_FF_FF, 2.0), 0xFF_FF_FF_FF);
    }
}
