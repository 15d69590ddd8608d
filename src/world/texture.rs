// Format-agnostic repository of wall textures.
// The renderer interacts through tile codes only: code `c` samples slot `c - 1`.

use std::collections::HashMap;
use std::num::NonZeroU16;

use crate::defs::TEXTURE_SIZE;
use crate::renderer::Rgba;

use super::TileCode;

/// CPU-side storage: 32-bit **ARGB** (0xAARRGGBB) in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgba>,
}

impl Texture {
    /// Build a `size × size` texture by evaluating `f(x, y)` for every texel.
    pub fn from_fn<F>(name: &str, size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgba,
    {
        let mut pixels = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                pixels.push(f(x, y));
            }
        }
        Self {
            name: name.to_string(),
            w: size,
            h: size,
            pixels,
        }
    }

    /// Texel at column `x`, row `y`.
    #[inline(always)]
    pub fn texel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.w + x]
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Every texture in a bank shares one square size.
    #[error("texture `{name}` is {w}x{h}, bank expects {size}x{size}")]
    BadSize {
        name: String,
        w: usize,
        h: usize,
        size: usize,
    },

    /// A texture must have at least one texel.
    #[error("texture `{0}` has no texels")]
    ZeroSize(String),

    /// Tile code has no texture slot.
    #[error("tile code {0} has no texture")]
    BadCode(TileCode),
}

/// Ordered set of equally-sized square textures.
///
/// Slot `i` belongs to tile code `i + 1`. The bank is filled once at start-up
/// and then only read, so all columns of a frame share it by `&`.
#[derive(Clone, Debug)]
pub struct TextureBank {
    size: usize,
    by_name: HashMap<String, TileCode>,
    data: Vec<Texture>,
}

impl TextureBank {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Empty bank accepting `size × size` textures.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            by_name: HashMap::new(),
            data: Vec::new(),
        }
    }

    /// Bank holding the eight procedural wall materials, codes 1–8.
    pub fn builtin() -> Self {
        let mut bank = Self::new(TEXTURE_SIZE);
        for tex in procedural::all(TEXTURE_SIZE) {
            // names are unique and sizes match by construction
            let name = tex.name.clone();
            bank.by_name.insert(name, bank.data.len() as TileCode + 1);
            bank.data.push(tex);
        }
        bank
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Side length shared by every texture.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile code bound to a texture name.
    pub fn code(&self, name: &str) -> Option<TileCode> {
        self.by_name.get(name).copied()
    }

    /// Texture for a wall code.
    pub fn for_code(&self, code: NonZeroU16) -> Result<&Texture, TextureError> {
        self.data
            .get(code.get() as usize - 1)
            .ok_or(TextureError::BadCode(code.get()))
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Append a texture under `name`, returning the tile code it answers to.
    pub fn insert<S: Into<String>>(&mut self, name: S, tex: Texture) -> Result<TileCode, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        if tex.w == 0 || tex.h == 0 {
            return Err(TextureError::ZeroSize(name));
        }
        if tex.w != self.size || tex.h != self.size || tex.pixels.len() != tex.w * tex.h {
            return Err(TextureError::BadSize {
                name,
                w: tex.w,
                h: tex.h,
                size: self.size,
            });
        }
        self.data.push(tex);
        let code = self.data.len() as TileCode;
        self.by_name.insert(name, code);
        Ok(code)
    }
}

/*──────────────────────── built-in materials ───────────────────────*/

mod procedural {
    use super::Texture;
    use crate::renderer::{Rgba, argb};

    /// Cheap integer hash for texel noise.
    fn hash(x: usize, y: usize, seed: u32) -> u32 {
        let mut h = (x as u32).wrapping_mul(374_761_393)
            ^ (y as u32).wrapping_mul(668_265_263)
            ^ seed.wrapping_mul(2_246_822_519);
        h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
        h ^ (h >> 16)
    }

    /// Scale a base color by a noise term in `[lo, 1]`.
    fn speckle(base: (u8, u8, u8), x: usize, y: usize, seed: u32, lo: f32) -> Rgba {
        let t = lo + (1.0 - lo) * (hash(x, y, seed) & 0xFF) as f32 / 255.0;
        argb(
            0xFF,
            (base.0 as f32 * t) as u8,
            (base.1 as f32 * t) as u8,
            (base.2 as f32 * t) as u8,
        )
    }

    fn blocks(name: &str, size: usize, base: (u8, u8, u8), mortar: Rgba, block: usize, stagger: bool, seed: u32) -> Texture {
        let brick_w = block * 2;
        Texture::from_fn(name, size, |x, y| {
            let course = y / block;
            let shift = if stagger && course % 2 == 1 { block } else { 0 };
            if y % block == 0 || (x + shift) % brick_w == 0 {
                mortar
            } else {
                speckle(base, x, y, seed, 0.75)
            }
        })
    }

    pub fn all(size: usize) -> Vec<Texture> {
        let quarter = (size / 4).max(1);
        let eighth = (size / 8).max(1);
        vec![
            blocks("REDBRICK", size, (0xA0, 0x30, 0x28), 0xFF_B0_B0_A8, eighth, true, 1),
            blocks("PURPLE", size, (0x70, 0x38, 0x90), 0xFF_30_18_40, quarter, false, 2),
            Texture::from_fn("MOSSY", size, |x, y| {
                if hash(x / 3, y / 3, 3) % 5 == 0 {
                    speckle((0x30, 0x80, 0x30), x, y, 33, 0.6)
                } else {
                    speckle((0x80, 0x80, 0x78), x, y, 3, 0.6)
                }
            }),
            blocks("GRAY", size, (0x90, 0x90, 0x90), 0xFF_40_40_40, quarter, true, 4),
            Texture::from_fn("COLORS", size, |x, y| {
                const BANDS: [(u8, u8, u8); 4] = [
                    (0xC0, 0x40, 0x40),
                    (0x40, 0xC0, 0x40),
                    (0x40, 0x40, 0xC0),
                    (0xC0, 0xC0, 0x40),
                ];
                speckle(BANDS[((x + y) / eighth) % BANDS.len()], x, y, 5, 0.8)
            }),
            blocks("BLUE", size, (0x30, 0x50, 0xB0), 0xFF_10_18_40, quarter, true, 6),
            Texture::from_fn("WOOD", size, |x, y| {
                if x % quarter == 0 {
                    0xFF_30_1C_0C
                } else {
                    let grain = ((y as f32 * 0.4 + (x / quarter) as f32 * 1.7).sin() * 0.15 + 0.85).clamp(0.0, 1.0);
                    argb(
                        0xFF,
                        (0x9A as f32 * grain) as u8,
                        (0x60 as f32 * grain) as u8,
                        (0x30 as f32 * grain) as u8,
                    )
                }
            }),
            Texture::from_fn("EAGLE", size, |x, y| {
                let c = size as f32 * 0.5;
                let d = ((x as f32 - c).abs() + (y as f32 - c).abs()) / c;
                if d < 0.35 {
                    0xFF_D0_A0_20
                } else if d < 0.45 {
                    0xFF_40_28_08
                } else {
                    speckle((0x70, 0x70, 0x70), x, y, 8, 0.7)
                }
            }),
        ]
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
