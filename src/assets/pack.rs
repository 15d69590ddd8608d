//! Texture pack reader / writer.
//!
//! ### Layout (little-endian)
//! ```text
//! "TPAK"            magic
//! u32               texture count
//! u16               side (every texture is side × side)
//! count × {
//!     [u8; 8]       NUL-padded name
//!     side² × u32   0xAARRGGBB texels, row-major
//! }
//! ```
//! Order matters: the n-th texture serves tile code `n`.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

use crate::world::Texture;

pub const PACK_MAGIC: &[u8; 4] = b"TPAK";

/// Width of the NUL-padded name field.
pub const NAME_LEN: usize = 8;

/// Errors that can be encountered while reading or writing a pack.
#[derive(Error, Debug)]
pub enum PackError {
    /// Underlying I/O failure (including a truncated file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("not a TPAK file")]
    BadMagic,

    #[error("texture side must be non-zero")]
    ZeroSize,

    #[error("pack holds no textures")]
    Empty,

    /// Writers only accept one shared square size.
    #[error("texture `{0}` does not match the pack size")]
    Mismatch(String),

    /// Names are stored in a fixed eight-byte field.
    #[error("texture name `{0}` is longer than 8 bytes")]
    NameTooLong(String),
}

/// Convert an eight-byte, NUL-padded name into a printable string.
fn name_str(raw: &[u8; NAME_LEN]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Decode every texture in a pack, in file order.
pub fn read_pack<R: Read>(mut r: R) -> Result<Vec<Texture>, PackError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if &magic != PACK_MAGIC {
        return Err(PackError::BadMagic);
    }

    let count = r.read_u32::<LE>()? as usize;
    let side = r.read_u16::<LE>()? as usize;
    if side == 0 {
        return Err(PackError::ZeroSize);
    }
    if count == 0 {
        return Err(PackError::Empty);
    }

    let mut out = Vec::with_capacity(count.min(256));
    for _ in 0..count {
        let mut raw_name = [0u8; NAME_LEN];
        r.read_exact(&mut raw_name)?;
        let mut pixels = vec![0u32; side * side];
        r.read_u32_into::<LE>(&mut pixels)?;
        out.push(Texture {
            name: name_str(&raw_name),
            w: side,
            h: side,
            pixels,
        });
    }
    Ok(out)
}

/// Encode `textures` as a pack. All of them must share one square size.
pub fn write_pack<W: Write>(mut w: W, textures: &[Texture]) -> Result<(), PackError> {
    let side = textures.first().map(|t| t.w).ok_or(PackError::Empty)?;
    if side == 0 || side > u16::MAX as usize {
        return Err(PackError::ZeroSize);
    }

    /* validate everything before the first byte goes out */
    for tex in textures {
        if tex.w != side || tex.h != side || tex.pixels.len() != side * side {
            return Err(PackError::Mismatch(tex.name.clone()));
        }
        if tex.name.len() > NAME_LEN {
            return Err(PackError::NameTooLong(tex.name.clone()));
        }
    }

    w.write_all(PACK_MAGIC)?;
    w.write_u32::<LE>(textures.len() as u32)?;
    w.write_u16::<LE>(side as u16)?;
    for tex in textures {
        let mut raw_name = [0u8; NAME_LEN];
        for (dst, src) in raw_name.iter_mut().zip(tex.name.bytes()) {
            *dst = src;
        }
        w.write_all(&raw_name)?;
        for &px in &tex.pixels {
            w.write_u32::<LE>(px)?;
        }
    }
    w.flush()?;
    Ok(())
}

pub fn load_pack<P: AsRef<Path>>(path: P) -> Result<Vec<Texture>, PackError> {
    read_pack(BufReader::new(File::open(path)?))
}

pub fn save_pack<P: AsRef<Path>>(path: P, textures: &[Texture]) -> Result<(), PackError> {
    write_pack(BufWriter::new(File::create(path)?), textures)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
