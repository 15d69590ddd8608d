//! gen_texpack.rs - dump the built-in procedural wall set as a TPAK file,
//! a starting point for hand-edited texture packs.
//!
//! USAGE:
//! ```bash
//! cargo run --bin gen_texpack -- --out walls.tpak
//! ```

use std::{num::NonZeroU16, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use tilecast_rs::{assets::save_pack, world::TextureBank};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Destination pack file
    #[arg(long, value_name = "FILE", default_value = "walls.tpak")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let bank = TextureBank::builtin();
    let textures = (1..=bank.len() as u16)
        .filter_map(NonZeroU16::new)
        .map(|code| bank.for_code(code).cloned())
        .collect::<Result<Vec<_>, _>>()?;

    save_pack(&opts.out, &textures).with_context(|| format!("writing {}", opts.out.display()))?;
    log::info!("wrote {} textures to {}", textures.len(), opts.out.display());
    Ok(())
}
