// ──────────────────────────────────────────────────────────────────────────
// assets/loader.rs
//
//  *   map file   (assets::map)   or  TileMap::builtin()     ──╮
//  *   TPAK file  (assets::pack)  or  TextureBank::builtin()   │  --->  (TileMap, TextureBank)
//                                                              ╯
// Every wall code the map uses must be served by the bank.
// ──────────────────────────────────────────────────────────────────────────

use std::path::Path;

use thiserror::Error;

use crate::{
    assets::{
        map::{MapFileError, load_map_file},
        pack::{PackError, load_pack},
    },
    world::{TextureBank, TextureError, TileCode, TileMap},
};

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Map(#[from] MapFileError),

    #[error(transparent)]
    Pack(#[from] PackError),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error("map uses tile code {code} but only {loaded} textures are loaded")]
    MissingTextures { code: TileCode, loaded: usize },
}

/*====================================================================*/
/*                       Public API                                   */
/*====================================================================*/

/// Map from `path`, or the built-in arena when `None`.
pub fn load_map(path: Option<&Path>) -> Result<TileMap, LoadError> {
    let map = match path {
        Some(p) => {
            let map = load_map_file(p)?;
            log::debug!("map {}: {}×{}", p.display(), map.rows(), map.cols());
            map
        }
        None => TileMap::builtin(),
    };
    Ok(map)
}

/// Textures from a pack at `path`, or the procedural set when `None`.
pub fn load_textures(path: Option<&Path>) -> Result<TextureBank, LoadError> {
    let Some(p) = path else {
        return Ok(TextureBank::builtin());
    };

    let textures = load_pack(p)?;
    let side = textures.first().map_or(0, |t| t.w);
    let mut bank = TextureBank::new(side);
    for tex in textures {
        let name = tex.name.clone();
        let code = bank.insert(name.clone(), tex)?;
        log::debug!("texture {code}: {name}");
    }
    Ok(bank)
}

/// Fail if some wall code has no texture behind it.
pub fn check_coverage(map: &TileMap, bank: &TextureBank) -> Result<(), LoadError> {
    let code = map.max_code();
    if code as usize > bank.len() {
        return Err(LoadError::MissingTextures {
            code,
            loaded: bank.len(),
        });
    }
    Ok(())
}

/// Load both assets and verify they belong together.
pub fn load_assets(
    map_path: Option<&Path>,
    texture_path: Option<&Path>,
) -> Result<(TileMap, TextureBank), LoadError> {
    let map = load_map(map_path)?;
    let bank = load_textures(texture_path)?;
    check_coverage(&map, &bank)?;

    log::info!(
        "loaded {}×{} map ({} wall codes), {} textures of {}px",
        map.rows(),
        map.cols(),
        map.max_code(),
        bank.len(),
        bank.size()
    );
    Ok((map, bank))
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
