use clap::Parser;
use std::path::PathBuf;

use crate::defs::{
    DEFAULT_FOV_DEG, DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_MINIMAP_SCALE, DEFAULT_TURN_SPEED_DEG,
    DEFAULT_WALK_SPEED, DEFAULT_WIDTH, MAX_MINIMAP_SCALE,
};

/// `tilecast` - first-person walk through a tile map, drawn one ray per column.
///
/// Without `--map` and `--textures` the built-in arena and procedural wall
/// set are used.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Text map: one row per line, tile codes separated by spaces or commas.
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// TPAK texture pack; texture `n` in the file serves tile code `n`.
    #[arg(long, value_name = "FILE")]
    pub textures: Option<PathBuf>,

    /// Viewport width in pixels (one ray per column).
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Horizontal field of view in degrees.
    #[arg(long, default_value_t = DEFAULT_FOV_DEG, value_parser = parse_fov)]
    pub fov: f32,

    /// Frame-rate cap handed to the window.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: usize,

    /// Walking speed in map units per second.
    #[arg(long, default_value_t = DEFAULT_WALK_SPEED)]
    pub walk_speed: f32,

    /// Turning speed in degrees per second.
    #[arg(long, default_value_t = DEFAULT_TURN_SPEED_DEG)]
    pub turn_speed: f32,

    /// Minimap size relative to the map's world extent.
    #[arg(long, default_value_t = DEFAULT_MINIMAP_SCALE, value_parser = parse_scale)]
    pub minimap_scale: f32,

    /// Hide the minimap overlay.
    #[arg(long)]
    pub no_minimap: bool,
}

impl Config {
    pub fn fov_radians(&self) -> f32 {
        self.fov.to_radians()
    }

    pub fn turn_radians(&self) -> f32 {
        self.turn_speed.to_radians()
    }

    /// Minimap scale, `None` when the overlay is disabled.
    pub fn minimap(&self) -> Option<f32> {
        (!self.no_minimap).then_some(self.minimap_scale)
    }
}

fn parse_fov(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if v > 0.0 && v < 180.0 {
        Ok(v)
    } else {
        Err(format!("field of view must be in (0, 180), got {v}"))
    }
}

fn parse_scale(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if v > 0.0 && v <= MAX_MINIMAP_SCALE {
        Ok(v)
    } else {
        Err(format!("minimap scale must be in (0, {MAX_MINIMAP_SCALE}], got {v}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_viewer() {
        let cfg = Config::try_parse_from(["tilecast"]).unwrap();
        assert_eq!((cfg.width, cfg.height), (1280, 800));
        assert_eq!(cfg.fps, 30);
        assert!((cfg.fov_radians() - std::f32::consts::FRAC_PI_3).abs() < 1e-6);
        assert!((cfg.turn_radians() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert_eq!(cfg.minimap(), Some(0.2));
        assert!(cfg.map.is_none() && cfg.textures.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::try_parse_from([
            "tilecast",
            "--map",
            "arena.map",
            "--width",
            "320",
            "--fov",
            "90",
            "--no-minimap",
        ])
        .unwrap();
        assert_eq!(cfg.map, Some(PathBuf::from("arena.map")));
        assert_eq!(cfg.width, 320);
        assert_eq!(cfg.fov, 90.0);
        assert_eq!(cfg.minimap(), None);
    }

    #[test]
    fn rejects_degenerate_values() {
        assert!(Config::try_parse_from(["tilecast", "--fov", "180"]).is_err());
        assert!(Config::try_parse_from(["tilecast", "--fov", "0"]).is_err());
        assert!(Config::try_parse_from(["tilecast", "--width", "0"]).is_err());
        assert!(Config::try_parse_from(["tilecast", "--minimap-scale", "-1"]).is_err());
        assert!(Config::try_parse_from(["tilecast", "--minimap-scale", "2"]).is_err());
        assert!(Config::try_parse_from(["tilecast", "--minimap-scale", "2e6"]).is_err());
        assert!(Config::try_parse_from(["tilecast", "--minimap-scale", "inf"]).is_err());
        let cfg = Config::try_parse_from(["tilecast", "--minimap-scale", "1"]).unwrap();
        assert_eq!(cfg.minimap(), Some(1.0));
    }
}
