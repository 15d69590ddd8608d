//! Compile-time constants shared by the world, the caster and the renderer.

use crate::renderer::Rgba;

/// Side of one map cell in world units.
pub const TILE_SIZE: f32 = 64.0;

/// Side of every wall texture in texels (textures are square).
pub const TEXTURE_SIZE: usize = 64;

pub const CEILING_COLOR: Rgba = 0xFF_44_44_44;
pub const FLOOR_COLOR: Rgba = 0xFF_88_88_88;

/// Intensity applied to walls hit on a vertical grid line.
pub const VERTICAL_SHADE: f32 = 0.7;

/// Default window size, in pixels.
pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 800;

pub const DEFAULT_FOV_DEG: f32 = 60.0;
pub const DEFAULT_FPS: usize = 30;

pub const DEFAULT_WALK_SPEED: f32 = 100.0; // world units / second
pub const DEFAULT_TURN_SPEED_DEG: f32 = 45.0; // degrees / second

pub const DEFAULT_MINIMAP_SCALE: f32 = 0.2;
/// Overlay pixels per world unit; beyond 1 the map no longer fits a window.
pub const MAX_MINIMAP_SCALE: f32 = 1.0;
