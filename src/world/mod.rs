mod camera;
mod grid;
mod texture;

pub use camera::{Viewpoint, normalize_angle, projection_distance};

pub use grid::{MapError, OPEN, TileCode, TileMap};

pub use texture::{Texture, TextureBank, TextureError};
