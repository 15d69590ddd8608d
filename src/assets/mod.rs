//! On-disk inputs: text maps and texture packs.

pub mod loader;
pub mod map;
pub mod pack;

pub use loader::{LoadError, check_coverage, load_assets, load_map, load_textures};
pub use map::{MapFileError, load_map_file, parse_map};
pub use pack::{PackError, load_pack, read_pack, save_pack, write_pack};
