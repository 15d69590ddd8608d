mod caster;
mod types;

pub use caster::{cast_all_rays, cast_ray, column_angle};
pub use types::{Ray, Screen, WallHit};
