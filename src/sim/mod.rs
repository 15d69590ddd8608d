mod components;
mod movement;
mod tic;

pub use components::InputCmd;
pub use movement::{move_viewpoint, player_input, spawn_point};
pub use tic::{FrameClock, MAX_FRAME_DT};
