//! Viewpoint kinematics: turn, walk, single-point wall test.

use glam::Vec2;

use super::InputCmd;
use crate::world::{TileMap, Viewpoint};

/// Latch `cmd` into the viewpoint's turn / walk intent.
pub fn player_input(vp: &mut Viewpoint, cmd: InputCmd) {
    vp.set_intent(cmd.turn, cmd.walk);
}

/// Advance `vp` by `dt` seconds.
///
/// The angle is left unwrapped; consumers normalize it. The move is
/// committed only if the destination point itself is open: there is no
/// swept test, so a fast diagonal step may slip past a wall corner.
pub fn move_viewpoint(vp: &mut Viewpoint, map: &TileMap, dt: f32) {
    vp.angle += vp.turn as f32 * vp.turn_speed * dt;

    let step = vp.walk as f32 * vp.walk_speed * dt;
    let candidate = vp.pos + vp.forward() * step;
    if !map.is_wall_at(candidate.x, candidate.y) {
        vp.pos = candidate;
    }
}

/// Where a viewpoint should start: `preferred` if it is open, else the
/// first open cell. `None` for a map with no open cell at all.
pub fn spawn_point(map: &TileMap, preferred: Vec2) -> Option<Vec2> {
    if !map.is_wall_at(preferred.x, preferred.y) {
        return Some(preferred);
    }
    let fallback = map.first_open_cell()?;
    log::warn!(
        "spawn ({:.1}, {:.1}) is inside a wall, moved to ({:.1}, {:.1})",
        preferred.x,
        preferred.y,
        fallback.x,
        fallback.y
    );
    Some(fallback)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::TILE_SIZE;
    use glam::vec2;
    use std::f32::consts::FRAC_PI_2;

    fn viewer_at(pos: Vec2, angle: f32) -> Viewpoint {
        Viewpoint::new(pos, angle, 100.0, FRAC_PI_2)
    }

    #[test]
    fn walks_forward_along_heading() {
        let map = TileMap::builtin();
        let mut vp = viewer_at(map.center(), 0.0);
        player_input(&mut vp, InputCmd { turn: 0, walk: 1, quit: false });
        move_viewpoint(&mut vp, &map, 0.5);
        assert!((vp.pos.x - (map.center().x + 50.0)).abs() < 1e-3);
        assert!((vp.pos.y - map.center().y).abs() < 1e-3);
    }

    #[test]
    fn turning_is_not_wrapped() {
        let map = TileMap::builtin();
        let mut vp = viewer_at(map.center(), 0.0);
        vp.set_intent(-1, 0);
        move_viewpoint(&mut vp, &map, 2.0);
        assert!((vp.angle + std::f32::consts::PI).abs() < 1e-5);
        assert_eq!(vp.pos, map.center());
    }

    #[test]
    fn wall_blocks_the_move() {
        let map = TileMap::builtin();
        // half a tile from the west wall, backing into it
        let start = vec2(1.5 * TILE_SIZE, 5.5 * TILE_SIZE);
        let mut vp = viewer_at(start, 0.0);
        vp.set_intent(0, -1);
        move_viewpoint(&mut vp, &map, 1.0);
        assert_eq!(vp.pos, start);
    }

    #[test]
    fn idle_viewpoint_stays_put() {
        let map = TileMap::builtin();
        let mut vp = viewer_at(map.center(), 1.0);
        let before = vp;
        move_viewpoint(&mut vp, &map, 0.25);
        assert_eq!(vp, before);
    }

    #[test]
    fn spawn_falls_back_to_open_cell() {
        let map = TileMap::builtin();
        assert_eq!(spawn_point(&map, map.center()), Some(map.center()));
        let inside_wall = vec2(10.0, 10.0);
        assert_eq!(
            spawn_point(&map, inside_wall),
            Some(TileMap::cell_center(1, 1))
        );
    }
}
