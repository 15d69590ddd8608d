use glam::Vec2;

/// Player view-point in world space.
///
/// * Position is in map units, `+Y` points *down* the grid (row order).
/// * `angle` is radians, 0 = east, growing clockwise on screen.
/// * `turn` / `walk` hold the current intent in `{-1, 0, +1}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewpoint {
    pub pos: Vec2,
    pub angle: f32,
    pub turn: i8,
    pub walk: i8,
    pub walk_speed: f32, // units / second
    pub turn_speed: f32, // radians / second
}

impl Viewpoint {
    /// Create a resting viewpoint at `pos`, facing `angle`.
    pub fn new(pos: Vec2, angle: f32, walk_speed: f32, turn_speed: f32) -> Self {
        Self {
            pos,
            angle,
            turn: 0,
            walk: 0,
            walk_speed,
            turn_speed,
        }
    }

    /// Unit vector pointing where the viewpoint looks.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        let (s, c) = self.angle.sin_cos();
        Vec2::new(c, s)
    }

    /// Latch the latest input; values are clamped into `{-1, 0, +1}`.
    pub fn set_intent(&mut self, turn: i8, walk: i8) {
        self.turn = turn.signum();
        self.walk = walk.signum();
    }

    /// Facing angle folded into `[0, 2π)`.
    #[inline]
    pub fn heading(&self) -> f32 {
        normalize_angle(self.angle)
    }
}

/// Distance from the eye to the projection plane for viewport width `w`
/// and horizontal field of view `fov`.
///
/// ```text
/// D = (w / 2) / tan(fov / 2)
/// ```
#[inline]
pub fn projection_distance(w: usize, fov: f32) -> f32 {
    (w as f32) * 0.5 / (fov * 0.5).tan()
}

/// Fold any angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(a: f32) -> f32 {
    let a = a.rem_euclid(std::f32::consts::TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if a >= std::f32::consts::TAU { 0.0 } else { a }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn forward_is_unit_and_follows_angle() {
        let vp = Viewpoint::new(Vec2::ZERO, FRAC_PI_2, 100.0, 1.0);
        let f = vp.forward();
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!(f.x.abs() < 1e-5 && (f.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn projection_distance_at_90_deg() {
        assert!((projection_distance(640, FRAC_PI_2) - 320.0).abs() < 1e-3);
    }

    #[test]
    fn normalize_wraps_into_range() {
        for a in [-TAU, -PI, -1e-9, 0.0, PI, TAU, 3.0 * TAU + 0.5, -7.0] {
            let n = normalize_angle(a);
            assert!((0.0..TAU).contains(&n), "{a} -> {n}");
        }
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn intent_is_clamped() {
        let mut vp = Viewpoint::new(Vec2::ZERO, 0.0, 1.0, 1.0);
        vp.set_intent(5, -3);
        assert_eq!((vp.turn, vp.walk), (1, -1));
    }
}
