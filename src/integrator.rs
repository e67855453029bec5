use glam::DVec2;

use crate::body::Body;

/// Advances a body by `dt` seconds under the net `force` using semi-implicit (symplectic) Euler.
///
/// The velocity is updated first and the position then moves with the *new* velocity:
///
/// ```text
/// v' = v + (F / m) * dt
/// x' = x + v' * dt
/// ```
///
/// A `dt` of zero leaves the body untouched. Nothing is clamped.
#[inline]
pub fn semi_implicit_euler(body: &mut Body, force: DVec2, dt: f64) {
    if dt == 0.0 {
        return;
    }

    body.velocity += force / body.mass * dt;
    body.position += body.velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_then_position() {
        let mut body = Body::new(DVec2::ZERO, DVec2::ZERO, 2.0);

        semi_implicit_euler(&mut body, DVec2::new(4.0, 0.0), 0.5);

        assert_eq!(body.velocity, DVec2::new(1.0, 0.0));
        // Explicit Euler would have left the position at the origin.
        assert_eq!(body.position, DVec2::new(0.5, 0.0));
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let before = Body::new(DVec2::new(1.5, -2.0), DVec2::new(-7.0, 3.25), 1e15);
        let mut body = before;

        semi_implicit_euler(&mut body, DVec2::new(1e30, -1e30), 0.0);

        assert_eq!(body, before);
    }

    #[test]
    fn free_motion() {
        let mut body = Body::new(DVec2::new(1.0, 1.0), DVec2::new(2.0, -4.0), 3.0);

        semi_implicit_euler(&mut body, DVec2::ZERO, 0.25);

        assert_eq!(body.velocity, DVec2::new(2.0, -4.0));
        assert_eq!(body.position, DVec2::new(1.5, 0.0));
    }
}
