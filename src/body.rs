use glam::DVec2;

use crate::point_mass::PointMass;

/// Display metadata carried alongside a [`Body`].
///
/// The physics never reads it: bodies are point masses for gravity, and how a renderer
/// interprets the radius and colour is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Radius in world units.
    pub radius: f64,
    /// RGB colour.
    pub color: [u8; 3],
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            radius: 100.0,
            color: [255, 255, 255],
        }
    }
}

/// A point mass subject to gravity from every other body of a [`Simulation`](crate::Simulation).
///
/// Positions use Cartesian world coordinates: origin at the centre of the world, `y` pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Position in world units.
    pub position: DVec2,
    /// Velocity in world units per second.
    pub velocity: DVec2,
    /// Mass, strictly positive.
    pub mass: f64,
    /// Display metadata.
    pub shape: Shape,
}

impl Body {
    /// Creates a new [`Body`] with the default [`Shape`].
    #[inline]
    pub fn new(position: DVec2, velocity: DVec2, mass: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
            shape: Shape::default(),
        }
    }

    /// Sets the display radius.
    #[inline]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.shape.radius = radius;
        self
    }

    /// Sets the display colour.
    #[inline]
    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.shape.color = color;
        self
    }

    /// Display radius in world units.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.shape.radius
    }

    /// Linear momentum, `mass * velocity`.
    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy, `mass * |velocity|² / 2`.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// The position and mass of the body, as read by the force computation.
    #[inline]
    pub fn point_mass(&self) -> PointMass<DVec2, f64> {
        PointMass::new(self.position, self.mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_shape_only() {
        let body = Body::new(DVec2::ONE, DVec2::X, 4.0)
            .with_radius(12.5)
            .with_color([1, 2, 3]);

        assert_eq!(body.radius(), 12.5);
        assert_eq!(body.shape.color, [1, 2, 3]);
        assert_eq!(body.point_mass(), PointMass::new(DVec2::ONE, 4.0));
    }

    #[test]
    fn momentum_and_energy() {
        let body = Body::new(DVec2::ZERO, DVec2::new(3.0, 4.0), 2.0);

        assert_eq!(body.momentum(), DVec2::new(6.0, 8.0));
        assert_eq!(body.kinetic_energy(), 25.0);
    }
}
