use glam::DVec2;

use crate::{
    error::{Error, Result},
    gravity::{Newtonian, G},
};

/// Physical parameters of a [`Simulation`](crate::Simulation), fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant.
    pub gravitational_constant: f64,
    /// Distance floor applied to every pair before dividing by the squared distance.
    pub min_distance: f64,
    /// Uniform acceleration applied to every body on top of gravity, e.g. a constant wind.
    pub external_acceleration: Option<DVec2>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            min_distance: 1.0,
            external_acceleration: None,
        }
    }
}

impl SimulationConfig {
    /// Sets the gravitational constant.
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Sets the distance floor.
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Sets the uniform acceleration applied to every body.
    pub fn with_external_acceleration(mut self, acceleration: DVec2) -> Self {
        self.external_acceleration = Some(acceleration);
        self
    }

    /// Checks that every parameter is in its valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.gravitational_constant.is_finite() || self.gravitational_constant < 0.0 {
            return Err(Error::InvalidConfig(
                "gravitational constant must be finite and non-negative",
            ));
        }

        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(Error::InvalidConfig(
                "minimum distance must be finite and strictly positive",
            ));
        }

        if self
            .external_acceleration
            .is_some_and(|acceleration| !acceleration.is_finite())
        {
            return Err(Error::InvalidConfig("external acceleration must be finite"));
        }

        Ok(())
    }

    /// The gravitational law described by this configuration.
    #[inline]
    pub fn law(&self) -> Newtonian<f64> {
        Newtonian::new(self.gravitational_constant, self.min_distance)
    }
}
