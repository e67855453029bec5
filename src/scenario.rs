use glam::DVec2;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};

use crate::{
    body::{Body, Shape},
    error::{Error, Result},
};

/// Normal distribution parameters for one kind of initial value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    /// Mean of each component.
    pub mean: f64,
    /// Standard deviation of each component.
    pub std_dev: f64,
}

impl Spread {
    fn normal(&self) -> Result<Normal<f64>> {
        if !self.mean.is_finite() {
            return Err(Error::InvalidConfig("spread mean must be finite"));
        }

        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(Error::InvalidConfig(
                "spread standard deviation must be finite and non-negative",
            ));
        }

        Normal::new(self.mean, self.std_dev)
            .map_err(|_| Error::InvalidConfig("spread cannot be sampled"))
    }
}

/// Random initial distribution of bodies.
///
/// Position and velocity components are drawn independently from normal distributions, masses
/// uniformly from `mass_min..=mass_max`, and colours uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioConfig {
    /// Number of bodies.
    pub count: usize,
    /// Distribution of each position component.
    pub position: Spread,
    /// Distribution of each velocity component.
    pub velocity: Spread,
    /// Smallest mass.
    pub mass_min: f64,
    /// Largest mass.
    pub mass_max: f64,
    /// Display radius of every body.
    pub radius: f64,
    /// Seed of the random generator, or `None` to seed from the operating system.
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            count: 4000,
            position: Spread {
                mean: -20000.0,
                std_dev: 20000.0,
            },
            velocity: Spread {
                mean: -200.0,
                std_dev: 200.0,
            },
            mass_min: 2e15,
            mass_max: 2e15,
            radius: 100.0,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    /// Checks that every distribution can be sampled and every body will have a valid mass.
    pub fn validate(&self) -> Result<()> {
        self.position.normal()?;
        self.velocity.normal()?;

        if !(self.mass_min.is_finite() && self.mass_max.is_finite() && self.mass_min > 0.0) {
            return Err(Error::InvalidConfig(
                "masses must be finite and strictly positive",
            ));
        }

        if self.mass_min > self.mass_max {
            return Err(Error::InvalidConfig(
                "minimum mass must not exceed maximum mass",
            ));
        }

        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(Error::InvalidConfig("radius must be finite and non-negative"));
        }

        Ok(())
    }

    /// Draws the bodies.
    pub fn generate(&self) -> Result<Vec<Body>> {
        self.validate()?;

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let position = self.position.normal()?;
        let velocity = self.velocity.normal()?;
        let mass = Uniform::new_inclusive(self.mass_min, self.mass_max);

        let bodies = (0..self.count)
            .map(|_| Body {
                position: DVec2::new(position.sample(&mut rng), position.sample(&mut rng)),
                velocity: DVec2::new(velocity.sample(&mut rng), velocity.sample(&mut rng)),
                mass: mass.sample(&mut rng),
                shape: Shape {
                    radius: self.radius,
                    color: rng.gen(),
                },
            })
            .collect();

        log::debug!("generated {} bodies", self.count);

        Ok(bodies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> ScenarioConfig {
        ScenarioConfig {
            count,
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let bodies = seeded(64).generate().unwrap();

        assert_eq!(bodies.len(), 64);
        assert_eq!(bodies, seeded(64).generate().unwrap());
    }

    #[test]
    fn generated_bodies_are_valid() {
        let config = ScenarioConfig {
            mass_min: 1e15,
            mass_max: 2e16,
            ..seeded(256)
        };

        for body in config.generate().unwrap() {
            assert!(body.position.is_finite());
            assert!(body.velocity.is_finite());
            assert!((1e15..=2e16).contains(&body.mass));
            assert_eq!(body.radius(), 100.0);
        }
    }

    #[test]
    fn sample_statistics() {
        let bodies = seeded(4000).generate().unwrap();
        let mean = bodies.iter().map(|b| b.position.x).sum::<f64>() / bodies.len() as f64;

        assert!((mean + 20000.0).abs() < 2000.0);
    }

    #[test]
    fn zero_spread_is_constant() {
        let mut config = seeded(8);
        config.velocity = Spread {
            mean: 5.0,
            std_dev: 0.0,
        };

        for body in config.generate().unwrap() {
            assert_eq!(body.velocity, DVec2::splat(5.0));
        }
    }

    #[test]
    fn rejects_invalid_distributions() {
        let mut config = seeded(1);
        config.velocity.std_dev = -1.0;
        assert_eq!(
            config.generate(),
            Err(Error::InvalidConfig(
                "spread standard deviation must be finite and non-negative"
            ))
        );

        let mut config = seeded(1);
        config.position.std_dev = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = seeded(1);
        config.mass_min = 0.0;
        assert!(config.validate().is_err());

        let mut config = seeded(1);
        config.mass_min = 3.0;
        config.mass_max = 2.0;
        assert!(config.validate().is_err());

        let mut config = seeded(1);
        config.position.mean = f64::NAN;
        assert!(config.validate().is_err());
    }
}
