use glam::DVec2;

use crate::{
    body::Body,
    compute_method::{ComputeMethod, DefaultComputeMethod},
    config::SimulationConfig,
    error::{Error, Result},
    gravity::Newtonian,
    integrator::semi_implicit_euler,
    point_mass::PointMass,
};

/// A fixed set of bodies advanced together under their mutual gravity.
///
/// Each [`step`](Simulation::step) runs in two phases that never overlap: the net force on every
/// body is computed from the positions at the start of the step, then every body is integrated.
///
/// ```
/// # use gravitas::prelude::*;
/// # use glam::DVec2;
/// let bodies = vec![
///     Body::new(DVec2::ZERO, DVec2::ZERO, 1e15),
///     Body::new(DVec2::new(100.0, 0.0), DVec2::ZERO, 1e15),
/// ];
/// let mut simulation = Simulation::new(bodies, SimulationConfig::default())?;
///
/// simulation.step(1.0 / 60.0)?;
///
/// assert!(simulation.bodies()[0].position.x > 0.0);
/// assert!(simulation.bodies()[1].position.x < 100.0);
/// # Ok::<(), gravitas::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulation<C = DefaultComputeMethod> {
    bodies: Vec<Body>,
    config: SimulationConfig,
    law: Newtonian<f64>,
    compute_method: C,
    snapshot: Vec<PointMass<DVec2, f64>>,
}

impl Simulation {
    /// Creates a new [`Simulation`] using the [`DefaultComputeMethod`].
    ///
    /// Fails if the configuration is invalid, or if any body has a mass that is not finite and
    /// strictly positive or a non-finite position or velocity.
    pub fn new(bodies: Vec<Body>, config: SimulationConfig) -> Result<Self> {
        Self::with_compute_method(bodies, config, DefaultComputeMethod::default())
    }
}

impl<C> Simulation<C>
where
    C: ComputeMethod<DVec2, f64>,
{
    /// Creates a new [`Simulation`] computing forces with the given [`ComputeMethod`].
    pub fn with_compute_method(
        bodies: Vec<Body>,
        config: SimulationConfig,
        compute_method: C,
    ) -> Result<Self> {
        config.validate()?;

        for (index, body) in bodies.iter().enumerate() {
            if !body.mass.is_finite() || body.mass <= 0.0 {
                return Err(Error::NonPositiveMass {
                    index,
                    mass: body.mass,
                });
            }

            if !body.position.is_finite() || !body.velocity.is_finite() {
                return Err(Error::NonFiniteBody { index });
            }
        }

        log::debug!(
            "simulation initialized with {} bodies, {:?}",
            bodies.len(),
            config
        );

        Ok(Self {
            snapshot: Vec::with_capacity(bodies.len()),
            law: config.law(),
            bodies,
            config,
            compute_method,
        })
    }

    /// Advances every body by `dt` seconds.
    ///
    /// Forces are computed from the positions at the start of the step, then each body's
    /// velocity and position are integrated with [`semi_implicit_euler`]. A `dt` of zero leaves
    /// the state unchanged. A negative or non-finite `dt` is rejected and nothing is modified.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::InvalidTimeStep(dt));
        }

        if dt == 0.0 || self.bodies.is_empty() {
            return Ok(());
        }

        self.snapshot.clear();
        self.snapshot.extend(self.bodies.iter().map(Body::point_mass));

        let forces = self.compute_method.compute(&self.snapshot, &self.law);
        debug_assert_eq!(forces.len(), self.bodies.len());

        let external = self.config.external_acceleration;
        for (body, force) in self.bodies.iter_mut().zip(forces) {
            let force = match external {
                Some(acceleration) => force + acceleration * body.mass,
                None => force,
            };

            semi_implicit_euler(body, force, dt);
        }

        log::trace!("stepped {} bodies by {dt}s", self.bodies.len());

        Ok(())
    }
}

impl<C> Simulation<C> {
    /// The bodies, in the order they were given.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Consumes the simulation, returning its bodies.
    #[inline]
    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies
    }

    /// Number of bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns true if the simulation has no bodies.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The configuration the simulation was created with.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Sum of `mass * velocity` over every body.
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies
            .iter()
            .fold(DVec2::ZERO, |momentum, body| momentum + body.momentum())
    }

    /// Mass-weighted mean position, or `None` if there are no bodies.
    pub fn centre_of_mass(&self) -> Option<DVec2> {
        if self.bodies.is_empty() {
            return None;
        }

        let (weighted, mass) = self
            .bodies
            .iter()
            .fold((DVec2::ZERO, 0.0), |(weighted, mass), body| {
                (weighted + body.position * body.mass, mass + body.mass)
            });

        Some(weighted / mass)
    }

    /// Sum of the kinetic energy of every body.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Gravitational potential energy of every pair, using the same distance floor as the forces.
    pub fn potential_energy(&self) -> f64 {
        let mut energy = 0.0;

        for (i, body1) in self.bodies.iter().enumerate() {
            let p1 = body1.point_mass();

            for body2 in &self.bodies[i + 1..] {
                energy += self.law.potential_between(&p1, &body2.point_mass());
            }
        }

        energy
    }

    /// Kinetic plus potential energy.
    #[inline]
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
