//! # Gravitas
//!
//! Gravitas is a two-dimensional N-body gravitational simulation core: a fixed set of point-mass
//! bodies attract each other according to Newton's law of universal gravitation and are advanced
//! once per discrete time step.
//!
//! ## Goals
//!
//! The crate only handles the physics. Windowing, input and drawing are left to the caller, which
//! owns a [`Simulation`], calls [`step`](Simulation::step) once per frame with the elapsed time and
//! reads the updated [`bodies`](Simulation::bodies) back. A minimal [`Camera`](camera::Camera) is
//! provided to map world coordinates to the caller's screen.
//!
//! Every step runs in two phases:
//!
//! 1. the net force on every body is computed from the positions at the start of the step, using
//!    a [`ComputeMethod`](compute_method::ComputeMethod),
//! 2. every body is integrated with [semi-implicit Euler](integrator::semi_implicit_euler).
//!
//! With the "parallel" feature (enabled by default), the first phase is spread across threads
//! thanks to [rayon](https://github.com/rayon-rs/rayon).
//!
//! # Using Gravitas
//!
//! ```
//! # use gravitas::prelude::*;
//! # use glam::DVec2;
//! let bodies = vec![
//!     Body::new(DVec2::new(0.0, 0.0), DVec2::ZERO, 1e15),
//!     Body::new(DVec2::new(100.0, 0.0), DVec2::ZERO, 1e15),
//!     Body::new(DVec2::new(0.0, 100.0), DVec2::ZERO, 1e15),
//! ];
//!
//! let mut simulation = Simulation::new(bodies, SimulationConfig::default())?;
//!
//! for _ in 0..60 {
//!     simulation.step(0.016)?;
//! }
//!
//! for body in simulation.bodies() {
//!     println!("{} (radius {})", body.position, body.radius());
//! }
//! # Ok::<(), gravitas::Error>(())
//! ```
//!
//! A specific [`ComputeMethod`](compute_method::ComputeMethod) can be chosen with
//! [`Simulation::with_compute_method`]:
//!
//! ```
//! # use gravitas::prelude::*;
//! # let bodies = Vec::new();
//! let simulation = Simulation::with_compute_method(
//!     bodies,
//!     SimulationConfig::default(),
//!     sequential::BruteForcePairs,
//! )?;
//! # Ok::<(), gravitas::Error>(())
//! ```

#![warn(missing_docs)]

/// Bodies and their display metadata.
pub mod body;

/// Minimal view transform for renderers.
pub mod camera;

/// Trait for computing the net forces of a snapshot and types implementing it for the user to choose from.
pub mod compute_method;

/// Physical parameters of a simulation.
pub mod config;

/// Errors returned at the boundary of the simulation.
pub mod error;

/// Newton's law of universal gravitation.
pub mod gravity;

/// Time integration of a single body.
pub mod integrator;

/// Point-mass representation of bodies.
pub mod point_mass;

/// Random initial distributions of bodies.
pub mod scenario;

/// The simulation and its step driver.
pub mod simulation;

/// Scalar and vector abstractions used by the force computation.
pub mod vector;

pub use body::{Body, Shape};
pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use simulation::Simulation;

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::body::{Body, Shape};
    pub use crate::camera::Camera;
    pub use crate::compute_method::*;
    pub use crate::config::SimulationConfig;
    pub use crate::gravity::{net_force, Newtonian, G};
    pub use crate::point_mass::PointMass;
    pub use crate::scenario::{ScenarioConfig, Spread};
    pub use crate::simulation::Simulation;
}
