/// Compute methods that use multiple CPU threads.
#[cfg(feature = "parallel")]
pub mod parallel;

/// Compute methods that use one CPU thread.
pub mod sequential;

use crate::{gravity::Newtonian, point_mass::PointMass};

/// Trait for algorithms computing the net gravitational force on every body of a snapshot.
///
/// Implementations only read the snapshot: the force on a body depends on the positions and
/// masses at the start of the step, never on another body's in-progress update.
///
/// # Example
///
/// ```
/// # use gravitas::prelude::*;
/// # use glam::DVec2;
/// struct NoGravity;
///
/// impl ComputeMethod<DVec2, f64> for NoGravity {
///     fn compute(&mut self, point_masses: &[PointMass<DVec2, f64>], _: &Newtonian<f64>) -> Vec<DVec2> {
///         vec![DVec2::ZERO; point_masses.len()]
///     }
/// }
/// ```
pub trait ComputeMethod<V, S> {
    /// Computes the net force exerted on each point-mass by all the others.
    ///
    /// The returned vector holds one force per point-mass, in the same order they were input.
    fn compute(&mut self, point_masses: &[PointMass<V, S>], law: &Newtonian<S>) -> Vec<V>;
}

impl<C, V, S> ComputeMethod<V, S> for &mut C
where
    C: ComputeMethod<V, S>,
{
    #[inline]
    fn compute(&mut self, point_masses: &[PointMass<V, S>], law: &Newtonian<S>) -> Vec<V> {
        (**self).compute(point_masses, law)
    }
}

impl<V, S> ComputeMethod<V, S> for Box<dyn ComputeMethod<V, S> + Send> {
    #[inline]
    fn compute(&mut self, point_masses: &[PointMass<V, S>], law: &Newtonian<S>) -> Vec<V> {
        (**self).compute(point_masses, law)
    }
}

/// The compute method used when none is specified: [`parallel::BruteForce`] if the `parallel`
/// feature is enabled, [`sequential::BruteForce`] otherwise.
#[cfg(feature = "parallel")]
pub type DefaultComputeMethod = parallel::BruteForce;

/// The compute method used when none is specified: [`parallel::BruteForce`] if the `parallel`
/// feature is enabled, [`sequential::BruteForce`] otherwise.
#[cfg(not(feature = "parallel"))]
pub type DefaultComputeMethod = sequential::BruteForce;
