use crate::{
    gravity::{net_force, Newtonian},
    point_mass::PointMass,
    vector::{Scalar, Vector},
};

/// A brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU.
///
/// Sums, for each body, the force exerted by every other body. Each body's sum runs in ascending
/// index order, so its result does not depend on which other bodies were computed first.
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForce;

impl<V, S> super::ComputeMethod<V, S> for BruteForce
where
    S: Scalar,
    V: Vector<Scalar = S>,
{
    #[inline]
    fn compute(&mut self, point_masses: &[PointMass<V, S>], law: &Newtonian<S>) -> Vec<V> {
        (0..point_masses.len())
            .map(|i| net_force(point_masses, i, law))
            .collect()
    }
}

/// A brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU that computes each pair
/// of bodies once.
///
/// The force of a pair is added to the first body and subtracted from the second, halving the
/// number of force evaluations. Results match [`BruteForce`] up to floating-point summation order.
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForcePairs;

impl<V, S> super::ComputeMethod<V, S> for BruteForcePairs
where
    S: Scalar,
    V: Vector<Scalar = S>,
{
    #[inline]
    fn compute(&mut self, point_masses: &[PointMass<V, S>], law: &Newtonian<S>) -> Vec<V> {
        let len = point_masses.len();
        let mut forces = vec![V::default(); len];

        for i in 0..len {
            let p1 = &point_masses[i];
            let mut force = V::default();

            for j in (i + 1)..len {
                let f = law.force_between(p1, &point_masses[j]);

                force += f;
                forces[j] -= f;
            }

            forces[i] += force;
        }

        forces
    }
}
