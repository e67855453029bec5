use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    gravity::{net_force, Newtonian},
    point_mass::PointMass,
    vector::{Scalar, Vector},
};

/// A brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU with [rayon](https://github.com/rayon-rs/rayon).
///
/// Body indices are split across rayon's thread pool. Each worker reads the shared snapshot and
/// only produces the forces of its own bodies, so no synchronisation is needed beyond the final
/// collect. The sum for each body runs in the same order as [`sequential::BruteForce`](super::sequential::BruteForce),
/// so both methods return identical results.
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
            .into_par_iter()
            .map(|i| net_force(point_masses, i, law))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{sequential, tests, ComputeMethod};
    use super::*;

    #[test]
    fn brute_force() {
        tests::net_force_computation(BruteForce, 1e-9);
        tests::empty_and_single(BruteForce);
    }

    #[test]
    fn matches_sequential_exactly() {
        let law = Newtonian::new(1.0, 1e-2);
        let point_masses = tests::point_masses();

        assert_eq!(
            BruteForce.compute(&point_masses, &law),
            sequential::BruteForce.compute(&point_masses, &law)
        );
    }
}
