use crate::{
    point_mass::PointMass,
    vector::{Scalar, Vector},
};

/// Gravitational constant used by default, in SI units.
pub const G: f64 = 6.6742e-11;

/// Newton's law of universal gravitation between two point-masses, with a minimum distance floor.
///
/// The squared distance between two bodies is clamped to at least `min_distance²` before
/// dividing, so coincident or nearly coincident bodies produce a bounded force instead of an
/// infinite or NaN one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Newtonian<S> {
    /// Gravitational constant.
    pub g: S,
    /// Squared minimum distance the force computation will divide by.
    pub min_distance_sq: S,
}

impl<S: Scalar> Newtonian<S> {
    /// Creates a new [`Newtonian`] law with the gravitational constant `g` and the distance floor `min_distance`.
    #[inline]
    pub fn new(g: S, min_distance: S) -> Self {
        Self {
            g,
            min_distance_sq: min_distance * min_distance,
        }
    }

    /// Returns the force exerted on `affected` by `affecting`, pointing from `affected` towards `affecting`.
    ///
    /// The magnitude is `g * m1 * m2 / max(d², min_distance²)`. Exactly coincident bodies have
    /// no direction to pull along and yield a zero vector.
    #[inline]
    pub fn force_between<V>(&self, affected: &PointMass<V, S>, affecting: &PointMass<V, S>) -> V
    where
        V: Vector<Scalar = S>,
    {
        let dir = affecting.position - affected.position;
        let mag_2 = dir.length_squared();

        if mag_2 == S::default() {
            return V::default();
        }

        // Unit direction times the floored inverse square law.
        dir * (self.g * (affected.mass * affecting.mass)
            / (mag_2.max(self.min_distance_sq) * mag_2.sqrt()))
    }

    /// Returns the potential energy of a pair, `-g * m1 * m2 / max(d, min_distance)`.
    #[inline]
    pub fn potential_between<V>(&self, p1: &PointMass<V, S>, p2: &PointMass<V, S>) -> S
    where
        V: Vector<Scalar = S>,
    {
        let mag_2 = (p2.position - p1.position)
            .length_squared()
            .max(self.min_distance_sq);

        -(self.g * (p1.mass * p2.mass) / mag_2.sqrt())
    }
}

impl Default for Newtonian<f64> {
    fn default() -> Self {
        Self::new(G, 1.0)
    }
}

/// Sums the forces every other point-mass exerts on the one at `index`.
///
/// The self term is never computed: the sum runs over `0..index` then `index + 1..len`, in
/// ascending order.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[inline]
pub fn net_force<V, S>(point_masses: &[PointMass<V, S>], index: usize, law: &Newtonian<S>) -> V
where
    S: Scalar,
    V: Vector<Scalar = S>,
{
    let affected = &point_masses[index];
    let (before, after) = point_masses.split_at(index);

    before
        .iter()
        .chain(&after[1..])
        .fold(V::default(), |force, affecting| {
            force + law.force_between(affected, affecting)
        })
}
