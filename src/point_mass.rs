/// Point-mass representation of a body: the only data the force computation reads.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointMass<V, S> {
    /// Position of the object.
    pub position: V,
    /// Mass of the object.
    pub mass: S,
}

impl<V, S> PointMass<V, S> {
    /// Creates a new [`PointMass`] with the given position and mass.
    #[inline]
    pub const fn new(position: V, mass: S) -> Self {
        Self { position, mass }
    }
}
