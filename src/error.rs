use thiserror::Error;

/// Precondition violations rejected at the boundary of the simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A body was given a zero, negative or non-finite mass.
    #[error("body {index} has mass {mass}, masses must be finite and strictly positive")]
    NonPositiveMass {
        /// Index of the offending body.
        index: usize,
        /// The rejected mass.
        mass: f64,
    },

    /// A body was given a NaN or infinite position or velocity.
    #[error("body {index} has a non-finite position or velocity")]
    NonFiniteBody {
        /// Index of the offending body.
        index: usize,
    },

    /// A step was requested with a negative or non-finite elapsed time.
    #[error("time step {0} is invalid, it must be finite and non-negative")]
    InvalidTimeStep(f64),

    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result type of the fallible operations of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
