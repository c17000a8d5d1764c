//! Solves small, dense linear systems `Ax = b` by Gaussian elimination with scaled partial
//! pivoting.
//!
//! ```
//! use gauss::{GaussSolver, System};
//!
//! let system = System::<f64>::new(
//!     &[[4.0, 1.0, 0.0, 0.0], [1.0, 4.0, 1.0, 0.0], [0.0, 1.0, 4.0, 1.0], [0.0, 0.0, 1.0, 3.0]],
//!     &[6.0, 12.0, 18.0, 15.0],
//! )?;
//! let result = GaussSolver::new().solve(&system)?;
//! assert!((result.x()[3] - 4.0).abs() < 1e-9);
//! # Ok::<(), gauss::Error>(())
//! ```

use thiserror::Error;

mod diagnostics;
pub mod format;
pub mod input;
pub mod sample;
mod solver;
mod system;
#[cfg(test)]
mod tests;

pub use diagnostics::LogDiagnostics;
pub use elimination::{Diagnostics, ErrorKind, Event, GaussReal, ShapeError, TOLERANCE};
pub use input::{parse_system, Field, InputError};
pub use solver::{GaussResult, GaussSolver};
pub use system::System;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A text field could not be read as a number.
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("One of the input arguments was illegal: {msg}")]
    IllegalInput { msg: String },

    /// The system is malformed, singular or inconsistent.
    #[error(transparent)]
    Solve(#[from] elimination::Error),
}

impl Error {
    /// `true` when the caller should ask for corrected input, `false` when the system itself has
    /// no unique solution.
    pub fn is_validation(&self) -> bool {
        match self {
            Error::Input(_) | Error::IllegalInput { .. } => true,
            Error::Solve(e) => e.kind() == ErrorKind::Shape,
        }
    }

    /// Classification of a failure raised by the solver, `None` for input errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Solve(e) => Some(e.kind()),
            _ => None,
        }
    }
}

/// Solves `Ax = b` given as row slices, with the default tolerance.
pub fn solve<T, R>(a: &[R], b: &[T]) -> Result<GaussResult<T>, Error>
where
    T: GaussReal,
    R: AsRef<[T]>,
{
    GaussSolver::new().solve_rows(a, b)
}
