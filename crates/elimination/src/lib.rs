//! Gaussian elimination with scaled partial pivoting for small, dense systems `Ax = b`.
//!
//! The solve is split into the individual steps so that a caller can orchestrate them:
//!
//! 1. [`validate_dimensions`] / [`Augmented::from_rows`] build the `n x (n+1)` working buffer,
//! 2. [`scale_factors`] computes the per-row scale vector,
//! 3. [`eliminate`] reduces the buffer to upper-triangular form,
//! 4. [`check_singularity`] rejects singular and inconsistent systems,
//! 5. [`back_substitute`] computes the solution and [`Augmented::into_parts`] yields `U` and `b̃`.
//!
//! No step holds any state between calls. Diagnostics are reported through an optional
//! [`Diagnostics`] collaborator.

mod augmented;
mod pivoting;
mod traits;
mod triangular;

pub use augmented::{scale_factors, validate_dimensions, validate_matrix_dimensions, Augmented};
pub use pivoting::eliminate;
pub use traits::{Diagnostics, Event};
pub use triangular::{back_substitute, check_singularity};

use nalgebra::RealField;
use num_traits::ToPrimitive;
use thiserror::Error;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Absolute threshold below which a pivot or coefficient is treated as zero.
pub const TOLERANCE: f64 = 1e-12;

/// Scalar types the solver operates on.
pub trait GaussReal: RealField + Copy + ToPrimitive {}

impl<T> GaussReal for T where T: RealField + Copy + ToPrimitive {}

/// Malformed input shapes. Rows are numbered from one in messages.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("The coefficient matrix A must not be empty")]
    Empty,

    #[error("A must be a square {n}x{n} matrix, but row {} has {len} entries", .row + 1)]
    NotSquare { row: usize, len: usize, n: usize },

    #[error("Incompatible dimensions: A is {n}x{n} but b has length {len}")]
    RhsLength { n: usize, len: usize },
}

/// Broad classification of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input does not describe an `n x n` system.
    Shape,
    /// The system has no unique solution.
    Singular,
    /// The system has no solution at all.
    Incompatible,
}

/// Row and column indices are stored from zero and displayed from one.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Row {} is entirely zero. The system is singular.", .row + 1)]
    NullRow { row: usize },

    #[error("Near-zero pivot in column {} (|{value:e}|). The system is singular or ill-conditioned.", .col + 1)]
    NearZeroPivot { col: usize, value: f64 },

    #[error("Singular system: row {} of the triangular matrix is entirely zero. There is no unique solution.", .row + 1)]
    NullUpperRow { row: usize },

    #[error("Incompatible system: row {} is zero in A but its right-hand side is {residual}", .row + 1)]
    Incompatible { row: usize, residual: f64 },

    #[error("Last pivot is near zero (|{value:e}|). The system has no unique solution.")]
    NearZeroLastPivot { value: f64 },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Shape(_) => ErrorKind::Shape,
            Error::Incompatible { .. } => ErrorKind::Incompatible,
            Error::NullRow { .. }
            | Error::NearZeroPivot { .. }
            | Error::NullUpperRow { .. }
            | Error::NearZeroLastPivot { .. } => ErrorKind::Singular,
        }
    }
}

/// Lossy conversion used to carry offending values in [`Error`].
pub(crate) fn to_f64<T: GaussReal>(value: T) -> f64 {
    ToPrimitive::to_f64(&value).unwrap_or(f64::NAN)
}

/// Records `error` as a failure event and hands it back for returning.
pub(crate) fn fail<T, D>(diag: &mut D, error: Error) -> Error
where
    T: GaussReal,
    D: Diagnostics<T> + ?Sized,
{
    diag.record(&Event::Failure {
        error: error.clone(),
    });
    error
}
