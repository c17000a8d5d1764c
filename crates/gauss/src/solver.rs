use log::debug;
use nalgebra::{DMatrix, DVector, Scalar};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use elimination::{
    back_substitute, check_singularity, eliminate, scale_factors, Augmented, Diagnostics,
};

use crate::{Error, GaussReal, System, TOLERANCE};

/// Output of a successful solve.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GaussResult<T: Scalar> {
    upper: DMatrix<T>,
    rhs: DVector<T>,
    x: DVector<T>,
}

impl<T: GaussReal> GaussResult<T> {
    /// The upper-triangular matrix `U`. Entries below the diagonal are exactly zero.
    pub fn upper(&self) -> &DMatrix<T> {
        &self.upper
    }

    /// The right-hand side `b̃` after elimination, such that `U x = b̃`.
    pub fn rhs(&self) -> &DVector<T> {
        &self.rhs
    }

    /// The solution vector `x`.
    pub fn x(&self) -> &DVector<T> {
        &self.x
    }

    pub fn into_parts(self) -> (DMatrix<T>, DVector<T>, DVector<T>) {
        (self.upper, self.rhs, self.x)
    }

    /// Euclidean norm of `A x - b` for the original `system`.
    pub fn residual_norm(&self, system: &System<T>) -> T {
        (system.a() * &self.x - system.b()).norm()
    }
}

/// Gaussian elimination with scaled partial pivoting.
///
/// The solver only carries its configuration; every solve works on a freshly built augmented
/// matrix, so one solver can be shared between threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussSolver<T> {
    /// Absolute threshold for near-zero pivots and null rows.
    tolerance: T,
}

impl<T: GaussReal> Default for GaussSolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: GaussReal> GaussSolver<T> {
    /// Creates a solver with the default tolerance of [`TOLERANCE`].
    pub fn new() -> Self {
        GaussSolver {
            tolerance: nalgebra::convert(TOLERANCE),
        }
    }

    /// Creates a solver with a custom tolerance. The same value is used for the pivot check
    /// during elimination and for the null-row checks afterwards.
    ///
    /// # Errors
    ///
    /// * `Error::IllegalInput` if `tolerance` is not a finite, strictly positive number.
    pub fn with_tolerance(tolerance: T) -> Result<Self, Error> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(Error::IllegalInput {
                msg: format!("tolerance must be finite and positive, got {tolerance:?}"),
            });
        }
        Ok(GaussSolver { tolerance })
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Solves `system`, discarding diagnostics.
    pub fn solve(&self, system: &System<T>) -> Result<GaussResult<T>, Error> {
        self.solve_with(system, &mut ())
    }

    /// Validates the row slices into a [`System`] and solves it.
    pub fn solve_rows<R>(&self, a: &[R], b: &[T]) -> Result<GaussResult<T>, Error>
    where
        R: AsRef<[T]>,
    {
        self.solve_rows_with(a, b, &mut ())
    }

    /// Like [`solve_rows`](Self::solve_rows), reporting to `diag`. A shape error is returned
    /// before anything is recorded.
    pub fn solve_rows_with<R, D>(
        &self,
        a: &[R],
        b: &[T],
        diag: &mut D,
    ) -> Result<GaussResult<T>, Error>
    where
        R: AsRef<[T]>,
        D: Diagnostics<T> + ?Sized,
    {
        let system = System::new(a, b)?;
        self.solve_with(&system, diag)
    }

    /// Solves `system`, reporting scale factors, pivot decisions and failures to `diag`.
    ///
    /// # Errors
    ///
    /// * `Error::Solve(_)` with [`ErrorKind::Singular`](crate::ErrorKind::Singular) if a row is
    ///     null, a pivot or the last diagonal entry is below the tolerance.
    /// * `Error::Solve(Incompatible { .. })` if a null row has a non-zero right-hand side.
    ///
    /// No partial result is produced on failure.
    pub fn solve_with<D>(&self, system: &System<T>, diag: &mut D) -> Result<GaussResult<T>, Error>
    where
        D: Diagnostics<T> + ?Sized,
    {
        let n = system.n();
        debug!("Solving {n}x{n} system with tolerance {:?}", self.tolerance);

        let mut aug = Augmented::from_matrix(system.a(), system.b())?;
        let mut scale = scale_factors(&aug, &mut *diag)?;
        eliminate(&mut aug, &mut scale, self.tolerance, &mut *diag)?;
        check_singularity(&aug, self.tolerance, &mut *diag)?;

        let x = back_substitute(&aug);
        let (upper, rhs) = aug.into_parts();
        debug!("Solved {n}x{n} system, x = {:?}", x.as_slice());

        Ok(GaussResult { upper, rhs, x })
    }
}
