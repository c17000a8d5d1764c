//! The `n x (n+1)` working buffer `[A | b]` and the checks that precede elimination.

use nalgebra::{DMatrix, DVector, Dim, Matrix, Scalar, Storage, U1};

use crate::{fail, Diagnostics, Error, Event, GaussReal, ShapeError};

/// Augmented matrix `[A | b]`, exclusively owned by one solve.
///
/// It is always built as a fresh copy of the caller's data, so elimination can mutate it freely
/// without touching `A` or `b`.
#[derive(Clone, Debug, PartialEq)]
pub struct Augmented<T: Scalar> {
    mat: DMatrix<T>,
}

/// Checks that `a` is a non-empty square matrix and that `b` matches it, returning `n`.
///
/// Nothing is copied or mutated.
pub fn validate_dimensions<T, R>(a: &[R], b: &[T]) -> Result<usize, Error>
where
    R: AsRef<[T]>,
{
    let n = a.len();
    if n == 0 {
        return Err(ShapeError::Empty.into());
    }

    if let Some((row, len)) = a
        .iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != n)
    {
        return Err(ShapeError::NotSquare { row, len, n }.into());
    }

    if b.len() != n {
        return Err(ShapeError::RhsLength { n, len: b.len() }.into());
    }

    Ok(n)
}

/// Same checks as [`validate_dimensions`] for nalgebra storage of any shape.
pub fn validate_matrix_dimensions<T, R, C, RB, SA, SB>(
    a: &Matrix<T, R, C, SA>,
    b: &Matrix<T, RB, U1, SB>,
) -> Result<usize, Error>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    RB: Dim,
    SA: Storage<T, R, C>,
    SB: Storage<T, RB, U1>,
{
    let n = a.nrows();
    if n == 0 {
        return Err(ShapeError::Empty.into());
    }
    if a.ncols() != n {
        return Err(ShapeError::NotSquare {
            row: 0,
            len: a.ncols(),
            n,
        }
        .into());
    }
    if b.nrows() != n {
        return Err(ShapeError::RhsLength { n, len: b.nrows() }.into());
    }

    Ok(n)
}

impl<T: GaussReal> Augmented<T> {
    /// Builds `[A | b]` from row slices, validating the shape first.
    pub fn from_rows<R>(a: &[R], b: &[T]) -> Result<Self, Error>
    where
        R: AsRef<[T]>,
    {
        let n = validate_dimensions(a, b)?;
        let mat = DMatrix::from_fn(n, n + 1, |i, j| if j < n { a[i].as_ref()[j] } else { b[i] });
        Ok(Augmented { mat })
    }

    /// Builds `[A | b]` from nalgebra storage, validating the shape first.
    pub fn from_matrix<R, C, RB, SA, SB>(
        a: &Matrix<T, R, C, SA>,
        b: &Matrix<T, RB, U1, SB>,
    ) -> Result<Self, Error>
    where
        R: Dim,
        C: Dim,
        RB: Dim,
        SA: Storage<T, R, C>,
        SB: Storage<T, RB, U1>,
    {
        let n = validate_matrix_dimensions(a, b)?;
        let mat = DMatrix::from_fn(n, n + 1, |i, j| if j < n { a[(i, j)] } else { b[i] });
        Ok(Augmented { mat })
    }

    /// Number of equations.
    pub fn n(&self) -> usize {
        self.mat.nrows()
    }

    /// Splits the buffer into the coefficient block `U` and the right-hand side column `b̃`.
    pub fn into_parts(self) -> (DMatrix<T>, DVector<T>) {
        let n = self.n();
        let upper = self.mat.columns(0, n).into_owned();
        let rhs = self.mat.column(n).into_owned();
        (upper, rhs)
    }

    pub(crate) fn mat(&self) -> &DMatrix<T> {
        &self.mat
    }

    pub(crate) fn mat_mut(&mut self) -> &mut DMatrix<T> {
        &mut self.mat
    }
}

/// Computes `s[i] = max_j |a_ij|` over the coefficient columns of each row.
///
/// A row whose coefficients are all exactly zero has no usable scale and makes the system
/// singular, so it is rejected here before any ratio is computed.
pub fn scale_factors<T, D>(aug: &Augmented<T>, diag: &mut D) -> Result<DVector<T>, Error>
where
    T: GaussReal,
    D: Diagnostics<T> + ?Sized,
{
    let n = aug.n();
    let mat = aug.mat();
    let mut scale = DVector::<T>::zeros(n);

    for i in 0..n {
        // coefficient columns only, the augmented entry is excluded
        let mut max = T::zero();
        for j in 0..n {
            let abs = mat[(i, j)].abs();
            if abs > max {
                max = abs;
            }
        }

        if max == T::zero() {
            return Err(fail::<T, D>(diag, Error::NullRow { row: i }));
        }
        scale[i] = max;
    }

    diag.record(&Event::ScaleFactors {
        scale: scale.clone(),
    });
    Ok(scale)
}
