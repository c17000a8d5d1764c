use nalgebra::{DMatrix, DVector, Scalar};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{Error, GaussReal};

/// A validated linear system `Ax = b` with `A` square and `b` of matching length.
///
/// Immutable once built. The solver copies it into its own working buffer.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))
)]
#[derive(Clone, Debug, PartialEq)]
pub struct System<T: Scalar> {
    a: DMatrix<T>,
    b: DVector<T>,
}

impl<T: GaussReal> System<T> {
    /// Builds a system from the rows of `A` and the right-hand side `b`.
    ///
    /// # Errors
    ///
    /// * `Error::Solve(Shape(_))` if `A` is empty, not square, or `b` has the wrong length.
    pub fn new<R>(a: &[R], b: &[T]) -> Result<Self, Error>
    where
        R: AsRef<[T]>,
    {
        let n = elimination::validate_dimensions(a, b)?;
        Ok(System {
            a: DMatrix::from_fn(n, n, |i, j| a[i].as_ref()[j]),
            b: DVector::from_vec(b.to_vec()),
        })
    }

    /// Builds a system from nalgebra storage, with the same checks as [`System::new`].
    pub fn from_matrix(a: DMatrix<T>, b: DVector<T>) -> Result<Self, Error> {
        elimination::validate_matrix_dimensions(&a, &b)?;
        Ok(System { a, b })
    }

    /// For data that is square by construction.
    pub(crate) fn from_fn<F, G>(n: usize, a: F, b: G) -> Self
    where
        F: FnMut(usize, usize) -> T,
        G: FnMut(usize, usize) -> T,
    {
        System {
            a: DMatrix::from_fn(n, n, a),
            b: DVector::from_fn(n, b),
        }
    }

    /// Number of equations (and unknowns).
    pub fn n(&self) -> usize {
        self.b.len()
    }

    /// The coefficient matrix `A`.
    pub fn a(&self) -> &DMatrix<T> {
        &self.a
    }

    /// The right-hand side `b`.
    pub fn b(&self) -> &DVector<T> {
        &self.b
    }

    /// The same system with its equations reordered, equation `i` taken from `order[i]`.
    ///
    /// # Errors
    ///
    /// * `Error::IllegalInput` if `order` is not a permutation of `0..n`.
    pub fn permuted(&self, order: &[usize]) -> Result<Self, Error> {
        let n = self.n();
        let mut seen = vec![false; n];
        let is_permutation = order.len() == n
            && order.iter().all(|&i| i < n && !std::mem::replace(&mut seen[i], true));
        if !is_permutation {
            return Err(Error::IllegalInput {
                msg: format!("row order {order:?} is not a permutation of 0..{n}"),
            });
        }

        Ok(System {
            a: self.a.select_rows(order),
            b: self.b.select_rows(order),
        })
    }
}
