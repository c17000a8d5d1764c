//! Checks and back substitution on the reduced, upper-triangular system.

use nalgebra::DVector;

use crate::{fail, to_f64, Augmented, Diagnostics, Error, GaussReal};

/// Rejects a reduced system that has no unique solution.
///
/// A row whose coefficients are all within `tol` of zero is null. A null row with a
/// right-hand side above `tol` makes the system inconsistent ([`Error::Incompatible`]), otherwise
/// there are infinitely many solutions ([`Error::NullUpperRow`]). The last diagonal entry is also
/// checked, since [`eliminate`](crate::eliminate) never validates the final pivot. Exact zeros
/// are rejected whatever the value of `tol`.
pub fn check_singularity<T, D>(aug: &Augmented<T>, tol: T, diag: &mut D) -> Result<(), Error>
where
    T: GaussReal,
    D: Diagnostics<T> + ?Sized,
{
    let n = aug.n();
    let mat = aug.mat();

    for i in 0..n {
        let null_row = (0..n).all(|j| mat[(i, j)].abs() <= tol);
        if !null_row {
            continue;
        }

        let residual = mat[(i, n)];
        let error = if residual.abs() > tol {
            Error::Incompatible {
                row: i,
                residual: to_f64(residual),
            }
        } else {
            Error::NullUpperRow { row: i }
        };
        return Err(fail::<T, D>(diag, error));
    }

    let last = mat[(n - 1, n - 1)].abs();
    if last < tol || last == T::zero() {
        return Err(fail::<T, D>(
            diag,
            Error::NearZeroLastPivot {
                value: to_f64(last),
            },
        ));
    }

    Ok(())
}

/// Solves the upper-triangular system held in `aug` from the last equation upwards.
///
/// Only reads the upper triangle and the augmented column. Cannot fail once
/// [`check_singularity`] has accepted `aug`.
pub fn back_substitute<T: GaussReal>(aug: &Augmented<T>) -> DVector<T> {
    let n = aug.n();
    let mat = aug.mat();
    let mut x = DVector::<T>::zeros(n);

    for i in (0..n).rev() {
        let mut sum = mat[(i, n)];
        for j in (i + 1)..n {
            sum -= mat[(i, j)] * x[j];
        }
        x[i] = sum / mat[(i, i)];
    }

    x
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    use super::*;
    use crate::{Event, TOLERANCE};

    #[test]
    fn test_incompatible_row() {
        let aug = Augmented::from_rows(&[[1.0, 2.0], [0.0, 0.0]], &[3.0, 1.0]).unwrap();
        let mut events = Vec::new();
        let err = check_singularity(&aug, TOLERANCE, &mut events).unwrap_err();

        assert_eq!(
            err,
            Error::Incompatible {
                row: 1,
                residual: 1.0
            }
        );
        assert_eq!(
            err.to_string(),
            "Incompatible system: row 2 is zero in A but its right-hand side is 1"
        );
        assert_eq!(events, vec![Event::Failure { error: err }]);
    }

    #[test]
    fn test_null_row_with_zero_rhs() {
        let aug = Augmented::from_rows(&[[1.0, 2.0], [0.0, 1e-13]], &[3.0, -1e-13]).unwrap();
        assert_eq!(
            check_singularity(&aug, TOLERANCE, &mut ()),
            Err(Error::NullUpperRow { row: 1 })
        );
    }

    #[test]
    fn test_near_zero_last_pivot() {
        // not triangular, but the last row is not null either
        let aug = Augmented::from_rows(&[[1.0, 2.0], [1.0, 1e-13]], &[3.0, 2.0]).unwrap();
        assert_eq!(
            check_singularity(&aug, TOLERANCE, &mut ()),
            Err(Error::NearZeroLastPivot { value: 1e-13 })
        );
    }

    #[test]
    fn test_tolerance_is_a_parameter() {
        let aug = Augmented::from_rows(&[[1.0, 2.0], [0.0, 1e-6]], &[3.0, 1e-6]).unwrap();
        assert!(check_singularity(&aug, TOLERANCE, &mut ()).is_ok());
        assert_eq!(
            check_singularity(&aug, 1e-3, &mut ()),
            Err(Error::NullUpperRow { row: 1 })
        );
    }

    #[test]
    fn test_exact_zeros_with_zero_tolerance() {
        let aug = Augmented::from_rows(&[[1.0, 2.0], [1.0, 0.0]], &[3.0, 2.0]).unwrap();
        assert_eq!(
            check_singularity(&aug, 0.0, &mut ()),
            Err(Error::NearZeroLastPivot { value: 0.0 })
        );

        let aug = Augmented::from_rows(&[[1.0, 2.0], [0.0, 0.0]], &[3.0, 0.0]).unwrap();
        assert_eq!(
            check_singularity(&aug, 0.0, &mut ()),
            Err(Error::NullUpperRow { row: 1 })
        );
    }

    #[test]
    fn test_back_substitute() {
        let aug = Augmented::from_rows(
            &[[2.0, 1.0, -1.0], [0.0, 4.0, 2.0], [0.0, 0.0, 5.0]],
            &[1.0, 14.0, 15.0],
        )
        .unwrap();
        assert!(check_singularity(&aug, TOLERANCE, &mut ()).is_ok());

        let x = back_substitute(&aug);
        assert_relative_eq!(x, dvector![1.0, 2.0, 3.0], max_relative = 1e-12);
    }

    #[test]
    fn test_dense1() {
        let mut aug = Augmented::from_rows(
            &[
                [5.0, 0.0, 0.0, 1.0],
                [2.0, 2.0, 2.0, 1.0],
                [4.0, 5.0, 5.0, 5.0],
                [1.0, 6.0, 4.0, 5.0],
            ],
            &[9.0, 16.0, 49.0, 45.0],
        )
        .unwrap();
        let mut scale = crate::scale_factors(&aug, &mut ()).unwrap();
        crate::eliminate(&mut aug, &mut scale, TOLERANCE, &mut ()).unwrap();
        check_singularity(&aug, TOLERANCE, &mut ()).unwrap();

        let x = back_substitute(&aug);
        assert_relative_eq!(x, dvector![1.0, 2.0, 3.0, 4.0], max_relative = 1e-9);
    }

    #[test]
    fn test_back_substitute_ignores_lower_triangle() {
        let aug = Augmented::from_rows(&[[2.0, 0.0], [7.0, 4.0]], &[2.0, 8.0]).unwrap();
        assert_eq!(back_substitute(&aug), dvector![1.0, 2.0]);
    }
}
