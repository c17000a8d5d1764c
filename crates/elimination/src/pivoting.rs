//! Forward elimination with scaled partial pivoting.

use nalgebra::DVector;

use crate::{fail, to_f64, Augmented, Diagnostics, Error, Event, GaussReal};

/// Reduces `aug` to upper-triangular form in place.
///
/// For each elimination step `k = 0, ..., n-2`:
///
/// 1. the pivot row is the row `i >= k` maximising the scaled ratio `|a(i,k)| / s[i]`. The scan
///    keeps the first maximum, so ties resolve to the lowest row index.
/// 2. a pivot with `|a(p,k)| < tol` fails with [`Error::NearZeroPivot`]. The tolerance is applied
///    to the raw magnitude, not to the ratio. An exactly-zero pivot fails even when `tol` is zero.
/// 3. rows `k` and `p` are swapped in `aug` and in `scale`, so every scale factor keeps
///    following its own row.
/// 4. `row_i -= [a(i,k)/a(k,k)] row_k` for `i > k`, across the augmented column too. The
///    eliminated entry `a(i,k)` is set to exactly zero.
///
/// The last diagonal entry is never checked here, see [`check_singularity`](crate::check_singularity).
pub fn eliminate<T, D>(
    aug: &mut Augmented<T>,
    scale: &mut DVector<T>,
    tol: T,
    diag: &mut D,
) -> Result<(), Error>
where
    T: GaussReal,
    D: Diagnostics<T> + ?Sized,
{
    let n = aug.n();
    assert_eq!(scale.len(), n, "Scale vector must have one entry per row");

    let mat = aug.mat_mut();

    // k-th elimination step number
    for k in 0..n.saturating_sub(1) {
        let (p, ratio) = select_pivot(mat.column(k).as_slice(), scale.as_slice(), k);
        diag.record(&Event::PivotSelected {
            step: k,
            row: p,
            ratio,
        });

        // check for a near-zero pivot element
        let pivot = mat[(p, k)].abs();
        if pivot < tol || pivot == T::zero() {
            return Err(fail::<T, D>(
                diag,
                Error::NearZeroPivot {
                    col: k,
                    value: to_f64(pivot),
                },
            ));
        }

        if p != k {
            mat.swap_rows(k, p);
            scale.swap_rows(k, p);
            diag.record(&Event::RowSwap { step: k, row: p });
        }

        let a_kk = mat[(k, k)];
        for i in (k + 1)..n {
            let factor = mat[(i, k)] / a_kk;
            mat[(i, k)] = T::zero();

            // a(i,j) = a(i,j) - [a(i,k)/a(k,k)]*a(k,j), j = k+1, ..., n
            for j in (k + 1)..=n {
                let a_kj = mat[(k, j)];
                mat[(i, j)] -= factor * a_kj;
            }
        }
    }

    Ok(())
}

/// Returns the row `p >= k` with the largest `|col[p]| / scale[p]`, and that ratio.
fn select_pivot<T: GaussReal>(col: &[T], scale: &[T], k: usize) -> (usize, T) {
    let mut p = k;
    let mut max_ratio = col[k].abs() / scale[k];

    for i in (k + 1)..col.len() {
        let ratio = col[i].abs() / scale[i];
        if ratio > max_ratio {
            max_ratio = ratio;
            p = i;
        }
    }

    (p, max_ratio)
}
