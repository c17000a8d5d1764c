use crate::System;


/// Tridiagonal system with solution `[1, 2, 3, 4]`.
pub(super) fn regular_system() -> System<f64> {
    System::new(
        &[
            [4.0, 1.0, 0.0, 0.0],
            [1.0, 4.0, 1.0, 0.0],
            [0.0, 1.0, 4.0, 1.0],
            [0.0, 0.0, 1.0, 3.0],
        ],
        &[6.0, 12.0, 18.0, 15.0],
    )
    .unwrap()
}

/// Same as [`regular_system`] but with a tiny leading pivot.
pub(super) fn tiny_pivot_system() -> System<f64> {
    System::new(
        &[
            [1e-12, 1.0, 0.0, 0.0],
            [1.0, 4.0, 1.0, 0.0],
            [0.0, 1.0, 4.0, 1.0],
            [0.0, 0.0, 1.0, 3.0],
        ],
        &[2.0 + 1e-12, 12.0, 18.0, 15.0],
    )
    .unwrap()
}

/// Strictly diagonally dominant `n x n` system with a known solution `x[i] = i + 1`.
pub(super) fn dominant_system(n: usize) -> (System<f64>, Vec<f64>) {
    let a: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        2.0 * n as f64 + (i as f64) * 10.0
                    } else {
                        ((i * 7 + j * 3) % 5) as f64 - 2.0
                    }
                })
                .collect()
        })
        .collect();
    let x: Vec<f64> = (1..=n).map(|i| i as f64).collect();
    let b: Vec<f64> = a
        .iter()
        .map(|row| row.iter().zip(&x).map(|(a, x)| a * x).sum())
        .collect();
    (System::new(&a, &b).unwrap(), x)
}

/// Every permutation of `0..n`, in lexicographic order.
pub(super) fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![vec![]];
    }
    let mut out = Vec::new();
    for rest in permutations(n - 1) {
        for pos in 0..=rest.len() {
            let mut p = rest.clone();
            p.insert(pos, n - 1);
            out.push(p);
        }
    }
    out.sort();
    out
}
