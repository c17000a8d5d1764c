//! Fixed example data for demonstration and testing.

use crate::System;

/// Coefficients of the example system. The tiny leading entry forces a row swap.
pub const EXAMPLE_A: [[f64; 4]; 4] = [
    [0.001, 1.0, 2.0, 3.0],
    [1.0, 2.0, 3.0, 4.0],
    [0.002, -1.0, 0.0, 1.0],
    [0.5, 0.0, 0.0, 1.0],
];

/// Right-hand side of the example system.
pub const EXAMPLE_B: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

/// The 4x4 example system.
pub fn example_system() -> System<f64> {
    System::from_fn(4, |i, j| EXAMPLE_A[i][j], |i, _| EXAMPLE_B[i])
}

/// The example as text fields, the way an input form would be pre-filled.
pub fn example_fields() -> (Vec<Vec<String>>, Vec<String>) {
    let a = EXAMPLE_A
        .iter()
        .map(|row| row.iter().map(f64::to_string).collect())
        .collect();
    let b = EXAMPLE_B.iter().map(f64::to_string).collect();
    (a, b)
}
