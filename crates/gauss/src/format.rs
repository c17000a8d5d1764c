//! Plain-text rendering of systems and results for display.

use std::fmt::{Display, Write};

use nalgebra::{DMatrix, DVector};

use crate::{GaussReal, System};

/// One line per unknown, `x<i> = <value>` with six decimals.
pub fn format_solution<T>(x: &DVector<T>) -> Vec<String>
where
    T: GaussReal + Display,
{
    x.iter()
        .enumerate()
        .map(|(i, v)| format!("x{} = {:.6}", i + 1, v))
        .collect()
}

/// The lines shown in place of a solution after a failed or cleared solve.
pub fn format_placeholders(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("x{i} = ")).collect()
}

/// `U | b̃` with every entry in a 10 character field with four decimals.
pub fn format_triangular<T>(upper: &DMatrix<T>, rhs: &DVector<T>) -> String
where
    T: GaussReal + Display,
{
    let mut out = String::new();
    for (row, b) in upper.row_iter().zip(rhs.iter()) {
        for v in row.iter() {
            let _ = write!(out, "{v:10.4}");
        }
        let _ = writeln!(out, "   |{b:10.4}");
    }
    out
}

/// The system as equations, `Equation 1: 4.0x1 + 1.0x2 - 2.0x3 = 6.0`.
///
/// Values keep their decimal point even when integral.
pub fn format_system<T: GaussReal>(system: &System<T>) -> String {
    let mut out = String::new();
    for (i, (row, b)) in system.a().row_iter().zip(system.b().iter()).enumerate() {
        let _ = write!(out, "Equation {}: ", i + 1);
        for (j, &v) in row.iter().enumerate() {
            if j == 0 {
                let _ = write!(out, "{v:?}x{}", j + 1);
            } else if v >= T::zero() {
                let _ = write!(out, " + {v:?}x{}", j + 1);
            } else {
                let _ = write!(out, " - {:?}x{}", v.abs(), j + 1);
            }
        }
        let _ = writeln!(out, " = {b:?}");
    }
    out
}
