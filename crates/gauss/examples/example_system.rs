//! Solves the built-in 4x4 example system and prints the solution and the triangular system.
//!
//! Run with `RUST_LOG=trace` to see the pivot decisions.

use gauss::{format, sample, GaussSolver, LogDiagnostics};

fn main() {
    env_logger::init();

    let system = sample::example_system();
    println!("{}", format::format_system(&system));

    match GaussSolver::new().solve_with(&system, &mut LogDiagnostics) {
        Ok(result) => {
            for line in format::format_solution(result.x()) {
                println!("{line}");
            }
            println!();
            print!("{}", format::format_triangular(result.upper(), result.rhs()));
            println!("\n|Ax - b| = {:.3e}", result.residual_norm(&system));
        }
        Err(err) => {
            let title = if err.is_validation() {
                "Input error"
            } else {
                "Calculation error"
            };
            eprintln!("{title}: {err}");
            for line in format::format_placeholders(system.n()) {
                println!("{line}");
            }
            std::process::exit(1);
        }
    }
}
