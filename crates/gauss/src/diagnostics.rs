use log::{debug, trace, warn};

use crate::{Diagnostics, Event, GaussReal};

/// Forwards solver events to the `log` facade.
///
/// Pivot decisions are logged at `trace`, the scale vector at `debug` and failures at `warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl<T: GaussReal> Diagnostics<T> for LogDiagnostics {
    fn record(&mut self, event: &Event<T>) {
        match event {
            Event::ScaleFactors { scale } => {
                debug!("scale factors s = {:?}", scale.as_slice());
            }
            Event::PivotSelected { step, row, ratio } => {
                trace!(
                    "step {}: pivot row {} (scaled ratio {:.6e})",
                    step + 1,
                    row + 1,
                    as_f64(*ratio)
                );
            }
            Event::RowSwap { step, row } => {
                trace!("step {}: swapped rows {} and {}", step + 1, step + 1, row + 1);
            }
            Event::Failure { error } => {
                warn!("{error}");
            }
        }
    }
}

fn as_f64<T: GaussReal>(ratio: T) -> f64 {
    num_traits::ToPrimitive::to_f64(&ratio).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample, GaussSolver};

    #[test_log::test]
    fn test_log_diagnostics_is_transparent() {
        let system = sample::example_system();
        let solver = GaussSolver::new();

        let logged = solver.solve_with(&system, &mut LogDiagnostics).unwrap();
        let silent = solver.solve(&system).unwrap();
        assert_eq!(logged, silent);
    }
}
