use nalgebra::{DVector, Scalar};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Something noteworthy that happened during a solve.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Event<T: Scalar> {
    /// The scale vector computed before elimination.
    ScaleFactors { scale: DVector<T> },
    /// Row `row` won the scaled-ratio comparison at elimination step `step`.
    PivotSelected { step: usize, row: usize, ratio: T },
    /// Rows `step` and `row` were exchanged, together with their scale factors.
    RowSwap { step: usize, row: usize },
    /// The solve is about to fail with `error`.
    Failure { error: Error },
}

/// Receiver for [`Event`]s emitted by the elimination steps.
///
/// The solver never holds a global logger; callers that want a trace of the pivot decisions
/// pass an implementation of this trait. `()` discards everything and `Vec<Event<T>>` keeps
/// every event in order.
pub trait Diagnostics<T: Scalar> {
    /// Record a single event.
    fn record(&mut self, event: &Event<T>);
}

impl<T: Scalar> Diagnostics<T> for () {
    fn record(&mut self, _event: &Event<T>) {}
}

impl<T: Scalar> Diagnostics<T> for Vec<Event<T>> {
    fn record(&mut self, event: &Event<T>) {
        self.push(event.clone());
    }
}

impl<T, D> Diagnostics<T> for &mut D
where
    T: Scalar,
    D: Diagnostics<T> + ?Sized,
{
    fn record(&mut self, event: &Event<T>) {
        (**self).record(event);
    }
}
