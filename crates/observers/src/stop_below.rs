use slope_core::Observer;

use crate::traits::{CanStopEarly, HasPoint};

/// Stops a descent as soon as the field value falls below a threshold.
///
/// Useful for fields without a minimum, or to cut a slow descent short once
/// it is good enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow {
    threshold: f64,
}

impl StopBelow {
    /// Creates an observer that stops when `z < threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.point().z < self.threshold).then(A::stop_early)
    }
}
