//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against the capabilities it needs.
//!
//! # Example
//!
//! ```rust
//! use slope_core::Observer;
//! use slope_observers::traits::{CanStopEarly, HasGradient};
//!
//! /// Stops once the applied gradient is nearly flat.
//! struct Flat {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasGradient, A: CanStopEarly> Observer<E, A> for Flat {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let [gx, gy] = event.gradient()?;
//!         (gx.hypot(gy) < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use slope_core::TrajectoryPoint;
use slope_solvers::descent;

/// An event that reports a visited point.
pub trait HasPoint {
    /// Returns the point and its field value.
    fn point(&self) -> TrajectoryPoint;
}

/// An event that may carry the gradient applied to reach it.
pub trait HasGradient {
    /// Returns the applied gradient, or `None` before the first step.
    fn gradient(&self) -> Option<[f64; 2]>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasPoint for descent::Event {
    fn point(&self) -> TrajectoryPoint {
        descent::Event::point(self)
    }
}

impl HasGradient for descent::Event {
    fn gradient(&self) -> Option<[f64; 2]> {
        descent::Event::gradient(self)
    }
}

impl CanStopEarly for descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
