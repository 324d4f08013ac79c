//! Core traits and types for slope.
//!
//! This crate defines the shared abstractions that the field catalog, the
//! descent solver, and observers build on:
//!
//! - [`ScalarField`] — a function of two variables with analytic partial
//!   derivatives
//! - [`Point`] and [`TrajectoryPoint`] — coordinates in the plane, with and
//!   without the field value
//! - [`Observer`] — receives solver events and optionally returns control actions

mod field;
mod observer;
mod point;

pub use field::ScalarField;
pub use observer::Observer;
pub use point::{Point, TrajectoryPoint};
