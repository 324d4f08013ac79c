//! Reusable observers for slope descents.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasPoint`], [`HasGradient`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — reports every event through the `log` facade
//! - [`StopBelow`] — stops once the field value drops below a threshold
//!
//! [`Observer`]: slope_core::Observer
//! [`HasPoint`]: traits::HasPoint
//! [`HasGradient`]: traits::HasGradient
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod stop_below;

pub use logging::LogObserver;
pub use stop_below::StopBelow;
