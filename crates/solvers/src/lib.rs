//! Solvers that descend scalar fields.
//!
//! # Solvers
//!
//! - [`descent`] — fixed-step, full-gradient descent that records every
//!   visited point

pub mod descent;
