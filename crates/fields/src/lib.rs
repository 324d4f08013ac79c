//! The catalog of scalar fields available for descent.
//!
//! A [`Registry`] is built once and then only read. It maps a small integer
//! id to an [`AnalyticField`], whose value and partial derivatives are fixed
//! closed-form expressions:
//!
//! | id | field |
//! |----|-------|
//! | 1  | `0.1·sin(x²) + 0.1·cos(y²)` |
//! | 2  | `x² + y²` |
//! | 3  | `x·exp(−(x² + y²))` |
//! | 4  | `0.5·sin(x) + 0.5·y²` |
//! | 5  | `(x² + y²)·exp(−(x² + y²)/2)` |
//!
//! [`Surface`] samples any field over a square grid, which is what a renderer
//! needs to draw the landscape underneath a trajectory.

mod analytic;
mod catalog;
mod error;
mod registry;
mod surface;

pub use analytic::{AnalyticField, Expr};
pub use error::Error;
pub use registry::Registry;
pub use surface::Surface;
