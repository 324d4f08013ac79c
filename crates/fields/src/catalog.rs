//! Closed-form definitions of the registered fields.
//!
//! Each field lives in its own module as three free functions. The partial
//! derivatives are derived by hand, and the tests in [`crate::registry`]
//! check them against finite differences.

use crate::AnalyticField;

/// Every registered field, ordered by id.
pub(crate) const FIELDS: [AnalyticField; 5] = [
    ripple::FIELD,
    bowl::FIELD,
    dipole::FIELD,
    trough::FIELD,
    crater::FIELD,
];

/// `0.1·sin(x²) + 0.1·cos(y²)`
mod ripple {
    use super::AnalyticField;

    pub(super) const FIELD: AnalyticField =
        AnalyticField::new(1, "0.1·sin(x²) + 0.1·cos(y²)", value, grad_x, grad_y);

    fn value(x: f64, y: f64) -> f64 {
        0.1 * (x * x).sin() + 0.1 * (y * y).cos()
    }

    fn grad_x(x: f64, _y: f64) -> f64 {
        0.2 * x * (x * x).cos()
    }

    fn grad_y(_x: f64, y: f64) -> f64 {
        -0.2 * y * (y * y).sin()
    }
}

/// `x² + y²`
mod bowl {
    use super::AnalyticField;

    pub(super) const FIELD: AnalyticField =
        AnalyticField::new(2, "x² + y²", value, grad_x, grad_y);

    fn value(x: f64, y: f64) -> f64 {
        y * y + x * x
    }

    fn grad_x(x: f64, _y: f64) -> f64 {
        2.0 * x
    }

    fn grad_y(_x: f64, y: f64) -> f64 {
        2.0 * y
    }
}

/// `x·exp(−(x² + y²))`
mod dipole {
    use super::AnalyticField;

    pub(super) const FIELD: AnalyticField =
        AnalyticField::new(3, "x·exp(−(x² + y²))", value, grad_x, grad_y);

    fn decay(x: f64, y: f64) -> f64 {
        (-(x * x + y * y)).exp()
    }

    fn value(x: f64, y: f64) -> f64 {
        x * decay(x, y)
    }

    fn grad_x(x: f64, y: f64) -> f64 {
        (1.0 - 2.0 * x * x) * decay(x, y)
    }

    fn grad_y(x: f64, y: f64) -> f64 {
        -2.0 * x * y * decay(x, y)
    }
}

/// `0.5·sin(x) + 0.5·y²`
mod trough {
    use super::AnalyticField;

    pub(super) const FIELD: AnalyticField =
        AnalyticField::new(4, "0.5·sin(x) + 0.5·y²", value, grad_x, grad_y);

    fn value(x: f64, y: f64) -> f64 {
        0.5 * x.sin() + 0.5 * y * y
    }

    fn grad_x(x: f64, _y: f64) -> f64 {
        0.5 * x.cos()
    }

    fn grad_y(_x: f64, y: f64) -> f64 {
        y
    }
}

/// `(x² + y²)·exp(−(x² + y²)/2)`
mod crater {
    use super::AnalyticField;

    pub(super) const FIELD: AnalyticField =
        AnalyticField::new(5, "(x² + y²)·exp(−(x² + y²)/2)", value, grad_x, grad_y);

    fn value(x: f64, y: f64) -> f64 {
        let r2 = x * x + y * y;
        r2 * (-r2 / 2.0).exp()
    }

    // d/dx [r²·e^(−r²/2)] = 2x·e^(−r²/2) − x·r²·e^(−r²/2)
    fn grad_x(x: f64, y: f64) -> f64 {
        let r2 = x * x + y * y;
        x * (2.0 - r2) * (-r2 / 2.0).exp()
    }

    fn grad_y(x: f64, y: f64) -> f64 {
        let r2 = x * x + y * y;
        y * (2.0 - r2) * (-r2 / 2.0).exp()
    }
}
