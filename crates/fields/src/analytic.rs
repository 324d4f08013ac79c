use std::fmt;

use slope_core::ScalarField;

/// Signature shared by a field's value and its partial derivatives.
pub type Expr = fn(f64, f64) -> f64;

/// A scalar field given by closed-form expressions.
///
/// The value and both partial derivatives are plain function pointers, so an
/// `AnalyticField` is `Copy`, `Send`, and `Sync`, and evaluation costs nothing
/// beyond the arithmetic itself.
#[derive(Clone, Copy)]
pub struct AnalyticField {
    id: u32,
    label: &'static str,
    value: Expr,
    grad_x: Expr,
    grad_y: Expr,
}

impl AnalyticField {
    /// Creates a field from its expressions.
    ///
    /// The caller is responsible for `grad_x` and `grad_y` actually being the
    /// partial derivatives of `value`.
    #[must_use]
    pub const fn new(
        id: u32,
        label: &'static str,
        value: Expr,
        grad_x: Expr,
        grad_y: Expr,
    ) -> Self {
        Self {
            id,
            label,
            value,
            grad_x,
            grad_y,
        }
    }

    /// Returns the id this field is registered under.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns a human-readable form of the expression, e.g. `x² + y²`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl ScalarField for AnalyticField {
    #[inline]
    fn value(&self, x: f64, y: f64) -> f64 {
        (self.value)(x, y)
    }

    #[inline]
    fn grad_x(&self, x: f64, y: f64) -> f64 {
        (self.grad_x)(x, y)
    }

    #[inline]
    fn grad_y(&self, x: f64, y: f64) -> f64 {
        (self.grad_y)(x, y)
    }
}

impl fmt::Debug for AnalyticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticField")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for AnalyticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(x: f64, y: f64) -> f64 {
        3.0 * x - y
    }

    fn three(_x: f64, _y: f64) -> f64 {
        3.0
    }

    fn minus_one(_x: f64, _y: f64) -> f64 {
        -1.0
    }

    #[test]
    fn custom_field_evaluates_its_expressions() {
        let field = AnalyticField::new(42, "3x − y", plane, three, minus_one);

        assert_eq!(field.id(), 42);
        assert_eq!(field.to_string(), "3x − y");
        assert_eq!(field.value(1.0, 1.0), 2.0);
        assert_eq!(field.gradient(7.0, -7.0), [3.0, -1.0]);
    }

    #[test]
    fn debug_shows_identity_only() {
        let field = AnalyticField::new(7, "plane", plane, three, minus_one);
        let text = format!("{field:?}");

        assert!(text.contains("id: 7"));
        assert!(text.contains("plane"));
    }
}
