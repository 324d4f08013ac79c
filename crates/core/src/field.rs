/// A scalar field of two variables with analytic partial derivatives.
///
/// Implementations must be pure: the same `(x, y)` always yields the same
/// value, and evaluation never mutates shared state. This is what lets one
/// field be shared by reference across any number of concurrent descents.
///
/// The derivatives are supplied in closed form rather than computed by the
/// solver, so evaluating a gradient is as cheap as evaluating the field.
pub trait ScalarField {
    /// Returns `f(x, y)`.
    fn value(&self, x: f64, y: f64) -> f64;

    /// Returns `∂f/∂x` at `(x, y)`.
    fn grad_x(&self, x: f64, y: f64) -> f64;

    /// Returns `∂f/∂y` at `(x, y)`.
    fn grad_y(&self, x: f64, y: f64) -> f64;

    /// Returns the gradient `[∂f/∂x, ∂f/∂y]` at `(x, y)`.
    fn gradient(&self, x: f64, y: f64) -> [f64; 2] {
        [self.grad_x(x, y), self.grad_y(x, y)]
    }
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
    fn value(&self, x: f64, y: f64) -> f64 {
        (**self).value(x, y)
    }

    fn grad_x(&self, x: f64, y: f64) -> f64 {
        (**self).grad_x(x, y)
    }

    fn grad_y(&self, x: f64, y: f64) -> f64 {
        (**self).grad_y(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// f(x, y) = x·y
    struct Saddle;

    impl ScalarField for Saddle {
        fn value(&self, x: f64, y: f64) -> f64 {
            x * y
        }

        fn grad_x(&self, _x: f64, y: f64) -> f64 {
            y
        }

        fn grad_y(&self, x: f64, _y: f64) -> f64 {
            x
        }
    }

    #[test]
    fn gradient_combines_partials() {
        let [gx, gy] = Saddle.gradient(3.0, -2.0);
        assert_relative_eq!(gx, -2.0);
        assert_relative_eq!(gy, 3.0);
    }

    #[test]
    fn references_and_trait_objects_are_fields() {
        let boxed: Box<dyn ScalarField> = Box::new(Saddle);
        let by_ref = &*boxed;

        assert_relative_eq!(by_ref.value(2.0, 5.0), 10.0);

        fn gradient_of<F: ScalarField>(field: F) -> [f64; 2] {
            field.gradient(1.0, 2.0)
        }
        assert_eq!(gradient_of(&Saddle), [2.0, 1.0]);
        assert_eq!(gradient_of(by_ref), [2.0, 1.0]);
    }
}
