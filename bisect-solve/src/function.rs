use std::convert::Infallible;

/// A scalar function `f(x)` whose root the solver searches for.
///
/// Closures of the form `Fn(f64) -> f64` implement this trait with an
/// [`Infallible`] error, so most callers pass a closure directly. Extra
/// parameters are bound by capturing them in the closure. To call a closure
/// through this trait, use the qualified form `Function::call(&f, x)` so it
/// does not collide with the unstable `Fn::call`.
///
/// Implement the trait on your own type when evaluating `f` can fail.
/// Any error returned from [`Function::call`] stops the solver and is
/// surfaced as its source.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("negative input: {0}")]
    struct NegativeInput(f64);

    /// Square root that refuses negative input.
    struct Sqrt;

    impl Function for Sqrt {
        type Error = NegativeInput;

        fn call(&self, x: f64) -> Result<f64, Self::Error> {
            if x < 0.0 {
                Err(NegativeInput(x))
            } else {
                Ok(x.sqrt())
            }
        }
    }

    #[test]
    fn closure_is_a_function() {
        let offset = 2.5;
        let f = |x: f64| x - offset;
        let value = Function::call(&f, 4.0).expect("infallible");
        assert_relative_eq!(value, 1.5);
    }

    #[test]
    fn custom_function_reports_errors() {
        assert_relative_eq!(Sqrt.call(9.0).expect("valid input"), 3.0);
        assert!(matches!(Sqrt.call(-1.0), Err(NegativeInput(x)) if x < 0.0));
    }
}
