/// The sign of a function value.
///
/// Zero is kept as its own case because an exact zero marks a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    /// Returns the sign of a finite function value.
    pub(super) fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns the sign of the product of two values with these signs.
    ///
    /// Only signs are combined, so tiny magnitudes never underflow to zero.
    pub(super) fn product(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// Which side of the bracket moved after a bisection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Narrowing {
    /// The root lies in `[lower, estimate]`; the upper bound moved.
    Upper,
    /// The root lies in `[estimate, upper]`; the lower bound moved.
    Lower,
    /// The estimate is an exact root; the bracket is unchanged.
    ExactRoot,
}

/// Current search interval `[lower, upper]`.
///
/// The bounds are kept in the order the caller supplied them, so `lower`
/// is the bound that started as `xmin` even if it is numerically larger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    lower: f64,
    upper: f64,
}

impl Bracket {
    pub(super) fn new(xmin: f64, xmax: f64) -> Self {
        Self {
            lower: xmin,
            upper: xmax,
        }
    }

    pub(super) fn lower(&self) -> f64 {
        self.lower
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Keeps the half of the bracket that still contains a sign change.
    pub(super) fn narrow(
        &mut self,
        estimate: f64,
        lower_sign: Sign,
        estimate_sign: Sign,
    ) -> Narrowing {
        match lower_sign.product(estimate_sign) {
            Sign::Negative => {
                self.upper = estimate;
                Narrowing::Upper
            }
            Sign::Positive => {
                self.lower = estimate;
                Narrowing::Lower
            }
            Sign::Zero => Narrowing::ExactRoot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sign_of_values() {
        assert_eq!(Sign::of(3.0), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(-0.0), Sign::Zero);
    }

    #[test]
    fn product_sign_ignores_magnitude() {
        let tiny = Sign::of(1e-200);
        let tiny_negative = Sign::of(-1e-200);
        assert_eq!(tiny.product(tiny), Sign::Positive);
        assert_eq!(tiny.product(tiny_negative), Sign::Negative);
        assert_eq!(Sign::Zero.product(Sign::Negative), Sign::Zero);
        assert_eq!(Sign::Positive.product(Sign::Zero), Sign::Zero);
    }

    #[test]
    fn narrow_moves_upper_on_sign_change() {
        let mut bracket = Bracket::new(0.0, 4.0);
        let mid = bracket.midpoint();

        let narrowing = bracket.narrow(mid, Sign::Negative, Sign::Positive);

        assert_eq!(narrowing, Narrowing::Upper);
        let [lower, upper] = bracket.as_array();
        assert_relative_eq!(lower, 0.0);
        assert_relative_eq!(upper, 2.0);
    }

    #[test]
    fn narrow_moves_lower_on_same_sign() {
        let mut bracket = Bracket::new(0.0, 4.0);
        let mid = bracket.midpoint();

        let narrowing = bracket.narrow(mid, Sign::Negative, Sign::Negative);

        assert_eq!(narrowing, Narrowing::Lower);
        assert_relative_eq!(bracket.lower(), 2.0);
        assert_relative_eq!(bracket.as_array()[1], 4.0);
    }

    #[test]
    fn narrow_keeps_bracket_on_exact_root() {
        let mut bracket = Bracket::new(-1.0, 3.0);

        let narrowing = bracket.narrow(1.0, Sign::Negative, Sign::Zero);

        assert_eq!(narrowing, Narrowing::ExactRoot);
        assert_eq!(bracket.as_array(), [-1.0, 3.0]);
    }

    #[test]
    fn reversed_bracket_keeps_caller_order() {
        let mut bracket = Bracket::new(4.0, 0.0);
        assert_relative_eq!(bracket.midpoint(), 2.0);

        bracket.narrow(2.0, Sign::Positive, Sign::Positive);
        assert_eq!(bracket.as_array(), [2.0, 0.0]);
    }
}
