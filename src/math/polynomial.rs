//! Polynomial functions evaluated with Horner's scheme

use std::fmt;

use crate::{check_argument, Result};

/// A polynomial with real coefficients, highest degree first
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates `leading·x^n + lower[0]·x^(n-1) + … + lower[n-1]`
    ///
    /// Fails when the leading coefficient is zero, since the degree would
    /// then be ill-defined.
    ///
    /// ```rust
    /// use skyview::math::Polynomial;
    ///
    /// let p = Polynomial::of(2.0, &[0.0, -1.0]).unwrap();
    /// assert_eq!(p.at(3.0), 17.0);
    /// ```
    pub fn of(leading: f64, lower: &[f64]) -> Result<Self> {
        check_argument(leading != 0.0, || {
            "the leading coefficient of a polynomial must not be zero".to_string()
        })?;
        let mut coefficients = Vec::with_capacity(lower.len() + 1);
        coefficients.push(leading);
        coefficients.extend_from_slice(lower);
        Ok(Self { coefficients })
    }

    /// Degree of the polynomial
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at `x`
    pub fn at(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .skip(1)
            .fold(self.coefficients[0], |acc, c| acc * x + c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let power = degree - i;
            if c < 0.0 {
                write!(f, "-")?;
            } else if !first {
                write!(f, "+")?;
            }
            let magnitude = c.abs();
            if magnitude != 1.0 || power == 0 {
                write!(f, "{}", magnitude)?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_zero_leading_coefficient_is_rejected() {
        assert!(Polynomial::of(0.0, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_constant_polynomial() {
        let p = Polynomial::of(4.5, &[]).unwrap();
        assert_eq!(p.degree(), 0);
        assert_eq!(p.at(-1e6), 4.5);
    }

    #[rstest]
    #[case(0.0, 6.697374558)]
    #[case(1.0, 2406.748736420)]
    #[case(-0.5, -1193.328286976)]
    fn test_horner_matches_expanded_form(#[case] x: f64, #[case] expected: f64) {
        let p = Polynomial::of(0.000025862, &[2400.051336, 6.697374558]).unwrap();
        assert_relative_eq!(p.at(x), expected, epsilon = 1e-6);
        let expanded = 0.000025862 * x * x + 2400.051336 * x + 6.697374558;
        assert_relative_eq!(p.at(x), expanded, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Polynomial::of(1.0, &[-2.0, 1.0]).unwrap().to_string(),
            "x^2-2x+1"
        );
        assert_eq!(
            Polynomial::of(-1.0, &[0.0, 0.5, 0.0]).unwrap().to_string(),
            "-x^3+0.5x"
        );
        assert_eq!(Polynomial::of(3.0, &[]).unwrap().to_string(), "3");
    }
}
