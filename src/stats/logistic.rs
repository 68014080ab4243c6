//! Logistic distribution sampled by inverse CDF.

use rand::distributions::{Distribution, Open01};
use rand::Rng;

use crate::core::{CardGenError, Result};

/// Ratio between a normal standard deviation and the logistic scale giving a
/// comparable spread.
pub const NORMAL_TO_LOGISTIC_SCALE: f64 = 1.813;

/// Logistic distribution with location `mu` and scale `s`.
///
/// - CDF: F(x) = 1 / (1 + exp(-(x - mu) / s))
/// - Quantile: Q(p) = mu + s * ln(p / (1 - p))
/// - Mean: mu
/// - Variance: s² * pi² / 3
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Logistic {
    location: f64,
    scale: f64,
}

impl Logistic {
    /// # Errors
    /// Returns `InvalidConfiguration` if `location` is not finite or `scale`
    /// is not finite and positive.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() || !scale.is_finite() || scale <= 0.0 {
            return Err(CardGenError::config(format!(
                "logistic requires finite location and positive scale, got location={location}, scale={scale}"
            )));
        }
        Ok(Self { location, scale })
    }

    /// Logistic whose spread matches a normal with the given standard deviation.
    pub fn from_normal_parameters(mean: f64, std_dev: f64) -> Result<Self> {
        Self::new(mean, std_dev / NORMAL_TO_LOGISTIC_SCALE)
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn quantile(&self, p: f64) -> Option<f64> {
        if p <= 0.0 || p >= 1.0 {
            return None;
        }
        Some(self.location + self.scale * (p / (1.0 - p)).ln())
    }

    pub fn cdf(&self, x: f64) -> f64 {
        1.0 / (1.0 + (-(x - self.location) / self.scale).exp())
    }
}

impl Distribution<f64> for Logistic {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let p: f64 = rng.sample(Open01);
        self.location + self.scale * (p / (1.0 - p)).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_scale() {
        assert!(Logistic::new(0.0, 0.0).is_err());
        assert!(Logistic::new(0.0, -1.0).is_err());
        assert!(Logistic::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_scale_conversion() {
        let d = Logistic::from_normal_parameters(50.0, 32.0).unwrap();
        assert_eq!(d.location(), 50.0);
        assert!((d.scale() - 32.0 / 1.813).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_inverts_cdf() {
        let d = Logistic::new(50.0, 10.0).unwrap();
        assert_eq!(d.quantile(0.5), Some(50.0));
        for p in [0.05, 0.25, 0.75, 0.95] {
            let x = d.quantile(p).unwrap();
            assert!((d.cdf(x) - p).abs() < 1e-12);
        }
        assert_eq!(d.quantile(0.0), None);
        assert_eq!(d.quantile(1.0), None);
    }
}
