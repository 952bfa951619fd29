use thiserror::Error;

/// Configuration for an escape-time run.
///
/// `threshold` is the magnitude above which a point counts as escaped at a
/// given iteration, and `max_iters` is the number of iterations evaluated.
/// An infinite threshold never counts a point and a negative one counts every
/// point at every iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    threshold: f64,
    max_iters: u16,
}

/// Errors that can occur when validating an escape-time config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("threshold must not be NaN")]
    Threshold,

    #[error("max_iters must not exceed 32767, got {0}")]
    MaxIters(usize),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 4.0,
            max_iters: 20,
        }
    }
}

impl Config {
    /// Largest iteration count whose escape map fits in `i16` elements.
    const MAX_ITERS: u16 = 32_767;

    /// Creates a new config with a validated threshold and iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is NaN or if `max_iters` exceeds
    /// `i16::MAX`.
    pub fn new(threshold: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if threshold.is_nan() {
            return Err(ConfigError::Threshold);
        }
        let max_iters = u16::try_from(max_iters)
            .ok()
            .filter(|&n| n <= Self::MAX_ITERS)
            .ok_or(ConfigError::MaxIters(max_iters))?;

        Ok(Self {
            threshold,
            max_iters,
        })
    }

    /// Returns the escape magnitude threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the number of iterations to evaluate.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        usize::from(self.max_iters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.threshold(), 4.0);
        assert_eq!(config.max_iters(), 20);
    }

    #[test]
    fn accepts_limits() {
        let config = Config::new(0.0, 0).unwrap();
        assert_eq!(config.max_iters(), 0);

        let config = Config::new(2.0, 32_767).unwrap();
        assert_eq!(config.max_iters(), 32_767);
    }

    #[test]
    fn accepts_any_non_nan_threshold() {
        for threshold in [-1.0, f64::INFINITY, f64::NEG_INFINITY] {
            let config = Config::new(threshold, 20).unwrap();
            assert_eq!(config.threshold(), threshold);
        }
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(Config::new(f64::NAN, 20), Err(ConfigError::Threshold));
        for max_iters in [32_768, 70_000] {
            let err = Config::new(4.0, max_iters).unwrap_err();
            assert_eq!(err, ConfigError::MaxIters(max_iters));
        }
    }
}
