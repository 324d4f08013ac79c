use slope_core::Point;
use thiserror::Error;

/// Configuration for a single descent run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Where the descent begins.
    pub start: Point,

    /// Multiplier applied to the negative gradient at each step.
    pub learning_rate: f64,

    /// Gradient norm at or below which the descent stops.
    pub epsilon: f64,

    /// Maximum number of steps. Zero returns only the starting point.
    pub max_steps: i64,
}

/// Reasons a [`Config`] can fail validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("learning_rate must be finite and positive")]
    LearningRate,

    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_steps must be non-negative")]
    MaxSteps,

    #[error("max_steps exceeds the addressable size on this platform")]
    MaxStepsTooLarge,

    #[error("start must have finite coordinates")]
    Start,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: Point::new(0.0, 0.0),
            learning_rate: 0.01,
            epsilon: 0.001,
            max_steps: 100,
        }
    }
}

impl Config {
    /// Returns the default config with a different starting point.
    #[must_use]
    pub fn starting_at(x: f64, y: f64) -> Self {
        Self {
            start: Point::new(x, y),
            ..Self::default()
        }
    }

    /// Validates the step size, tolerance, budget, and starting point.
    ///
    /// A config is rejected when:
    ///
    /// - `learning_rate <= 0`
    /// - `epsilon <= 0`
    /// - `max_steps < 0`, or it does not fit in `usize`
    ///
    /// Beyond those, a NaN or infinite `learning_rate` or `epsilon` and a
    /// non-finite starting coordinate are rejected too, since no descent
    /// from them produces meaningful points.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::LearningRate);
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if self.max_steps < 0 {
            return Err(ConfigError::MaxSteps);
        }
        if usize::try_from(self.max_steps).is_err() {
            return Err(ConfigError::MaxStepsTooLarge);
        }
        if !self.start.is_finite() {
            return Err(ConfigError::Start);
        }
        Ok(())
    }
}
