use slope_core::TrajectoryPoint;

/// Events emitted by the descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The seed point, before any gradient is evaluated.
    Start {
        /// The starting point and its field value.
        point: TrajectoryPoint,
    },

    /// A completed update.
    Step {
        /// Step number, starting at 1.
        step: usize,

        /// The point reached by this step.
        point: TrajectoryPoint,

        /// The gradient that was applied, evaluated at the previous point.
        gradient: [f64; 2],
    },
}

impl Event {
    /// Returns the step number, or 0 for [`Event::Start`].
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::Start { .. } => 0,
            Self::Step { step, .. } => *step,
        }
    }

    /// Returns the point this event reports.
    #[must_use]
    pub fn point(&self) -> TrajectoryPoint {
        match self {
            Self::Start { point } | Self::Step { point, .. } => *point,
        }
    }

    /// Returns the applied gradient, if any.
    #[must_use]
    pub fn gradient(&self) -> Option<[f64; 2]> {
        match self {
            Self::Start { .. } => None,
            Self::Step { gradient, .. } => Some(*gradient),
        }
    }

    /// Returns the norm of the applied gradient, if any.
    ///
    /// Computed exactly as the solver's stopping test computes it.
    #[must_use]
    pub fn gradient_norm(&self) -> Option<f64> {
        self.gradient().map(super::norm)
    }
}
