//! Vanilla gradient descent on a scalar field of two variables.
//!
//! # Algorithm
//!
//! Starting from `config.start`, the solver repeatedly steps against the
//! gradient with a fixed learning rate:
//!
//! ```text
//! p_{k+1} = p_k − learning_rate · ∇f(p_k)
//! ```
//!
//! Every visited point is recorded together with its field value, starting
//! with the seed point itself, so the returned [`Trajectory`] always holds at
//! least one point and at most `max_steps + 1`.
//!
//! # Stopping
//!
//! Before each step the solver compares the norm of the gradient it applied
//! in the *previous* step against `epsilon`. The first check uses a sentinel
//! gradient of `(1, 1)`, so at least one step is taken whenever
//! `max_steps > 0` and `epsilon < √2`. Because the check lags one step behind,
//! the solver takes one extra step after the gradient first drops to
//! `epsilon` or below. Callers rely on the resulting trajectory lengths, so
//! this is kept as is.
//!
//! There are no guards against divergence. A learning rate that is too large
//! for the field makes the iterates grow without bound until `max_steps` is
//! reached. If the gradient overflows to NaN, the norm comparison fails and
//! the run ends with [`Status::NonFiniteGradient`].
//!
//! # Observer Events
//!
//! - [`Event::Start`] — once, for the seed point
//! - [`Event::Step`] — after every update, with the gradient that was applied
//!
//! Observers can return [`Action::StopEarly`] to end the run and keep the
//! points visited so far.

mod action;
mod config;
mod error;
mod event;
mod trajectory;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use trajectory::{Status, Trajectory};

#[cfg(feature = "serde")]
pub use trajectory::TrajectoryError;

use log::{debug, trace};
use slope_core::{Observer, ScalarField, TrajectoryPoint};

/// Log target shared by the solver and observers that report on it.
pub const LOG_TARGET: &str = "slope::descent";

/// Gradient assumed before the first step.
const SENTINEL_GRADIENT: [f64; 2] = [1.0, 1.0];

/// Upper bound on the points reserved up front, however large the budget.
const MAX_RESERVED_POINTS: usize = 1024;

/// Descends `field` from `config.start` and returns every visited point.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the config does not validate. Nothing
/// is evaluated in that case.
pub fn descend<F>(field: &F, config: &Config) -> Result<Trajectory, Error>
where
    F: ScalarField + ?Sized,
{
    descend_observed(field, config, ())
}

/// Descends `field`, reporting each point to `observer`.
///
/// See the [module docs](self) for the algorithm, event timing, and
/// observer actions.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the config does not validate. Nothing
/// is evaluated and the observer is never called in that case.
pub fn descend_observed<F, Obs>(
    field: &F,
    config: &Config,
    mut observer: Obs,
) -> Result<Trajectory, Error>
where
    F: ScalarField + ?Sized,
    Obs: Observer<Event, Action>,
{
    config.validate()?;
    let max_steps =
        usize::try_from(config.max_steps).map_err(|_| ConfigError::MaxStepsTooLarge)?;
    let Config {
        start,
        learning_rate,
        epsilon,
        ..
    } = *config;

    debug!(
        target: LOG_TARGET,
        "descent from ({}, {}): learning_rate={learning_rate} epsilon={epsilon} max_steps={max_steps}",
        start.x,
        start.y
    );

    let mut points = Vec::with_capacity(max_steps.min(MAX_RESERVED_POINTS) + 1);
    let mut position = start;

    let seed = position.with_z(field.value(position.x, position.y));
    points.push(seed);

    if let Some(Action::StopEarly) = observer.observe(&Event::Start { point: seed }) {
        return Ok(finish(points, Status::StoppedByObserver, 0));
    }

    let mut gradient = SENTINEL_GRADIENT;
    let mut steps = 0;

    while steps < max_steps && norm(gradient) > epsilon {
        gradient = field.gradient(position.x, position.y);

        position.x -= learning_rate * gradient[0];
        position.y -= learning_rate * gradient[1];

        let point = position.with_z(field.value(position.x, position.y));
        points.push(point);
        steps += 1;

        trace!(
            target: LOG_TARGET,
            "step {steps}: ({}, {}) f={} |grad|={}",
            point.x,
            point.y,
            point.z,
            norm(gradient)
        );

        let event = Event::Step {
            step: steps,
            point,
            gradient,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(points, Status::StoppedByObserver, steps));
        }
    }

    let status = if norm(gradient) <= epsilon {
        Status::Converged
    } else if steps == max_steps {
        Status::MaxSteps
    } else {
        Status::NonFiniteGradient
    };

    Ok(finish(points, status, steps))
}

/// Euclidean norm, computed as `sqrt(gx² + gy²)`.
///
/// This is the value compared against `epsilon`. It overflows to infinity
/// for very large components, which `f64::hypot` would not.
fn norm([gx, gy]: [f64; 2]) -> f64 {
    (gx * gx + gy * gy).sqrt()
}

fn finish(points: Vec<TrajectoryPoint>, status: Status, steps: usize) -> Trajectory {
    debug!(target: LOG_TARGET, "descent finished after {steps} steps: {status:?}");
    Trajectory::new(points, status, steps)
}
