#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use slope_core::TrajectoryPoint;
#[cfg(feature = "serde")]
use thiserror::Error;

/// Indicates how the descent terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The last applied gradient had a norm at or below `epsilon`.
    Converged,

    /// Took `max_steps` steps without converging.
    MaxSteps,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// The gradient norm became NaN, which ends the loop.
    NonFiniteGradient,
}

/// The points visited by one descent run.
///
/// A trajectory is never empty: the first point is always the starting
/// point, and each step appends exactly one point.
///
/// Deserialization checks the same invariant and rejects empty point lists
/// or a step count that disagrees with the number of points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TrajectoryParts"))]
pub struct Trajectory {
    status: Status,
    steps: usize,
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub(super) fn new(points: Vec<TrajectoryPoint>, status: Status, steps: usize) -> Self {
        debug_assert_eq!(points.len(), steps + 1);
        Self {
            status,
            steps,
            points,
        }
    }

    /// Returns how the descent terminated.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the number of steps taken.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns every visited point in order, starting point first.
    #[must_use]
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Returns the number of points, which is `steps() + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; provided for API symmetry with [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the starting point.
    #[must_use]
    pub fn first(&self) -> TrajectoryPoint {
        self.points[0]
    }

    /// Returns the final point reached.
    #[must_use]
    pub fn last(&self) -> TrajectoryPoint {
        self.points[self.points.len() - 1]
    }

    /// Returns the first `n` points, or all of them if there are fewer.
    ///
    /// This is how a viewer shows the descent "so far" after `n - 1` steps.
    #[must_use]
    pub fn window(&self, n: usize) -> &[TrajectoryPoint] {
        &self.points[..n.min(self.points.len())]
    }

    /// Iterates over the x coordinates.
    pub fn xs(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// Iterates over the y coordinates.
    pub fn ys(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Iterates over the field values.
    pub fn zs(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.z)
    }

    /// Consumes the trajectory and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<TrajectoryPoint> {
        self.points
    }
}

/// Reasons a deserialized trajectory is rejected.
#[cfg(feature = "serde")]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("trajectory must contain at least the starting point")]
    Empty,

    #[error("trajectory has {points} points but reports {steps} steps")]
    StepMismatch { steps: usize, points: usize },
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TrajectoryParts {
    status: Status,
    steps: usize,
    points: Vec<TrajectoryPoint>,
}

#[cfg(feature = "serde")]
impl TryFrom<TrajectoryParts> for Trajectory {
    type Error = TrajectoryError;

    fn try_from(parts: TrajectoryParts) -> Result<Self, Self::Error> {
        let TrajectoryParts {
            status,
            steps,
            points,
        } = parts;

        if points.is_empty() {
            return Err(TrajectoryError::Empty);
        }
        if steps.checked_add(1) != Some(points.len()) {
            return Err(TrajectoryError::StepMismatch {
                steps,
                points: points.len(),
            });
        }
        Ok(Self {
            status,
            steps,
            points,
        })
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        let points = vec![
            TrajectoryPoint {
                x: 1.0,
                y: 1.0,
                z: 2.0,
            },
            TrajectoryPoint {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
        ];
        Trajectory::new(points, Status::Converged, 1)
    }

    #[test]
    fn json_round_trip_keeps_everything() {
        let trajectory = sample();

        let json = serde_json::to_string(&trajectory).unwrap();
        let restored: Trajectory = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, trajectory);
    }

    #[test]
    fn rejects_an_empty_trajectory() {
        let json = r#"{"status":"Converged","steps":0,"points":[]}"#;

        let err = serde_json::from_str::<Trajectory>(json).unwrap_err();

        assert!(err.to_string().contains("at least the starting point"));
    }

    #[test]
    fn rejects_a_step_count_that_disagrees_with_the_points() {
        let json = r#"{"status":"MaxSteps","steps":3,"points":[{"x":0.0,"y":0.0,"z":0.0}]}"#;

        let err = serde_json::from_str::<Trajectory>(json).unwrap_err();

        assert!(err.to_string().contains("1 points but reports 3 steps"));
    }
}
