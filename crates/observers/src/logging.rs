use log::{Level, log, log_enabled};
use slope_core::Observer;
use slope_solvers::descent::{self, Event};

/// Logs every descent event and never intervenes.
///
/// Events are logged under the `slope::descent` target at the configured
/// level, `Debug` by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Target that events are logged under, shared with the solver itself.
    pub const TARGET: &'static str = descent::LOG_TARGET;

    /// Creates an observer logging at `Debug`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
        }
    }

    /// Logs at `level` instead.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Observer<Event, A> for LogObserver {
    fn observe(&mut self, event: &Event) -> Option<A> {
        if !log_enabled!(target: Self::TARGET, self.level) {
            return None;
        }

        let point = event.point();
        match event.gradient_norm() {
            None => log!(
                target: Self::TARGET,
                self.level,
                "start at ({:.6}, {:.6}) f={:.6e}",
                point.x,
                point.y,
                point.z
            ),
            Some(norm) => log!(
                target: Self::TARGET,
                self.level,
                "step {:>5} at ({:.6}, {:.6}) f={:.6e} |grad|={:.3e}",
                event.step(),
                point.x,
                point.y,
                point.z,
                norm
            ),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use slope_fields::Registry;
    use slope_solvers::descent::{self, Action, Config};

    #[test]
    fn never_changes_the_outcome() {
        let registry = Registry::new();
        let ripple = registry.get(1).unwrap();
        let config = Config::starting_at(1.0, 2.0);

        let logged =
            descent::descend_observed(ripple, &config, LogObserver::new().with_level(Level::Trace))
                .unwrap();
        let silent = descent::descend(ripple, &config).unwrap();

        assert_eq!(logged, silent);
    }

    #[test]
    fn returns_no_action() {
        let registry = Registry::new();
        let bowl = registry.get(2).unwrap();
        let trajectory = descent::descend(bowl, &Config::starting_at(1.0, 1.0)).unwrap();

        let mut observer = LogObserver::default();
        let event = Event::Start {
            point: trajectory.first(),
        };
        let action: Option<Action> = observer.observe(&event);

        assert_eq!(action, None);
        assert_eq!(observer.level(), Level::Debug);
    }

    #[test]
    fn logs_under_the_solver_target() {
        // `RUST_LOG=slope::descent=debug` enables both the solver and this observer.
        assert_eq!(LogObserver::TARGET, descent::LOG_TARGET);
        assert_eq!(LogObserver::TARGET, "slope::descent");
    }
}
