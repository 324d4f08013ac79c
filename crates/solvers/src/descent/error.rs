use super::ConfigError;

/// Errors that can occur during descent.
///
/// Divergence is not an error: a run that blows up still returns its
/// trajectory.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
