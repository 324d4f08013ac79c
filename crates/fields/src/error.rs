use thiserror::Error;

/// Errors that can occur when looking up a field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("no field registered under id {id}")]
    UnknownFunctionId { id: u32 },
}
