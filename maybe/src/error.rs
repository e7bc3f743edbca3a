use thiserror::Error;

/// Violated access preconditions of a [`crate::Maybe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaybeError {
    #[error("unwrap on absent value")]
    Absent,
    #[error("pointee is shared and cannot be borrowed mutably")]
    Shared,
}
