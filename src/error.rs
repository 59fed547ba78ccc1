use thiserror::Error;

/// Domain errors surfaced by the metrics calculator and the approval queue.
///
/// Malformed persisted state is deliberately absent: the session store
/// recovers from it by discarding the entry and falling back to defaults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("approval request {0} not found")]
    ApprovalNotFound(u32),

    #[error("approval request {0} has already been decided")]
    AlreadyDecided(u32),

    #[error("cannot average over an empty collection")]
    EmptyInput,

    #[error("department has no employees")]
    DivisionByZero,
}
