use thiserror::Error;

pub type Result<T> = std::result::Result<T, EliminationError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EliminationError {
    /// The standings could not be turned into a division.
    #[error("malformed standings: {0}")]
    MalformedInput(String),

    /// A query named a team that is not part of the division.
    #[error("unknown team: {0}")]
    InvalidTeam(String),

    /// Internal contract broken. Not reachable from a well-formed division.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
