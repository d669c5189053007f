use thiserror::Error;

/// Defines errors raised by ballot operations.
///
/// Every error aborts the whole operation with no partial effect; the
/// ballot's state is exactly what it was before the failing call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BallotError {
    /// The candidate index does not address an existing candidate.
    #[error("Candidate index {0} is out of range.")]
    InvalidCandidate(usize),

    /// The caller has already cast their single vote.
    #[error("Address '{0}' has already voted.")]
    AlreadyVoted(String),

    /// The deadline has passed; no further votes are accepted.
    #[error("Voting is closed.")]
    VotingClosed,

    /// Only the administrator may append candidates.
    #[error("Address '{0}' is not the ballot administrator.")]
    NotAdministrator(String),

    /// Candidate names must be non-empty.
    #[error("Candidate name must not be empty.")]
    EmptyCandidateName,

    /// The voting duration must be a positive number of minutes.
    #[error("Voting duration must be positive, got {0} minutes.")]
    InvalidDuration(u64),

    /// A vote count reached the representable maximum.
    #[error("Vote count overflow for candidate index {0}.")]
    VoteCountOverflow(usize),
}
