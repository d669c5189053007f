use std::fmt;

use serde::{Deserialize, Serialize};

/// A named option on the ballot with an accumulating vote count.
///
/// Candidates are identified by their position in the ballot's ordered
/// sequence: indices are dense (0..N-1), assigned at append time, and never
/// reused or shifted. The name is fixed once the candidate is registered;
/// only `vote_count` changes, and it only ever grows.
///
/// # Fields
///
/// - `name`: The display name of the candidate (non-empty).
/// - `vote_count`: How many votes the candidate has received so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub vote_count: u64,
}

impl Candidate {
    /// Creates a candidate with zero votes.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            vote_count: 0,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} votes)", self.name, self.vote_count)
    }
}

/// Per-identity voting record.
///
/// A participant is `Fresh` until their first successful vote and `Voted`
/// forever after. There is no unvoting and no re-registration.
///
/// # Serialization
///
/// Serialized to lowercase strings: `Fresh` → `"fresh"`, `Voted` → `"voted"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoterStatus {
    /// Has not cast a vote yet.
    Fresh,

    /// Has cast their single vote.
    Voted,
}

impl VoterStatus {
    /// Returns `true` if this record still allows a vote.
    pub fn can_vote(&self) -> bool {
        matches!(self, VoterStatus::Fresh)
    }
}

impl fmt::Display for VoterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VoterStatus::Fresh => "Fresh",
            VoterStatus::Voted => "Voted",
        };
        write!(f, "{}", label)
    }
}
