use std::collections::HashMap;

use quorum_common::Address;
use serde::{Deserialize, Serialize};

use super::{
    error::BallotError,
    model::{Candidate, VoterStatus},
};

/// The ballot state machine: an ordered candidate registry, the per-voter
/// record, the administrator identity, and a fixed deadline.
///
/// The ballot has two logical states, decided purely by comparing a caller
/// supplied `now` against the deadline:
///
/// - **Open** (`now < deadline`): votes are accepted.
/// - **Closed** (`now >= deadline`): votes are rejected. Closed is terminal.
///
/// No background timer drives the transition; every call re-evaluates it.
/// Candidates may still be appended by the administrator after the deadline.
///
/// `Ballot` itself is a plain owned struct with no interior locking; callers
/// that share it across tasks wrap it in a single serialization point (see
/// [`BallotService`](super::service::BallotService)). Caller identity is an
/// explicit parameter on every mutating operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ballot {
    administrator: Address,
    candidates: Vec<Candidate>,
    voters: HashMap<Address, VoterStatus>,
    deadline: u64,
}

impl Ballot {
    /// Creates a ballot administered by `administrator`, with one zero-vote
    /// candidate per name in input order, closing `duration_minutes` after
    /// `now`.
    ///
    /// # Errors
    /// - [`BallotError::InvalidDuration`] if `duration_minutes` is zero or
    ///   the resulting deadline is not representable.
    /// - [`BallotError::EmptyCandidateName`] if any name is empty.
    pub fn new(
        administrator: Address,
        candidate_names: &[String],
        duration_minutes: u64,
        now: u64,
    ) -> Result<Self, BallotError> {
        if duration_minutes == 0 {
            return Err(BallotError::InvalidDuration(duration_minutes));
        }

        let deadline = duration_minutes
            .checked_mul(60)
            .and_then(|seconds| now.checked_add(seconds))
            .ok_or(BallotError::InvalidDuration(duration_minutes))?;

        if candidate_names.iter().any(|name| name.is_empty()) {
            return Err(BallotError::EmptyCandidateName);
        }

        let candidates = candidate_names
            .iter()
            .map(|name| Candidate::new(name))
            .collect();

        Ok(Self {
            administrator,
            candidates,
            voters: HashMap::new(),
            deadline,
        })
    }

    /// Casts the caller's single vote for the candidate at `candidate_index`.
    ///
    /// On success the candidate's count grows by one and the caller is
    /// marked as having voted. On any error the ballot is unchanged.
    ///
    /// Checks run in a fixed order: closed state, then the caller's voting
    /// record, then index validity.
    ///
    /// # Errors
    /// - [`BallotError::VotingClosed`] when `now >= deadline`.
    /// - [`BallotError::AlreadyVoted`] when the caller has voted before.
    /// - [`BallotError::InvalidCandidate`] when the index is out of range.
    /// - [`BallotError::VoteCountOverflow`] when the count cannot grow.
    pub fn cast_vote(
        &mut self,
        caller: &Address,
        candidate_index: usize,
        now: u64,
    ) -> Result<(), BallotError> {
        if !self.is_open(now) {
            return Err(BallotError::VotingClosed);
        }

        if let Some(record) = self.voters.get(caller) {
            if !record.can_vote() {
                return Err(BallotError::AlreadyVoted(caller.to_string()));
            }
        }

        let candidate = self
            .candidates
            .get_mut(candidate_index)
            .ok_or(BallotError::InvalidCandidate(candidate_index))?;

        candidate.vote_count = candidate
            .vote_count
            .checked_add(1)
            .ok_or(BallotError::VoteCountOverflow(candidate_index))?;

        self.voters.insert(caller.clone(), VoterStatus::Voted);

        Ok(())
    }

    /// Appends a zero-vote candidate at the next index.
    ///
    /// Allowed in both Open and Closed states: the candidate list remains
    /// administratively growable after the deadline.
    ///
    /// # Errors
    /// - [`BallotError::NotAdministrator`] when the caller is not the
    ///   administrator.
    /// - [`BallotError::EmptyCandidateName`] when the name is empty.
    pub fn add_candidate(&mut self, caller: &Address, name: &str) -> Result<(), BallotError> {
        if caller != &self.administrator {
            return Err(BallotError::NotAdministrator(caller.to_string()));
        }

        if name.is_empty() {
            return Err(BallotError::EmptyCandidateName);
        }

        self.candidates.push(Candidate::new(name));

        Ok(())
    }

    /// Full ordered candidate view, including candidates appended after the
    /// deadline.
    pub fn all_candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// `true` while `now` is strictly before the deadline. The ballot closes
    /// exactly at the deadline, not after.
    pub fn is_open(&self, now: u64) -> bool {
        now < self.deadline
    }

    /// Whole seconds until the deadline, clamped to zero once it has passed.
    pub fn remaining_time(&self, now: u64) -> u64 {
        self.deadline.saturating_sub(now)
    }

    pub fn administrator(&self) -> &Address {
        &self.administrator
    }

    pub fn deadline(&self) -> u64 {
        self.deadline
    }

    /// Total number of votes cast so far.
    ///
    /// Equals the number of addresses recorded as having voted.
    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(|c| c.vote_count).sum()
    }

    /// Whether the given address has already voted.
    pub fn has_voted(&self, address: &Address) -> bool {
        self.voters
            .get(address)
            .map(|record| !record.can_vote())
            .unwrap_or(false)
    }

    pub(super) fn voters(&self) -> &HashMap<Address, VoterStatus> {
        &self.voters
    }

    pub(super) fn from_parts(
        administrator: Address,
        candidates: Vec<Candidate>,
        voters: HashMap<Address, VoterStatus>,
        deadline: u64,
    ) -> Self {
        Self {
            administrator,
            candidates,
            voters,
            deadline,
        }
    }
}
