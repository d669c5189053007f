use std::sync::Arc;

use quorum_common::{Address, Clock};
use tokio::sync::RwLock;

use super::{ballot::Ballot, error::BallotError, model::Candidate, serialization};
use crate::genesis::BallotGenesis;

/// Shared handle to a ballot: the single serialization point for all
/// mutations.
///
/// Holds the ballot behind one `RwLock`, so `cast_vote` and `add_candidate`
/// execute to completion atomically with respect to each other and readers
/// never observe a half-applied mutation. Time comes from the injected
/// [`Clock`], never from a background timer.
#[derive(Clone)]
pub struct BallotService {
    ballot: Arc<RwLock<Ballot>>,
    clock: Arc<dyn Clock>,
}

impl BallotService {
    /// Creates a ballot administered by `administrator` and wraps it for
    /// shared use.
    ///
    /// # Errors
    /// Same construction errors as [`Ballot::new`].
    pub fn new(
        administrator: Address,
        candidate_names: &[String],
        duration_minutes: u64,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, BallotError> {
        let now = clock.now();
        let ballot = Ballot::new(administrator, candidate_names, duration_minutes, now)?;

        tracing::info!(
            "🗳️ Ballot opened with {} candidates, closing at {}",
            ballot.all_candidates().len(),
            ballot.deadline()
        );

        Ok(Self {
            ballot: Arc::new(RwLock::new(ballot)),
            clock,
        })
    }

    /// Creates the service from a genesis config.
    pub fn from_genesis(
        administrator: Address,
        genesis: &BallotGenesis,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, BallotError> {
        Self::new(
            administrator,
            &genesis.candidate_names,
            genesis.duration_minutes,
            clock,
        )
    }

    /// Casts the caller's vote for the candidate at `candidate_index`.
    ///
    /// # Errors
    /// See [`Ballot::cast_vote`].
    pub async fn cast_vote(
        &self,
        caller: &Address,
        candidate_index: usize,
    ) -> Result<(), BallotError> {
        let mut ballot = self.ballot.write().await;
        // Read the clock under the lock so the Open/Closed check reflects
        // the moment the mutation runs, not the moment it was queued.
        let now = self.clock.now();

        match ballot.cast_vote(caller, candidate_index, now) {
            Ok(()) => {
                tracing::info!(
                    "🗳️ Vote recorded: {} -> '{}'",
                    caller,
                    ballot.all_candidates()[candidate_index].name
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Vote rejected for {}: {}", caller, e);
                Err(e)
            }
        }
    }

    /// Appends a candidate. Administrator only; allowed after the deadline.
    ///
    /// # Errors
    /// See [`Ballot::add_candidate`].
    pub async fn add_candidate(&self, caller: &Address, name: &str) -> Result<(), BallotError> {
        let mut ballot = self.ballot.write().await;
        let now = self.clock.now();

        match ballot.add_candidate(caller, name) {
            Ok(()) => {
                if ballot.is_open(now) {
                    tracing::info!(
                        "Candidate '{}' appended at index {}",
                        name,
                        ballot.all_candidates().len() - 1
                    );
                } else {
                    tracing::info!("Candidate '{}' appended after the deadline", name);
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Candidate append rejected for {}: {}", caller, e);
                Err(e)
            }
        }
    }

    /// Ordered `(name, vote_count)` view of all candidates.
    pub async fn all_candidates(&self) -> Vec<Candidate> {
        let ballot = self.ballot.read().await;
        ballot.all_candidates().to_vec()
    }

    /// `true` while the deadline has not been reached.
    pub async fn voting_status(&self) -> bool {
        let ballot = self.ballot.read().await;
        ballot.is_open(self.clock.now())
    }

    /// Whole seconds left before the deadline, zero once it has passed.
    pub async fn remaining_time(&self) -> u64 {
        let ballot = self.ballot.read().await;
        ballot.remaining_time(self.clock.now())
    }

    pub async fn administrator(&self) -> Address {
        let ballot = self.ballot.read().await;
        ballot.administrator().clone()
    }

    /// Total number of votes cast so far.
    pub async fn total_votes(&self) -> u64 {
        let ballot = self.ballot.read().await;
        ballot.total_votes()
    }

    /// JSON snapshot of the current ballot state.
    pub async fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        let ballot = self.ballot.read().await;
        serialization::serialize_ballot(&ballot)
    }
}
