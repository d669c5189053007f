use std::collections::HashMap;

use quorum_common::Address;
use serde::{Deserialize, Serialize};

use super::{
    ballot::Ballot,
    model::{Candidate, VoterStatus},
};

/// Flat snapshot of a [`Ballot`] for out-of-process storage.
///
/// The core defines no storage of its own; callers that want to persist a
/// ballot serialize a snapshot and are responsible for where it lands.
#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableBallot {
    pub administrator: Address,
    pub candidates: Vec<Candidate>,
    pub voters: HashMap<Address, VoterStatus>,
    pub deadline: u64,
}

impl From<&Ballot> for SerializableBallot {
    fn from(ballot: &Ballot) -> Self {
        Self {
            administrator: ballot.administrator().clone(),
            candidates: ballot.all_candidates().to_vec(),
            voters: ballot.voters().clone(),
            deadline: ballot.deadline(),
        }
    }
}

impl From<SerializableBallot> for Ballot {
    fn from(snapshot: SerializableBallot) -> Self {
        Ballot::from_parts(
            snapshot.administrator,
            snapshot.candidates,
            snapshot.voters,
            snapshot.deadline,
        )
    }
}

/// Serializes a [`Ballot`] into a pretty-printed JSON string.
///
/// # Returns
/// A `Result<String, serde_json::Error>` with the serialized content.
pub fn serialize_ballot(ballot: &Ballot) -> Result<String, serde_json::Error> {
    let wrapper = SerializableBallot::from(ballot);
    serde_json::to_string_pretty(&wrapper)
}

/// Parses a JSON string and reconstructs a [`Ballot`].
///
/// # Returns
/// A `Result<Ballot, serde_json::Error>` if the JSON is valid and complete.
pub fn deserialize_ballot(json: &str) -> Result<Ballot, serde_json::Error> {
    let wrapper: SerializableBallot = serde_json::from_str(json)?;
    Ok(wrapper.into())
}
