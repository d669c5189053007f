use serde::{Deserialize, Serialize};

/// Represents the initial configuration of a ballot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallotGenesis {
    /// Candidate names in display order. May be empty.
    pub candidate_names: Vec<String>,

    /// How long voting stays open, in minutes. Must be positive.
    pub duration_minutes: u64,
}

impl BallotGenesis {
    pub fn new(candidate_names: Vec<String>, duration_minutes: u64) -> Self {
        Self {
            candidate_names,
            duration_minutes,
        }
    }

    /// Parses a genesis config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_from_json() {
        let json = r#"{
            "candidate_names": ["Alice", "Bob", "Charlie"],
            "duration_minutes": 30
        }"#;

        let genesis = BallotGenesis::from_json(json).unwrap();
        assert_eq!(genesis.candidate_names.len(), 3);
        assert_eq!(genesis.duration_minutes, 30);
    }
}
