pub mod core;
pub mod genesis;
pub mod mock;

pub use crate::core::ballot::ballot::Ballot;
pub use crate::core::ballot::error::BallotError;
pub use crate::core::ballot::model::{Candidate, VoterStatus};
pub use crate::core::ballot::service::BallotService;
pub use genesis::BallotGenesis;
