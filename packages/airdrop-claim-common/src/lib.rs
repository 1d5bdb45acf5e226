pub mod decay;
pub mod msg;
pub mod types;

pub use decay::{claimable_fraction, DecayFraction, DecaySchedule};
pub use msg::{create_claim_for_msg, ClaimModuleExecuteMsg};
pub use types::{ActionCompleted, ClaimAction, ClaimAuthorization, NUM_ACTIONS};
