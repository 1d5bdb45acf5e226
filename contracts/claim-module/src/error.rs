use cosmwasm_std::{StdError, Timestamp, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("airdrop is not enabled")]
    AirdropDisabled,

    #[error("airdrop has not started yet (starts at {start_time})")]
    AirdropNotStarted { start_time: Timestamp },

    #[error("airdrop decay has not finished yet (ends at {end_seconds}s)")]
    AirdropNotEnded { end_seconds: u128 },

    #[error("claim record not found for {address}")]
    RecordNotFound { address: String },

    #[error("action index {index} out of range (must be < {num_actions})")]
    IndexOutOfRange { index: usize, num_actions: usize },

    #[error("claim record for {address} has {got} action flags, expected {expected}")]
    InvalidActionCount {
        address: String,
        expected: usize,
        got: usize,
    },

    #[error("insufficient pool balance: need {needed}{denom}, have {available}{denom}")]
    InsufficientPool {
        needed: Uint128,
        available: Uint128,
        denom: String,
    },

    #[error("invalid params: {reason}")]
    InvalidParams { reason: String },
}
