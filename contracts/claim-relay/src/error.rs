use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("no minting recorded for {address}")]
    NoMinting { address: String },

    #[error("marketplace is not configured")]
    NoMarketplace,
}
