use airdrop_claim_common::{ClaimAction, ClaimAuthorization};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Decimal, Timestamp, Uint128};

use crate::state::{
    ClaimRecord, DEFAULT_CLAIM_DENOM, DEFAULT_DURATION_OF_DECAY, DEFAULT_DURATION_UNTIL_DECAY,
};

/// Full module parameters, including the authorized claimers.
#[cw_serde]
pub struct Params {
    pub airdrop_enabled: bool,
    pub airdrop_start_time: Timestamp,
    /// Seconds after start during which the full per-action amount is payable
    pub duration_until_decay: u64,
    /// Seconds over which the payable amount then falls linearly to zero
    pub duration_of_decay: u64,
    pub claim_denom: String,
    pub allowed_claimers: Vec<ClaimAuthorization>,
}

impl Params {
    /// Disabled airdrop starting at `airdrop_start_time` with default timings.
    pub fn with_start(airdrop_start_time: Timestamp) -> Self {
        Params {
            airdrop_enabled: false,
            airdrop_start_time,
            duration_until_decay: DEFAULT_DURATION_UNTIL_DECAY,
            duration_of_decay: DEFAULT_DURATION_OF_DECAY,
            claim_denom: DEFAULT_CLAIM_DENOM.to_string(),
            allowed_claimers: vec![],
        }
    }
}

/// A claim record as supplied by setup code.
#[cw_serde]
pub struct ClaimRecordMsg {
    pub address: String,
    pub initial_claimable_amount: Vec<Coin>,
    /// One flag per action; omitted means nothing completed yet
    pub action_completed: Option<Vec<bool>>,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating address
    pub admin: Option<String>,
    pub params: Params,
    pub claim_records: Vec<ClaimRecordMsg>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Complete `action` for `address`. Only contracts registered in
    /// `allowed_claimers` for that action may call this.
    ClaimFor { address: String, action: ClaimAction },
    /// Insert or overwrite claim records. Admin only.
    SetClaimRecords { records: Vec<ClaimRecordMsg> },
    /// Replace the module parameters. Admin only.
    UpdateParams { params: Params },
    /// Hand the admin role to another address. Admin only.
    UpdateAdmin { admin: String },
    /// Sweep the remaining pool once decay has finished. Admin only.
    ClawbackExpired { recipient: String },
}

/// Privileged calls from chain governance.
#[cw_serde]
pub enum SudoMsg {
    UpdateParams { params: Params },
    SetClaimRecords { records: Vec<ClaimRecordMsg> },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Params)]
    Params {},
    #[returns(AdminResponse)]
    Admin {},
    #[returns(ClaimRecord)]
    ClaimRecord { address: String },
    #[returns(ClaimRecordsResponse)]
    ClaimRecords {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(ClaimableResponse)]
    ClaimableForAction { address: String, action: ClaimAction },
    #[returns(ClaimableResponse)]
    TotalClaimable { address: String },
    #[returns(Coin)]
    ModuleAccountBalance {},
    #[returns(DecayFractionResponse)]
    DecayFraction {},
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: String,
}

#[cw_serde]
pub struct ClaimRecordsResponse {
    pub records: Vec<ClaimRecord>,
}

#[cw_serde]
pub struct ClaimableResponse {
    pub address: String,
    pub amount: Uint128,
    pub denom: String,
}

#[cw_serde]
pub struct DecayFractionResponse {
    pub fraction: Decimal,
    pub time: Timestamp,
}
