use airdrop_claim_common::{ActionCompleted, DecaySchedule, NUM_ACTIONS};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Empty, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const ADMIN: Item<Addr> = Item::new("admin");
pub const PARAMS: Item<AirdropParams> = Item::new("params");
pub const CLAIM_RECORDS: Map<&Addr, ClaimRecord> = Map::new("claim_records");

/// Authorization registry: `(contract, action index)` present means allowed.
pub const ALLOWED_CLAIMERS: Map<(&Addr, u8), Empty> = Map::new("allowed_claimers");

/// Default decay timings, in seconds.
pub const DEFAULT_DURATION_UNTIL_DECAY: u64 = 60 * 60;
pub const DEFAULT_DURATION_OF_DECAY: u64 = 5 * 60 * 60;
pub const DEFAULT_CLAIM_DENOM: &str = "ustars";

/// Scalar module parameters. The authorized claimers live in
/// `ALLOWED_CLAIMERS` and are replaced together with this item.
#[cw_serde]
pub struct AirdropParams {
    pub airdrop_enabled: bool,
    pub airdrop_start_time: Timestamp,
    /// Seconds after start during which the full per-action amount is payable
    pub duration_until_decay: u64,
    /// Seconds over which the payable amount then falls linearly to zero
    pub duration_of_decay: u64,
    pub claim_denom: String,
}

impl AirdropParams {
    pub fn decay_schedule(&self) -> DecaySchedule {
        DecaySchedule {
            start: self.airdrop_start_time,
            duration_until_decay: self.duration_until_decay,
            duration_of_decay: self.duration_of_decay,
        }
    }

    /// Unix seconds at which nothing is claimable any more.
    pub fn decay_end_seconds(&self) -> u128 {
        u128::from(self.airdrop_start_time.seconds())
            + u128::from(self.duration_until_decay)
            + u128::from(self.duration_of_decay)
    }
}

#[cw_serde]
pub struct ClaimRecord {
    pub address: Addr,
    pub initial_claimable_amount: Vec<Coin>,
    pub action_completed: ActionCompleted,
}

impl ClaimRecord {
    pub fn new(address: Addr, initial_claimable_amount: Vec<Coin>) -> Self {
        ClaimRecord {
            address,
            initial_claimable_amount,
            action_completed: ActionCompleted::default(),
        }
    }

    /// Allocation in `denom`; records hold at most one coin per denom.
    pub fn initial_amount_of(&self, denom: &str) -> Uint128 {
        self.initial_claimable_amount
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or_default()
    }

    /// Base amount released by one action, before decay. The remainder of
    /// the division is never paid out.
    pub fn per_action_amount(&self, denom: &str) -> Uint128 {
        self.initial_amount_of(denom) / Uint128::from(NUM_ACTIONS as u128)
    }
}
