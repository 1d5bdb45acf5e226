use airdrop_claim_common::{ClaimAction, NUM_ACTIONS};
use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{ClaimRecord, CLAIM_RECORDS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn get(storage: &dyn Storage, address: &Addr) -> StdResult<Option<ClaimRecord>> {
    CLAIM_RECORDS.may_load(storage, address)
}

pub fn load(storage: &dyn Storage, address: &Addr) -> Result<ClaimRecord, ContractError> {
    get(storage, address)?.ok_or_else(|| ContractError::RecordNotFound {
        address: address.to_string(),
    })
}

/// Inserts or overwrites records, including their completion flags.
/// Records are never deleted.
pub fn set_records(storage: &mut dyn Storage, records: &[ClaimRecord]) -> StdResult<()> {
    for record in records {
        CLAIM_RECORDS.save(storage, &record.address, record)?;
    }
    Ok(())
}

/// Marks action `index` completed for `address` and persists the record.
pub fn mark_completed(
    storage: &mut dyn Storage,
    address: &Addr,
    index: usize,
) -> Result<ClaimRecord, ContractError> {
    let action = ClaimAction::from_index(index).ok_or(ContractError::IndexOutOfRange {
        index,
        num_actions: NUM_ACTIONS,
    })?;
    let mut record = load(storage, address)?;
    record.action_completed.mark(action);
    CLAIM_RECORDS.save(storage, address, &record)?;
    Ok(record)
}

pub fn list(
    storage: &dyn Storage,
    start_after: Option<&Addr>,
    limit: Option<u32>,
) -> StdResult<Vec<ClaimRecord>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    CLAIM_RECORDS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect()
}
