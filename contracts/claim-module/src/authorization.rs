use airdrop_claim_common::{ClaimAction, ClaimAuthorization};
use cosmwasm_std::{Addr, Api, Empty, Order, StdError, StdResult, Storage};

use crate::state::ALLOWED_CLAIMERS;

fn key(action: ClaimAction) -> u8 {
    action.index() as u8
}

/// Deny by default: only an exact registered `(caller, action)` pair passes.
pub fn is_authorized(storage: &dyn Storage, caller: &Addr, action: ClaimAction) -> bool {
    ALLOWED_CLAIMERS.has(storage, (caller, key(action)))
}

/// Validates the addresses of a claimer list.
pub fn validate_claimers(
    api: &dyn Api,
    claimers: &[ClaimAuthorization],
) -> StdResult<Vec<(Addr, ClaimAction)>> {
    claimers
        .iter()
        .map(|c| Ok((api.addr_validate(&c.contract_address)?, c.action)))
        .collect()
}

/// Drops every existing entry and registers `claimers` in its place.
pub fn replace(storage: &mut dyn Storage, claimers: &[(Addr, ClaimAction)]) -> StdResult<()> {
    ALLOWED_CLAIMERS.clear(storage);
    for (contract, action) in claimers {
        ALLOWED_CLAIMERS.save(storage, (contract, key(*action)), &Empty {})?;
    }
    Ok(())
}

/// All registered pairs, ordered by contract address then action index.
pub fn list(storage: &dyn Storage) -> StdResult<Vec<ClaimAuthorization>> {
    ALLOWED_CLAIMERS
        .keys(storage, None, None, Order::Ascending)
        .map(|item| {
            let (contract, index) = item?;
            let action = ClaimAction::from_index(index as usize).ok_or_else(|| {
                StdError::generic_err(format!("corrupt claimer entry: action {}", index))
            })?;
            Ok(ClaimAuthorization {
                contract_address: contract.to_string(),
                action,
            })
        })
        .collect()
}
