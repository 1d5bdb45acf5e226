use airdrop_claim_common::{ClaimAction, DecayFraction};
use cosmwasm_std::{coins, Addr, BankMsg, Deps, DepsMut, Timestamp, Uint128};

use crate::authorization;
use crate::error::ContractError;
use crate::ledger;
use crate::state::{AirdropParams, ClaimRecord};

/// Result of a successful `claim_for_action`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimOutcome {
    pub beneficiary: Addr,
    pub paid: Uint128,
    pub fraction: DecayFraction,
    pub already_completed: bool,
    /// Escrow transfer to the beneficiary, absent when nothing is paid
    pub transfer: Option<BankMsg>,
}

/// What completing `action` at `now` would pay, ignoring authorization and
/// the escrow balance. Zero when the airdrop is disabled or not started, or
/// the action is already completed.
pub fn claimable_for_action(
    params: &AirdropParams,
    record: &ClaimRecord,
    action: ClaimAction,
    now: Timestamp,
) -> Uint128 {
    let schedule = params.decay_schedule();
    if !params.airdrop_enabled
        || !schedule.has_started(now)
        || record.action_completed.is_completed(action)
    {
        return Uint128::zero();
    }
    schedule
        .fraction_at(now)
        .apply(record.per_action_amount(&params.claim_denom))
}

/// Completes `action` for `beneficiary` on behalf of `caller`.
///
/// Checks run in order: airdrop enabled, caller authorized, record present,
/// action already completed (a no-op paying nothing), airdrop started. The
/// payout is `floor(per_action_amount * decay_fraction)` and the action is
/// marked completed even when that is zero.
///
/// `beneficiary` is validated only after the caller has been authorized; an
/// address that does not validate has no record. On success the record is
/// already persisted and the caller must dispatch `transfer` in the same
/// transaction. Every failure happens before any storage write.
pub fn claim_for_action(
    deps: DepsMut,
    escrow: &Addr,
    params: &AirdropParams,
    caller: &Addr,
    beneficiary: &str,
    action: ClaimAction,
    now: Timestamp,
) -> Result<ClaimOutcome, ContractError> {
    if !params.airdrop_enabled {
        return Err(ContractError::AirdropDisabled);
    }

    if !authorization::is_authorized(deps.storage, caller, action) {
        return Err(ContractError::Unauthorized {
            reason: "address is not allowed to claim".to_string(),
        });
    }

    let beneficiary = deps
        .api
        .addr_validate(beneficiary)
        .map_err(|_| ContractError::RecordNotFound {
            address: beneficiary.to_string(),
        })?;
    let record = ledger::load(deps.storage, &beneficiary)?;

    let schedule = params.decay_schedule();
    if record.action_completed.is_completed(action) {
        return Ok(ClaimOutcome {
            beneficiary,
            paid: Uint128::zero(),
            fraction: schedule.fraction_at(now),
            already_completed: true,
            transfer: None,
        });
    }

    if !schedule.has_started(now) {
        return Err(ContractError::AirdropNotStarted {
            start_time: params.airdrop_start_time,
        });
    }

    let base_amount = record.per_action_amount(&params.claim_denom);
    let fraction = schedule.fraction_at(now);
    let payable = fraction.apply(base_amount);

    if !payable.is_zero() {
        ensure_pool_covers(deps.as_ref(), escrow, &params.claim_denom, payable)?;
    }

    ledger::mark_completed(deps.storage, &beneficiary, action.index())?;

    let transfer = (!payable.is_zero()).then(|| BankMsg::Send {
        to_address: beneficiary.to_string(),
        amount: coins(payable.u128(), &params.claim_denom),
    });

    Ok(ClaimOutcome {
        beneficiary,
        paid: payable,
        fraction,
        already_completed: false,
        transfer,
    })
}

fn ensure_pool_covers(
    deps: Deps,
    escrow: &Addr,
    denom: &str,
    needed: Uint128,
) -> Result<(), ContractError> {
    let available = deps.querier.query_balance(escrow, denom)?.amount;
    if available < needed {
        return Err(ContractError::InsufficientPool {
            needed,
            available,
            denom: denom.to_string(),
        });
    }
    Ok(())
}
