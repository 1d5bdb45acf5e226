use airdrop_claim_common::{ActionCompleted, ClaimAction, NUM_ACTIONS};
use cosmwasm_std::{coins, Addr, Api, BankMsg, DepsMut, Env, Event, MessageInfo, Response, Storage};

use crate::authorization;
use crate::engine;
use crate::error::ContractError;
use crate::ledger;
use crate::msg::{ClaimRecordMsg, Params};
use crate::state::{AirdropParams, ClaimRecord, ADMIN, PARAMS};

fn ensure_admin(storage: &dyn Storage, sender: &Addr, reason: &str) -> Result<(), ContractError> {
    let admin = ADMIN.load(storage)?;
    if *sender != admin {
        return Err(ContractError::Unauthorized {
            reason: reason.to_string(),
        });
    }
    Ok(())
}

/// Complete an action for a beneficiary. Caller must be an authorized contract.
pub fn claim_for(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    address: String,
    action: ClaimAction,
) -> Result<Response, ContractError> {
    let params = PARAMS.load(deps.storage)?;

    let outcome = engine::claim_for_action(
        deps,
        &env.contract.address,
        &params,
        &info.sender,
        &address,
        action,
        env.block.time,
    )?;
    let beneficiary = outcome.beneficiary;

    let mut response = Response::new()
        .add_attribute("action", "claim_for")
        .add_attribute("beneficiary", beneficiary.to_string())
        .add_attribute("claim_action", action.as_str())
        .add_attribute("amount", outcome.paid.to_string())
        .add_event(
            Event::new("airdrop_claim")
                .add_attribute("caller", info.sender.to_string())
                .add_attribute("beneficiary", beneficiary.to_string())
                .add_attribute("claim_action", action.as_str())
                .add_attribute("amount", outcome.paid.to_string())
                .add_attribute("denom", params.claim_denom.clone())
                .add_attribute("decay_fraction", outcome.fraction.to_decimal().to_string())
                .add_attribute("already_completed", outcome.already_completed.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        );

    if let Some(transfer) = outcome.transfer {
        response = response.add_message(transfer);
    }

    Ok(response)
}

/// Insert or overwrite claim records. Admin only.
pub fn set_claim_records(
    deps: DepsMut,
    info: MessageInfo,
    records: Vec<ClaimRecordMsg>,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender, "only admin can set claim records")?;
    store_claim_records(deps, records)
}

/// Replace module params. Admin only.
pub fn update_params(
    deps: DepsMut,
    info: MessageInfo,
    params: Params,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender, "only admin can update params")?;
    store_params(deps, params)
}

/// Transfer the admin role. Admin only.
pub fn update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender, "only admin can update admin")?;
    let new_admin = deps.api.addr_validate(&admin)?;
    ADMIN.save(deps.storage, &new_admin)?;

    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute("admin", new_admin.to_string()))
}

/// Send the whole remaining pool to `recipient` once nothing is claimable.
/// Admin only.
pub fn clawback_expired(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info.sender, "only admin can claw back the pool")?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let params = PARAMS.load(deps.storage)?;
    if !params.decay_schedule().has_ended(env.block.time) {
        return Err(ContractError::AirdropNotEnded {
            end_seconds: params.decay_end_seconds(),
        });
    }

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &params.claim_denom)?
        .amount;

    let mut response = Response::new()
        .add_attribute("action", "clawback_expired")
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("amount", balance.to_string())
        .add_event(
            Event::new("airdrop_clawback")
                .add_attribute("recipient", recipient.to_string())
                .add_attribute("amount", balance.to_string())
                .add_attribute("denom", params.claim_denom.clone()),
        );

    if !balance.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(balance.u128(), &params.claim_denom),
        });
    }

    Ok(response)
}

/// Validate and persist `params`, replacing the authorized claimers.
/// Shared by instantiate, admin and governance paths.
pub fn store_params(deps: DepsMut, params: Params) -> Result<Response, ContractError> {
    let (stored, claimers) = validate_params(deps.api, params)?;

    PARAMS.save(deps.storage, &stored)?;
    authorization::replace(deps.storage, &claimers)?;

    Ok(Response::new()
        .add_attribute("action", "update_params")
        .add_event(
            Event::new("airdrop_params_updated")
                .add_attribute("airdrop_enabled", stored.airdrop_enabled.to_string())
                .add_attribute(
                    "airdrop_start_time",
                    stored.airdrop_start_time.seconds().to_string(),
                )
                .add_attribute(
                    "duration_until_decay",
                    stored.duration_until_decay.to_string(),
                )
                .add_attribute("duration_of_decay", stored.duration_of_decay.to_string())
                .add_attribute("claim_denom", stored.claim_denom)
                .add_attribute("allowed_claimers", claimers.len().to_string()),
        ))
}

/// Validate and persist claim records. Shared by instantiate, admin and
/// governance paths.
pub fn store_claim_records(
    deps: DepsMut,
    records: Vec<ClaimRecordMsg>,
) -> Result<Response, ContractError> {
    let records = records
        .into_iter()
        .map(|record| validate_claim_record(deps.api, record))
        .collect::<Result<Vec<_>, _>>()?;

    ledger::set_records(deps.storage, &records)?;

    Ok(Response::new()
        .add_attribute("action", "set_claim_records")
        .add_attribute("count", records.len().to_string())
        .add_event(
            Event::new("airdrop_records_set").add_attribute("count", records.len().to_string()),
        ))
}

fn validate_params(
    api: &dyn Api,
    params: Params,
) -> Result<(AirdropParams, Vec<(Addr, ClaimAction)>), ContractError> {
    if params.claim_denom.trim().is_empty() {
        return Err(ContractError::InvalidParams {
            reason: "claim_denom must not be empty".to_string(),
        });
    }

    let claimers = authorization::validate_claimers(api, &params.allowed_claimers)?;

    Ok((
        AirdropParams {
            airdrop_enabled: params.airdrop_enabled,
            airdrop_start_time: params.airdrop_start_time,
            duration_until_decay: params.duration_until_decay,
            duration_of_decay: params.duration_of_decay,
            claim_denom: params.claim_denom,
        },
        claimers,
    ))
}

fn validate_claim_record(api: &dyn Api, record: ClaimRecordMsg) -> Result<ClaimRecord, ContractError> {
    let address = api.addr_validate(&record.address)?;

    let mut denoms: Vec<&str> = Vec::with_capacity(record.initial_claimable_amount.len());
    for coin in &record.initial_claimable_amount {
        if coin.amount.is_zero() {
            return Err(ContractError::InvalidParams {
                reason: format!("zero {} allocation for {}", coin.denom, record.address),
            });
        }
        if denoms.contains(&coin.denom.as_str()) {
            return Err(ContractError::InvalidParams {
                reason: format!("duplicate {} allocation for {}", coin.denom, record.address),
            });
        }
        denoms.push(&coin.denom);
    }

    let action_completed = match record.action_completed {
        None => ActionCompleted::default(),
        Some(flags) => {
            ActionCompleted::from_flags(&flags).ok_or(ContractError::InvalidActionCount {
                address: record.address.clone(),
                expected: NUM_ACTIONS,
                got: flags.len(),
            })?
        }
    };

    Ok(ClaimRecord {
        address,
        initial_claimable_amount: record.initial_claimable_amount,
        action_completed,
    })
}
