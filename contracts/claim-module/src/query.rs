use airdrop_claim_common::ClaimAction;
use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdResult, Uint128};

use crate::authorization;
use crate::engine::claimable_for_action;
use crate::error::ContractError;
use crate::ledger;
use crate::msg::{
    AdminResponse, ClaimRecordsResponse, ClaimableResponse, DecayFractionResponse, Params,
};
use crate::state::{ADMIN, PARAMS};

pub fn query_params(deps: Deps) -> StdResult<Binary> {
    let stored = PARAMS.load(deps.storage)?;
    let allowed_claimers = authorization::list(deps.storage)?;
    to_json_binary(&Params {
        airdrop_enabled: stored.airdrop_enabled,
        airdrop_start_time: stored.airdrop_start_time,
        duration_until_decay: stored.duration_until_decay,
        duration_of_decay: stored.duration_of_decay,
        claim_denom: stored.claim_denom,
        allowed_claimers,
    })
}

pub fn query_admin(deps: Deps) -> StdResult<Binary> {
    let admin = ADMIN.load(deps.storage)?;
    to_json_binary(&AdminResponse {
        admin: admin.to_string(),
    })
}

pub fn query_claim_record(deps: Deps, address: String) -> Result<Binary, ContractError> {
    let addr = deps.api.addr_validate(&address)?;
    let record = ledger::load(deps.storage, &addr)?;
    Ok(to_json_binary(&record)?)
}

pub fn query_claim_records(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let records = ledger::list(deps.storage, start_after.as_ref(), limit)?;
    to_json_binary(&ClaimRecordsResponse { records })
}

/// Unknown addresses report zero rather than an error.
pub fn query_claimable_for_action(
    deps: Deps,
    env: Env,
    address: String,
    action: ClaimAction,
) -> StdResult<Binary> {
    let params = PARAMS.load(deps.storage)?;
    let addr = deps.api.addr_validate(&address)?;
    let amount = match ledger::get(deps.storage, &addr)? {
        Some(record) => claimable_for_action(&params, &record, action, env.block.time),
        None => Uint128::zero(),
    };
    to_json_binary(&ClaimableResponse {
        address,
        amount,
        denom: params.claim_denom,
    })
}

/// Sum over every action not completed yet, at the current block time.
pub fn query_total_claimable(deps: Deps, env: Env, address: String) -> StdResult<Binary> {
    let params = PARAMS.load(deps.storage)?;
    let addr = deps.api.addr_validate(&address)?;
    let amount = match ledger::get(deps.storage, &addr)? {
        Some(record) => record
            .action_completed
            .pending()
            .map(|action| claimable_for_action(&params, &record, action, env.block.time))
            .sum(),
        None => Uint128::zero(),
    };
    to_json_binary(&ClaimableResponse {
        address,
        amount,
        denom: params.claim_denom,
    })
}

pub fn query_module_account_balance(deps: Deps, env: Env) -> StdResult<Binary> {
    let params = PARAMS.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, params.claim_denom)?;
    to_json_binary(&balance)
}

pub fn query_decay_fraction(deps: Deps, env: Env) -> StdResult<Binary> {
    let params = PARAMS.load(deps.storage)?;
    let fraction = params.decay_schedule().fraction_at(env.block.time);
    to_json_binary(&DecayFractionResponse {
        fraction: fraction.to_decimal(),
        time: env.block.time,
    })
}
