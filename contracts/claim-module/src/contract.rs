use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SudoMsg};
use crate::query;
use crate::state::ADMIN;

const CONTRACT_NAME: &str = "crates.io:airdrop-claim-module";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender.clone(),
    };
    ADMIN.save(deps.storage, &admin)?;

    let params_res = execute::store_params(deps.branch(), msg.params)?;
    let records_res = execute::store_claim_records(deps.branch(), msg.claim_records)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "airdrop-claim-module")
        .add_attribute("admin", admin.to_string())
        .add_events(params_res.events)
        .add_events(records_res.events))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ClaimFor { address, action } => {
            execute::claim_for(deps, env, info, address, action)
        }
        ExecuteMsg::SetClaimRecords { records } => execute::set_claim_records(deps, info, records),
        ExecuteMsg::UpdateParams { params } => execute::update_params(deps, info, params),
        ExecuteMsg::UpdateAdmin { admin } => execute::update_admin(deps, info, admin),
        ExecuteMsg::ClawbackExpired { recipient } => {
            execute::clawback_expired(deps, env, info, recipient)
        }
    }
}

/// Governance entry point; the chain only routes sudo calls it authorized.
#[entry_point]
pub fn sudo(deps: DepsMut, _env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::UpdateParams { params } => execute::store_params(deps, params),
        SudoMsg::SetClaimRecords { records } => execute::store_claim_records(deps, records),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let res: StdResult<Binary> = match msg {
        QueryMsg::Params {} => query::query_params(deps),
        QueryMsg::Admin {} => query::query_admin(deps),
        QueryMsg::ClaimRecord { address } => return query::query_claim_record(deps, address),
        QueryMsg::ClaimRecords { start_after, limit } => {
            query::query_claim_records(deps, start_after, limit)
        }
        QueryMsg::ClaimableForAction { address, action } => {
            query::query_claimable_for_action(deps, env, address, action)
        }
        QueryMsg::TotalClaimable { address } => query::query_total_claimable(deps, env, address),
        QueryMsg::ModuleAccountBalance {} => query::query_module_account_balance(deps, env),
        QueryMsg::DecayFraction {} => query::query_decay_fraction(deps, env),
    };
    Ok(res?)
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
