use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, WasmMsg};

use crate::types::ClaimAction;

/// Execute message accepted by the claim module from authorized contracts.
/// Mirrors `ExecuteMsg::ClaimFor` of the module.
#[cw_serde]
pub enum ClaimModuleExecuteMsg {
    ClaimFor { address: String, action: ClaimAction },
}

/// Message a relaying contract returns to complete `action` for `address`.
pub fn create_claim_for_msg(
    claim_module: &Addr,
    address: String,
    action: ClaimAction,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: claim_module.to_string(),
        msg: to_json_binary(&ClaimModuleExecuteMsg::ClaimFor { address, action })?,
        funds: vec![],
    }
    .into())
}
