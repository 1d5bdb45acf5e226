use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crate::state::CONFIG;

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}
