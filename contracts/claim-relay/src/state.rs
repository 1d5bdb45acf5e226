use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// `None` once the admin role has been renounced
    pub admin: Option<Addr>,
    pub claim_module: Addr,
    /// Only this contract may deliver sale hooks
    pub marketplace: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");
