use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    pub claim_module: String,
    pub marketplace: Option<String>,
    /// Defaults to the instantiating address
    pub admin: Option<String>,
}

/// Notification a marketplace sends after every completed sale.
#[cw_serde]
pub struct SaleHookMsg {
    pub collection: String,
    pub token_id: u32,
    pub price: Coin,
    pub seller: String,
    pub buyer: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Complete the mint-NFT action for the sender, provided the minter has
    /// recorded at least one mint for them.
    ClaimMintNft { minter_address: String },
    /// Complete the bid-NFT action for the buyer. Marketplace only.
    SaleHook(SaleHookMsg),
    /// Change or renounce the admin. Admin only.
    UpdateAdmin { admin: Option<String> },
    /// Change or clear the marketplace. Admin only.
    UpdateMarketplace { marketplace: Option<String> },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
}

/// Query understood by minter contracts.
#[cw_serde]
pub enum MinterQueryMsg {
    MintCount { address: String },
}

#[cw_serde]
pub struct MintCountResponse {
    pub address: String,
    pub count: u32,
}
