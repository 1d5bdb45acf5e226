use airdrop_claim_common::{create_claim_for_msg, ClaimAction};
use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::msg::{MintCountResponse, MinterQueryMsg, SaleHookMsg};
use crate::state::{Config, CONFIG};

fn ensure_admin(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    match &config.admin {
        Some(admin) if *admin == info.sender => Ok(()),
        _ => Err(ContractError::Unauthorized {
            reason: "only admin can update config".to_string(),
        }),
    }
}

/// Ask the minter how often the sender minted; one mint is enough to
/// complete the action.
pub fn claim_mint_nft(
    deps: DepsMut,
    info: MessageInfo,
    minter_address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let minter = deps.api.addr_validate(&minter_address)?;

    let res: MintCountResponse = deps.querier.query_wasm_smart(
        &minter,
        &MinterQueryMsg::MintCount {
            address: info.sender.to_string(),
        },
    )?;
    if res.count == 0 {
        return Err(ContractError::NoMinting {
            address: info.sender.to_string(),
        });
    }

    let msg = create_claim_for_msg(
        &config.claim_module,
        info.sender.to_string(),
        ClaimAction::MintNft,
    )?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "claim_mint_nft")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("minter", minter.to_string())
        .add_event(
            Event::new("claim_relayed")
                .add_attribute("beneficiary", info.sender.to_string())
                .add_attribute("claim_action", ClaimAction::MintNft.as_str())
                .add_attribute("mint_count", res.count.to_string()),
        ))
}

pub fn sale_hook(
    deps: DepsMut,
    info: MessageInfo,
    sale: SaleHookMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let marketplace = config.marketplace.ok_or(ContractError::NoMarketplace)?;
    if info.sender != marketplace {
        return Err(ContractError::Unauthorized {
            reason: "only the marketplace can send sale hooks".to_string(),
        });
    }

    let buyer = deps.api.addr_validate(&sale.buyer)?;
    let msg = create_claim_for_msg(&config.claim_module, buyer.to_string(), ClaimAction::BidNft)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "sale_hook")
        .add_attribute("buyer", buyer.to_string())
        .add_attribute("collection", sale.collection)
        .add_attribute("token_id", sale.token_id.to_string())
        .add_event(
            Event::new("claim_relayed")
                .add_attribute("beneficiary", buyer.to_string())
                .add_attribute("claim_action", ClaimAction::BidNft.as_str()),
        ))
}

pub fn update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    config.admin = admin.map(|a| deps.api.addr_validate(&a)).transpose()?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute(
            "admin",
            config.admin.map(|a| a.to_string()).unwrap_or_default(),
        ))
}

pub fn update_marketplace(
    deps: DepsMut,
    info: MessageInfo,
    marketplace: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    config.marketplace = marketplace
        .map(|m| deps.api.addr_validate(&m))
        .transpose()?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_marketplace")
        .add_attribute(
            "marketplace",
            config.marketplace.map(|m| m.to_string()).unwrap_or_default(),
        ))
}
