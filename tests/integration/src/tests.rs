//! Integration tests for the airdrop claim module and its relay.
//!
//! Contracts run inside a `cw-multi-test` `App`, so payouts are real bank
//! transfers out of the module's balance and every failed claim rolls back
//! the whole transaction. The minter is a small mock that only counts mints.
//!
//! Run:
//! ```bash
//! cargo test -p airdrop-claim-integration-tests
//! ```

use airdrop_claim_common::{ClaimAction, ClaimAuthorization};
use airdrop_claim_module::msg::{
    ClaimRecordMsg, ClaimableResponse, ExecuteMsg as ModuleExecuteMsg,
    InstantiateMsg as ModuleInstantiateMsg, Params, QueryMsg as ModuleQueryMsg,
    SudoMsg as ModuleSudoMsg,
};
use airdrop_claim_module::state::ClaimRecord;
use airdrop_claim_relay::msg::{
    ExecuteMsg as RelayExecuteMsg, InstantiateMsg as RelayInstantiateMsg, MintCountResponse,
    MinterQueryMsg, SaleHookMsg,
};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coin, coins, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult, Timestamp, Uint128,
};
use cw_multi_test::error::AnyResult;
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use cw_storage_plus::Map;

// ─── Constants ───

const DENOM: &str = "ustars";
const ALLOCATION: u128 = 1_000_000_000;
const PER_ACTION: u128 = ALLOCATION / 5;
const POOL: u128 = 5_000_000_000;
const UNTIL_DECAY: u64 = 3600;
const OF_DECAY: u64 = 18_000;

// ─── Mock minter ───

const MINT_COUNTS: Map<&Addr, u32> = Map::new("mint_counts");

#[cw_serde]
enum MinterExecuteMsg {
    Mint {},
}

fn minter_instantiate(_: DepsMut, _: Env, _: MessageInfo, _: Empty) -> StdResult<Response> {
    Ok(Response::new())
}

fn minter_execute(
    deps: DepsMut,
    _: Env,
    info: MessageInfo,
    msg: MinterExecuteMsg,
) -> StdResult<Response> {
    match msg {
        MinterExecuteMsg::Mint {} => {
            MINT_COUNTS.update(deps.storage, &info.sender, |count| -> StdResult<_> {
                Ok(count.unwrap_or_default() + 1)
            })?;
            Ok(Response::new().add_attribute("action", "mint"))
        }
    }
}

fn minter_query(deps: Deps, _: Env, msg: MinterQueryMsg) -> StdResult<Binary> {
    match msg {
        MinterQueryMsg::MintCount { address } => {
            let addr = deps.api.addr_validate(&address)?;
            let count = MINT_COUNTS
                .may_load(deps.storage, &addr)?
                .unwrap_or_default();
            to_json_binary(&MintCountResponse { address, count })
        }
    }
}

// ─── Contract wrappers ───

fn claim_module_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        airdrop_claim_module::contract::execute,
        airdrop_claim_module::contract::instantiate,
        airdrop_claim_module::contract::query,
    )
    .with_sudo(airdrop_claim_module::contract::sudo);
    Box::new(contract)
}

fn claim_relay_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        airdrop_claim_relay::contract::execute,
        airdrop_claim_relay::contract::instantiate,
        airdrop_claim_relay::contract::query,
    );
    Box::new(contract)
}

fn minter_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        minter_execute,
        minter_instantiate,
        minter_query,
    ))
}

// ─── Suite ───

struct Suite {
    app: App,
    start: Timestamp,
    admin: Addr,
    user: Addr,
    marketplace: Addr,
    module: Addr,
    relay: Addr,
    minter: Addr,
}

impl Suite {
    /// Module, relay and minter deployed; the relay is authorized for
    /// mint-NFT and bid-NFT and the module holds `pool` tokens.
    fn new(pool: u128) -> Self {
        let mut app = App::new(|router, api, storage| {
            let funder = api.addr_make("funder");
            router
                .bank
                .init_balance(storage, &funder, coins(POOL * 2, DENOM))
                .unwrap();
        });
        let admin = app.api().addr_make("admin");
        let user = app.api().addr_make("user");
        let marketplace = app.api().addr_make("marketplace");
        let funder = app.api().addr_make("funder");
        let start = app.block_info().time;

        let module_id = app.store_code(claim_module_contract());
        let relay_id = app.store_code(claim_relay_contract());
        let minter_id = app.store_code(minter_contract());

        let mut params = Params::with_start(start);
        params.airdrop_enabled = true;
        params.duration_until_decay = UNTIL_DECAY;
        params.duration_of_decay = OF_DECAY;
        let module = app
            .instantiate_contract(
                module_id,
                admin.clone(),
                &ModuleInstantiateMsg {
                    admin: None,
                    params: params.clone(),
                    claim_records: vec![ClaimRecordMsg {
                        address: user.to_string(),
                        initial_claimable_amount: coins(ALLOCATION, DENOM),
                        action_completed: None,
                    }],
                },
                &[],
                "claim-module",
                None,
            )
            .unwrap();

        let relay = app
            .instantiate_contract(
                relay_id,
                admin.clone(),
                &RelayInstantiateMsg {
                    claim_module: module.to_string(),
                    marketplace: Some(marketplace.to_string()),
                    admin: None,
                },
                &[],
                "claim-relay",
                None,
            )
            .unwrap();

        let minter = app
            .instantiate_contract(minter_id, admin.clone(), &Empty {}, &[], "minter", None)
            .unwrap();

        params.allowed_claimers = vec![
            ClaimAuthorization {
                contract_address: relay.to_string(),
                action: ClaimAction::MintNft,
            },
            ClaimAuthorization {
                contract_address: relay.to_string(),
                action: ClaimAction::BidNft,
            },
        ];
        app.execute_contract(
            admin.clone(),
            module.clone(),
            &ModuleExecuteMsg::UpdateParams { params },
            &[],
        )
        .unwrap();

        if pool > 0 {
            app.send_tokens(funder, module.clone(), &coins(pool, DENOM))
                .unwrap();
        }

        Suite {
            app,
            start,
            admin,
            user,
            marketplace,
            module,
            relay,
            minter,
        }
    }

    fn set_time(&mut self, seconds_after_start: u64) {
        let time = self.start.plus_seconds(seconds_after_start);
        self.app.update_block(|block| {
            block.time = time;
        });
    }

    fn balance(&self, addr: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, DENOM)
            .unwrap()
            .amount
            .u128()
    }

    fn record(&self) -> ClaimRecord {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.module,
                &ModuleQueryMsg::ClaimRecord {
                    address: self.user.to_string(),
                },
            )
            .unwrap()
    }

    fn mint(&mut self) {
        self.app
            .execute_contract(
                self.user.clone(),
                self.minter.clone(),
                &MinterExecuteMsg::Mint {},
                &[],
            )
            .unwrap();
    }

    fn claim_mint_nft(&mut self) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(
                self.user.clone(),
                self.relay.clone(),
                &RelayExecuteMsg::ClaimMintNft {
                    minter_address: self.minter.to_string(),
                },
                &[],
            )
    }

    fn set_enabled(&mut self, enabled: bool) {
        let mut params: Params = self
            .app
            .wrap()
            .query_wasm_smart(&self.module, &ModuleQueryMsg::Params {})
            .unwrap();
        params.airdrop_enabled = enabled;
        self.app
            .execute_contract(
                self.admin.clone(),
                self.module.clone(),
                &ModuleExecuteMsg::UpdateParams { params },
                &[],
            )
            .unwrap();
    }
}

// ─── Claim flow ───

#[test]
fn test_direct_claim_from_unauthorized_caller_fails() {
    let mut suite = Suite::new(POOL);
    suite.set_time(60);

    let err = suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.module.clone(),
            &ModuleExecuteMsg::ClaimFor {
                address: suite.user.to_string(),
                action: ClaimAction::MintNft,
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "unauthorized: address is not allowed to claim"
    );
    assert_eq!(suite.record().action_completed.as_slice(), &[false; 5]);
    assert_eq!(suite.balance(&suite.user), 0);
}

#[test]
fn test_mint_then_claim_pays_full_share() {
    let mut suite = Suite::new(POOL);
    suite.set_time(60);
    suite.mint();

    suite.claim_mint_nft().unwrap();

    assert_eq!(suite.balance(&suite.user), PER_ACTION);
    assert_eq!(suite.balance(&suite.module), POOL - PER_ACTION);
    let record = suite.record();
    assert!(record.action_completed.is_completed(ClaimAction::MintNft));
    assert_eq!(
        record.action_completed.as_slice(),
        &[false, true, false, false, false]
    );
}

#[test]
fn test_repeated_claim_is_a_noop() {
    let mut suite = Suite::new(POOL);
    suite.set_time(60);
    suite.mint();

    suite.claim_mint_nft().unwrap();
    suite.claim_mint_nft().unwrap();

    assert_eq!(suite.balance(&suite.user), PER_ACTION);
    assert_eq!(suite.balance(&suite.module), POOL - PER_ACTION);
}

#[test]
fn test_claim_without_mint_is_rejected() {
    let mut suite = Suite::new(POOL);
    suite.set_time(60);

    let err = suite.claim_mint_nft().unwrap_err();
    assert!(err.root_cause().to_string().starts_with("no minting recorded"));
    assert!(!suite.record().action_completed.is_completed(ClaimAction::MintNft));
}

#[test]
fn test_claim_after_decay_completes_without_payout() {
    let mut suite = Suite::new(POOL);
    suite.set_time(UNTIL_DECAY + OF_DECAY + 1);
    suite.mint();

    suite.claim_mint_nft().unwrap();

    assert_eq!(suite.balance(&suite.user), 0);
    assert_eq!(suite.balance(&suite.module), POOL);
    assert!(suite
        .record()
        .action_completed
        .is_completed(ClaimAction::MintNft));
}

#[test]
fn test_claim_halfway_through_decay_pays_half() {
    let mut suite = Suite::new(POOL);
    suite.set_time(UNTIL_DECAY + OF_DECAY / 2);
    suite.mint();

    let claimable: ClaimableResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.module,
            &ModuleQueryMsg::ClaimableForAction {
                address: suite.user.to_string(),
                action: ClaimAction::MintNft,
            },
        )
        .unwrap();
    assert_eq!(claimable.amount, Uint128::new(PER_ACTION / 2));

    suite.claim_mint_nft().unwrap();
    assert_eq!(suite.balance(&suite.user), PER_ACTION / 2);
}

#[test]
fn test_disabled_airdrop_rejects_every_claim() {
    let mut suite = Suite::new(POOL);
    suite.set_time(60);
    suite.mint();
    suite.set_enabled(false);

    let err = suite.claim_mint_nft().unwrap_err();
    assert_eq!(err.root_cause().to_string(), "airdrop is not enabled");

    let err = suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.module.clone(),
            &ModuleExecuteMsg::ClaimFor {
                address: suite.user.to_string(),
                action: ClaimAction::Vote,
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), "airdrop is not enabled");

    // an undecodable beneficiary is still rejected as disabled
    let err = suite
        .app
        .execute_contract(
            suite.relay.clone(),
            suite.module.clone(),
            &ModuleExecuteMsg::ClaimFor {
                address: "not-an-address".to_string(),
                action: ClaimAction::MintNft,
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), "airdrop is not enabled");
    assert_eq!(suite.balance(&suite.user), 0);
}

#[test]
fn test_empty_pool_rolls_back_the_claim() {
    let mut suite = Suite::new(1_000);
    suite.set_time(60);
    suite.mint();

    let err = suite.claim_mint_nft().unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .starts_with("insufficient pool balance"));
    assert!(!suite.record().action_completed.is_completed(ClaimAction::MintNft));
    assert_eq!(suite.balance(&suite.module), 1_000);
}

// ─── Sale hook ───

#[test]
fn test_sale_hook_completes_bid_action_for_buyer() {
    let mut suite = Suite::new(POOL);
    suite.set_time(60);

    let sale = SaleHookMsg {
        collection: "collection".to_string(),
        token_id: 123,
        price: coin(100, DENOM),
        seller: suite.app.api().addr_make("seller").to_string(),
        buyer: suite.user.to_string(),
    };

    let err = suite
        .app
        .execute_contract(
            suite.user.clone(),
            suite.relay.clone(),
            &RelayExecuteMsg::SaleHook(sale.clone()),
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().starts_with("unauthorized"));

    suite
        .app
        .execute_contract(
            suite.marketplace.clone(),
            suite.relay.clone(),
            &RelayExecuteMsg::SaleHook(sale),
            &[],
        )
        .unwrap();

    assert_eq!(suite.balance(&suite.user), PER_ACTION);
    assert!(suite
        .record()
        .action_completed
        .is_completed(ClaimAction::BidNft));
}

// ─── Governance and admin ───

#[test]
fn test_sudo_records_are_claimable() {
    let mut suite = Suite::new(POOL);
    suite.set_time(60);
    let buyer = suite.app.api().addr_make("buyer");

    suite
        .app
        .wasm_sudo(
            suite.module.clone(),
            &ModuleSudoMsg::SetClaimRecords {
                records: vec![ClaimRecordMsg {
                    address: buyer.to_string(),
                    initial_claimable_amount: coins(500, DENOM),
                    action_completed: None,
                }],
            },
        )
        .unwrap();

    suite
        .app
        .execute_contract(
            suite.marketplace.clone(),
            suite.relay.clone(),
            &RelayExecuteMsg::SaleHook(SaleHookMsg {
                collection: "collection".to_string(),
                token_id: 7,
                price: coin(100, DENOM),
                seller: suite.user.to_string(),
                buyer: buyer.to_string(),
            }),
            &[],
        )
        .unwrap();
    assert_eq!(suite.balance(&buyer), 100);
}

#[test]
fn test_clawback_sweeps_remaining_pool_after_decay() {
    let mut suite = Suite::new(POOL);
    suite.set_time(60);
    suite.mint();
    suite.claim_mint_nft().unwrap();

    let treasury = suite.app.api().addr_make("treasury");
    let msg = ModuleExecuteMsg::ClawbackExpired {
        recipient: treasury.to_string(),
    };

    let err = suite
        .app
        .execute_contract(suite.admin.clone(), suite.module.clone(), &msg, &[])
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .starts_with("airdrop decay has not finished yet"));

    suite.set_time(UNTIL_DECAY + OF_DECAY);
    suite
        .app
        .execute_contract(suite.admin.clone(), suite.module.clone(), &msg, &[])
        .unwrap();

    assert_eq!(suite.balance(&treasury), POOL - PER_ACTION);
    assert_eq!(suite.balance(&suite.module), 0);
}
