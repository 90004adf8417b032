use cosmwasm_std::{
    ensure, Addr, Api, BankMsg, Coin, DepsMut, Env, Event, HexBinary, MessageInfo, Timestamp,
    Uint128,
};
use cw_utils::{maybe_addr, nonpayable};
use sg_phased_mint::{RoyaltyInfo, MAX_ROYALTY_BPS};
use sg_std::{Response, NATIVE_DENOM};

use crate::collection::{create, token_id};
use crate::ledger::{self, plan_admin_mint};
use crate::merkle::validate_root;
use crate::state::{MerkleRoots, ADMIN, CONFIG, MERKLE_ROOTS, MINT_LOCK, PAUSED, ROYALTY};
use crate::ContractError;

/// Validates an address argument, rejecting the empty address
pub fn non_zero_addr(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ContractError::ZeroAddress {});
    }
    Ok(api.addr_validate(address)?)
}

pub fn validate_royalty(
    api: &dyn Api,
    payment_address: &str,
    share_bps: u64,
) -> Result<RoyaltyInfo, ContractError> {
    if share_bps > MAX_ROYALTY_BPS {
        return Err(ContractError::InvalidRoyaltyBps(share_bps));
    }
    Ok(RoyaltyInfo {
        payment_address: non_zero_addr(api, payment_address)?,
        share_bps,
    })
}

fn only_admin(deps: &DepsMut, info: &MessageInfo) -> Result<(), ContractError> {
    nonpayable(info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    Ok(())
}

pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let api = deps.api;
    Ok(ADMIN.execute_update_admin(deps, info, maybe_addr(api, admin)?)?)
}

pub fn execute_toggle_mint_active(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;

    let config = CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.mint_active = !config.mint_active;
        Ok(config)
    })?;

    let event = Event::new("toggle_mint_active")
        .add_attribute("mint_active", config.mint_active.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_start_time(
    deps: DepsMut,
    info: MessageInfo,
    start_time: Option<Timestamp>,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.start_time = start_time;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_start_time")
        .add_attribute(
            "start_time",
            start_time.map_or("none".to_string(), |t| t.to_string()),
        )
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_treasury(
    deps: DepsMut,
    info: MessageInfo,
    treasury: String,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.treasury = non_zero_addr(deps.api, &treasury)?;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_treasury")
        .add_attribute("treasury", config.treasury)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_fcfs_price(
    deps: DepsMut,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.fcfs_price = price;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_fcfs_price")
        .add_attribute("price", price)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_public_price(
    deps: DepsMut,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.public_price = price;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_public_price")
        .add_attribute("price", price)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_merkle_roots(
    deps: DepsMut,
    info: MessageInfo,
    og_root: Option<HexBinary>,
    fcfs_root: Option<HexBinary>,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;
    validate_root(og_root.as_ref())?;
    validate_root(fcfs_root.as_ref())?;

    let roots = MerkleRoots { og_root, fcfs_root };
    MERKLE_ROOTS.save(deps.storage, &roots)?;

    let event = Event::new("set_merkle_roots")
        .add_attribute("og_root", root_attr(&roots.og_root))
        .add_attribute("fcfs_root", root_attr(&roots.fcfs_root))
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

fn root_attr(root: &Option<HexBinary>) -> String {
    root.as_ref().map_or("none".to_string(), |r| r.to_hex())
}

/// Attribute values may not be empty
fn or_none(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "none".to_string(),
    }
}

/// Changing the base location refreshes the metadata of every issued unit
pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: Option<String>,
    uri_suffix: String,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.base_uri = base_uri;
    config.uri_suffix = uri_suffix;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_base_uri")
        .add_attribute("base_uri", or_none(config.base_uri.as_deref()))
        .add_attribute("uri_suffix", or_none(Some(&config.uri_suffix)))
        .add_attribute("sender", info.sender);
    let mut res = Response::new().add_event(event);

    let total = ledger::total_minted(deps.storage)?;
    if total > 0 {
        res = res.add_event(
            Event::new("batch_metadata_update")
                .add_attribute("from_token_id", token_id(1))
                .add_attribute("to_token_id", token_id(total)),
        );
    }
    Ok(res)
}

pub fn execute_set_royalty(
    deps: DepsMut,
    info: MessageInfo,
    payment_address: String,
    share_bps: u64,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;

    let royalty = validate_royalty(deps.api, &payment_address, share_bps)?;
    ROYALTY.save(deps.storage, &Some(royalty.clone()))?;

    let event = Event::new("set_royalty")
        .add_attribute("payment_address", royalty.payment_address)
        .add_attribute("share_bps", royalty.share_bps.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_clear_royalty(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;

    ROYALTY.save(deps.storage, &None)?;

    let event = Event::new("clear_royalty").add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;

    PAUSED.save(deps.storage, &paused)?;

    let event = Event::new(if paused { "pause" } else { "unpause" })
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

/// Free issuance on the admin quota. Shares the global supply and the id
/// sequence with the phase mints, and is blocked while paused.
pub fn execute_admin_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    quantity: u32,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;
    ensure!(
        !PAUSED.may_load(deps.storage)?.unwrap_or(false),
        ContractError::MintClosed {}
    );
    ensure!(
        !MINT_LOCK.may_load(deps.storage)?.unwrap_or(false),
        ContractError::Reentrancy {}
    );
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }
    let recipient = non_zero_addr(deps.api, &recipient)?;

    let reservation = plan_admin_mint(deps.storage, quantity)?;
    let ids = ledger::commit(deps.storage, &reservation)?;

    let mut res = Response::new();
    for id in ids.ids() {
        create(deps.storage, &recipient, id)?;
        res = res.add_event(
            Event::new("mint")
                .add_attribute("token_id", token_id(id))
                .add_attribute("owner", recipient.to_string())
                .add_attribute("phase", "admin")
                .add_attribute("price", Uint128::zero()),
        );
    }

    let event = Event::new("admin_mint")
        .add_attribute("recipient", recipient)
        .add_attribute("first_token_id", token_id(ids.first))
        .add_attribute("last_token_id", token_id(ids.last))
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("sender", info.sender);
    Ok(res.add_event(event))
}

/// Amount of `denom` held by the contract that can be sent out, all of it
/// when `amount` is not given
fn withdrawable(
    deps: &DepsMut,
    env: &Env,
    denom: &str,
    amount: Option<Uint128>,
) -> Result<Coin, ContractError> {
    let balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), denom)?;

    let amount = amount.unwrap_or(balance.amount);
    if amount.is_zero() {
        return Err(ContractError::NothingToWithdraw {});
    }
    if amount > balance.amount {
        return Err(ContractError::InsufficientFunds {
            requested: amount,
            available: balance.amount,
        });
    }

    Ok(Coin {
        denom: denom.to_string(),
        amount,
    })
}

pub fn execute_rescue_funds(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
    recipient: String,
    amount: Option<Uint128>,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;
    let recipient = non_zero_addr(deps.api, &recipient)?;

    let coin = withdrawable(&deps, &env, &denom, amount)?;
    let msg = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![coin.clone()],
    };

    let event = Event::new("rescue_funds")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", coin.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_message(msg).add_event(event))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    only_admin(&deps, &info)?;
    let treasury = CONFIG.load(deps.storage)?.treasury;

    let coin = withdrawable(&deps, &env, NATIVE_DENOM, None)?;
    let msg = BankMsg::Send {
        to_address: treasury.to_string(),
        amount: vec![coin.clone()],
    };

    let event = Event::new("withdraw")
        .add_attribute("treasury", treasury)
        .add_attribute("amount", coin.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_message(msg).add_event(event))
}
