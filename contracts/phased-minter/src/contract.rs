#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, ensure, BankMsg, DepsMut, Empty, Env, Event, HexBinary, MessageInfo, Reply, StdError,
    SubMsg, Uint128,
};
use cw2::set_contract_version;
use cw721_base::{
    ExecuteMsg as Cw721ExecuteMsg, Extension, InstantiateMsg as Cw721InstantiateMsg,
};
use cw_utils::may_pay;
use semver::Version;
use sg_phased_mint::{Phase, MAX_SUPPLY};
use sg_std::{Response, NATIVE_DENOM};

use crate::admin::{
    execute_admin_mint, execute_clear_royalty, execute_rescue_funds, execute_set_base_uri,
    execute_set_fcfs_price, execute_set_merkle_roots, execute_set_paused,
    execute_set_public_price, execute_set_royalty, execute_set_start_time, execute_set_treasury,
    execute_toggle_mint_active, execute_update_admin, execute_withdraw, non_zero_addr,
    validate_royalty,
};
use crate::collection::{create, token_id, PhasedCollection};
use crate::error::ContractError;
use crate::ledger;
use crate::merkle::{self, validate_root};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg};
use crate::phase::{current_phase, phase_price};
use crate::state::{
    Config, MerkleRoots, ADMIN, ADMIN_MINTED, CONFIG, MERKLE_ROOTS, MINT_LOCK, PAUSED, ROYALTY,
    TOTAL_MINTED,
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:phased-minter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SETTLEMENT_REPLY_ID: u64 = 1;

const DEFAULT_URI_SUFFIX: &str = ".json";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;
    let admin = match msg.admin {
        Some(admin) => non_zero_addr(api, &admin)?,
        None => info.sender.clone(),
    };
    ADMIN.set(deps.branch(), Some(admin.clone()))?;

    validate_root(msg.og_root.as_ref())?;
    validate_root(msg.fcfs_root.as_ref())?;
    MERKLE_ROOTS.save(
        deps.storage,
        &MerkleRoots {
            og_root: msg.og_root,
            fcfs_root: msg.fcfs_root,
        },
    )?;

    let royalty = msg
        .royalty
        .map(|r| validate_royalty(api, &r.payment_address, r.share_bps))
        .transpose()?;
    ROYALTY.save(deps.storage, &royalty)?;

    let config = Config {
        mint_active: false,
        start_time: msg.start_time,
        fcfs_price: msg.fcfs_price,
        public_price: msg.public_price,
        treasury: non_zero_addr(api, &msg.treasury)?,
        base_uri: msg.base_uri,
        uri_suffix: msg
            .uri_suffix
            .unwrap_or_else(|| DEFAULT_URI_SUFFIX.to_string()),
    };
    CONFIG.save(deps.storage, &config)?;

    PAUSED.save(deps.storage, &false)?;
    MINT_LOCK.save(deps.storage, &false)?;
    TOTAL_MINTED.save(deps.storage, &0)?;
    ADMIN_MINTED.save(deps.storage, &0)?;

    // the minter itself is the only account allowed to create units
    PhasedCollection::default().instantiate(
        deps.branch(),
        env.clone(),
        info.clone(),
        Cw721InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            minter: env.contract.address.to_string(),
        },
    )?;
    // after the base, which records its own version
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("treasury", config.treasury)
        .add_attribute("max_supply", MAX_SUPPLY.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { quantity, proof } => execute_mint(deps, env, info, quantity, proof),
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, info, admin),
        ExecuteMsg::ToggleMintActive {} => execute_toggle_mint_active(deps, info),
        ExecuteMsg::SetStartTime { start_time } => execute_set_start_time(deps, info, start_time),
        ExecuteMsg::SetTreasury { treasury } => execute_set_treasury(deps, info, treasury),
        ExecuteMsg::SetFcfsPrice { price } => execute_set_fcfs_price(deps, info, price),
        ExecuteMsg::SetPublicPrice { price } => execute_set_public_price(deps, info, price),
        ExecuteMsg::SetMerkleRoots { og_root, fcfs_root } => {
            execute_set_merkle_roots(deps, info, og_root, fcfs_root)
        }
        ExecuteMsg::SetBaseUri {
            base_uri,
            uri_suffix,
        } => execute_set_base_uri(deps, info, base_uri, uri_suffix),
        ExecuteMsg::SetRoyalty {
            payment_address,
            share_bps,
        } => execute_set_royalty(deps, info, payment_address, share_bps),
        ExecuteMsg::ClearRoyalty {} => execute_clear_royalty(deps, info),
        ExecuteMsg::Pause {} => execute_set_paused(deps, info, true),
        ExecuteMsg::Unpause {} => execute_set_paused(deps, info, false),
        ExecuteMsg::AdminMint {
            recipient,
            quantity,
        } => execute_admin_mint(deps, info, recipient, quantity),
        ExecuteMsg::RescueFunds {
            denom,
            recipient,
            amount,
        } => execute_rescue_funds(deps, env, info, denom, recipient, amount),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => execute_base(
            deps,
            env,
            info,
            Cw721ExecuteMsg::TransferNft {
                recipient,
                token_id,
            },
        ),
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => execute_base(
            deps,
            env,
            info,
            Cw721ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            },
        ),
        ExecuteMsg::Approve {
            spender,
            token_id,
            expires,
        } => execute_base(
            deps,
            env,
            info,
            Cw721ExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            },
        ),
        ExecuteMsg::Revoke { spender, token_id } => execute_base(
            deps,
            env,
            info,
            Cw721ExecuteMsg::Revoke { spender, token_id },
        ),
        ExecuteMsg::ApproveAll { operator, expires } => execute_base(
            deps,
            env,
            info,
            Cw721ExecuteMsg::ApproveAll { operator, expires },
        ),
        ExecuteMsg::RevokeAll { operator } => {
            execute_base(deps, env, info, Cw721ExecuteMsg::RevokeAll { operator })
        }
    }
}

fn execute_base(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: Cw721ExecuteMsg<Extension, Empty>,
) -> Result<Response, ContractError> {
    PhasedCollection::default()
        .execute(deps, env, info, msg)
        .map_err(ContractError::from)
}

/// Mints `quantity` units to the sender in the active phase.
///
/// The ledger is only written once every check, payment included, has passed.
/// Payment is forwarded to the treasury in the same transaction, so a failed
/// transfer reverts the reservation and the created units with it.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    quantity: u32,
    proof: Vec<HexBinary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let paused = PAUSED.may_load(deps.storage)?.unwrap_or(false);
    ensure!(config.mint_active && !paused, ContractError::MintClosed {});
    ensure!(
        !MINT_LOCK.may_load(deps.storage)?.unwrap_or(false),
        ContractError::Reentrancy {}
    );
    ensure!(quantity > 0, ContractError::InvalidQuantity {});

    let total = ledger::total_minted(deps.storage)?;
    ensure!(
        total
            .checked_add(quantity)
            .map_or(false, |next| next <= MAX_SUPPLY),
        ContractError::SupplyExceeded {}
    );

    let phase = current_phase(env.block.time, config.start_time);
    ensure!(phase != Phase::NotStarted, ContractError::MintClosed {});

    if phase.requires_allowlist() {
        let roots = MERKLE_ROOTS.load(deps.storage)?;
        let root = match phase {
            Phase::Og => roots.og_root.as_ref(),
            _ => roots.fcfs_root.as_ref(),
        };
        ensure!(
            merkle::verify(root, info.sender.as_str(), &proof),
            ContractError::NotAllowlisted {}
        );
    }

    let reservation = ledger::plan_mint(deps.storage, &info.sender, phase, quantity)?;

    let required = phase_price(&config, phase).checked_mul(Uint128::from(quantity))?;
    let paid = may_pay(&info, NATIVE_DENOM)?;
    if paid != required {
        return Err(ContractError::IncorrectPayment {
            got: paid,
            expected: required,
        });
    }

    let ids = ledger::commit(deps.storage, &reservation)?;

    // display only, truncates when the amount does not divide evenly
    let unit_price = required / Uint128::from(quantity);
    let mut res = Response::new();
    for id in ids.ids() {
        create(deps.storage, &info.sender, id)?;
        res = res.add_event(
            Event::new("mint")
                .add_attribute("token_id", token_id(id))
                .add_attribute("owner", info.sender.to_string())
                .add_attribute("phase", phase.to_string())
                .add_attribute("price", unit_price),
        );
    }

    if !required.is_zero() {
        MINT_LOCK.save(deps.storage, &true)?;
        let settlement = BankMsg::Send {
            to_address: config.treasury.to_string(),
            amount: coins(required.u128(), NATIVE_DENOM),
        };
        res = res.add_submessage(SubMsg::reply_on_success(settlement, SETTLEMENT_REPLY_ID));
    }

    let event = Event::new("batch_mint")
        .add_attribute("owner", info.sender)
        .add_attribute("phase", phase.to_string())
        .add_attribute("first_token_id", token_id(ids.first))
        .add_attribute("last_token_id", token_id(ids.last))
        .add_attribute("quantity", reservation.quantity().to_string())
        .add_attribute("amount", required)
        .add_attribute("treasury", config.treasury);
    Ok(res.add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != SETTLEMENT_REPLY_ID {
        return Err(ContractError::InvalidReplyID {});
    }

    MINT_LOCK.save(deps.storage, &false)?;

    Ok(Response::default().add_attribute("action", "settlement_reply"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let current_version = cw2::get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(StdError::generic_err("Cannot upgrade to a different contract").into());
    }
    let version: Version = current_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if version > new_version {
        return Err(StdError::generic_err("Cannot upgrade to a previous contract version").into());
    }
    // if same version return
    if version == new_version {
        return Ok(Response::new());
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let event = Event::new("migrate")
        .add_attribute("from_version", current_version.version)
        .add_attribute("to_version", CONTRACT_VERSION);
    Ok(Response::new().add_event(event))
}
