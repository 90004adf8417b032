#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Decimal, Deps, Empty, Env, HexBinary, StdResult, Uint128};
use cw721_base::QueryMsg as Cw721QueryMsg;
use sg_phased_mint::{
    ConfigResponse, MerkleRootsResponse, Phase, PhaseResponse, ProgressResponse,
    RoyaltyInfoResponse, WalletMints, MAX_ROYALTY_BPS, MAX_SUPPLY,
};

use crate::collection::{self, PhasedCollection};
use crate::ledger;
use crate::merkle;
use crate::msg::QueryMsg;
use crate::phase::{current_phase, phase_price};
use crate::state::{ADMIN, CONFIG, MERKLE_ROOTS, PAUSED, ROYALTY};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Admin {} => to_binary(&ADMIN.query_admin(deps)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Phase {} => to_binary(&query_phase(deps, env)?),
        QueryMsg::RemainingSupply {} => to_binary(&ledger::remaining_supply(deps.storage)?),
        QueryMsg::RemainingQuota { address } => {
            to_binary(&query_remaining_quota(deps, env, address)?)
        }
        QueryMsg::MintedCounts { address } => to_binary(&query_minted_counts(deps, address)?),
        QueryMsg::Progress {} => to_binary(&query_progress(deps, env)?),
        QueryMsg::MerkleRoots {} => to_binary(&query_merkle_roots(deps)?),
        QueryMsg::AdminMinted {} => to_binary(&ledger::admin_minted(deps.storage)?),
        QueryMsg::IsAllowlisted {
            phase,
            address,
            proof,
        } => to_binary(&query_is_allowlisted(deps, phase, address, proof)?),
        QueryMsg::Exists { token_id } => to_binary(&collection::exists(deps.storage, &token_id)?),
        QueryMsg::TokenUri { token_id } => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&collection::token_uri(deps, &config, &token_id)?)
        }
        QueryMsg::RoyaltyInfo {
            token_id: _,
            sale_price,
        } => to_binary(&query_royalty_info(deps, sale_price)?),
        QueryMsg::NftInfo { token_id } => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&collection::nft_info(deps, env, &config, token_id)?)
        }
        QueryMsg::AllNftInfo {
            token_id,
            include_expired,
        } => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&collection::all_nft_info(
                deps,
                env,
                &config,
                token_id,
                include_expired,
            )?)
        }
        QueryMsg::OwnerOf {
            token_id,
            include_expired,
        } => query_base(
            deps,
            env,
            Cw721QueryMsg::OwnerOf {
                token_id,
                include_expired,
            },
        ),
        QueryMsg::Approval {
            token_id,
            spender,
            include_expired,
        } => query_base(
            deps,
            env,
            Cw721QueryMsg::Approval {
                token_id,
                spender,
                include_expired,
            },
        ),
        QueryMsg::Approvals {
            token_id,
            include_expired,
        } => query_base(
            deps,
            env,
            Cw721QueryMsg::Approvals {
                token_id,
                include_expired,
            },
        ),
        QueryMsg::AllOperators {
            owner,
            include_expired,
            start_after,
            limit,
        } => query_base(
            deps,
            env,
            Cw721QueryMsg::AllOperators {
                owner,
                include_expired,
                start_after,
                limit,
            },
        ),
        QueryMsg::NumTokens {} => query_base(deps, env, Cw721QueryMsg::NumTokens {}),
        QueryMsg::ContractInfo {} => query_base(deps, env, Cw721QueryMsg::ContractInfo {}),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => query_base(
            deps,
            env,
            Cw721QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            },
        ),
        QueryMsg::AllTokens { start_after, limit } => {
            query_base(deps, env, Cw721QueryMsg::AllTokens { start_after, limit })
        }
    }
}

fn query_base(deps: Deps, env: Env, msg: Cw721QueryMsg<Empty>) -> StdResult<Binary> {
    PhasedCollection::default().query(deps, env, msg)
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        mint_active: config.mint_active,
        paused: PAUSED.may_load(deps.storage)?.unwrap_or(false),
        start_time: config.start_time,
        fcfs_price: config.fcfs_price,
        public_price: config.public_price,
        treasury: config.treasury,
        base_uri: config.base_uri,
        uri_suffix: config.uri_suffix,
        royalty: ROYALTY.load(deps.storage)?,
    })
}

pub fn query_phase(deps: Deps, env: Env) -> StdResult<PhaseResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PhaseResponse {
        phase: current_phase(env.block.time, config.start_time),
        start_time: config.start_time,
    })
}

pub fn query_remaining_quota(deps: Deps, env: Env, address: String) -> StdResult<u32> {
    let addr = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let phase = current_phase(env.block.time, config.start_time);

    let minted = ledger::wallet_mints(deps.storage, &addr)?.minted_in(phase);
    Ok(phase.wallet_limit().saturating_sub(minted))
}

pub fn query_minted_counts(deps: Deps, address: String) -> StdResult<WalletMints> {
    let addr = deps.api.addr_validate(&address)?;
    ledger::wallet_mints(deps.storage, &addr)
}

pub fn query_progress(deps: Deps, env: Env) -> StdResult<ProgressResponse> {
    let config = CONFIG.load(deps.storage)?;
    let phase = current_phase(env.block.time, config.start_time);

    Ok(ProgressResponse {
        minted: ledger::total_minted(deps.storage)?,
        max_supply: MAX_SUPPLY,
        current_price: phase_price(&config, phase),
        mint_active: config.mint_active,
    })
}

pub fn query_merkle_roots(deps: Deps) -> StdResult<MerkleRootsResponse> {
    let roots = MERKLE_ROOTS.load(deps.storage)?;
    Ok(MerkleRootsResponse {
        og_root: roots.og_root,
        fcfs_root: roots.fcfs_root,
    })
}

/// Public mint has no allowlist; nothing is allowlisted before the start
pub fn query_is_allowlisted(
    deps: Deps,
    phase: Phase,
    address: String,
    proof: Vec<HexBinary>,
) -> StdResult<bool> {
    let roots = MERKLE_ROOTS.load(deps.storage)?;
    Ok(match phase {
        Phase::NotStarted => false,
        Phase::Og => merkle::verify(roots.og_root.as_ref(), &address, &proof),
        Phase::Fcfs => merkle::verify(roots.fcfs_root.as_ref(), &address, &proof),
        Phase::Public => true,
    })
}

pub fn query_royalty_info(
    deps: Deps,
    sale_price: Uint128,
) -> StdResult<Option<RoyaltyInfoResponse>> {
    let royalty = ROYALTY.load(deps.storage)?;
    Ok(royalty.map(|r| RoyaltyInfoResponse {
        address: r.payment_address.to_string(),
        royalty_amount: sale_price * Decimal::from_ratio(r.share_bps, MAX_ROYALTY_BPS),
    }))
}
