use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, Timestamp, Uint128};

pub const MAX_SUPPLY: u32 = 3333;
pub const ADMIN_MINT_MAX: u32 = 100;

pub const OG_WALLET_LIMIT: u32 = 1;
pub const FCFS_WALLET_LIMIT: u32 = 3;
pub const PUBLIC_WALLET_LIMIT: u32 = 20;

pub const OG_DURATION_SECONDS: u64 = 60 * 60;
pub const FCFS_DURATION_SECONDS: u64 = 60 * 60;

/// Royalty shares are expressed in basis points of the sale price
pub const MAX_ROYALTY_BPS: u64 = 10_000;

#[cw_serde]
#[derive(Copy, Eq)]
pub enum Phase {
    NotStarted,
    Og,
    Fcfs,
    Public,
}

impl Phase {
    /// Per-wallet cap for the phase. Nothing can be minted before the start.
    pub fn wallet_limit(&self) -> u32 {
        match self {
            Phase::NotStarted => 0,
            Phase::Og => OG_WALLET_LIMIT,
            Phase::Fcfs => FCFS_WALLET_LIMIT,
            Phase::Public => PUBLIC_WALLET_LIMIT,
        }
    }

    pub fn requires_allowlist(&self) -> bool {
        matches!(self, Phase::Og | Phase::Fcfs)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::NotStarted => "not_started",
            Phase::Og => "og",
            Phase::Fcfs => "fcfs",
            Phase::Public => "public",
        };
        write!(f, "{}", s)
    }
}

/// Mint counts of a single wallet, partitioned by phase
#[cw_serde]
#[derive(Default, Copy, Eq)]
pub struct WalletMints {
    pub og_minted: u32,
    pub fcfs_minted: u32,
    pub public_minted: u32,
    pub total_minted: u32,
}

impl WalletMints {
    pub fn minted_in(&self, phase: Phase) -> u32 {
        match phase {
            Phase::NotStarted => 0,
            Phase::Og => self.og_minted,
            Phase::Fcfs => self.fcfs_minted,
            Phase::Public => self.public_minted,
        }
    }
}

#[cw_serde]
pub struct RoyaltyInfo {
    pub payment_address: Addr,
    pub share_bps: u64,
}

#[cw_serde]
pub struct PhaseResponse {
    pub phase: Phase,
    pub start_time: Option<Timestamp>,
}

#[cw_serde]
pub struct ProgressResponse {
    pub minted: u32,
    pub max_supply: u32,
    pub current_price: Uint128,
    pub mint_active: bool,
}

#[cw_serde]
pub struct MerkleRootsResponse {
    pub og_root: Option<HexBinary>,
    pub fcfs_root: Option<HexBinary>,
}

#[cw_serde]
pub struct RoyaltyInfoResponse {
    pub address: String,
    pub royalty_amount: Uint128,
}

#[cw_serde]
pub struct ConfigResponse {
    pub mint_active: bool,
    pub paused: bool,
    pub start_time: Option<Timestamp>,
    pub fcfs_price: Uint128,
    pub public_price: Uint128,
    pub treasury: Addr,
    pub base_uri: Option<String>,
    pub uri_suffix: String,
    pub royalty: Option<RoyaltyInfo>,
}
