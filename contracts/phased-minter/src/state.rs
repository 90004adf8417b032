use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, Timestamp, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};
use sg_phased_mint::{RoyaltyInfo, WalletMints};

#[cw_serde]
pub struct Config {
    /// Administrative toggle, independent of `PAUSED`
    pub mint_active: bool,
    /// `None` keeps every phase closed
    pub start_time: Option<Timestamp>,
    pub fcfs_price: Uint128,
    pub public_price: Uint128,
    /// Receives every mint payment
    pub treasury: Addr,
    pub base_uri: Option<String>,
    pub uri_suffix: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
#[derive(Default)]
pub struct MerkleRoots {
    pub og_root: Option<HexBinary>,
    pub fcfs_root: Option<HexBinary>,
}

/// Replaced as a pair by the admin
pub const MERKLE_ROOTS: Item<MerkleRoots> = Item::new("merkle-roots");

pub const ADMIN: Admin = Admin::new("admin");

/// Controls if minting is paused or not by admin
pub const PAUSED: Item<bool> = Item::new("paused");

pub const ROYALTY: Item<Option<RoyaltyInfo>> = Item::new("royalty");

/// Held while a settlement message is in flight
pub const MINT_LOCK: Item<bool> = Item::new("mint-lock");

/// Units issued so far, across both the public and the admin path.
/// Also the id of the last issued unit.
pub const TOTAL_MINTED: Item<u32> = Item::new("total-minted");

pub const ADMIN_MINTED: Item<u32> = Item::new("admin-minted");

pub const WALLET_MINTS: Map<&Addr, WalletMints> = Map::new("wallet-mints");
