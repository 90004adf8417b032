use cosmwasm_std::{Addr, StdResult, Storage};
use sg_phased_mint::{Phase, WalletMints, ADMIN_MINT_MAX, MAX_SUPPLY};

use crate::state::{ADMIN_MINTED, TOTAL_MINTED, WALLET_MINTS};
use crate::ContractError;

/// Contiguous block of unit ids, both ends inclusive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdRange {
    pub first: u32,
    pub last: u32,
}

impl IdRange {
    pub fn ids(&self) -> impl Iterator<Item = u32> {
        self.first..=self.last
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Quota {
    Wallet { wallet: Addr, mints: WalletMints },
    Admin { minted: u32 },
}

/// A checked but not yet committed reservation. Planning reads the ledger
/// without writing, so dropping a reservation leaves no trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
    quota: Quota,
    total: u32,
    quantity: u32,
}

impl Reservation {
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn ids(&self) -> IdRange {
        IdRange {
            first: self.total + 1,
            last: self.total + self.quantity,
        }
    }
}

pub fn total_minted(storage: &dyn Storage) -> StdResult<u32> {
    Ok(TOTAL_MINTED.may_load(storage)?.unwrap_or_default())
}

pub fn admin_minted(storage: &dyn Storage) -> StdResult<u32> {
    Ok(ADMIN_MINTED.may_load(storage)?.unwrap_or_default())
}

pub fn wallet_mints(storage: &dyn Storage, wallet: &Addr) -> StdResult<WalletMints> {
    Ok(WALLET_MINTS.may_load(storage, wallet)?.unwrap_or_default())
}

pub fn remaining_supply(storage: &dyn Storage) -> StdResult<u32> {
    Ok(MAX_SUPPLY.saturating_sub(total_minted(storage)?))
}

fn check_supply(total: u32, quantity: u32) -> Result<(), ContractError> {
    match total.checked_add(quantity) {
        Some(next) if next <= MAX_SUPPLY => Ok(()),
        _ => Err(ContractError::SupplyExceeded {}),
    }
}

/// Checks a phase mint of `quantity` units for `wallet`. The global ceiling is
/// evaluated after the wallet cap.
pub fn plan_mint(
    storage: &dyn Storage,
    wallet: &Addr,
    phase: Phase,
    quantity: u32,
) -> Result<Reservation, ContractError> {
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }

    let mints = wallet_mints(storage, wallet)?;
    let limit = phase.wallet_limit();
    let within_cap = mints
        .minted_in(phase)
        .checked_add(quantity)
        .map_or(false, |next| next <= limit);
    if !within_cap {
        return Err(ContractError::WalletCapExceeded { phase, limit });
    }

    let total = total_minted(storage)?;
    check_supply(total, quantity)?;

    let mut next = mints;
    match phase {
        Phase::Og => next.og_minted += quantity,
        Phase::Fcfs => next.fcfs_minted += quantity,
        Phase::Public => next.public_minted += quantity,
        Phase::NotStarted => return Err(ContractError::MintClosed {}),
    }
    next.total_minted += quantity;

    Ok(Reservation {
        quota: Quota::Wallet {
            wallet: wallet.clone(),
            mints: next,
        },
        total,
        quantity,
    })
}

/// Checks an administrative mint. Counted against the shared supply but not
/// against any wallet quota.
pub fn plan_admin_mint(storage: &dyn Storage, quantity: u32) -> Result<Reservation, ContractError> {
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }

    let minted = admin_minted(storage)?;
    match minted.checked_add(quantity) {
        Some(next) if next <= ADMIN_MINT_MAX => {}
        _ => return Err(ContractError::AdminCapExceeded {}),
    }

    let total = total_minted(storage)?;
    check_supply(total, quantity)?;

    Ok(Reservation {
        quota: Quota::Admin {
            minted: minted + quantity,
        },
        total,
        quantity,
    })
}

/// Writes a reservation. Must run in the same execution that planned it.
pub fn commit(storage: &mut dyn Storage, reservation: &Reservation) -> StdResult<IdRange> {
    let ids = reservation.ids();

    match &reservation.quota {
        Quota::Wallet { wallet, mints } => WALLET_MINTS.save(storage, wallet, mints)?,
        Quota::Admin { minted } => ADMIN_MINTED.save(storage, minted)?,
    }
    TOTAL_MINTED.save(storage, &ids.last)?;

    Ok(ids)
}
