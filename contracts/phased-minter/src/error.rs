use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use sg_phased_mint::Phase;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Base(#[from] cw721_base::ContractError),

    #[error("MintClosed")]
    MintClosed {},

    #[error("InvalidQuantity")]
    InvalidQuantity {},

    #[error("SupplyExceeded")]
    SupplyExceeded {},

    #[error("AdminCapExceeded")]
    AdminCapExceeded {},

    #[error("WalletCapExceeded: {phase} limit is {limit}")]
    WalletCapExceeded { phase: Phase, limit: u32 },

    #[error("NotAllowlisted")]
    NotAllowlisted {},

    #[error("ZeroAddress")]
    ZeroAddress {},

    #[error("Incorrect payment, got: {got}, expected {expected}")]
    IncorrectPayment { got: Uint128, expected: Uint128 },

    #[error("Reentrancy")]
    Reentrancy {},

    #[error("InvalidMerkleRoot: expected 32 bytes, got {0}")]
    InvalidMerkleRoot(usize),

    #[error("Invalid royalty bps: {0}")]
    InvalidRoyaltyBps(u64),

    #[error("NothingToWithdraw")]
    NothingToWithdraw {},

    #[error("InsufficientFunds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Invalid reply ID")]
    InvalidReplyID {},
}
