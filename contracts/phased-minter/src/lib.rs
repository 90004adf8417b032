pub mod admin;
pub mod collection;
pub mod contract;
mod error;
pub mod helpers;
pub mod ledger;
pub mod merkle;
pub mod msg;
pub mod phase;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
