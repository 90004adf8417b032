use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_binary, Addr, HexBinary, QuerierWrapper, QueryRequest, StdResult, Uint128, WasmMsg,
    WasmQuery,
};
use sg_phased_mint::{PhaseResponse, ProgressResponse, WalletMints};
use sg_std::{CosmosMsg, NATIVE_DENOM};

use crate::msg::{ExecuteMsg, QueryMsg};

/// PhasedMinterContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct PhasedMinterContract(pub Addr);

impl PhasedMinterContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    /// Mint message carrying `payment` in the native denom
    pub fn mint(
        &self,
        quantity: u32,
        proof: Vec<HexBinary>,
        payment: Uint128,
    ) -> StdResult<CosmosMsg> {
        let funds = if payment.is_zero() {
            vec![]
        } else {
            coins(payment.u128(), NATIVE_DENOM)
        };
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_binary(&ExecuteMsg::Mint { quantity, proof })?,
            funds,
        }
        .into())
    }

    fn query<T: serde::de::DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        msg: &QueryMsg,
    ) -> StdResult<T> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(msg)?,
        }))
    }

    pub fn phase(&self, querier: &QuerierWrapper) -> StdResult<PhaseResponse> {
        self.query(querier, &QueryMsg::Phase {})
    }

    pub fn progress(&self, querier: &QuerierWrapper) -> StdResult<ProgressResponse> {
        self.query(querier, &QueryMsg::Progress {})
    }

    pub fn minted_counts(&self, querier: &QuerierWrapper, address: &str) -> StdResult<WalletMints> {
        self.query(
            querier,
            &QueryMsg::MintedCounts {
                address: address.to_string(),
            },
        )
    }
}
