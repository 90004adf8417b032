use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, HexBinary, Timestamp, Uint128};
use cw721::{
    AllNftInfoResponse, ApprovalResponse, ApprovalsResponse, ContractInfoResponse, Expiration,
    NftInfoResponse, NumTokensResponse, OperatorsResponse, OwnerOfResponse, TokensResponse,
};
use cw721_base::Extension;
use sg_phased_mint::{
    ConfigResponse, MerkleRootsResponse, Phase, PhaseResponse, ProgressResponse,
    RoyaltyInfoResponse, WalletMints,
};

#[cw_serde]
pub struct RoyaltyInfoMsg {
    pub payment_address: String,
    pub share_bps: u64,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Defaults to the instantiator
    pub admin: Option<String>,
    pub treasury: String,
    pub fcfs_price: Uint128,
    pub public_price: Uint128,
    pub start_time: Option<Timestamp>,
    pub og_root: Option<HexBinary>,
    pub fcfs_root: Option<HexBinary>,
    pub base_uri: Option<String>,
    /// Defaults to `.json`
    pub uri_suffix: Option<String>,
    pub royalty: Option<RoyaltyInfoMsg>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint `quantity` units in the active phase. Payment is attached in the
    /// native denom and must equal the phase price times quantity.
    Mint {
        quantity: u32,
        proof: Vec<HexBinary>,
    },

    /// Change or renounce the admin
    UpdateAdmin { admin: Option<String> },
    ToggleMintActive {},
    SetStartTime { start_time: Option<Timestamp> },
    SetTreasury { treasury: String },
    SetFcfsPrice { price: Uint128 },
    SetPublicPrice { price: Uint128 },
    /// Replaces both allowlist roots at once
    SetMerkleRoots {
        og_root: Option<HexBinary>,
        fcfs_root: Option<HexBinary>,
    },
    SetBaseUri {
        base_uri: Option<String>,
        uri_suffix: String,
    },
    SetRoyalty {
        payment_address: String,
        share_bps: u64,
    },
    ClearRoyalty {},
    Pause {},
    Unpause {},
    /// Free issuance capped separately from the phase quotas
    AdminMint { recipient: String, quantity: u32 },
    /// Return a stray bank balance held by the contract. The full balance of
    /// `denom` is sent when `amount` is not set.
    RescueFunds {
        denom: String,
        recipient: String,
        amount: Option<Uint128>,
    },
    /// Sweep the native balance to the treasury
    Withdraw {},

    /// Transfer is a base message to move a token to another account without triggering actions
    TransferNft { recipient: String, token_id: String },
    /// Send is a base message to transfer a token to a contract and trigger an action
    /// on the receiving contract.
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },
    /// Allows operator to transfer / send the token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted Approval
    Revoke { spender: String, token_id: String },
    /// Allows operator to transfer / send any token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted ApproveAll permission
    RevokeAll { operator: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(cw_controllers::AdminResponse)]
    Admin {},
    #[returns(ConfigResponse)]
    Config {},
    #[returns(PhaseResponse)]
    Phase {},
    #[returns(u32)]
    RemainingSupply {},
    /// Units `address` can still mint in the current phase
    #[returns(u32)]
    RemainingQuota { address: String },
    #[returns(WalletMints)]
    MintedCounts { address: String },
    #[returns(ProgressResponse)]
    Progress {},
    #[returns(MerkleRootsResponse)]
    MerkleRoots {},
    #[returns(u32)]
    AdminMinted {},
    #[returns(bool)]
    IsAllowlisted {
        phase: Phase,
        address: String,
        proof: Vec<HexBinary>,
    },
    #[returns(bool)]
    Exists { token_id: String },
    #[returns(String)]
    TokenUri { token_id: String },
    #[returns(Option<RoyaltyInfoResponse>)]
    RoyaltyInfo {
        token_id: String,
        sale_price: Uint128,
    },

    #[returns(OwnerOfResponse)]
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(ApprovalResponse)]
    Approval {
        token_id: String,
        spender: String,
        include_expired: Option<bool>,
    },
    #[returns(ApprovalsResponse)]
    Approvals {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(OperatorsResponse)]
    AllOperators {
        owner: String,
        include_expired: Option<bool>,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(NumTokensResponse)]
    NumTokens {},
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    #[returns(NftInfoResponse<Extension>)]
    NftInfo { token_id: String },
    #[returns(AllNftInfoResponse<Extension>)]
    AllNftInfo {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}
