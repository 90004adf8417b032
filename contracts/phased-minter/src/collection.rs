use cosmwasm_std::{from_binary, Addr, Deps, Empty, Env, StdError, StdResult, Storage};
use cw721::{AllNftInfoResponse, NftInfoResponse};
use cw721_base::state::TokenInfo;
use cw721_base::{Extension, QueryMsg as Cw721QueryMsg};
use sg_std::StargazeMsgWrapper;

use crate::state::Config;
use crate::ContractError;

/// The cw721 collection embedded in the minter. Units are stored under
/// their decimal id.
pub type PhasedCollection<'a> =
    cw721_base::Cw721Contract<'a, Extension, StargazeMsgWrapper, Empty, Empty>;

pub fn token_id(id: u32) -> String {
    id.to_string()
}

/// Creates unit `id` for `owner`. Fails if the id already exists.
pub fn create(storage: &mut dyn Storage, owner: &Addr, id: u32) -> Result<(), ContractError> {
    let collection = PhasedCollection::default();
    let token = TokenInfo {
        owner: owner.clone(),
        approvals: vec![],
        token_uri: None,
        extension: None,
    };

    collection
        .tokens
        .update(storage, &token_id(id), |old| match old {
            Some(_) => Err(ContractError::Base(cw721_base::ContractError::Claimed {})),
            None => Ok(token),
        })?;
    collection.increment_tokens(storage)?;

    Ok(())
}

pub fn exists(storage: &dyn Storage, token_id: &str) -> StdResult<bool> {
    Ok(PhasedCollection::default()
        .tokens
        .may_load(storage, token_id)?
        .is_some())
}

/// `base + id + suffix`, or an empty string when no base is configured
pub fn compose_uri(base: Option<&str>, token_id: &str, suffix: &str) -> String {
    match base {
        Some(base) if !base.is_empty() => format!("{}{}{}", base, token_id, suffix),
        _ => String::new(),
    }
}

pub fn token_uri(deps: Deps, config: &Config, token_id: &str) -> StdResult<String> {
    if !exists(deps.storage, token_id)? {
        return Err(StdError::not_found(format!("token {}", token_id)));
    }
    Ok(compose_uri(
        config.base_uri.as_deref(),
        token_id,
        &config.uri_suffix,
    ))
}

pub fn nft_info(
    deps: Deps,
    env: Env,
    config: &Config,
    token_id: String,
) -> StdResult<NftInfoResponse<Extension>> {
    let uri = token_uri(deps, config, &token_id)?;
    let res = PhasedCollection::default().query(deps, env, Cw721QueryMsg::NftInfo { token_id })?;
    let mut info: NftInfoResponse<Extension> = from_binary(&res)?;
    info.token_uri = Some(uri).filter(|u| !u.is_empty());
    Ok(info)
}

pub fn all_nft_info(
    deps: Deps,
    env: Env,
    config: &Config,
    token_id: String,
    include_expired: Option<bool>,
) -> StdResult<AllNftInfoResponse<Extension>> {
    let uri = token_uri(deps, config, &token_id)?;
    let res = PhasedCollection::default().query(
        deps,
        env,
        Cw721QueryMsg::AllNftInfo {
            token_id,
            include_expired,
        },
    )?;
    let mut info: AllNftInfoResponse<Extension> = from_binary(&res)?;
    info.info.token_uri = Some(uri).filter(|u| !u.is_empty());
    Ok(info)
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;

    use super::*;

    #[test]
    fn uri_composition() {
        assert_eq!(
            compose_uri(Some("ipfs://bafy/"), "42", ".json"),
            "ipfs://bafy/42.json"
        );
        assert_eq!(compose_uri(Some("https://x.io/"), "7", ""), "https://x.io/7");
        assert_eq!(compose_uri(None, "42", ".json"), "");
        assert_eq!(compose_uri(Some(""), "42", ".json"), "");
    }

    #[test]
    fn create_rejects_existing_id() {
        let mut storage = MockStorage::new();
        let owner = Addr::unchecked("owner");

        create(&mut storage, &owner, 1).unwrap();
        assert!(exists(&storage, "1").unwrap());
        assert!(!exists(&storage, "2").unwrap());

        let err = create(&mut storage, &owner, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            cw721_base::ContractError::Claimed {}.to_string()
        );
        assert_eq!(
            PhasedCollection::default().token_count(&storage).unwrap(),
            1
        );
    }
}
