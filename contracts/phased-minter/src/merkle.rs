use cosmwasm_std::HexBinary;
use sha2::{Digest, Sha256};

use crate::ContractError;

pub const HASH_LENGTH: usize = 32;

pub type Hash = [u8; HASH_LENGTH];

/// Leaf of an allowlist tree, derived from the address alone
pub fn leaf_hash(address: &str) -> Hash {
    Sha256::digest(address.as_bytes()).into()
}

/// Pairs are sorted before hashing so proofs carry no left/right flags
pub fn hash_pair(a: &[u8], b: &[u8]) -> Hash {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(first);
    hasher.update(second);
    hasher.finalize().into()
}

/// Verifies that `address` is included in the set committed to by `root`.
///
/// An unset root allowlists nobody. A sibling of the wrong length fails the proof.
pub fn verify(root: Option<&HexBinary>, address: &str, proof: &[HexBinary]) -> bool {
    let root = match root {
        Some(root) => root,
        None => return false,
    };

    let mut computed = leaf_hash(address);
    for sibling in proof {
        if sibling.len() != HASH_LENGTH {
            return false;
        }
        computed = hash_pair(&computed, sibling.as_slice());
    }

    root.as_slice() == computed.as_slice()
}

pub fn validate_root(root: Option<&HexBinary>) -> Result<(), ContractError> {
    match root {
        Some(root) if root.len() != HASH_LENGTH => {
            Err(ContractError::InvalidMerkleRoot(root.len()))
        }
        _ => Ok(()),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::AllowlistTree;
    use super::*;

    const MEMBERS: [&str; 5] = ["addr0001", "addr0002", "addr0003", "addr0004", "addr0005"];

    #[test]
    fn members_verify() {
        let tree = AllowlistTree::new(&MEMBERS);
        let root = tree.root();

        for member in MEMBERS {
            assert!(verify(Some(&root), member, &tree.proof(member)));
        }
    }

    #[test]
    fn outsider_and_borrowed_proof_fail() {
        let tree = AllowlistTree::new(&MEMBERS);
        let root = tree.root();

        assert!(!verify(Some(&root), "outsider", &tree.proof("addr0001")));
        assert!(!verify(Some(&root), "addr0002", &tree.proof("addr0001")));
        assert!(!verify(Some(&root), "addr0001", &[]));
    }

    #[test]
    fn unset_root_rejects_everything() {
        let tree = AllowlistTree::new(&MEMBERS);

        for member in MEMBERS {
            assert!(!verify(None, member, &tree.proof(member)));
            assert!(!verify(None, member, &[]));
        }
    }

    #[test]
    fn single_member_tree_needs_no_proof() {
        let tree = AllowlistTree::new(&["addr0001"]);
        assert!(verify(Some(&tree.root()), "addr0001", &[]));
        assert!(!verify(Some(&tree.root()), "addr0002", &[]));
    }

    #[test]
    fn malformed_sibling_fails() {
        let tree = AllowlistTree::new(&MEMBERS);
        let mut proof = tree.proof("addr0001");
        proof[0] = HexBinary::from(vec![0u8; 31]);
        assert!(!verify(Some(&tree.root()), "addr0001", &proof));
    }

    #[test]
    fn pair_hash_is_order_independent() {
        let a = leaf_hash("a");
        let b = leaf_hash("b");
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn root_length_is_validated() {
        assert!(validate_root(None).is_ok());
        assert!(validate_root(Some(&HexBinary::from(vec![1u8; 32]))).is_ok());
        assert_eq!(
            validate_root(Some(&HexBinary::from(vec![1u8; 20])))
                .unwrap_err()
                .to_string(),
            ContractError::InvalidMerkleRoot(20).to_string()
        );
    }
}
