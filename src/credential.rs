//! Credential token metadata.

use soroban_sdk::{contracttype, Address, BytesN, String};

use crate::validation::validate_expiry;

/// Metadata attached to a minted skill credential.
///
/// Only `content_hash` and `proof` may change after mint, and only until
/// the registry metadata is frozen.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    /// Name of the attested skill (1-64 bytes).
    pub skill_name: String,

    /// Proficiency level, 1 through 5.
    pub skill_level: u32,

    /// Issuer that minted the credential.
    pub issuer: Address,

    /// Ledger sequence at mint.
    pub issue_timestamp: u64,

    /// Optional ledger sequence after which the credential lapses.
    pub expiry_timestamp: Option<u64>,

    /// Soulbound credentials can never change holder.
    pub soulbound: bool,

    /// Off-chain content locator, e.g. an IPFS URI (at most 128 bytes).
    pub content_hash: String,

    /// Opaque verification proof. Not interpreted on-chain.
    pub proof: BytesN<32>,
}

impl TokenMetadata {
    /// Check whether the credential is still in force at `height`.
    pub fn is_valid_at(&self, height: u64) -> bool {
        validate_expiry(self.expiry_timestamp, height)
    }
}
