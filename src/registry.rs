//! Issuer registry and registry-wide configuration types.

use soroban_sdk::{contracttype, Address, String};

/// Default cap on issued token ids.
pub const DEFAULT_MAX_SUPPLY: u64 = 1_000_000;

/// Self-registered credential issuer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssuerRecord {
    /// Public name of the issuing institution (1-100 bytes).
    pub display_name: String,

    /// Set by governance. Never reverts to false.
    pub verified: bool,
}

impl IssuerRecord {
    pub fn new(display_name: String) -> Self {
        Self {
            display_name,
            verified: false,
        }
    }
}

/// Registry-wide settings and the token id counter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Governance principal.
    pub owner: Address,

    /// Exclusive upper bound for `next_token_id`.
    pub max_supply: u64,

    /// Once set, token metadata can no longer be edited.
    pub metadata_frozen: bool,

    /// Id handed to the next mint. Starts at 1 and never decreases.
    pub next_token_id: u64,
}

impl RegistryConfig {
    pub fn new(owner: Address, max_supply: u64) -> Self {
        Self {
            owner,
            max_supply,
            metadata_frozen: false,
            next_token_id: 1,
        }
    }

    /// Check whether another token can be minted.
    pub fn has_supply(&self) -> bool {
        self.next_token_id < self.max_supply
    }
}
