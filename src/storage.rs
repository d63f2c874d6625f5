//! Storage key definitions and accessors for the credential registry.

use soroban_sdk::{contracttype, Address, Env};

use crate::credential::TokenMetadata;
use crate::registry::{IssuerRecord, RegistryConfig};

/// Storage keys for the credential registry.
///
/// `Config` lives in instance storage; every other key is a persistent
/// ledger entry.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Registry owner, supply cap, freeze flag and id counter.
    Config,

    /// Maps token id to its current holder.
    TokenOwner(u64),

    /// Maps token id to its credential metadata.
    /// Created and removed together with `TokenOwner`.
    TokenMetadata(u64),

    /// Maps a self-registered issuer to its record.
    Issuer(Address),

    /// Presence marks the address as an approved verifier.
    Verifier(Address),
}

/// Time-to-live for registry records in ledger entries.
pub const RECORD_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const RECORD_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Time-to-live for the contract instance, which holds the config.
pub const INSTANCE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const INSTANCE_TTL_EXTEND: u32 = 2592000; // ~150 days

pub fn get_config(env: &Env) -> Option<RegistryConfig> {
    env.storage().instance().get(&RegistryKey::Config)
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&RegistryKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&RegistryKey::Config)
}

pub fn get_token_owner(env: &Env, token_id: u64) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&RegistryKey::TokenOwner(token_id))
}

pub fn get_token_metadata(env: &Env, token_id: u64) -> Option<TokenMetadata> {
    env.storage()
        .persistent()
        .get(&RegistryKey::TokenMetadata(token_id))
}

pub fn has_token_owner(env: &Env, token_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&RegistryKey::TokenOwner(token_id))
}

/// Callers must follow up with `extend_token_ttl` once both halves exist.
pub fn set_token_owner(env: &Env, token_id: u64, owner: &Address) {
    env.storage()
        .persistent()
        .set(&RegistryKey::TokenOwner(token_id), owner);
}

/// Callers must follow up with `extend_token_ttl` once both halves exist.
pub fn set_token_metadata(env: &Env, token_id: u64, metadata: &TokenMetadata) {
    env.storage()
        .persistent()
        .set(&RegistryKey::TokenMetadata(token_id), metadata);
}

/// Extend owner and metadata entries together so they expire in step.
pub fn extend_token_ttl(env: &Env, token_id: u64) {
    extend_record_ttl(env, &RegistryKey::TokenOwner(token_id));
    extend_record_ttl(env, &RegistryKey::TokenMetadata(token_id));
}

/// Remove both halves of a token. Ids are never reused afterwards.
pub fn remove_token(env: &Env, token_id: u64) {
    env.storage()
        .persistent()
        .remove(&RegistryKey::TokenOwner(token_id));
    env.storage()
        .persistent()
        .remove(&RegistryKey::TokenMetadata(token_id));
}

pub fn get_issuer(env: &Env, issuer: &Address) -> Option<IssuerRecord> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Issuer(issuer.clone()))
}

pub fn set_issuer(env: &Env, issuer: &Address, record: &IssuerRecord) {
    let key = RegistryKey::Issuer(issuer.clone());
    env.storage().persistent().set(&key, record);
    extend_record_ttl(env, &key);
}

pub fn is_verifier(env: &Env, verifier: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&RegistryKey::Verifier(verifier.clone()))
}

pub fn set_verifier(env: &Env, verifier: &Address, approved: bool) {
    let key = RegistryKey::Verifier(verifier.clone());
    if approved {
        env.storage().persistent().set(&key, &true);
        extend_record_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

fn extend_record_ttl(env: &Env, key: &RegistryKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}
