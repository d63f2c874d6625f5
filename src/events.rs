//! Event emission helpers for the credential registry.

use soroban_sdk::{Address, Env, String, Symbol};

/// Emit an event when the registry is initialized.
pub fn emit_registry_initialized(env: &Env, owner: &Address, max_supply: u64) {
    let topics = (Symbol::new(env, "registry_initialized"),);
    env.events().publish(topics, (owner.clone(), max_supply));
}

/// Emit an event when governance passes to a new owner.
pub fn emit_ownership_transferred(env: &Env, from: &Address, to: &Address) {
    let topics = (Symbol::new(env, "ownership_transferred"),);
    env.events().publish(topics, (from.clone(), to.clone()));
}

/// Emit an event when token metadata is frozen.
pub fn emit_metadata_frozen(env: &Env, owner: &Address) {
    let topics = (Symbol::new(env, "metadata_frozen"),);
    env.events().publish(topics, owner.clone());
}

/// Emit an event when governance approves a verifier.
pub fn emit_verifier_approved(env: &Env, verifier: &Address) {
    let topics = (Symbol::new(env, "verifier_approved"),);
    env.events().publish(topics, verifier.clone());
}

/// Emit an event when governance revokes a verifier.
pub fn emit_verifier_revoked(env: &Env, verifier: &Address) {
    let topics = (Symbol::new(env, "verifier_revoked"),);
    env.events().publish(topics, verifier.clone());
}

/// Emit an event when an issuer registers itself.
pub fn emit_issuer_registered(env: &Env, issuer: &Address, display_name: &String) {
    let topics = (Symbol::new(env, "issuer_registered"),);
    env.events()
        .publish(topics, (issuer.clone(), display_name.clone()));
}

/// Emit an event when governance verifies an issuer.
pub fn emit_issuer_verified(env: &Env, issuer: &Address) {
    let topics = (Symbol::new(env, "issuer_verified"),);
    env.events().publish(topics, issuer.clone());
}

/// Emit an event when a credential is minted.
pub fn emit_credential_minted(env: &Env, token_id: u64, issuer: &Address, recipient: &Address) {
    let topics = (Symbol::new(env, "credential_minted"),);
    env.events()
        .publish(topics, (token_id, issuer.clone(), recipient.clone()));
}

/// Emit an event when a credential changes holder.
pub fn emit_credential_transferred(env: &Env, token_id: u64, from: &Address, to: &Address) {
    let topics = (Symbol::new(env, "credential_transferred"),);
    env.events()
        .publish(topics, (token_id, from.clone(), to.clone()));
}

/// Emit an event when a credential is burned by its holder or the registry owner.
pub fn emit_credential_burned(env: &Env, token_id: u64, by: &Address) {
    let topics = (Symbol::new(env, "credential_burned"),);
    env.events().publish(topics, (token_id, by.clone()));
}

/// Emit an event when an issuer replaces a credential's content hash and proof.
pub fn emit_metadata_updated(env: &Env, token_id: u64, content_hash: &String) {
    let topics = (Symbol::new(env, "metadata_updated"),);
    env.events()
        .publish(topics, (token_id, content_hash.clone()));
}
