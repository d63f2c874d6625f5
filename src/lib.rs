//! # Soroban Micro-Credential Registry
//!
//! Skill attestation tokens ("micro-credentials") for the Soroban blockchain.
//!
//! Self-registered issuers, once verified by governance and approved as
//! verifiers, mint credentials to learners. Features include:
//!
//! - Monotonic, never-reused token ids under a supply cap
//! - Soulbound (non-transferable) or transferable credentials
//! - Optional expiry and an opaque 32-byte verification proof
//! - Issuer-only metadata edits until a global, irreversible freeze
//! - Burn by holder or registry owner
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Issuer onboarding
//! client.register_issuer(&display_name, &issuer);
//! client.approve_verifier(&issuer, &owner);
//! client.verify_issuer(&issuer, &owner);
//!
//! // Mint and query
//! let token_id = client.mint_credential(
//!     &learner, &skill_name, &3, &None, &false, &content_hash, &proof, &issuer,
//! );
//! let holder = client.get_owner(&token_id);
//! ```

#![no_std]

mod credential;
mod events;
mod registry;
mod storage;
mod validation;

pub use credential::TokenMetadata;
pub use registry::{IssuerRecord, RegistryConfig, DEFAULT_MAX_SUPPLY};
pub use storage::{
    RegistryKey, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, RECORD_TTL_EXTEND,
    RECORD_TTL_THRESHOLD,
};
pub use validation::{
    MAX_CONTENT_HASH_LENGTH, MAX_DISPLAY_NAME_LENGTH, MAX_SKILL_LEVEL, MAX_SKILL_NAME_LENGTH,
    MIN_SKILL_LEVEL, PROOF_LENGTH,
};

use soroban_sdk::{
    contract, contracterror, contractimpl, log, Address, Bytes, BytesN, Env, String,
};

use crate::events::*;

/// Error codes for the credential registry.
///
/// Codes 100-109 are stable; callers match on the numeric value.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CredentialError {
    /// Caller failed an identity or ownership check.
    Unauthorized = 100,
    /// Token id is already taken.
    AlreadyExists = 101,
    /// Token does not exist.
    NotFound = 102,
    /// A length, format or expiry check failed.
    InvalidInput = 103,
    /// Soulbound credentials cannot be transferred.
    Immutable = 104,
    /// Caller is not an approved verifier.
    NotApproved = 105,
    /// No token ids left under the supply cap.
    SupplyExhausted = 106,
    /// Issuer record is missing, not yet verified, or already registered.
    IssuerStatus = 107,
    /// Skill level outside 1-5.
    OutOfRange = 108,
    /// Token metadata has been frozen.
    Frozen = 109,
    /// Contract has already been initialized.
    AlreadyInitialized = 110,
    /// Contract has not been initialized.
    NotInitialized = 111,
}

#[contract]
pub struct CredentialRegistry;

#[contractimpl]
impl CredentialRegistry {
    // ========== Initialization ==========

    /// Initialize the registry with its governance owner and supply cap.
    ///
    /// Token ids start at 1 and must stay below `max_supply`, so at most
    /// `max_supply - 1` credentials are ever minted.
    pub fn init(env: Env, owner: Address, max_supply: u64) -> Result<(), CredentialError> {
        if storage::has_config(&env) {
            return Err(CredentialError::AlreadyInitialized);
        }

        owner.require_auth();

        if max_supply == 0 {
            return Err(CredentialError::InvalidInput);
        }

        storage::set_config(&env, &RegistryConfig::new(owner.clone(), max_supply));
        emit_registry_initialized(&env, &owner, max_supply);

        Ok(())
    }

    /// Get the registry configuration.
    pub fn config(env: Env) -> Option<RegistryConfig> {
        storage::get_config(&env)
    }

    // ========== Governance ==========

    /// Hand governance to `new_owner` (owner only).
    pub fn transfer_ownership(
        env: Env,
        new_owner: Address,
        caller: Address,
    ) -> Result<(), CredentialError> {
        let mut config = Self::require_owner(&env, &caller)?;

        config.owner = new_owner.clone();
        storage::set_config(&env, &config);

        emit_ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    /// Permanently disable metadata edits (owner only).
    ///
    /// There is no way to unfreeze. Minting is unaffected.
    pub fn freeze_metadata(env: Env, caller: Address) -> Result<(), CredentialError> {
        let mut config = Self::require_owner(&env, &caller)?;

        config.metadata_frozen = true;
        storage::set_config(&env, &config);

        emit_metadata_frozen(&env, &caller);
        Ok(())
    }

    /// Add an address to the verifier set (owner only).
    pub fn approve_verifier(
        env: Env,
        verifier: Address,
        caller: Address,
    ) -> Result<(), CredentialError> {
        Self::require_owner(&env, &caller)?;

        storage::set_verifier(&env, &verifier, true);

        emit_verifier_approved(&env, &verifier);
        Ok(())
    }

    /// Remove an address from the verifier set (owner only).
    ///
    /// Credentials already minted by the verifier are left untouched.
    pub fn revoke_verifier(
        env: Env,
        verifier: Address,
        caller: Address,
    ) -> Result<(), CredentialError> {
        Self::require_owner(&env, &caller)?;

        storage::set_verifier(&env, &verifier, false);

        emit_verifier_revoked(&env, &verifier);
        Ok(())
    }

    /// Mark a registered issuer as verified (owner only).
    pub fn verify_issuer(env: Env, issuer: Address, caller: Address) -> Result<(), CredentialError> {
        Self::require_owner(&env, &caller)?;

        let mut record =
            storage::get_issuer(&env, &issuer).ok_or(CredentialError::IssuerStatus)?;

        record.verified = true;
        storage::set_issuer(&env, &issuer, &record);

        emit_issuer_verified(&env, &issuer);
        Ok(())
    }

    /// Replace the contract WASM (owner only).
    pub fn upgrade(
        env: Env,
        new_wasm_hash: BytesN<32>,
        caller: Address,
    ) -> Result<(), CredentialError> {
        Self::require_owner(&env, &caller)?;

        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ========== Issuers ==========

    /// Register the caller as a credential issuer.
    ///
    /// # Arguments
    /// * `display_name` - Public issuer name, 1-100 bytes
    /// * `caller` - Address becoming the issuer
    ///
    /// # Errors
    /// - `InvalidInput` if the name is empty or too long
    /// - `IssuerStatus` if the caller is already registered
    pub fn register_issuer(
        env: Env,
        display_name: String,
        caller: Address,
    ) -> Result<(), CredentialError> {
        caller.require_auth();

        Self::load_config(&env)?;

        if !validation::validate_display_name(&display_name) {
            return Err(CredentialError::InvalidInput);
        }

        if storage::get_issuer(&env, &caller).is_some() {
            return Err(CredentialError::IssuerStatus);
        }

        storage::set_issuer(&env, &caller, &IssuerRecord::new(display_name.clone()));

        emit_issuer_registered(&env, &caller, &display_name);
        Ok(())
    }

    /// Get an issuer record.
    pub fn get_issuer(env: Env, issuer: Address) -> Option<IssuerRecord> {
        storage::get_issuer(&env, &issuer)
    }

    /// Check whether an address is in the verifier set.
    pub fn is_approved_verifier(env: Env, verifier: Address) -> bool {
        storage::is_verifier(&env, &verifier)
    }

    // ========== Credentials ==========

    /// Mint a new credential to `recipient`.
    ///
    /// # Arguments
    /// * `recipient` - Initial holder
    /// * `skill_name` - Attested skill, 1-64 bytes
    /// * `skill_level` - Proficiency, 1-5
    /// * `expiry` - Optional ledger sequence, not earlier than the current one
    /// * `soulbound` - Forbid all later transfers
    /// * `content_hash` - Off-chain locator, at most 128 bytes
    /// * `proof` - Verification proof, exactly 32 bytes
    /// * `caller` - Verified issuer that is also an approved verifier
    ///
    /// # Returns
    /// The new token id.
    ///
    /// # Errors
    /// Checked in this order, first failure wins:
    /// - `IssuerStatus` if the caller has no issuer record
    /// - `IssuerStatus` if the record is not verified
    /// - `NotApproved` if the caller is not an approved verifier
    /// - `SupplyExhausted` if the supply cap is reached
    /// - `AlreadyExists` if the next id is somehow taken
    /// - `InvalidInput` for a bad skill name
    /// - `OutOfRange` for a bad skill level
    /// - `InvalidInput` for a bad content hash, proof or expiry
    #[allow(clippy::too_many_arguments)]
    pub fn mint_credential(
        env: Env,
        recipient: Address,
        skill_name: String,
        skill_level: u32,
        expiry: Option<u64>,
        soulbound: bool,
        content_hash: String,
        proof: Bytes,
        caller: Address,
    ) -> Result<u64, CredentialError> {
        caller.require_auth();

        let mut config = Self::load_config(&env)?;

        // Check caller is a verified issuer
        let issuer = storage::get_issuer(&env, &caller).ok_or(CredentialError::IssuerStatus)?;
        if !issuer.verified {
            return Err(CredentialError::IssuerStatus);
        }

        // Check caller may mint
        if !storage::is_verifier(&env, &caller) {
            return Err(CredentialError::NotApproved);
        }

        if !config.has_supply() {
            return Err(CredentialError::SupplyExhausted);
        }

        // Check the next id is free
        let token_id = config.next_token_id;
        if storage::has_token_owner(&env, token_id) {
            return Err(CredentialError::AlreadyExists);
        }

        // Validate credential fields
        if !validation::validate_skill_name(&skill_name) {
            return Err(CredentialError::InvalidInput);
        }

        if !validation::validate_skill_level(skill_level) {
            return Err(CredentialError::OutOfRange);
        }

        if !validation::validate_content_hash(&content_hash) {
            return Err(CredentialError::InvalidInput);
        }

        let proof = validation::parse_proof(&proof).ok_or(CredentialError::InvalidInput)?;

        let height = Self::current_height(&env);
        if !validation::validate_expiry(expiry, height) {
            return Err(CredentialError::InvalidInput);
        }

        let metadata = TokenMetadata {
            skill_name,
            skill_level,
            issuer: caller.clone(),
            issue_timestamp: height,
            expiry_timestamp: expiry,
            soulbound,
            content_hash,
            proof,
        };

        // Store metadata and holder together
        storage::set_token_metadata(&env, token_id, &metadata);
        storage::set_token_owner(&env, token_id, &recipient);
        storage::extend_token_ttl(&env, token_id);

        config.next_token_id = token_id + 1;
        storage::set_config(&env, &config);

        log!(&env, "credential minted", token_id, recipient);
        emit_credential_minted(&env, token_id, &caller, &recipient);

        Ok(token_id)
    }

    /// Move a credential from `sender` to `recipient`.
    ///
    /// Only the current holder, acting as itself, may transfer. Soulbound
    /// credentials never move.
    pub fn transfer(
        env: Env,
        token_id: u64,
        sender: Address,
        recipient: Address,
        caller: Address,
    ) -> Result<(), CredentialError> {
        caller.require_auth();

        // Get existing token
        let (owner, metadata) = match (
            storage::get_token_owner(&env, token_id),
            storage::get_token_metadata(&env, token_id),
        ) {
            (Some(owner), Some(metadata)) => (owner, metadata),
            _ => return Err(CredentialError::NotFound),
        };

        // Only the holder, acting as itself
        if owner != sender || caller != sender {
            return Err(CredentialError::Unauthorized);
        }

        if metadata.soulbound {
            return Err(CredentialError::Immutable);
        }

        storage::set_token_owner(&env, token_id, &recipient);
        storage::extend_token_ttl(&env, token_id);

        log!(&env, "credential transferred", token_id, recipient);
        emit_credential_transferred(&env, token_id, &sender, &recipient);

        Ok(())
    }

    /// Destroy a credential (holder or registry owner).
    ///
    /// The id is never handed out again.
    pub fn burn(env: Env, token_id: u64, caller: Address) -> Result<(), CredentialError> {
        caller.require_auth();

        let owner =
            storage::get_token_owner(&env, token_id).ok_or(CredentialError::NotFound)?;
        let config = Self::load_config(&env)?;

        if caller != owner && caller != config.owner {
            return Err(CredentialError::Unauthorized);
        }

        storage::remove_token(&env, token_id);

        log!(&env, "credential burned", token_id);
        emit_credential_burned(&env, token_id, &caller);

        Ok(())
    }

    /// Replace the content hash and proof of a credential (original issuer only).
    ///
    /// All other metadata fields are fixed at mint.
    pub fn update_metadata(
        env: Env,
        token_id: u64,
        new_content_hash: String,
        new_proof: Bytes,
        caller: Address,
    ) -> Result<(), CredentialError> {
        caller.require_auth();

        // Check metadata is not frozen
        let config = Self::load_config(&env)?;
        if config.metadata_frozen {
            return Err(CredentialError::Frozen);
        }

        // Get existing token
        let mut metadata = match (
            storage::get_token_metadata(&env, token_id),
            storage::has_token_owner(&env, token_id),
        ) {
            (Some(metadata), true) => metadata,
            _ => return Err(CredentialError::NotFound),
        };

        // Check caller is the original issuer, not the holder
        if caller != metadata.issuer {
            return Err(CredentialError::Unauthorized);
        }

        if !validation::validate_content_hash(&new_content_hash) {
            return Err(CredentialError::InvalidInput);
        }
        let new_proof = validation::parse_proof(&new_proof).ok_or(CredentialError::InvalidInput)?;

        metadata.content_hash = new_content_hash.clone();
        metadata.proof = new_proof;
        storage::set_token_metadata(&env, token_id, &metadata);
        storage::extend_token_ttl(&env, token_id);

        emit_metadata_updated(&env, token_id, &new_content_hash);
        Ok(())
    }

    // ========== Credential Queries ==========

    /// Get credential metadata.
    pub fn get_metadata(env: Env, token_id: u64) -> Option<TokenMetadata> {
        storage::get_token_metadata(&env, token_id)
    }

    /// Get the current holder of a credential.
    pub fn get_owner(env: Env, token_id: u64) -> Option<Address> {
        storage::get_token_owner(&env, token_id)
    }

    /// Get the id the next mint will receive.
    pub fn get_next_token_id(env: Env) -> u64 {
        storage::get_config(&env)
            .map(|config| config.next_token_id)
            .unwrap_or(1)
    }

    /// Get the most recently issued id, or 0 if nothing was minted.
    pub fn get_last_token_id(env: Env) -> u64 {
        Self::get_next_token_id(env).saturating_sub(1)
    }

    /// Get the off-chain content locator of a credential.
    pub fn get_token_uri(env: Env, token_id: u64) -> Option<String> {
        storage::get_token_metadata(&env, token_id).map(|metadata| metadata.content_hash)
    }

    /// Check that a credential exists and has not expired at the current ledger.
    pub fn is_credential_valid(env: Env, token_id: u64) -> bool {
        if !storage::has_token_owner(&env, token_id) {
            return false;
        }

        storage::get_token_metadata(&env, token_id)
            .map(|metadata| metadata.is_valid_at(Self::current_height(&env)))
            .unwrap_or(false)
    }
}

// ========== Internal Helpers ==========

impl CredentialRegistry {
    fn load_config(env: &Env) -> Result<RegistryConfig, CredentialError> {
        storage::get_config(env).ok_or(CredentialError::NotInitialized)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<RegistryConfig, CredentialError> {
        let config = Self::load_config(env)?;

        if *caller != config.owner {
            return Err(CredentialError::Unauthorized);
        }

        caller.require_auth();
        Ok(config)
    }

    fn current_height(env: &Env) -> u64 {
        env.ledger().sequence() as u64
    }
}
