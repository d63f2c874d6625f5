//! Input validation for credential and issuer fields.
//!
//! All lengths are measured in bytes:
//! - Skill name: 1-64
//! - Skill level: 1-5
//! - Content hash: 0-128
//! - Verification proof: exactly 32
//! - Issuer display name: 1-100

use soroban_sdk::{Bytes, BytesN, String};

/// Maximum skill name length.
pub const MAX_SKILL_NAME_LENGTH: u32 = 64;

/// Lowest accepted skill level.
pub const MIN_SKILL_LEVEL: u32 = 1;

/// Highest accepted skill level.
pub const MAX_SKILL_LEVEL: u32 = 5;

/// Maximum content hash (off-chain locator) length.
pub const MAX_CONTENT_HASH_LENGTH: u32 = 128;

/// Required verification proof length.
pub const PROOF_LENGTH: u32 = 32;

/// Maximum issuer display name length.
pub const MAX_DISPLAY_NAME_LENGTH: u32 = 100;

/// Validate a skill name: non-empty and at most 64 bytes.
pub fn validate_skill_name(skill_name: &String) -> bool {
    let len = skill_name.len();
    len > 0 && len <= MAX_SKILL_NAME_LENGTH
}

#[inline]
pub fn validate_skill_level(skill_level: u32) -> bool {
    (MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&skill_level)
}

/// Validate a content hash. Empty is allowed.
#[inline]
pub fn validate_content_hash(content_hash: &String) -> bool {
    content_hash.len() <= MAX_CONTENT_HASH_LENGTH
}

/// Validate an issuer display name: non-empty and at most 100 bytes.
pub fn validate_display_name(display_name: &String) -> bool {
    let len = display_name.len();
    len > 0 && len <= MAX_DISPLAY_NAME_LENGTH
}

/// Convert a raw proof into its fixed-width form.
///
/// Returns None unless the input is exactly 32 bytes. Input is never
/// truncated or padded.
pub fn parse_proof(proof: &Bytes) -> Option<BytesN<32>> {
    if proof.len() != PROOF_LENGTH {
        return None;
    }
    BytesN::<32>::try_from(proof.clone()).ok()
}

/// Validate an optional expiry against the current ledger sequence.
pub fn validate_expiry(expiry: Option<u64>, height: u64) -> bool {
    match expiry {
        Some(expiry) => expiry >= height,
        None => true,
    }
}
