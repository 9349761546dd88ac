//! Cryptographic primitives for Hashline

use sha2::{Digest, Sha256};

/// Type alias for a SHA-256 digest rendered as a lowercase hex string
/// (64 characters). A block's digest doubles as its identity and its
/// tamper-evidence token.
pub type BlockHash = String;

/// Computes the SHA-256 digest of `data` and hex-encodes it.
///
/// Pure and deterministic: identical input bytes always produce the
/// identical digest string.
pub fn sha256_hex(data: &[u8]) -> BlockHash {
    hex::encode(Sha256::digest(data))
}
