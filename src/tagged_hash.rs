//! BIP-340 tagged hashing.

use sha2::{Digest, Sha256};

/// Size in bytes of a tagged-hash digest.
pub const TAGGED_HASH_SIZE: usize = 32;

/// Compute `SHA256(SHA256(tag) || SHA256(tag) || data)`.
///
/// Hashing the tag twice up front gives every protocol sub-use of SHA-256 its
/// own domain, so a digest produced under one tag can never be replayed under
/// another.
pub fn tagged_hash(tag: &str, data: &[u8]) -> [u8; TAGGED_HASH_SIZE] {
    let tag_digest = Sha256::digest(tag.as_bytes());

    let mut hasher = Sha256::new();
    hasher.update(tag_digest);
    hasher.update(tag_digest);
    hasher.update(data);

    hasher.finalize().into()
}
