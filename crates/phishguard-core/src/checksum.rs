//! SHA-256 digests for model artifacts.
//!
//! Digests are computed over the exact bytes loaded so that logs and
//! `model-info` identify which artifact produced a verdict.

use sha2::{Digest, Sha256};

/// SHA-256 of `bytes` as `sha256:<lowercase hex>`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("sha256:{}", hex::encode(digest))
}
