//! Cloudinary request signing
//!
//! Authenticated upload-API calls carry a signature: the hex SHA-256 digest of
//! the sorted `key=value` parameter string with the API secret appended. The
//! caller must not include `file`, `api_key`, or the signature itself in the
//! map; `BTreeMap` ordering gives the required sort.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Sign a parameter map with the account's API secret.
pub fn sign(params: &BTreeMap<String, String>, api_secret: &str) -> String {
    let mut to_sign = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    to_sign.push_str(api_secret);

    hex::encode(Sha256::digest(to_sign.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn signature_is_hex_sha256() {
        let sig = sign(&params(&[("folder", "avatars"), ("timestamp", "1700000000")]), "secret");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_is_deterministic_and_order_independent() {
        let a = params(&[("folder", "avatars"), ("timestamp", "1700000000"), ("width", "100")]);
        // Insertion order differs; BTreeMap sorts both the same way.
        let b = params(&[("width", "100"), ("timestamp", "1700000000"), ("folder", "avatars")]);
        assert_eq!(sign(&a, "secret"), sign(&b, "secret"));
    }

    #[test]
    fn signature_depends_on_secret_and_params() {
        let base = params(&[("folder", "avatars"), ("timestamp", "1700000000")]);
        let other = params(&[("folder", "covers"), ("timestamp", "1700000000")]);
        assert_ne!(sign(&base, "secret"), sign(&base, "other-secret"));
        assert_ne!(sign(&base, "secret"), sign(&other, "secret"));
    }
}
