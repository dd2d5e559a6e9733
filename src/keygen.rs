//! Random identifier and secret generation for API keys.
//!
//! Secrets are drawn from the thread-local CSPRNG via the `Alphanumeric`
//! distribution, which samples uniformly over the 62-character alphabet
//! (no modulo bias). Identifiers are short UUID-derived tags; collision
//! risk is non-zero but acceptable at the expected store size.

use rand::{Rng, distr::Alphanumeric};
use uuid::Uuid;

/// Number of random characters in a generated secret, excluding the prefix.
pub const SECRET_LEN: usize = 32;

/// Generate the random portion of an API key secret.
///
/// Returns 32 characters from `[A-Za-z0-9]`. The caller prepends the
/// environment prefix (e.g. `br_live_`).
pub fn generate_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SECRET_LEN)
        .map(char::from)
        .collect()
}

/// Generate a key identifier, e.g. `key_9f8a2b31`.
///
/// Uses the first hyphen-delimited segment (8 hex characters) of a random
/// v4 UUID.
pub fn generate_id() -> String {
    let uuid = Uuid::new_v4().to_string();
    format!("key_{}", &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_has_expected_length_and_alphabet() {
        let secret = generate_secret();
        assert_eq!(secret.len(), SECRET_LEN);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn secrets_are_not_repeated() {
        assert_ne!(generate_secret(), generate_secret());
    }

    #[test]
    fn id_is_prefixed_short_uuid_segment() {
        let id = generate_id();
        let tag = id.strip_prefix("key_").expect("id starts with key_");
        assert_eq!(tag.len(), 8);
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_are_not_repeated() {
        assert_ne!(generate_id(), generate_id());
    }
}
