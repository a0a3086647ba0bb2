//! SHA256 + base36 dish identifiers.

use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::{Digest, Sha256};

use crate::enums::DietaryType;

/// Base36 alphabet (0-9, a-z).
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Prefix shared by every dish id.
pub const DISH_ID_PREFIX: &str = "dish";

/// Number of base36 characters after the prefix.
pub const DISH_ID_LENGTH: usize = 8;

/// Converts a byte slice to a base36 string of exactly `length` characters.
///
/// Shorter encodings are left-padded with zeros; longer ones keep the least
/// significant digits.
pub fn encode_base36(data: &[u8], length: usize) -> String {
    let mut num = BigUint::from_bytes_be(data);
    let base = BigUint::from(36u32);
    let zero = BigUint::zero();

    let mut digits: Vec<char> = Vec::with_capacity(length);
    while num > zero {
        let rem = &num % &base;
        num /= &base;
        let idx = rem.to_u32_digits().first().copied().unwrap_or(0) as usize;
        digits.push(BASE36_ALPHABET[idx] as char);
    }
    digits.reverse();

    let mut s: String = digits.into_iter().collect();
    if s.len() < length {
        s = "0".repeat(length - s.len()) + &s;
    }
    if s.len() > length {
        s = s[s.len() - length..].to_owned();
    }
    s
}

/// Creates a hash-based id for a dish proposal.
///
/// The nonce lets callers retry on the (unlikely) event of a collision with
/// an id already in the registry.
pub fn generate_dish_id(
    name: &str,
    dietary_type: DietaryType,
    timestamp: DateTime<Utc>,
    nonce: u32,
) -> String {
    let content = format!(
        "{}|{}|{}|{}",
        name,
        dietary_type,
        timestamp.timestamp_nanos_opt().unwrap_or(0),
        nonce
    );
    let hash = Sha256::digest(content.as_bytes());

    // 6 bytes = 48 bits, a little over 9 base36 chars; truncated to 8.
    let short_hash = encode_base36(&hash[..6], DISH_ID_LENGTH);
    format!("{DISH_ID_PREFIX}-{short_hash}")
}

/// Number of base36 characters in a [`name_digest`].
pub const NAME_DIGEST_LENGTH: usize = 16;

/// Stable base36 digest of a name's identity key.
///
/// Names that compare equal under [`names_match`](crate::dish::names_match)
/// share a digest; any other pair differs with overwhelming probability.
pub fn name_digest(name: &str) -> String {
    let hash = Sha256::digest(crate::dish::name_key(name).as_bytes());
    encode_base36(&hash[..12], NAME_DIGEST_LENGTH)
}
