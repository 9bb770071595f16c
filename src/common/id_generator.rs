// src/common/id_generator.rs
//! Crockford Base32 resume ID generator.
//!
//! Resume identifiers use the format `R_XXXXXX` where the random part is
//! drawn from the Crockford Base32 alphabet (no I, L, O, U). The alphabet
//! keeps the ids unambiguous when read aloud or typed from a share link.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Prefix carried by every resume identifier.
pub const RESUME_ID_PREFIX: &str = "R_";

fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a resume ID (R_XXXXXX).
///
/// Used when a seed file entry arrives without an identifier; seeded
/// records otherwise keep their literal ids so share links stay stable
/// across restarts.
pub fn generate_resume_id() -> String {
    format!("{}{}", RESUME_ID_PREFIX, generate_crockford_string(6))
}
