//! Short code generation.
//!
//! A generated code is the DJB2 hash of the long URL followed by a random
//! four-digit salt, rendered as lowercase hex and cut to eight characters.

use rand::Rng;

/// Maximum length of a generated code.
pub const CODE_LENGTH: usize = 8;

const DJB2_SEED: u64 = 5381;

/// DJB2 string hash over the bytes of `input`, with 64-bit wraparound.
///
/// Each byte is added as a signed char, so bytes above 0x7f contribute a
/// sign-extended negative value.
pub fn djb2(input: &str) -> u64 {
    input.bytes().fold(DJB2_SEED, |hash, byte| {
        hash.wrapping_mul(33).wrapping_add(byte as i8 as u64)
    })
}

/// Draws a random salt in `1000..=9999`.
pub fn random_salt() -> u16 {
    rand::rng().random_range(1000..=9999)
}

/// Builds the code for `long_url` with a given salt.
pub fn code_for(long_url: &str, salt: u16) -> String {
    let mut code = format!("{:x}", djb2(&format!("{long_url}{salt}")));
    code.truncate(CODE_LENGTH);
    code
}

/// Builds a code for `long_url` with a fresh random salt.
pub fn generate_code(long_url: &str) -> String {
    code_for(long_url, random_salt())
}
