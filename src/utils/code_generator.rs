//! Random short-code generation with collision avoidance.

use std::collections::HashSet;

use crate::error::AppError;
use rand::Rng;

/// The 62-symbol encoding alphabet: lowercase letters, uppercase letters,
/// digits.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random code of `length` symbols that is not in `existing`.
///
/// Symbols are drawn independently and uniformly with replacement. On a
/// collision the draw repeats with the same `length` against the same
/// `existing` snapshot until a free code comes up; with 62^6 codes at the
/// default length, retries are vanishingly rare at realistic registry sizes.
///
/// Pure apart from the random source: `existing` is never modified and the
/// returned code is guaranteed not to be a member of it.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] when `length` is zero.
pub fn generate_code(existing: &HashSet<String>, length: usize) -> Result<String, AppError> {
    if length < 1 {
        return Err(AppError::InvalidArgument(
            "code length has to be equal or greater than 1".to_string(),
        ));
    }

    let mut rng = rand::rng();
    loop {
        let code: String = (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();

        if !existing.contains(&code) {
            return Ok(code);
        }
    }
}
