//! Shareable route identifiers.

/// URL-safe alphabet, 64 symbols.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of generated ids. 64^10 possible values.
pub const ROUTE_ID_LEN: usize = 10;

/// Generate a random opaque id for a new route.
///
/// Uniqueness is probabilistic; callers do not check the store for collisions.
pub fn generate_route_id() -> String {
    (0..ROUTE_ID_LEN)
        .map(|_| ALPHABET[fastrand::usize(..ALPHABET.len())] as char)
        .collect()
}
