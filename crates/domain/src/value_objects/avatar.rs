//! Placeholder avatar references
//!
//! Characters without an explicit avatar are shown with a placeholder
//! portrait. Placeholders are local references, never remote URLs; the
//! rendering layer decides how to draw them.

use sha2::{Digest, Sha256};

use crate::ids::CharacterId;

/// Prefix shared by every placeholder reference
pub const PLACEHOLDER_AVATAR_PREFIX: &str = "placeholder://portrait/";

/// Number of distinct random placeholder signatures (`0..1000`)
pub const RANDOM_AVATAR_SIGNATURES: i32 = 1000;

/// Derive the placeholder avatar for a character.
///
/// The same id always yields the same reference.
///
/// # Examples
///
/// ```
/// use heroshelf_domain::{placeholder_avatar, CharacterId};
///
/// let id = CharacterId::new();
/// assert_eq!(placeholder_avatar(id), placeholder_avatar(id));
/// assert!(placeholder_avatar(id).starts_with("placeholder://portrait/"));
/// ```
pub fn placeholder_avatar(id: CharacterId) -> String {
    let mut hasher = Sha256::new();
    hasher.update(id.as_uuid().as_bytes());
    let digest = hasher.finalize();
    format!("{}{}", PLACEHOLDER_AVATAR_PREFIX, hex::encode(&digest[..8]))
}

/// Build a random placeholder avatar from a signature drawn by the caller.
///
/// Signatures wrap into `0..RANDOM_AVATAR_SIGNATURES`.
pub fn random_placeholder_avatar(signature: i32) -> String {
    format!(
        "{}random/{}",
        PLACEHOLDER_AVATAR_PREFIX,
        signature.rem_euclid(RANDOM_AVATAR_SIGNATURES)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn placeholder_is_stable_for_known_id() {
        let id = CharacterId::from_uuid(Uuid::nil());
        let first = placeholder_avatar(id);
        let second = placeholder_avatar(CharacterId::from_uuid(Uuid::nil()));
        assert_eq!(first, second);
        // 8 digest bytes as lowercase hex
        assert_eq!(first.len(), PLACEHOLDER_AVATAR_PREFIX.len() + 16);
    }

    #[test]
    fn placeholder_differs_between_ids() {
        let a = CharacterId::from_uuid(Uuid::from_u128(1));
        let b = CharacterId::from_uuid(Uuid::from_u128(2));
        assert_ne!(placeholder_avatar(a), placeholder_avatar(b));
    }

    #[test]
    fn random_placeholder_wraps_signature() {
        assert_eq!(
            random_placeholder_avatar(42),
            "placeholder://portrait/random/42"
        );
        assert_eq!(
            random_placeholder_avatar(1042),
            "placeholder://portrait/random/42"
        );
        assert_eq!(
            random_placeholder_avatar(-1),
            "placeholder://portrait/random/999"
        );
    }
}
