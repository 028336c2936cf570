//! Chips and the contact address / avatar derivation that decorates them.

/// Domain suffix appended to every derived contact address.
const ADDRESS_DOMAIN: &str = "abc.com";

/// Avatar image size requested from the identicon service, in pixels.
const AVATAR_SIZE: u16 = 20;

/// Opaque identifier for a chip, unique within one session.
///
/// Minted from a monotonically increasing counter owned by the widget state,
/// so ids stay distinct even when a label is removed and re-selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChipId(pub(crate) u64);

/// A confirmed selection: one candidate turned into a removable token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub id: ChipId,
    pub label: String,
    /// Contact address derived from the label at creation time.
    pub address: String,
}

impl Chip {
    pub(crate) fn new(id: ChipId, label: impl Into<String>) -> Self {
        let label = label.into();
        let address = derive_address(&label);
        Self { id, label, address }
    }

    /// MD5 digest of the contact address, the key the avatar service uses.
    pub fn avatar_digest(&self) -> [u8; 16] {
        md5::compute(self.address.as_bytes()).0
    }

    /// Identicon URL for this chip.
    ///
    /// Fetching (and any failure to fetch) is the rendering layer's problem;
    /// nothing about the image affects chip state.
    pub fn avatar_url(&self) -> String {
        format!(
            "https://www.gravatar.com/avatar/{:x}?d=identicon&s={}",
            md5::compute(self.address.as_bytes()),
            AVATAR_SIZE
        )
    }
}

/// Derive a contact address from a display label.
///
/// Lower-cases the label and joins its whitespace-separated words with `.`,
/// then appends the fixed domain. Pure and total: every label maps to exactly
/// one address. Distinct labels are not guaranteed distinct addresses
/// ("John Doe" and "john doe" collide); deduplication is deliberately not
/// enforced here.
pub fn derive_address(label: &str) -> String {
    let stem = label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    format!("{stem}@{ADDRESS_DOMAIN}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_lowercases_and_joins_words() {
        assert_eq!(derive_address("Nick Giannopoulos"), "nick.giannopoulos@abc.com");
        assert_eq!(derive_address("Alice"), "alice@abc.com");
    }

    #[test]
    fn address_collapses_whitespace_runs() {
        assert_eq!(derive_address("John   Doe"), "john.doe@abc.com");
        assert_eq!(derive_address("  Jane Doe  "), "jane.doe@abc.com");
    }

    #[test]
    fn address_is_deterministic() {
        assert_eq!(derive_address("Bob"), derive_address("Bob"));
    }

    #[test]
    fn avatar_url_keys_on_address_digest() {
        let chip = Chip::new(ChipId(1), "Alice");
        let url = chip.avatar_url();
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?d=identicon&s=20"));
        // Digest of the derived address, lowercase hex, 32 chars.
        let digest = url
            .trim_start_matches("https://www.gravatar.com/avatar/")
            .split('?')
            .next()
            .unwrap();
        assert_eq!(digest.len(), 32);
        assert_eq!(digest, format!("{:x}", md5::compute("alice@abc.com")));
    }

    #[test]
    fn avatar_digest_matches_url_key() {
        let chip = Chip::new(ChipId(2), "Jane Doe");
        let hex: String = chip
            .avatar_digest()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        assert!(chip.avatar_url().contains(&hex));
    }
}
