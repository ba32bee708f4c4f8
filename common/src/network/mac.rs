use pnet::util::MacAddr;
use thiserror::Error;

/// Length of an OUI written as bare hex digits.
pub const OUI_HEX_LEN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MacParseError {
    #[error("expected 6 colon-separated octets, found {0}")]
    OctetCount(usize),
    #[error("invalid octet `{0}`")]
    InvalidOctet(String),
}

/// Parses a MAC written as six colon-separated pairs of hex digits.
///
/// Stricter than `MacAddr::from_str`, which also takes single-digit groups
/// like `0:c:29:0:0:1`.
pub fn parse_colon_mac(s: &str) -> Result<MacAddr, MacParseError> {
    let groups: Vec<&str> = s.split(':').collect();
    if groups.len() != 6 {
        return Err(MacParseError::OctetCount(groups.len()));
    }

    let mut octets = [0u8; 6];
    for (octet, group) in octets.iter_mut().zip(&groups) {
        if group.len() != 2 || !group.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MacParseError::InvalidOctet(group.to_string()));
        }
        *octet = u8::from_str_radix(group, 16)
            .map_err(|_| MacParseError::InvalidOctet(group.to_string()))?;
    }

    let [a, b, c, d, e, f] = octets;
    Ok(MacAddr::new(a, b, c, d, e, f))
}

/// Extracts the uppercase OUI key from a MAC address in any common notation.
///
/// Colons, dashes and dots are dropped before the first six characters are
/// taken, so `18:e8:29:..`, `18-E8-29-..` and `18e8.29..` all yield
/// `18E829`. Returns `None` when fewer than six hex digits remain.
pub fn oui_prefix(mac: &str) -> Option<String> {
    let prefix: String = mac
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | '.'))
        .take(OUI_HEX_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if prefix.len() == OUI_HEX_LEN && prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(prefix)
    } else {
        None
    }
}
