//! Numeral detection.
use super::Filter;

/// Detects tokens that represent a numeral:
/// an optional leading `+` or `-` followed by ASCII digits.
///
/// By default a fractional separator is never accepted, so `"-12.5"` or `"3,14"` are *not* numerals.
/// Word vector files filtered with earlier releases depend on this,
/// which is why accepting one `.` or `,` has to be asked for with [NumericToken::with_fractions].
///
/// Note that the empty token and a lone sign are numerals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericToken {
    fractions: bool,
}

impl NumericToken {
    /// Also accept a single `.` or `,` after the first character.
    pub fn with_fractions() -> Self {
        Self { fractions: true }
    }

    /// Get whether fractional separators are accepted.
    pub fn fractions(&self) -> bool {
        self.fractions
    }
}

impl Filter<&str> for NumericToken {
    fn detect(&self, token: &str) -> bool {
        let bytes = token.as_bytes();
        let mut separator_seen = false;
        for (idx, &b) in bytes.iter().enumerate() {
            if b.is_ascii_digit() {
                continue;
            }
            if self.fractions && idx > 0 && !separator_seen && (b == b'.' || b == b',') {
                separator_seen = true;
            } else if idx != 0 || (b != b'+' && b != b'-') {
                return false;
            }
        }
        true
    }
}
