use core::fmt;
use core::str::FromStr;

use crate::fields::{EXPONENT_BITS, WORD_BITS};
use crate::DecodeError;

/// An IEEE‑754 binary32 bit pattern carried as text: exactly 32 characters,
/// each `'0'` or `'1'`. Position 0 is the sign, positions 1–8 the biased
/// exponent (big‑endian), positions 9–31 the fraction.
///
/// Validity is enforced at construction; every accessor on a constructed
/// value is infallible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bits32(String);

impl Bits32 {
    /// Canonical pattern for `+Infinity`: exponent all ones, fraction zero.
    pub const INFINITY_PATTERN: &'static str = "01111111100000000000000000000000";
    /// Canonical pattern for `-Infinity`.
    pub const NEG_INFINITY_PATTERN: &'static str = "11111111100000000000000000000000";
    /// Canonical pattern for `NaN`: exponent and fraction all ones, sign 0.
    pub const NAN_PATTERN: &'static str = "01111111111111111111111111111111";

    // ───────────────────────────── Constructors ─────────────────────────────

    /// Validates and wraps a 32-character bit string.
    pub fn parse(s: &str) -> Result<Self, DecodeError> {
        let length = s.chars().count();
        if length != WORD_BITS {
            return Err(DecodeError::WrongLength(length));
        }
        for (position, character) in s.chars().enumerate() {
            if character != '0' && character != '1' {
                return Err(DecodeError::NotABit { position, character });
            }
        }
        Ok(Self(s.to_string()))
    }

    /// Wraps a string the caller has already produced bit-by-bit.
    pub(crate) fn from_validated(s: String) -> Self {
        debug_assert_eq!(s.len(), WORD_BITS);
        debug_assert!(s.bytes().all(|b| b == b'0' || b == b'1'));
        Self(s)
    }

    /// Renders a native 32-bit pattern as its bit string.
    pub fn from_bits(bits: u32) -> Self {
        Self(format!("{bits:032b}"))
    }

    pub fn infinity() -> Self {
        Self(Self::INFINITY_PATTERN.to_string())
    }

    pub fn neg_infinity() -> Self {
        Self(Self::NEG_INFINITY_PATTERN.to_string())
    }

    pub fn nan() -> Self {
        Self(Self::NAN_PATTERN.to_string())
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    /// The full 32-character bit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the sign bit (true if set).
    pub fn sign(&self) -> bool {
        self.0.starts_with('1')
    }

    /// The 8 biased-exponent characters (positions 1–8).
    pub fn exponent_field(&self) -> &str {
        &self.0[1..1 + EXPONENT_BITS]
    }

    /// The 23 fraction characters (positions 9–31).
    pub fn fraction_field(&self) -> &str {
        &self.0[1 + EXPONENT_BITS..]
    }

    /// The pattern as a native 32-bit integer.
    pub fn to_bits(&self) -> u32 {
        u32::from_str_radix(&self.0, 2).unwrap()
    }

    /// The pattern as big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.to_bits().to_be_bytes()
    }

    /// The pattern as lowercase hex, e.g. `"3f800000"` for 1.0.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }
}

impl fmt::Display for Bits32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Bits32 {
    type Err = DecodeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Bits32 {
    type Error = DecodeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
