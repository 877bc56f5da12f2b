//! Bit-field constants and the string-level arithmetic shared by the encoder
//! and decoder: fixed-width binary rendering, field parsing, and the
//! round-to-nearest-even step that trims the raw fraction to 23 bits.

/// Constant added to the true exponent before storage.
pub const BIAS: i32 = 127;
/// Width of the stored exponent field.
pub const EXPONENT_BITS: usize = 8;
/// Width of the stored fraction field.
pub const FRACTION_BITS: usize = 23;
/// Total width of a binary32 pattern.
pub const WORD_BITS: usize = 32;
/// Bits extracted before rounding: 23 kept plus 3 guard bits.
pub const RAW_FRACTION_BITS: usize = FRACTION_BITS + 3;

/// Renders `value` as a big-endian binary string, zero-padded to `width`.
pub fn to_fixed_width(value: u32, width: usize) -> String {
    format!("{value:0width$b}")
}

/// Parses a validated field of '0'/'1' characters as an unsigned integer.
pub fn field_value(field: &str) -> u32 {
    debug_assert!(field.bytes().all(|b| b == b'0' || b == b'1'));
    u32::from_str_radix(field, 2).unwrap()
}

/// Rounds a raw fraction (23 kept bits plus 3 guard bits) to 23 bits,
/// ties-to-even. Guard bits below one half (`0xx`) truncate; exactly one half
/// (`100`) rounds up only if the last kept bit is odd; anything above one half
/// rounds up.
pub fn round_to_nearest_even(raw: &str) -> String {
    debug_assert_eq!(raw.len(), RAW_FRACTION_BITS);
    let kept = &raw[..FRACTION_BITS];
    let guard = &raw[FRACTION_BITS..];
    if guard.starts_with('0') {
        kept.to_string()
    } else if guard == "100" {
        if kept.ends_with('1') { round_up(kept) } else { kept.to_string() }
    } else {
        round_up(kept)
    }
}

/// Increments a bit string by one at the least significant position: trailing
/// '1's become '0' and the first '0' above them becomes '1'.
///
/// An all-ones string is returned unchanged: the carry would need a bit the
/// field does not have, and this codec never lets the fraction overflow into
/// the exponent. That loses the increment-exponent case of exact IEEE-754
/// rounding; see `DESIGN.md`.
pub fn round_up(bits: &str) -> String {
    match bits.rfind('0') {
        Some(index) => {
            let mut rounded = String::with_capacity(bits.len());
            rounded.push_str(&bits[..index]);
            rounded.push('1');
            rounded.push_str(&"0".repeat(bits.len() - index - 1));
            rounded
        }
        None => bits.to_string(),
    }
}
