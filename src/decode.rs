use crate::fields::{self, BIAS};
use crate::{Bits32, DecodeError, DecodedNumber};

/// Decodes an IEEE‑754 binary32 bit string into the value it stores.
///
/// Only the three canonical special patterns decode as special values; every
/// other pattern, exponent-all-ones payloads included, goes through the
/// uniform normal reconstruction.
pub fn decode(raw: &str) -> Result<DecodedNumber, DecodeError> {
    let bits = Bits32::parse(raw)?;
    match bits.as_str() {
        Bits32::INFINITY_PATTERN => {
            return Ok(DecodedNumber::Infinity { negative: false });
        }
        Bits32::NEG_INFINITY_PATTERN => {
            return Ok(DecodedNumber::Infinity { negative: true });
        }
        Bits32::NAN_PATTERN => return Ok(DecodedNumber::Nan),
        _ => {}
    }
    let exponent = fields::field_value(bits.exponent_field()) as i32 - BIAS;
    let fraction = fraction_value(bits.fraction_field());
    Ok(DecodedNumber::Normal { negative: bits.sign(), exponent, fraction })
}

/// Convenience for callers that only want the stored decimal value.
pub fn decode_value(raw: &str) -> Result<f64, DecodeError> {
    Ok(decode(raw)?.value())
}

/// Accumulates the fraction field as `Σ bit_i · 2^-i` for `i = 1..=23`.
fn fraction_value(field: &str) -> f64 {
    field
        .bytes()
        .enumerate()
        .filter(|&(_, bit)| bit == b'1')
        .map(|(index, _)| 2f64.powi(-(index as i32) - 1))
        .sum()
}
