//! A Two‑Way Codec Between Decimal Text and IEEE‑754 binary32 Bit Strings
//!
//! This crate converts a human‑readable decimal number (e.g. `"13.25"`,
//! `"-0.1"`, `"INFINITY"`) into its IEEE‑754 single‑precision representation
//! rendered as a 32‑character string of `'0'`/`'1'` digits, and decodes such a
//! bit string back into the decimal value it actually stores.
//!
//! The bit string is text, not raw bytes: position 0 is the sign, positions
//! 1–8 the biased exponent (big‑endian), positions 9–31 the 23‑bit fraction.
//! The three special values (`+Infinity`, `-Infinity`, `NaN`) are fixed
//! canonical patterns; only those exact patterns decode as special.
//!
//! NOTE: the encoder carries two documented precision limitations: the
//! per‑step snapping of the fraction remainder to two decimal places, and the
//! refusal to carry a round‑up past an all‑ones fraction. See `DESIGN.md`.

mod bits32;
pub use bits32::*;
mod decode;
pub use decode::*;
mod encode;
pub use encode::*;
mod error;
pub use error::*;
pub mod fields;
mod number;
pub use number::*;
