use core::fmt;

/// Classification of a binary32 value, shared by both pipelines: the encoder
/// classifies raw text into one of these before rendering bits, and the
/// decoder returns one after taking a bit pattern apart.
///
/// The encoder never materializes a `Nan` with a negative sign, and tells
/// `-0.0` from `+0.0` only by the literal leading `-` of the input text. The
/// decoder never produces `Zero`: only the three canonical special patterns
/// are intercepted, so the all-zero pattern falls through to the uniform
/// `Normal` reconstruction (value `2^-127`). See `DESIGN.md`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecodedNumber {
    Zero { negative: bool },
    Infinity { negative: bool },
    Nan,
    /// A normalized value `(1 + fraction) × 2^exponent`, with `exponent`
    /// unbiased and `fraction` in `[0, 1)`.
    Normal { negative: bool, exponent: i32, fraction: f64 },
}

impl DecodedNumber {
    /// The decimal value actually stored: `(-1)^sign × (1 + fraction) ×
    /// 2^exponent` for normal numbers, the obvious value otherwise.
    pub fn value(&self) -> f64 {
        match self {
            Self::Zero { negative: false } => 0.0,
            Self::Zero { negative: true } => -0.0,
            Self::Infinity { negative: false } => f64::INFINITY,
            Self::Infinity { negative: true } => f64::NEG_INFINITY,
            Self::Nan => f64::NAN,
            Self::Normal { negative, exponent, fraction } => {
                let magnitude = (1.0 + fraction) * 2f64.powi(*exponent);
                if *negative { -magnitude } else { magnitude }
            }
        }
    }

    /// True for the three reserved special values.
    pub fn is_special(&self) -> bool {
        matches!(self, Self::Infinity { .. } | Self::Nan)
    }
}

impl fmt::Display for DecodedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinity { negative: false } => f.write_str("INFINITY"),
            Self::Infinity { negative: true } => f.write_str("-INFINITY"),
            Self::Nan => f.write_str("NAN"),
            _ => write!(f, "{}", self.value()),
        }
    }
}
