#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("Invalid input. {0} is not a decimal number.")]
    NotANumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("wrong length: expected 32 binary digits, got {0}")]
    WrongLength(usize),

    #[error("character {character:?} at position {position} is not a binary digit")]
    NotABit { position: usize, character: char },
}

impl DecodeError {
    /// The single message shown to users for any malformed bit string. The
    /// variants stay distinguishable for callers and tests.
    pub fn user_message(&self) -> &'static str {
        "Invalid entry. Please enter a 32-bit binary value."
    }
}

impl From<EncodeError> for String {
    fn from(err: EncodeError) -> Self { err.to_string() }
}

impl From<DecodeError> for String {
    fn from(err: DecodeError) -> Self { err.to_string() }
}
