//! Airport codes.

/// Why a string is not an airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIata {
    #[error("expected 3 letters, got {0}")]
    Length(usize),

    #[error("{0:?} contains a character outside A-Z")]
    NotUppercase(String),
}

/// A 3-letter uppercase IATA airport or city code such as `SYD` or `NYC`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IataCode(String);

impl IataCode {
    /// Parse a code. No trimming or case folding is applied.
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let len = s.chars().count();
        if len != 3 {
            return Err(InvalidIata::Length(len));
        }
        if !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(InvalidIata::NotUppercase(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
