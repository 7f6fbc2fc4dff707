//! # Error Handling
//!
//! Provides the unified `SpecError` enum used across the crate.

use derive_more::{Display, From};

/// The crate-wide error enum.
///
/// We use `derive_more` for boilerplate.
/// Both JSON variants wrap `serde_json::Error`, so neither derives `From`;
/// the serializer entry points pick the direction explicitly.
#[derive(Debug, Display, From)]
pub enum SpecError {
    /// The document graph could not be serialized to JSON.
    #[from(ignore)]
    #[display("Encode Error: {_0}")]
    Encode(serde_json::Error),

    /// The input did not match the expected shape of a document field.
    #[from(ignore)]
    #[display("Decode Error: {_0}")]
    Decode(serde_json::Error),

    /// An HTTP method name outside the eight OpenAPI operation slots.
    #[display("Unsupported HTTP method: {_0}")]
    UnsupportedMethod(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for SpecError {}

/// Helper type alias for Result using SpecError.
pub type SpecResult<T> = Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_conversion() {
        // Plain strings convert into the method variant
        let err: SpecError = String::from("BREW").into();
        match err {
            SpecError::UnsupportedMethod(name) => assert_eq!(name, "BREW"),
            _ => panic!("String should convert to SpecError::UnsupportedMethod"),
        }
    }

    #[test]
    fn test_decode_display() {
        let json_err = serde_json::from_str::<bool>("{}").unwrap_err();
        let err = SpecError::Decode(json_err);
        assert!(format!("{}", err).starts_with("Decode Error: "));
    }
}
