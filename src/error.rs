// SPDX-License-Identifier: MPL-2.0
//! Error types for the interaction layer.
//!
//! Missing optional markup is never an error: widgets whose elements are absent
//! are simply not constructed. The variants below cover configuration loading,
//! counter attribute parsing and failures reported by the browser binding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A counter's `data-target` attribute does not start with an integer.
    #[error("invalid counter target: {0:?}")]
    InvalidCounterTarget(String),

    /// A DOM call threw; the JS exception is stringified by the binding.
    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_target_error_quotes_raw_value() {
        let err = Error::InvalidCounterTarget("abc".to_string());
        assert_eq!(err.to_string(), "invalid counter target: \"abc\"");
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        assert!(matches!(read(), Err(Error::Io(_))));
    }

    #[test]
    fn toml_errors_convert_to_config_variant() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parsed.unwrap_err().into();
        assert!(err.to_string().starts_with("config error"));
    }
}
