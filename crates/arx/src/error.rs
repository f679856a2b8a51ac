//! Error types for the talos-arx crate.

/// Error type for all fallible operations in the talos-arx crate.
///
/// Every variant is raised during record deserialisation only;
/// construction from in-memory parameters and [`crate::ModelArx::step`]
/// are total.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArxError {
    /// Returned when a numeric token in a `k:` or `stdDev:` line
    /// cannot be parsed.
    #[error("malformed value for '{field}': '{token}'")]
    MalformedValue {
        /// Name of the field being parsed.
        field: &'static str,
        /// The offending token (empty when the value was absent).
        token: String,
    },

    /// Returned when one or more mandatory fields are absent from a
    /// record. Enumerates every missing field, not just the first.
    #[error("model record is missing required field(s): {}", fields.join(", "))]
    MissingFields {
        /// Names of all absent fields, in record order (A, B, k, stdDev).
        fields: Vec<&'static str>,
    },

    /// Returned when an explicit `Type:` tag disagrees with the
    /// expected model identifier.
    #[error("model type mismatch: expected '{expected}', got '{got}'")]
    TypeMismatch {
        /// The expected model identifier.
        expected: &'static str,
        /// The identifier found in the record.
        got: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed_value() {
        let err = ArxError::MalformedValue {
            field: "k",
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "malformed value for 'k': 'abc'");
    }

    #[test]
    fn display_missing_fields_enumerates_all() {
        let err = ArxError::MissingFields {
            fields: vec!["A", "k", "stdDev"],
        };
        assert_eq!(
            err.to_string(),
            "model record is missing required field(s): A, k, stdDev"
        );
    }

    #[test]
    fn display_type_mismatch() {
        let err = ArxError::TypeMismatch {
            expected: "ModelARX",
            got: "ModelOther".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "model type mismatch: expected 'ModelARX', got 'ModelOther'"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ArxError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ArxError>();
    }
}
