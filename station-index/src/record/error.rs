//! Record parse errors.

/// Why a single record could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Key not present in the field table
    #[error("unknown key \"{0}\"")]
    UnknownKey(String),

    /// Indented line with nothing to continue
    #[error("line continuation without first line")]
    DanglingContinuation,

    /// Number-pair value that is not exactly two tokens
    #[error("expected two numbers, got \"{0}\"")]
    MalformedNumber(String),
}

/// A parse failure tied to its position in a source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{source_name} {line}: {kind}")]
pub struct RecordError {
    /// Name of the source the record came from.
    pub source_name: String,
    /// 1-based number of the line the failure was detected on.
    pub line: usize,
    #[source]
    pub kind: ParseError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::UnknownKey("zzz".into());
        assert_eq!(err.to_string(), "unknown key \"zzz\"");

        let err = ParseError::DanglingContinuation;
        assert_eq!(err.to_string(), "line continuation without first line");

        let err = ParseError::MalformedNumber("12".into());
        assert_eq!(err.to_string(), "expected two numbers, got \"12\"");
    }

    #[test]
    fn record_error_display() {
        let err = RecordError {
            source_name: "nord.txt".into(),
            line: 7,
            kind: ParseError::UnknownKey("zzz".into()),
        };
        assert_eq!(err.to_string(), "nord.txt 7: unknown key \"zzz\"");
    }

    #[test]
    fn record_error_source_is_kind() {
        use std::error::Error;

        let err = RecordError {
            source_name: "a.txt".into(),
            line: 1,
            kind: ParseError::DanglingContinuation,
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "line continuation without first line");
    }
}
