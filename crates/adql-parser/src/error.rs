// Structural parse failures.
//
// A ParseError means the input did not match the grammar at some position.
// Soft literal failures (hex overflow) are not errors; they surface as the
// UnsignedLiteral::Error sentinel instead.

use thiserror::Error;

use crate::position::line_col;

/// A structural parse failure, carrying the failing rule and its position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{line}:{column}: {rule}: {message}")]
pub struct ParseError {
    /// Name of the grammar rule that gave up.
    pub rule: &'static str,
    /// What the rule expected to see.
    pub message: String,
    /// Byte offset into the source at the point of failure. The residual
    /// unconsumed input is `&src[offset..]`.
    pub offset: usize,
    /// 1-based line of the failure.
    pub line: u32,
    /// 1-based column (byte distance into the line) of the failure.
    pub column: u32,
}

impl ParseError {
    pub(crate) fn new(
        rule: &'static str,
        message: impl Into<String>,
        src: &str,
        offset: usize,
    ) -> Self {
        let (line, column) = line_col(src, offset);
        Self {
            rule,
            message: message.into(),
            offset,
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_position() {
        let err = ParseError::new("identifier", "expected an identifier", "a,\n12", 3);
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 1);
        assert_eq!(err.to_string(), "2:1: identifier: expected an identifier");
    }
}
