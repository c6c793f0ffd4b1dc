//! Error types for the currency engine.

use crate::money::Money;

/// Alias for `Result<T, WalletError>`.
pub type WalletResult<T> = Result<T, WalletError>;

/// Alias for `Result<T, ParseError>`.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reasons a wallet operation is rejected. The wallet is never touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    /// The change amounts to nothing.
    #[error("nothing to do: enter an amount to add or spend")]
    NoOp,

    /// Spending would leave the wallet below zero.
    #[error("insufficient funds: the wallet holds {available}, the operation needs {required}")]
    InsufficientFunds {
        /// What the wallet holds, normalized.
        available: Money,
        /// What the operation asked for, normalized.
        required: Money,
    },
}

/// Import text that is not structured data at all.
///
/// Missing or invalid denomination fields never produce this error; they
/// are coerced to zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ParseError {
    /// Nothing was supplied.
    #[error("no JSON to import")]
    #[diagnostic(
        code(wh::import::empty),
        help("paste or pipe a wallet object with pennies, shillings and crowns")
    )]
    Empty,

    /// The text is not valid JSON.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    #[diagnostic(
        code(wh::import::syntax),
        help("expected a wallet object with pennies, shillings and crowns, optionally wrapped as wallet plus settings.autoApply")
    )]
    Syntax {
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
        /// Parser message without the position suffix.
        message: String,
    },
}

impl ParseError {
    /// Byte offset of the error within `source`, if it has a position.
    pub fn offset_in(&self, source: &str) -> Option<usize> {
        let ParseError::Syntax { line, column, .. } = self else {
            return None;
        };
        let mut offset = 0;
        for (idx, text) in source.split_inclusive('\n').enumerate() {
            if idx + 1 == *line {
                let col = column.saturating_sub(1).min(text.len());
                return Some(offset + col);
            }
            offset += text.len();
        }
        Some(source.len())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let full = err.to_string();
        // serde_json appends " at line X column Y"
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        ParseError::Syntax {
            line: err.line(),
            column: err.column(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_keeps_position() {
        let err: ParseError = serde_json::from_str::<serde_json::Value>("{\n  \"p\": ,\n}")
            .unwrap_err()
            .into();
        match &err {
            ParseError::Syntax { line, message, .. } => {
                assert_eq!(*line, 2);
                assert!(!message.contains(" at line "));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn offset_points_into_second_line() {
        let source = "{\n  \"p\": ,\n}";
        let err = ParseError::Syntax {
            line: 2,
            column: 8,
            message: "expected value".into(),
        };
        assert_eq!(err.offset_in(source), Some(2 + 7));
    }

    #[test]
    fn empty_has_no_offset() {
        assert_eq!(ParseError::Empty.offset_in(""), None);
    }

    #[test]
    fn insufficient_funds_message() {
        let err = WalletError::InsufficientFunds {
            available: Money::new(4, 8, 0),
            required: Money::new(0, 9, 0),
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: the wallet holds 4 P • 8 S • 0 GC, the operation needs 0 P • 9 S • 0 GC"
        );
    }
}
