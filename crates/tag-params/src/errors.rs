//! Error types shared by the tag parsing modules.

use std::fmt;
use thiserror::Error;

/// Errors surfaced while parsing a parameter tag string.
///
/// Each variant corresponds to one grammar violation kind and renders a
/// fixed textual form. A parse that fails produces no partial result, so
/// callers never inspect a result value alongside one of these.
///
/// # Examples
/// ```
/// use tag_params::parse;
///
/// let err = parse("min(").expect_err("open argument list cannot parse");
/// assert_eq!(err.to_string(), "unexpected end of input");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token followed a complete parameter where only `;` or `,` may.
    #[error("unexpected token '{token}', expected a delimiter ; or ,")]
    ExpectedDelimiter {
        /// Source lexeme of the offending token.
        token: String,
    },
    /// A token other than an argument, `,` or `)` appeared inside an open
    /// argument list.
    #[error("unexpected token '{token}', expected a , or )")]
    ExpectedArgument {
        /// Source lexeme of the offending token.
        token: String,
    },
    /// A top-level delimiter appeared with no parameter name pending.
    #[error("unexpected delimiter '{token}', expected a name")]
    ExpectedName {
        /// Source lexeme of the offending delimiter.
        token: String,
    },
    /// Input ended while an argument list was still open. An unterminated
    /// quoted literal inside an argument list surfaces here as well.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

pub(crate) fn expected_delimiter(token: impl fmt::Display) -> ParseError {
    ParseError::ExpectedDelimiter {
        token: token.to_string(),
    }
}

pub(crate) fn expected_argument(token: impl fmt::Display) -> ParseError {
    ParseError::ExpectedArgument {
        token: token.to_string(),
    }
}

pub(crate) fn expected_name(token: impl fmt::Display) -> ParseError {
    ParseError::ExpectedName {
        token: token.to_string(),
    }
}
