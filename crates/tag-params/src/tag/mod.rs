//! Tag parsing entry points and result shapes.

mod engine;
mod lexer;
mod sink;
#[cfg(test)]
pub(crate) mod test_support;
mod unescape;

use std::sync::LazyLock;

use crate::errors::ParseError;
use crate::param::Param;

/// Sentinel recognised by the default parser as "explicitly absent".
pub const DEFAULT_IGNORE: &str = "-";

/// Name-keyed view of a parsed tag.
///
/// When a parameter name repeats in the source, the last occurrence wins;
/// the ordered form returned by [`Parser::parse`] keeps every occurrence.
pub type ParamMap = hashbrown::HashMap<String, Vec<String>>;

static DEFAULT_PARSER: LazyLock<Parser> = LazyLock::new(Parser::default);

/// Reusable tag parser carrying an ignore sentinel.
///
/// The sentinel is fixed at construction and the parser holds no per-call
/// state, so a single instance can serve any number of concurrent callers.
///
/// # Examples
/// ```
/// use tag_params::Parser;
///
/// let parser = Parser::new("skip");
/// let absent = parser
///     .parse("  skip  ")
///     .expect("example ensures fallible call succeeds");
/// assert!(absent.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    ignore: String,
}

impl Parser {
    /// Create a parser that treats `ignore` as the absent-tag sentinel.
    #[must_use]
    pub fn new(ignore: impl Into<String>) -> Self {
        Self {
            ignore: ignore.into(),
        }
    }

    /// The configured sentinel string.
    #[must_use]
    pub fn ignore_keyword(&self) -> &str {
        &self.ignore
    }

    /// Parse `tag` into parameters in source order, duplicates preserved.
    ///
    /// Returns `Ok(None)` when the trimmed input equals the ignore
    /// sentinel and `Ok(Some(vec![]))` when it is empty.
    ///
    /// # Errors
    /// Returns [`ParseError`] when the input violates the tag grammar. No
    /// partial result accompanies an error.
    ///
    /// # Examples
    /// ```
    /// use tag_params::{Param, Parser};
    ///
    /// let parser = Parser::default();
    /// let params = parser
    ///     .parse("max;between(1,10)")
    ///     .expect("example ensures fallible call succeeds")
    ///     .expect("tag is not the ignore sentinel");
    /// assert_eq!(
    ///     params,
    ///     vec![Param::new("max"), Param::with_args("between", ["1", "10"])]
    /// );
    /// ```
    pub fn parse(&self, tag: &str) -> Result<Option<Vec<Param>>, ParseError> {
        self.run(tag, Vec::new)
    }

    /// Parse `tag` into a name-keyed map; the last occurrence of a
    /// duplicated name wins.
    ///
    /// Returns `Ok(None)` for the ignore sentinel and an empty map for
    /// empty input, mirroring [`Parser::parse`].
    ///
    /// # Errors
    /// Returns [`ParseError`] when the input violates the tag grammar. No
    /// partial result accompanies an error.
    ///
    /// # Examples
    /// ```
    /// use tag_params::Parser;
    ///
    /// let parser = Parser::default();
    /// let map = parser
    ///     .parse_map("a;a(1)")
    ///     .expect("example ensures fallible call succeeds")
    ///     .expect("tag is not the ignore sentinel");
    /// assert_eq!(map.get("a"), Some(&vec!["1".to_string()]));
    /// ```
    pub fn parse_map(&self, tag: &str) -> Result<Option<ParamMap>, ParseError> {
        self.run(tag, ParamMap::new)
    }

    /// Shared trim/sentinel/empty handling in front of the engine; the two
    /// public shapes differ only in the sink they hand it.
    fn run<S: sink::ParamSink>(
        &self,
        tag: &str,
        empty: impl FnOnce() -> S,
    ) -> Result<Option<S>, ParseError> {
        let trimmed = tag.trim();
        if trimmed == self.ignore {
            return Ok(None);
        }
        let mut out = empty();
        if !trimmed.is_empty() {
            engine::run(trimmed, &mut out)?;
        }
        Ok(Some(out))
    }
}

impl Default for Parser {
    /// A parser with the [`DEFAULT_IGNORE`] sentinel.
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE)
    }
}

/// Parse `tag` with the shared default parser (sentinel [`DEFAULT_IGNORE`]).
///
/// # Errors
/// Returns [`ParseError`] when the input violates the tag grammar.
///
/// # Examples
/// ```
/// use tag_params::parse;
///
/// assert!(parse("-").expect("example ensures fallible call succeeds").is_none());
/// ```
pub fn parse(tag: &str) -> Result<Option<Vec<Param>>, ParseError> {
    DEFAULT_PARSER.parse(tag)
}

/// Parse `tag` into a map with the shared default parser.
///
/// # Errors
/// Returns [`ParseError`] when the input violates the tag grammar.
///
/// # Examples
/// ```
/// use tag_params::parse_map;
///
/// let map = parse_map("in(1,2)")
///     .expect("example ensures fallible call succeeds")
///     .expect("tag is not the ignore sentinel");
/// assert_eq!(map.get("in"), Some(&vec!["1".to_string(), "2".to_string()]));
/// ```
pub fn parse_map(tag: &str) -> Result<Option<ParamMap>, ParseError> {
    DEFAULT_PARSER.parse_map(tag)
}
