//! Parser for compact parameter tag strings.
//!
//! A tag is a sequence of named parameters, each optionally carrying a
//! parenthesized, comma-separated argument list, with `;` and `,` accepted
//! interchangeably as top-level delimiters:
//!
//! ```text
//! max;min();in("a","b","c");between(1,2,3)
//! ```
//!
//! [`parse`] returns the parameters in source order, preserving duplicate
//! names; [`parse_map`] returns a name-keyed map where the last occurrence
//! of a duplicated name wins. Both distinguish an empty tag (no parameters
//! present) from the configured ignore sentinel (`-` by default), which
//! marks the tag as explicitly absent.
//!
//! ```
//! use tag_params::{Param, parse};
//!
//! let params = parse(r#"max;in("a","b")"#)
//!     .expect("example ensures fallible call succeeds")
//!     .expect("tag is not the ignore sentinel");
//! assert_eq!(
//!     params,
//!     vec![Param::new("max"), Param::with_args("in", ["a", "b"])]
//! );
//! ```

mod errors;
mod param;
mod tag;

pub use errors::ParseError;
pub use param::Param;
pub use tag::{DEFAULT_IGNORE, ParamMap, Parser, parse, parse_map};
