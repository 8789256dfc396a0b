//! Parameter value type produced by the tag parser.

/// A parsed parameter: a keyword and the arguments extracted from its
/// parenthesized list.
///
/// `args` preserves source order and duplicates. An empty list means the
/// parameter carried no parentheses or an empty pair; the grammar does not
/// distinguish the two.
///
/// # Examples
/// ```
/// use tag_params::Param;
///
/// let param = Param::with_args("between", ["1", "10"]);
/// assert_eq!(param.name, "between");
/// assert_eq!(param.args, vec!["1", "10"]);
/// assert!(param.has_args());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    /// Parameter keyword as written in the tag.
    pub name: String,
    /// Ordered argument values; quoted arguments are stored unescaped.
    pub args: Vec<String>,
}

impl Param {
    /// Create a parameter with no arguments.
    ///
    /// # Examples
    /// ```
    /// use tag_params::Param;
    ///
    /// let param = Param::new("max");
    /// assert!(!param.has_args());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a parameter with the given arguments.
    #[must_use]
    pub fn with_args<I, T>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether at least one argument was present.
    #[must_use]
    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_args() {
        let param = Param::new("max");
        assert_eq!(param.name, "max");
        assert!(param.args.is_empty());
        assert!(!param.has_args());
    }

    #[test]
    fn with_args_preserves_order_and_duplicates() {
        let param = Param::with_args("in", ["b", "a", "a"]);
        assert_eq!(param.args, vec!["b", "a", "a"]);
        assert!(param.has_args());
    }
}
