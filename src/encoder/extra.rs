//! Raw argument tokens appended after the tag-driven ones.

use serde::{Deserialize, Serialize};

/// Pre-formatted arguments for flags that have no typed field.
///
/// Tokens are emitted verbatim, in insertion order, after every tagged field.
/// They are not deduplicated or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraOpts(Vec<String>);

impl ExtraOpts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tokens to the end of the list
    pub fn add<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(args.into_iter().map(Into::into));
    }

    pub fn push(&mut self, arg: impl Into<String>) {
        self.0.push(arg.into());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ExtraOpts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut extra = Self::new();
        extra.add(iter);
        extra
    }
}

impl<'a> IntoIterator for &'a ExtraOpts {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut extra = ExtraOpts::new();
        extra.add(["--b", "--a"]);
        extra.push("--c");
        assert_eq!(extra.as_slice(), ["--b", "--a", "--c"]);
    }

    #[test]
    fn test_clear() {
        let mut extra: ExtraOpts = ["--x"].into_iter().collect();
        assert_eq!(extra.len(), 1);
        extra.clear();
        assert!(extra.is_empty());
    }

    #[test]
    fn test_yaml_is_a_plain_list() {
        let extra: ExtraOpts = serde_yaml::from_str("- --a\n- --b=1\n").unwrap();
        assert_eq!(extra.as_slice(), ["--a", "--b=1"]);
    }
}
