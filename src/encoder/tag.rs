//! Option tag parsing.

/// Render a boolean as a bare flag: `--flag` when true, nothing when false
pub const NOVAL: &str = "noval";
/// Always use a single-dash prefix
pub const SINGLE_HYPHEN: &str = "single-hyphen";

/// A parsed option tag of the form `name[,modifier]*`.
///
/// Unknown modifiers are kept but have no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub modifiers: Vec<&'a str>,
}

impl<'a> Tag<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split(',');
        let name = parts.next().unwrap_or_default();
        Self {
            name,
            modifiers: parts.collect(),
        }
    }

    pub fn has(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| *m == modifier)
    }

    pub fn noval(&self) -> bool {
        self.has(NOVAL)
    }

    pub fn single_hyphen(&self) -> bool {
        self.has(SINGLE_HYPHEN)
    }

    /// `-` for single-hyphen tags and one-character names, `--` otherwise
    pub fn prefix(&self) -> &'static str {
        if self.single_hyphen() || self.name.chars().count() == 1 {
            "-"
        } else {
            "--"
        }
    }
}
