//! Field tables for option structs.
//!
//! An option struct describes itself through [`Options::fields`], normally
//! generated by `#[derive(Options)]`. The walker then decides which of those
//! fields take part in encoding.

use super::value::FlagValue;
use log::trace;

/// One field of an option struct as seen by the encoder.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// Rust identifier of the field, used for diagnostics only
    pub ident: &'static str,
    /// Raw option tag (`name[,modifier]*`); `None` when the field has no tag
    pub tag: Option<&'a str>,
    /// Whether the field is publicly accessible
    pub exported: bool,
    /// Current value of the field
    pub value: &'a dyn FlagValue,
}

impl<'a> Field<'a> {
    /// A tagged, exported field
    pub fn new(ident: &'static str, tag: &'a str, value: &'a dyn FlagValue) -> Self {
        Self {
            ident,
            tag: Some(tag),
            exported: true,
            value,
        }
    }

    /// A field with no option tag; the walker skips it
    pub fn untagged(ident: &'static str, value: &'a dyn FlagValue) -> Self {
        Self {
            ident,
            tag: None,
            exported: true,
            value,
        }
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("ident", &self.ident)
            .field("tag", &self.tag)
            .field("exported", &self.exported)
            .finish_non_exhaustive()
    }
}

/// A configuration object that can be compiled into command-line arguments.
///
/// Implement it with `#[derive(Options)]`, or by hand when the fields have to
/// be registered explicitly:
///
/// ```
/// use cmdopt::{Field, Options};
///
/// struct Listen {
///     port: u16,
/// }
///
/// impl Options for Listen {
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![Field::new("port", "port", &self.port)]
///     }
/// }
///
/// assert_eq!(Listen { port: 11211 }.to_args(), vec!["--port=11211"]);
/// ```
pub trait Options {
    /// All fields in declaration order, including those of flattened members
    fn fields(&self) -> Vec<Field<'_>>;

    /// Pre-formatted tokens appended after all tag-driven arguments
    fn extra_args(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Encode this object into an argument vector
    fn to_args(&self) -> Vec<String> {
        super::encode(self)
    }
}

impl<T: Options + ?Sized> Options for &T {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn extra_args(&self) -> Vec<&str> {
        (**self).extra_args()
    }
}

impl<T: Options + ?Sized> Options for Box<T> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn extra_args(&self) -> Vec<&str> {
        (**self).extra_args()
    }
}

/// Yield the fields taking part in encoding: exported and tagged.
pub fn walk<O: Options + ?Sized>(options: &O) -> impl Iterator<Item = Field<'_>> {
    options.fields().into_iter().filter(|field| {
        if !field.exported {
            trace!("Skipping non-exported field {}", field.ident);
            return false;
        }
        if field.tag.is_none() {
            trace!("Skipping untagged field {}", field.ident);
            return false;
        }
        true
    })
}
