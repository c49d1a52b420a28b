//! Option encoder: compiles tagged option structs into argument vectors.
//!
//! Encoding walks the fields of an [`Options`] value in declaration order,
//! parses each field's tag, renders its value and keeps at most one flag per
//! option name. [`ExtraOpts`] tokens are appended last.
//!
//! ```
//! use cmdopt::{encode, ExtraOpts, Options};
//!
//! #[derive(Default, Options)]
//! pub struct Example {
//!     #[opt("repeat")]
//!     pub repeat: Vec<String>,
//!     #[opt("no-value,noval")]
//!     pub no_value: bool,
//!     #[opt("single,single-hyphen")]
//!     pub single: i32,
//!     #[opt(extra)]
//!     pub extra: ExtraOpts,
//! }
//!
//! let mut example = Example {
//!     repeat: vec!["a".into(), "b".into()],
//!     no_value: true,
//!     single: 1,
//!     ..Default::default()
//! };
//! example.extra.add(["--extra1"]);
//!
//! assert_eq!(
//!     encode(&example),
//!     vec!["--repeat=a", "--repeat=b", "--no-value", "-single=1", "--extra1"],
//! );
//! ```

pub mod extra;
pub mod options;
pub mod tag;
pub mod value;

pub use extra::ExtraOpts;
pub use options::{walk, Field, Options};
pub use tag::Tag;
pub use value::{FlagArg, FlagValue, Renderable};

use log::trace;
use std::collections::HashSet;

/// Encode an option struct into its ordered argument vector.
///
/// Never fails: unsupported or unset fields contribute nothing.
pub fn encode<O: Options + ?Sized>(options: &O) -> Vec<String> {
    let mut args = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for field in walk(options) {
        let Some(raw) = field.tag else { continue };
        let tag = Tag::parse(raw);
        if tag.name.is_empty() {
            trace!("Skipping field {} with empty option name", field.ident);
            continue;
        }
        if seen.contains(tag.name) {
            trace!("Skipping field {}: option {:?} already emitted", field.ident, tag.name);
            continue;
        }

        let mut rendered = Vec::new();
        field.value.render(&tag, &mut rendered);
        if rendered.is_empty() {
            continue;
        }
        seen.insert(tag.name);

        let prefix = tag.prefix();
        args.extend(rendered.into_iter().map(|arg| arg.into_token(prefix, tag.name)));
    }

    args.extend(options.extra_args().into_iter().map(str::to_owned));
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Overrides {
        primary: u32,
        fallback: Option<u32>,
        extra: ExtraOpts,
    }

    impl Options for Overrides {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("primary", "limit", &self.primary),
                Field::new("fallback", "limit", &self.fallback),
            ]
        }

        fn extra_args(&self) -> Vec<&str> {
            self.extra.iter().map(String::as_str).collect()
        }
    }

    #[test]
    fn test_first_non_empty_wins() {
        let set = Overrides {
            primary: 5,
            fallback: Some(0),
            extra: ExtraOpts::new(),
        };
        assert_eq!(encode(&set), vec!["--limit=5"]);

        let unset = Overrides {
            primary: 0,
            fallback: Some(0),
            extra: ExtraOpts::new(),
        };
        assert_eq!(encode(&unset), vec!["--limit=0"]);

        let neither = Overrides {
            primary: 0,
            fallback: None,
            extra: ExtraOpts::new(),
        };
        assert!(encode(&neither).is_empty());
    }

    #[test]
    fn test_extra_args_last() {
        let mut opts = Overrides {
            primary: 1,
            fallback: None,
            extra: ExtraOpts::new(),
        };
        opts.extra.add(["--limit=9", "--other"]);
        assert_eq!(encode(&opts), vec!["--limit=1", "--limit=9", "--other"]);
    }

    #[test]
    fn test_encode_is_repeatable() {
        let opts = Overrides {
            primary: 3,
            fallback: None,
            extra: ["--x"].into_iter().collect(),
        };
        assert_eq!(encode(&opts), encode(&opts));
        assert_eq!(opts.to_args(), encode(&opts));
    }
}
