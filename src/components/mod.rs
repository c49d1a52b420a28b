//! Component flag sets.
//!
//! Each component describes the command-line surface of one deployed binary
//! as a typed option struct. The manifest builders validate it, then embed
//! the encoded argument vector in the container spec verbatim.

pub mod alertmanager;
pub mod common;
pub mod memcached;
pub mod thanos;

pub use alertmanager::AlertmanagerOptions;
pub use common::{LogFormat, LogLevel, LogOpts};
pub use memcached::MemcachedOptions;
pub use thanos::{CompactOptions, QueryOptions, ReceiveOptions, StoreOptions};

use crate::encoder::{encode, Options};

/// Errors raised when a component is missing configuration it cannot run without
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{component}: required option {field} is not set")]
    MissingField {
        component: &'static str,
        field: &'static str,
    },

    #[error("{component}: {message}")]
    Invalid {
        component: &'static str,
        message: String,
    },
}

/// A deployable binary whose arguments come from an option struct
pub trait Component: Options {
    /// Human-readable name used in validation errors
    const NAME: &'static str;

    /// Subcommand token placed before the encoded flags, if the binary has one
    const SUBCOMMAND: Option<&'static str> = None;

    /// Check fields the binary cannot start without
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Full argument vector for the container
    fn args(&self) -> Result<Vec<String>, ValidationError> {
        self.validate()?;
        let mut args: Vec<String> = Self::SUBCOMMAND.into_iter().map(str::to_owned).collect();
        args.extend(encode(self));
        Ok(args)
    }
}

/// Fail with `MissingField` when `missing` holds
pub(crate) fn require(
    component: &'static str,
    field: &'static str,
    missing: bool,
) -> Result<(), ValidationError> {
    if missing {
        return Err(ValidationError::MissingField { component, field });
    }
    Ok(())
}
