//! Memcached flag set, used for the Thanos index and bucket caches.

use super::{Component, ValidationError};
use crate::encoder::ExtraOpts;
use crate::Options;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Options)]
#[serde(default)]
pub struct MemcachedOptions {
    /// Item memory in megabytes
    #[opt("memory-limit")]
    pub memory_limit_mb: u64,
    #[opt("conn-limit")]
    pub conn_limit: u32,
    /// Size with unit, e.g. `1m`
    #[opt("max-item-size")]
    pub max_item_size: String,
    #[opt("threads")]
    pub threads: u32,
    #[opt("port")]
    pub port: u16,
    #[opt("listen")]
    pub listen: String,
    #[opt("v,noval")]
    pub verbose: bool,
    #[opt("vv,single-hyphen,noval")]
    pub very_verbose: bool,
    #[opt(extra)]
    pub extra: ExtraOpts,
}

impl Component for MemcachedOptions {
    const NAME: &'static str = "memcached";

    fn validate(&self) -> Result<(), ValidationError> {
        if self.verbose && self.very_verbose {
            return Err(ValidationError::Invalid {
                component: Self::NAME,
                message: "verbose and very_verbose are mutually exclusive".to_string(),
            });
        }
        Ok(())
    }
}
