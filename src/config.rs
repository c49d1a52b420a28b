//! Manifest configuration: which components to render and with which options.
//!
//! ```yaml
//! components:
//!   - name: thanos-compact
//!     kind: thanos_compact
//!     options:
//!       data_dir: /var/thanos/compact
//!       retention_resolution_raw: 30d
//!       extra:
//!         - --objstore.config=$(OBJSTORE_CONFIG)
//!   - name: index-cache
//!     kind: memcached
//!     options:
//!       memory_limit_mb: 2048
//! ```

use crate::components::{
    AlertmanagerOptions, CompactOptions, Component, MemcachedOptions, QueryOptions,
    ReceiveOptions, StoreOptions, ValidationError,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Errors in a manifest that are detected before or while building arguments
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Component name cannot be empty")]
    EmptyName,

    #[error("Duplicate component name: {0}")]
    DuplicateName(String),

    #[error("Invalid options for component {name}: {source}")]
    InvalidOptions {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Component {name} is misconfigured: {source}")]
    Validation {
        name: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    ThanosCompact,
    ThanosQuery,
    ThanosStore,
    ThanosReceive,
    Alertmanager,
    Memcached,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComponentKind::ThanosCompact => "thanos_compact",
            ComponentKind::ThanosQuery => "thanos_query",
            ComponentKind::ThanosStore => "thanos_store",
            ComponentKind::ThanosReceive => "thanos_receive",
            ComponentKind::Alertmanager => "alertmanager",
            ComponentKind::Memcached => "memcached",
        })
    }
}

/// Top-level manifest
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub components: Vec<ComponentConfig>,
}

impl Manifest {
    /// Check names and every component's options
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut names = HashSet::new();
        for component in &self.components {
            if component.name.is_empty() {
                return Err(ManifestError::EmptyName);
            }
            if !names.insert(component.name.as_str()) {
                return Err(ManifestError::DuplicateName(component.name.clone()));
            }
            component.spec()?.validate().map_err(|source| ManifestError::Validation {
                name: component.name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn component(&self, name: &str) -> Option<&ComponentConfig> {
        self.components.iter().find(|c| c.name == name)
    }
}

/// One component entry; `options` is interpreted according to `kind`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub name: String,
    pub kind: ComponentKind,
    #[serde(default)]
    pub options: serde_yaml::Value,
}

/// Typed options of a component
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentSpec {
    ThanosCompact(CompactOptions),
    ThanosQuery(QueryOptions),
    ThanosStore(StoreOptions),
    ThanosReceive(ReceiveOptions),
    Alertmanager(AlertmanagerOptions),
    Memcached(MemcachedOptions),
}

impl ComponentSpec {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ComponentSpec::ThanosCompact(o) => o.validate(),
            ComponentSpec::ThanosQuery(o) => o.validate(),
            ComponentSpec::ThanosStore(o) => o.validate(),
            ComponentSpec::ThanosReceive(o) => o.validate(),
            ComponentSpec::Alertmanager(o) => o.validate(),
            ComponentSpec::Memcached(o) => o.validate(),
        }
    }

    pub fn args(&self) -> Result<Vec<String>, ValidationError> {
        match self {
            ComponentSpec::ThanosCompact(o) => o.args(),
            ComponentSpec::ThanosQuery(o) => o.args(),
            ComponentSpec::ThanosStore(o) => o.args(),
            ComponentSpec::ThanosReceive(o) => o.args(),
            ComponentSpec::Alertmanager(o) => o.args(),
            ComponentSpec::Memcached(o) => o.args(),
        }
    }
}

impl ComponentConfig {
    fn options_as<T: DeserializeOwned + Default>(&self) -> Result<T, ManifestError> {
        if self.options.is_null() {
            return Ok(T::default());
        }
        serde_yaml::from_value(self.options.clone()).map_err(|source| ManifestError::InvalidOptions {
            name: self.name.clone(),
            source,
        })
    }

    /// Deserialize `options` into the struct matching `kind`
    pub fn spec(&self) -> Result<ComponentSpec, ManifestError> {
        Ok(match self.kind {
            ComponentKind::ThanosCompact => ComponentSpec::ThanosCompact(self.options_as()?),
            ComponentKind::ThanosQuery => ComponentSpec::ThanosQuery(self.options_as()?),
            ComponentKind::ThanosStore => ComponentSpec::ThanosStore(self.options_as()?),
            ComponentKind::ThanosReceive => ComponentSpec::ThanosReceive(self.options_as()?),
            ComponentKind::Alertmanager => ComponentSpec::Alertmanager(self.options_as()?),
            ComponentKind::Memcached => ComponentSpec::Memcached(self.options_as()?),
        })
    }

    /// Container argument vector for this component
    pub fn args(&self) -> Result<Vec<String>, ManifestError> {
        self.spec()?.args().map_err(|source| ManifestError::Validation {
            name: self.name.clone(),
            source,
        })
    }
}
