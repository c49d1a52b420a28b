//! Thanos component flag sets.
//!
//! Object storage configuration is usually injected from a secret through an
//! environment variable; callers pass it as an extra option, e.g.
//! `--objstore.config=$(OBJSTORE_CONFIG)`.

use super::{require, Component, LogOpts, ValidationError};
use crate::encoder::ExtraOpts;
use crate::utils::{Duration, ModelDuration};
use crate::Options;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// `thanos compact`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Options)]
#[serde(default)]
pub struct CompactOptions {
    #[opt("data-dir")]
    pub data_dir: PathBuf,
    #[opt("objstore.config")]
    pub objstore_config: String,
    #[opt("objstore.config-file")]
    pub objstore_config_file: Option<PathBuf>,
    #[opt("http-address")]
    pub http_address: Option<SocketAddr>,
    #[opt("wait,noval")]
    pub wait: bool,
    #[opt("wait-interval")]
    pub wait_interval: Duration,
    #[opt("retention.resolution-raw")]
    pub retention_resolution_raw: ModelDuration,
    #[opt("retention.resolution-5m")]
    pub retention_resolution_5m: ModelDuration,
    #[opt("retention.resolution-1h")]
    pub retention_resolution_1h: ModelDuration,
    #[opt("deduplication.replica-label")]
    pub deduplication_replica_labels: Vec<String>,
    #[opt("compact.concurrency")]
    pub concurrency: u32,
    #[opt("downsampling.disable,noval")]
    pub disable_downsampling: bool,
    /// `Some(ZERO)` deletes marked blocks immediately
    #[opt("delete-delay")]
    pub delete_delay: Option<ModelDuration>,
    #[opt(flatten)]
    pub log: LogOpts,
    #[opt(extra)]
    pub extra: ExtraOpts,
}

impl Component for CompactOptions {
    const NAME: &'static str = "thanos compact";
    const SUBCOMMAND: Option<&'static str> = Some("compact");

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::NAME, "data_dir", self.data_dir.as_os_str().is_empty())
    }
}

/// `thanos query`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Options)]
#[serde(default)]
pub struct QueryOptions {
    #[opt("grpc-address")]
    pub grpc_address: Option<SocketAddr>,
    #[opt("http-address")]
    pub http_address: Option<SocketAddr>,
    #[opt("endpoint")]
    pub endpoints: Vec<String>,
    #[opt("query.replica-label")]
    pub replica_labels: Vec<String>,
    #[opt("query.timeout")]
    pub timeout: Duration,
    #[opt("query.lookback-delta")]
    pub lookback_delta: Duration,
    #[opt("query.max-concurrent")]
    pub max_concurrent: u32,
    #[opt("query.auto-downsampling,noval")]
    pub auto_downsampling: bool,
    #[opt("query.partial-response,noval")]
    pub partial_response: bool,
    #[opt("web.prefix-header")]
    pub web_prefix_header: String,
    #[opt(flatten)]
    pub log: LogOpts,
    #[opt(extra)]
    pub extra: ExtraOpts,
}

impl Component for QueryOptions {
    const NAME: &'static str = "thanos query";
    const SUBCOMMAND: Option<&'static str> = Some("query");
}

/// `thanos store`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Options)]
#[serde(default)]
pub struct StoreOptions {
    #[opt("data-dir")]
    pub data_dir: PathBuf,
    #[opt("objstore.config")]
    pub objstore_config: String,
    #[opt("grpc-address")]
    pub grpc_address: Option<SocketAddr>,
    #[opt("http-address")]
    pub http_address: Option<SocketAddr>,
    /// Size with unit, e.g. `250MB`
    #[opt("index-cache-size")]
    pub index_cache_size: String,
    #[opt("index-cache.config")]
    pub index_cache_config: String,
    #[opt("store.limits.request-samples")]
    pub request_samples_limit: u64,
    #[opt("store.limits.request-series")]
    pub request_series_limit: u64,
    #[opt("store.grpc.series-max-concurrency")]
    pub series_max_concurrency: u32,
    #[opt("block-sync-concurrency")]
    pub block_sync_concurrency: u32,
    #[opt("ignore-deletion-marks-delay")]
    pub ignore_deletion_marks_delay: Duration,
    /// RFC 3339 timestamp or a duration relative to now, e.g. `-2w`
    #[opt("min-time")]
    pub min_time: String,
    #[opt("max-time")]
    pub max_time: String,
    #[opt(flatten)]
    pub log: LogOpts,
    #[opt(extra)]
    pub extra: ExtraOpts,
}

impl Component for StoreOptions {
    const NAME: &'static str = "thanos store";
    const SUBCOMMAND: Option<&'static str> = Some("store");

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::NAME, "data_dir", self.data_dir.as_os_str().is_empty())
    }
}

/// `thanos receive`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Options)]
#[serde(default)]
pub struct ReceiveOptions {
    #[opt("tsdb.path")]
    pub tsdb_path: PathBuf,
    #[opt("tsdb.retention")]
    pub tsdb_retention: ModelDuration,
    #[opt("grpc-address")]
    pub grpc_address: Option<SocketAddr>,
    #[opt("http-address")]
    pub http_address: Option<SocketAddr>,
    #[opt("remote-write.address")]
    pub remote_write_address: Option<SocketAddr>,
    /// External labels in `key="value"` form
    #[opt("label")]
    pub labels: Vec<String>,
    #[opt("receive.local-endpoint")]
    pub local_endpoint: String,
    #[opt("receive.hashrings-file")]
    pub hashrings_file: Option<PathBuf>,
    #[opt("receive.replication-factor")]
    pub replication_factor: Option<u32>,
    #[opt("receive.tenant-header")]
    pub tenant_header: String,
    #[opt(flatten)]
    pub log: LogOpts,
    #[opt(extra)]
    pub extra: ExtraOpts,
}

impl Component for ReceiveOptions {
    const NAME: &'static str = "thanos receive";
    const SUBCOMMAND: Option<&'static str> = Some("receive");

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::NAME, "tsdb_path", self.tsdb_path.as_os_str().is_empty())?;
        if self.replication_factor == Some(0) {
            return Err(ValidationError::Invalid {
                component: Self::NAME,
                message: "replication_factor must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
