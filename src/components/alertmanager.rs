//! Alertmanager flag set.

use super::{require, Component, LogOpts, ValidationError};
use crate::encoder::ExtraOpts;
use crate::utils::Duration;
use crate::Options;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Options)]
#[serde(default)]
pub struct AlertmanagerOptions {
    #[opt("config.file")]
    pub config_file: PathBuf,
    #[opt("storage.path")]
    pub storage_path: PathBuf,
    #[opt("data.retention")]
    pub data_retention: Duration,
    #[opt("web.listen-address")]
    pub web_listen_address: Option<SocketAddr>,
    #[opt("web.external-url")]
    pub web_external_url: String,
    #[opt("web.route-prefix")]
    pub web_route_prefix: String,
    #[opt("cluster.listen-address")]
    pub cluster_listen_address: Option<SocketAddr>,
    /// Consulted only when `cluster_listen_address` is unset; `Some("")`
    /// renders `--cluster.listen-address=` and disables clustering.
    #[opt("cluster.listen-address")]
    pub cluster_listen_address_raw: Option<String>,
    #[opt("cluster.advertise-address")]
    pub cluster_advertise_address: Option<SocketAddr>,
    #[opt("cluster.peer")]
    pub cluster_peers: Vec<String>,
    #[opt(flatten)]
    pub log: LogOpts,
    #[opt(extra)]
    pub extra: ExtraOpts,
}

impl AlertmanagerOptions {
    /// Run a single replica with gossip turned off
    pub fn disable_clustering(&mut self) {
        self.cluster_listen_address = None;
        self.cluster_listen_address_raw = Some(String::new());
        self.cluster_peers.clear();
    }
}

impl Component for AlertmanagerOptions {
    const NAME: &'static str = "alertmanager";

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::NAME, "config_file", self.config_file.as_os_str().is_empty())
    }
}
