use std::io::Write;
use tempfile::NamedTempFile;

use cmdopt::config::{ComponentKind, ComponentSpec};
use cmdopt::config_loader::load_manifest;

const MANIFEST: &str = r#"
components:
  - name: thanos-compact
    kind: thanos_compact
    options:
      data_dir: /var/thanos/compact
      wait: true
      retention_resolution_raw: 30d
      retention_resolution_5m: 90d
      retention_resolution_1h: 1y
      deduplication_replica_labels: [replica]
      extra:
        - --objstore.config=$(OBJSTORE_CONFIG)
  - name: thanos-query
    kind: thanos_query
    options:
      grpc_address: 0.0.0.0:10901
      http_address: 0.0.0.0:9090
      endpoints:
        - dnssrv+_grpc._tcp.thanos-store.observability.svc
      timeout: 5m
      log:
        level: info
        format: logfmt
  - name: thanos-receive
    kind: thanos_receive
    options:
      tsdb_path: /var/thanos/receive
      replication_factor: 1
  - name: alertmanager
    kind: alertmanager
    options:
      config_file: /etc/alertmanager/config.yaml
      cluster_listen_address_raw: ""
  - name: index-cache
    kind: memcached
    options:
      memory_limit_mb: 2048
      max_item_size: 1m
      very_verbose: true
"#;

fn load() -> cmdopt::config::Manifest {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", MANIFEST).unwrap();
    load_manifest(temp_file.path()).unwrap()
}

fn args_of(name: &str) -> Vec<String> {
    load().component(name).unwrap().args().unwrap()
}

#[test]
fn test_manifest_kinds() {
    let manifest = load();
    let kinds: Vec<_> = manifest.components.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ComponentKind::ThanosCompact,
            ComponentKind::ThanosQuery,
            ComponentKind::ThanosReceive,
            ComponentKind::Alertmanager,
            ComponentKind::Memcached,
        ]
    );
    assert!(matches!(
        manifest.components[0].spec().unwrap(),
        ComponentSpec::ThanosCompact(_)
    ));
}

#[test]
fn test_compact_from_manifest() {
    assert_eq!(
        args_of("thanos-compact"),
        vec![
            "compact",
            "--data-dir=/var/thanos/compact",
            "--wait",
            "--retention.resolution-raw=30d",
            "--retention.resolution-5m=90d",
            "--retention.resolution-1h=1y",
            "--deduplication.replica-label=replica",
            "--objstore.config=$(OBJSTORE_CONFIG)",
        ]
    );
}

#[test]
fn test_query_from_manifest() {
    assert_eq!(
        args_of("thanos-query"),
        vec![
            "query",
            "--grpc-address=0.0.0.0:10901",
            "--http-address=0.0.0.0:9090",
            "--endpoint=dnssrv+_grpc._tcp.thanos-store.observability.svc",
            "--query.timeout=5m0s",
            "--log.level=info",
            "--log.format=logfmt",
        ]
    );
}

#[test]
fn test_receive_from_manifest() {
    assert_eq!(
        args_of("thanos-receive"),
        vec![
            "receive",
            "--tsdb.path=/var/thanos/receive",
            "--receive.replication-factor=1",
        ]
    );
}

#[test]
fn test_alertmanager_from_manifest() {
    assert_eq!(
        args_of("alertmanager"),
        vec![
            "--config.file=/etc/alertmanager/config.yaml",
            "--cluster.listen-address=",
        ]
    );
}

#[test]
fn test_memcached_from_manifest() {
    assert_eq!(
        args_of("index-cache"),
        vec!["--memory-limit=2048", "--max-item-size=1m", "-vv"]
    );
}
