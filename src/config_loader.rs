use crate::config::Manifest;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use std::fs::File;
use std::path::Path;

/// Load, parse and validate a manifest from a YAML file
pub fn load_manifest(manifest_path: &Path) -> Result<Manifest> {
    info!("Loading manifest from: {:?}", manifest_path);

    let file = File::open(manifest_path)
        .wrap_err_with(|| format!("Failed to open manifest '{}'", manifest_path.display()))?;

    let manifest: Manifest = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse manifest '{}'", manifest_path.display()))?;

    if manifest.components.is_empty() {
        warn!("Manifest {:?} declares no components", manifest_path);
    }

    manifest.validate()?;
    info!("Loaded {} component(s)", manifest.components.len());

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_manifest() {
        let yaml = r#"
components:
  - name: thanos-store
    kind: thanos_store
    options:
      data_dir: /var/thanos/store
      index_cache_size: 250MB
      log:
        level: warn
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let manifest = load_manifest(temp_file.path()).unwrap();
        let args = manifest.component("thanos-store").unwrap().args().unwrap();
        assert_eq!(
            args,
            vec![
                "store",
                "--data-dir=/var/thanos/store",
                "--index-cache-size=250MB",
                "--log.level=warn",
            ]
        );
    }

    #[test]
    fn test_load_rejects_invalid_component() {
        let yaml = r#"
components:
  - name: receive
    kind: thanos_receive
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let err = load_manifest(temp_file.path()).unwrap_err();
        assert!(format!("{:?}", err).contains("tsdb_path"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_manifest(Path::new("/nonexistent/manifest.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to open manifest"));
    }
}
