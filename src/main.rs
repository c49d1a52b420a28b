use clap::{Parser, ValueEnum};
use cmdopt::config::ComponentConfig;
use cmdopt::config_loader;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Render container argument vectors from a component manifest
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the component manifest YAML file
    #[arg(short, long)]
    config: PathBuf,

    /// Only render the component with this name
    #[arg(long)]
    component: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// A YAML list of `{name, args}` entries
    Yaml,
    /// A JSON array of `{name, args}` objects
    Json,
    /// One argument per line, components separated by a blank line
    Lines,
}

#[derive(Debug, Serialize)]
struct RenderedComponent<'a> {
    name: &'a str,
    args: Vec<String>,
}

fn render(components: &[RenderedComponent<'_>], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(components)?,
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(components)?;
            out.push('\n');
            out
        }
        OutputFormat::Lines => {
            let blocks: Vec<String> = components
                .iter()
                .map(|c| c.args.iter().map(|a| format!("{}\n", a)).collect())
                .collect();
            blocks.join("\n")
        }
    })
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Manifest file: {:?}", args.config);

    let manifest = config_loader::load_manifest(&args.config)?;

    let selected: Vec<&ComponentConfig> = match &args.component {
        Some(name) => vec![manifest
            .component(name)
            .ok_or_else(|| eyre!("Component '{}' not found in manifest", name))?],
        None => manifest.components.iter().collect(),
    };

    let mut rendered = Vec::with_capacity(selected.len());
    for component in selected {
        let component_args = component.args()?;
        info!(
            "Rendered {} ({}) with {} argument(s)",
            component.name,
            component.kind,
            component_args.len()
        );
        rendered.push(RenderedComponent {
            name: &component.name,
            args: component_args,
        });
    }

    let output = render(&rendered, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, output)
                .wrap_err_with(|| format!("Failed to write output '{}'", path.display()))?;
            info!("Wrote argument vectors to {:?}", path);
        }
        None => print!("{}", output),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RenderedComponent<'static>> {
        vec![
            RenderedComponent {
                name: "query",
                args: vec!["query".into(), "--endpoint=store:10901".into()],
            },
            RenderedComponent {
                name: "cache",
                args: vec!["-v".into()],
            },
        ]
    }

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["cmdopt", "--config", "manifest.yaml"]);

        assert_eq!(args.config, PathBuf::from("manifest.yaml"));
        assert_eq!(args.format, OutputFormat::Yaml);
        assert!(args.component.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_component_and_format_args() {
        let args = Args::parse_from([
            "cmdopt",
            "--config",
            "manifest.yaml",
            "--component",
            "query",
            "--format",
            "json",
        ]);

        assert_eq!(args.component.as_deref(), Some("query"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_render_lines() {
        let out = render(&sample(), OutputFormat::Lines).unwrap();
        assert_eq!(out, "query\n--endpoint=store:10901\n\n-v\n");
    }

    #[test]
    fn test_render_json() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "query");
        assert_eq!(value[1]["args"][0], "-v");
    }

    #[test]
    fn test_render_yaml() {
        let out = render(&sample(), OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value[0]["args"][1].as_str(), Some("--endpoint=store:10901"));
    }
}
