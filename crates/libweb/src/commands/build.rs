//! Bundle build command.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use libweb_bundle::{BundleConfig, Bundler, EngineConfig, Orchestrator};

/// Configuration file structure (libweb.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    bundle: BundleSettings,
}

#[derive(Debug, Deserialize)]
struct BundleSettings {
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_engine")]
    engine: String,
    #[serde(default = "default_sass")]
    sass: String,
    #[serde(default)]
    server: ServerSettings,
    #[serde(default)]
    client: ClientSettings,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            engine: default_engine(),
            sass: default_sass(),
            server: ServerSettings::default(),
            client: ClientSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ServerSettings {
    #[serde(default = "default_server_entry")]
    entry: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            entry: default_server_entry(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ClientSettings {
    #[serde(default = "default_client_entries")]
    entries: Vec<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            entries: default_client_entries(),
        }
    }
}

fn default_output() -> String {
    "dist".to_string()
}
fn default_engine() -> String {
    "esbuild".to_string()
}
fn default_sass() -> String {
    "sass".to_string()
}
fn default_server_entry() -> String {
    "main.js".to_string()
}
fn default_client_entries() -> Vec<String> {
    vec![
        "static/default.js".to_string(),
        "static/default.scss".to_string(),
    ]
}

/// Load configuration from libweb.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config() -> Result<ConfigFile> {
    let config_path = PathBuf::from("libweb.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read libweb.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse libweb.toml: {}", e))?;
        tracing::info!("Loaded config from libweb.toml");
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub async fn run(output: Option<PathBuf>, minify: bool) -> Result<()> {
    let settings = load_config()?.bundle;
    run_with(settings, output, minify).await
}

/// Run the two bundles for the given settings and report the outcome.
async fn run_with(settings: BundleSettings, output: Option<PathBuf>, minify: bool) -> Result<()> {
    tracing::info!("Building server and client bundles...");

    let output_dir = output.unwrap_or_else(|| PathBuf::from(&settings.output));

    let mut server = BundleConfig::server(&output_dir, &settings.server.entry);
    server.minify = minify;

    let mut client = BundleConfig::client(
        &output_dir,
        settings.client.entries.iter().map(PathBuf::from).collect(),
    );
    client.minify = minify;

    let engine = EngineConfig {
        bundler: settings.engine,
        sass: settings.sass,
    };

    let orchestrator = Orchestrator::new(Bundler::new(engine), server, client);
    let (server_report, client_report) = orchestrator.build_all().await?;

    tracing::info!(
        "Styles and scripts compiled: {} server entry, {} client entries in {}ms",
        server_report.entry_points,
        client_report.entry_points,
        server_report.duration_ms.max(client_report.duration_ms)
    );

    tracing::info!("Output: {}", output_dir.display());

    Ok(())
}
