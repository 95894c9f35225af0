//! External bundling engine invocation.
//!
//! The engine remains an external tool; this module only maps a
//! [`BundleConfig`] onto its CLI flags, spawns it, and reports the outcome.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use tokio::process::Command;

use crate::config::{BundleConfig, EngineConfig};
use crate::styles::{StyleError, StylePipeline};

/// Result of one completed bundle.
#[derive(Debug)]
pub struct BuildReport {
    /// Which bundle this was ("server", "client")
    pub label: String,

    /// Number of entry points handed to the engine
    pub entry_points: usize,

    /// Wall-clock build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur while bundling.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Bundler not found: {0}")]
    EngineNotFound(String),

    #[error("{label} bundle failed ({status}): {stderr}")]
    EngineFailed {
        label: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Stylesheet preprocessing failed: {0}")]
    Styles(#[from] StyleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invokes the external bundling engine.
pub struct Bundler {
    engine: EngineConfig,
    styles: StylePipeline,
}

impl Bundler {
    /// Create a bundler for the given external tool commands.
    pub fn new(engine: EngineConfig) -> Self {
        let styles = StylePipeline::new(engine.sass.clone());
        Self { engine, styles }
    }

    /// Run one bundle to completion.
    ///
    /// SCSS entry points are compiled and prefixed first; the engine then
    /// receives the staged CSS in their place.
    pub async fn build(&self, config: &BundleConfig) -> Result<BuildReport, BundleError> {
        let start = Instant::now();

        let program = which::which(&self.engine.bundler)
            .map_err(|_| BundleError::EngineNotFound(self.engine.bundler.clone()))?;

        fs::create_dir_all(&config.output_dir)?;

        let staging = config.output_dir.join(".styles");
        let mut entries = Vec::with_capacity(config.entry_points.len());
        for entry in &config.entry_points {
            if entry.extension().and_then(|e| e.to_str()) == Some("scss") {
                entries.push(self.styles.process(entry, &staging).await?);
            } else {
                entries.push(entry.clone());
            }
        }

        let mut cmd = Command::new(program);
        cmd.args(&entries);
        if config.bundle {
            cmd.arg("--bundle");
        }
        if config.minify {
            cmd.arg("--minify");
        }
        cmd.arg(format!("--tree-shaking={}", config.tree_shaking));
        cmd.arg(format!("--outdir={}", config.output_dir.display()));
        cmd.arg(format!("--platform={}", config.platform.as_flag()));
        cmd.arg(format!("--format={}", config.format.as_flag()));
        cmd.arg(format!("--target={}", config.target));

        tracing::debug!("Running {} bundle via {}", config.label, self.engine.bundler);

        let output = cmd.output().await?;

        if !output.status.success() {
            return Err(BundleError::EngineFailed {
                label: config.label.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(BuildReport {
            label: config.label.clone(),
            entry_points: entries.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: config.output_dir.clone(),
        })
    }
}
