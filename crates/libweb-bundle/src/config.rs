//! Build configuration records.

use std::path::PathBuf;

/// Target platform for a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Server runtime (Node-compatible)
    Node,
    /// Browser runtime
    Browser,
}

impl Platform {
    /// Engine CLI flag value.
    pub fn as_flag(self) -> &'static str {
        match self {
            Platform::Node => "node",
            Platform::Browser => "browser",
        }
    }
}

/// Output module format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleFormat {
    /// CommonJS, for the server bundle
    CommonJs,
    /// ECMAScript modules, for the browser bundle
    EsModule,
}

impl ModuleFormat {
    /// Engine CLI flag value.
    pub fn as_flag(self) -> &'static str {
        match self {
            ModuleFormat::CommonJs => "cjs",
            ModuleFormat::EsModule => "esm",
        }
    }
}

/// Immutable description of one engine invocation.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Label used in logs and reports ("server", "client")
    pub label: String,

    /// Output directory for bundle artifacts
    pub output_dir: PathBuf,

    /// Entry files the engine traces dependencies from
    pub entry_points: Vec<PathBuf>,

    /// Target platform
    pub platform: Platform,

    /// Output module format
    pub format: ModuleFormat,

    /// Target runtime version, e.g. "node16" or "es2020"
    pub target: String,

    /// Combine traced dependencies into the output
    pub bundle: bool,

    /// Minify the output
    pub minify: bool,

    /// Drop unreferenced exports
    pub tree_shaking: bool,
}

impl BundleConfig {
    /// Server bundle: CommonJS for a Node-compatible runtime, one entry.
    pub fn server(output_dir: impl Into<PathBuf>, entry: impl Into<PathBuf>) -> Self {
        Self {
            label: "server".to_string(),
            output_dir: output_dir.into(),
            entry_points: vec![entry.into()],
            platform: Platform::Node,
            format: ModuleFormat::CommonJs,
            target: "node16".to_string(),
            bundle: true,
            minify: false,
            tree_shaking: true,
        }
    }

    /// Client bundle: ES modules for browsers, script and stylesheet entries.
    pub fn client(output_dir: impl Into<PathBuf>, entry_points: Vec<PathBuf>) -> Self {
        Self {
            label: "client".to_string(),
            output_dir: output_dir.into(),
            entry_points,
            platform: Platform::Browser,
            format: ModuleFormat::EsModule,
            target: "es2020".to_string(),
            bundle: true,
            minify: false,
            tree_shaking: true,
        }
    }
}

/// External tool commands.
///
/// Overridable so deployments can pin binaries and tests can substitute
/// stubs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Bundling engine command
    pub bundler: String,

    /// SCSS compiler command
    pub sass: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bundler: "esbuild".to_string(),
            sass: "sass".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_targets_node() {
        let config = BundleConfig::server("dist", "main.js");

        assert_eq!(config.platform, Platform::Node);
        assert_eq!(config.format, ModuleFormat::CommonJs);
        assert_eq!(config.target, "node16");
        assert_eq!(config.entry_points, vec![PathBuf::from("main.js")]);
        assert!(config.bundle);
        assert!(config.tree_shaking);
        assert!(!config.minify);
    }

    #[test]
    fn client_config_targets_browsers() {
        let config = BundleConfig::client(
            "dist",
            vec![
                PathBuf::from("static/default.js"),
                PathBuf::from("static/default.scss"),
            ],
        );

        assert_eq!(config.platform, Platform::Browser);
        assert_eq!(config.format, ModuleFormat::EsModule);
        assert_eq!(config.target, "es2020");
        assert_eq!(config.entry_points.len(), 2);
    }

    #[test]
    fn flag_values_match_engine_vocabulary() {
        assert_eq!(Platform::Node.as_flag(), "node");
        assert_eq!(Platform::Browser.as_flag(), "browser");
        assert_eq!(ModuleFormat::CommonJs.as_flag(), "cjs");
        assert_eq!(ModuleFormat::EsModule.as_flag(), "esm");
    }
}
