//! Stylesheet preprocessing.
//!
//! SCSS compilation is delegated to an external compiler; the compiled CSS
//! is then vendor-prefixed in-process with lightningcss before the bundling
//! engine consumes it as an entry point.

use std::fs;
use std::path::{Path, PathBuf};

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use lightningcss::targets::{Browsers, Targets};
use tokio::process::Command;

/// Errors from the style pipeline.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("SCSS compiler not found: {0}")]
    CompilerNotFound(String),

    #[error("SCSS compilation failed ({status}): {stderr}")]
    CompileFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("CSS parse error: {0}")]
    Parse(String),

    #[error("CSS print error: {0}")]
    Print(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Browser versions in lightningcss encoding (major << 16 | minor << 8).
const fn version(major: u32, minor: u32) -> u32 {
    (major << 16) | (minor << 8)
}

/// Prefixing targets roughly matching an es2020 browser baseline.
fn default_targets() -> Browsers {
    Browsers {
        chrome: Some(version(80, 0)),
        edge: Some(version(80, 0)),
        firefox: Some(version(72, 0)),
        safari: Some(version(13, 1)),
        ios_saf: Some(version(13, 4)),
        ..Browsers::default()
    }
}

/// Compiles SCSS entries and vendor-prefixes the compiled output.
pub struct StylePipeline {
    sass: String,
    targets: Browsers,
}

impl StylePipeline {
    /// Create a pipeline using the given SCSS compiler command.
    pub fn new(sass: String) -> Self {
        Self {
            sass,
            targets: default_targets(),
        }
    }

    /// Compile one SCSS entry into the staging directory and prefix the
    /// result. Returns the staged CSS path for the engine to consume.
    ///
    /// Stale staged output from a previous run is overwritten.
    pub async fn process(&self, entry: &Path, staging: &Path) -> Result<PathBuf, StyleError> {
        fs::create_dir_all(staging)?;

        let stem = entry
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("style");
        let staged = staging.join(format!("{stem}.css"));

        let program = which::which(&self.sass)
            .map_err(|_| StyleError::CompilerNotFound(self.sass.clone()))?;

        let output = Command::new(program)
            .arg(entry)
            .arg(&staged)
            .output()
            .await?;

        if !output.status.success() {
            return Err(StyleError::CompileFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let css = fs::read_to_string(&staged)?;
        let prefixed = autoprefix(&css, self.targets.clone())?;
        fs::write(&staged, prefixed)?;

        Ok(staged)
    }
}

/// Add vendor prefixes for the given browser targets.
pub fn autoprefix(css: &str, browsers: Browsers) -> Result<String, StyleError> {
    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| StyleError::Parse(e.to_string()))?;

    let out = stylesheet
        .to_css(PrinterOptions {
            targets: Targets::from(browsers),
            ..Default::default()
        })
        .map_err(|e| StyleError::Print(e.to_string()))?;

    Ok(out.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    /// Stub SCSS compiler: copies its input to its output.
    fn stub_sass(dir: &Path) -> String {
        let path = dir.join("sass-stub.sh");
        fs::write(&path, "#!/bin/sh\ncp \"$1\" \"$2\"\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    #[test]
    fn autoprefix_adds_vendor_prefixes() {
        let css = ".tabs { user-select: none; }";

        let out = autoprefix(css, default_targets()).unwrap();

        assert!(out.contains("-webkit-user-select"));
        assert!(out.contains("user-select"));
    }

    #[test]
    fn autoprefix_rejects_invalid_css() {
        assert!(matches!(
            autoprefix("..broken { color: red }", default_targets()),
            Err(StyleError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn process_stages_prefixed_css() {
        let temp = tempdir().unwrap();
        let entry = temp.path().join("default.scss");
        fs::write(&entry, ".tabs { user-select: none; }").unwrap();

        let pipeline = StylePipeline::new(stub_sass(temp.path()));
        let staging = temp.path().join("staging");

        let staged = pipeline.process(&entry, &staging).await.unwrap();

        assert_eq!(staged, staging.join("default.css"));
        let css = fs::read_to_string(&staged).unwrap();
        assert!(css.contains("-webkit-user-select"));
    }

    #[tokio::test]
    async fn missing_compiler_is_reported() {
        let temp = tempdir().unwrap();
        let entry = temp.path().join("default.scss");
        fs::write(&entry, ".a { color: red; }").unwrap();

        let pipeline = StylePipeline::new("no-such-scss-compiler".to_string());

        let err = pipeline
            .process(&entry, &temp.path().join("staging"))
            .await
            .unwrap_err();

        assert!(matches!(err, StyleError::CompilerNotFound(_)));
    }

    #[tokio::test]
    async fn failing_compiler_surfaces_stderr() {
        let temp = tempdir().unwrap();
        let entry = temp.path().join("default.scss");
        fs::write(&entry, ".a { color: red; }").unwrap();

        let stub = temp.path().join("sass-fail.sh");
        fs::write(&stub, "#!/bin/sh\necho 'bad nesting' >&2\nexit 65\n").unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let pipeline = StylePipeline::new(stub.display().to_string());

        let err = pipeline
            .process(&entry, &temp.path().join("staging"))
            .await
            .unwrap_err();

        match err {
            StyleError::CompileFailed { stderr, .. } => assert!(stderr.contains("bad nesting")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
