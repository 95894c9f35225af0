//! Concurrent server/client build orchestration.

use crate::config::BundleConfig;
use crate::engine::{BuildReport, BundleError, Bundler};

/// Aggregate outcome when at least one build fails.
///
/// The builds are independent, so both failures are preserved when both
/// occur; the caller decides exit-code policy from the aggregate.
#[derive(Debug, thiserror::Error)]
pub enum BuildFailure {
    #[error("server build failed: {0}")]
    Server(#[source] BundleError),

    #[error("client build failed: {0}")]
    Client(#[source] BundleError),

    #[error("server build failed: {server}; client build failed: {client}")]
    Both {
        server: BundleError,
        client: BundleError,
    },
}

/// Runs the server and client bundles.
pub struct Orchestrator {
    bundler: Bundler,
    server: BundleConfig,
    client: BundleConfig,
}

impl Orchestrator {
    /// Create an orchestrator for the two configured bundles.
    pub fn new(bundler: Bundler, server: BundleConfig, client: BundleConfig) -> Self {
        Self {
            bundler,
            server,
            client,
        }
    }

    /// Run both builds to completion and aggregate the outcome.
    ///
    /// The builds are started together and neither awaits or cancels the
    /// other; failures are reported only after both have finished.
    pub async fn build_all(&self) -> Result<(BuildReport, BuildReport), BuildFailure> {
        let (server, client) = tokio::join!(
            self.bundler.build(&self.server),
            self.bundler.build(&self.client),
        );

        match (server, client) {
            (Ok(server), Ok(client)) => Ok((server, client)),
            (Err(e), Ok(_)) => {
                tracing::error!("server build failed: {e}");
                Err(BuildFailure::Server(e))
            }
            (Ok(_), Err(e)) => {
                tracing::error!("client build failed: {e}");
                Err(BuildFailure::Client(e))
            }
            (Err(server), Err(client)) => {
                tracing::error!("server build failed: {server}");
                tracing::error!("client build failed: {client}");
                Err(BuildFailure::Both { server, client })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::tempdir;

    /// Stub engine driven by platform flag: exits non-zero for the listed
    /// platforms, zero otherwise.
    fn platform_stub(dir: &Path, failing_platforms: &[&str]) -> String {
        let mut script = String::from("#!/bin/sh\ncase \"$@\" in\n");
        for platform in failing_platforms {
            script.push_str(&format!("  *--platform={platform}*) exit 1;;\n"));
        }
        script.push_str("esac\nexit 0\n");

        let path = dir.join("engine-stub.sh");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    fn orchestrator(dir: &Path, failing_platforms: &[&str]) -> Orchestrator {
        let engine = EngineConfig {
            bundler: platform_stub(dir, failing_platforms),
            sass: "sass".to_string(),
        };
        let dist = dir.join("dist");
        Orchestrator::new(
            Bundler::new(engine),
            BundleConfig::server(&dist, "main.js"),
            BundleConfig::client(&dist, vec!["static/default.js".into()]),
        )
    }

    #[tokio::test]
    async fn both_builds_succeed() {
        let temp = tempdir().unwrap();

        let (server, client) = orchestrator(temp.path(), &[]).build_all().await.unwrap();

        assert_eq!(server.label, "server");
        assert_eq!(client.label, "client");
    }

    #[tokio::test]
    async fn server_failure_fails_the_aggregate() {
        let temp = tempdir().unwrap();

        let err = orchestrator(temp.path(), &["node"])
            .build_all()
            .await
            .unwrap_err();

        assert!(matches!(err, BuildFailure::Server(_)));
    }

    #[tokio::test]
    async fn client_failure_fails_the_aggregate() {
        let temp = tempdir().unwrap();

        let err = orchestrator(temp.path(), &["browser"])
            .build_all()
            .await
            .unwrap_err();

        assert!(matches!(err, BuildFailure::Client(_)));
    }

    #[tokio::test]
    async fn both_failures_are_preserved() {
        let temp = tempdir().unwrap();

        let err = orchestrator(temp.path(), &["node", "browser"])
            .build_all()
            .await
            .unwrap_err();

        match err {
            BuildFailure::Both { server, client } => {
                assert!(matches!(server, BundleError::EngineFailed { .. }));
                assert!(matches!(client, BundleError::EngineFailed { .. }));
            }
            other => panic!("unexpected aggregate: {other}"),
        }
    }
}
