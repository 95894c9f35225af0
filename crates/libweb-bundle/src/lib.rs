//! Bundle orchestration for the library website components.
//!
//! Configures an external bundling engine and invokes it twice: once for the
//! server-target bundle and once for the browser-target bundle. Stylesheet
//! entry points are routed through an SCSS compiler and vendor-prefixed
//! before the engine sees them. The two builds run concurrently and their
//! results are aggregated; exit-code policy belongs to the caller.

pub mod config;
pub mod engine;
pub mod orchestrator;
pub mod styles;

pub use config::{BundleConfig, EngineConfig, ModuleFormat, Platform};
pub use engine::{BuildReport, BundleError, Bundler};
pub use orchestrator::{BuildFailure, Orchestrator};
pub use styles::{autoprefix, StyleError, StylePipeline};
