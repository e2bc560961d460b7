//! CLI execution context.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use oplog_observability::{LogSink, StdoutSink, TracingSink, WriterSink};

use crate::config::CliConfig;
use crate::output::Output;

/// Where lifecycle lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SinkKind {
    /// Plain lines on standard output.
    Stdout,
    /// `tracing` events, printed by the installed subscriber.
    Tracing,
}

impl SinkKind {
    /// Build the sink. With `--json`, stdout carries only the report, so
    /// plain lifecycle lines move to stderr.
    pub fn build(self, json: bool) -> Arc<dyn LogSink> {
        match (self, json) {
            (SinkKind::Stdout, false) => Arc::new(StdoutSink),
            (SinkKind::Stdout, true) => Arc::new(WriterSink::new(io::stderr())),
            (SinkKind::Tracing, _) => Arc::new(TracingSink),
        }
    }
}

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Sink shared by every wrapped operation.
    pub sink: Arc<dyn LogSink>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output, sink: SinkKind) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };
        tracing::debug!(?config, "configuration loaded");

        let sink = sink.build(output.is_json());

        Ok(Self {
            config,
            output,
            sink,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["oplog.toml", ".oplog.toml", "oplog.json"];

        let mut current = PathBuf::from(start);
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable config"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}
