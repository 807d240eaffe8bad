//! Command dispatch and the shared result-to-envelope assembly.

mod portfolio;
mod products;
mod scan;

use serde_json::Value;
use sigmatick_core::{Envelope, EnvelopeError, EnvelopeMeta, SourceError};
use uuid::Uuid;

use crate::cli::{Cli, Command, PortfolioCommand};
use crate::error::CliError;

/// What a command hands back before envelope assembly.
#[derive(Debug)]
pub struct CommandResult {
    data: Value,
    text: String,
    source: String,
    warnings: Vec<String>,
    errors: Vec<EnvelopeError>,
    latency_ms: u64,
}

impl CommandResult {
    /// A successful result. Offline commands keep the default `local` source.
    pub fn ok(data: Value, text: impl Into<String>) -> Self {
        Self {
            data,
            text: text.into(),
            source: "local".to_owned(),
            warnings: Vec::new(),
            errors: Vec::new(),
            latency_ms: 0,
        }
    }

    /// A fetch that failed upstream. The invocation itself still succeeds so
    /// the caller gets an envelope with the error payload inside.
    pub fn failed(error: &SourceError, text: impl Into<String>) -> Self {
        Self {
            data: Value::Null,
            text: text.into(),
            source: "local".to_owned(),
            warnings: Vec::new(),
            errors: vec![EnvelopeError::from(error)],
            latency_ms: 0,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A rendered command outcome: the envelope plus its human-readable text.
#[derive(Debug)]
pub struct CommandOutput {
    pub envelope: Envelope<Value>,
    pub text: String,
}

/// Route the parsed CLI invocation to its command and wrap the result.
pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let result = match &cli.command {
        Command::Scan(args) => scan::run(args, cli.timeout_ms).await?,
        Command::Portfolio(PortfolioCommand::Common(args)) => portfolio::run_common(args)?,
        Command::Portfolio(PortfolioCommand::Popular(args)) => portfolio::run_popular(args)?,
        Command::Products(args) => products::run(args)?,
    };

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        result.source,
        result.latency_ms,
    );
    for warning in result.warnings {
        meta.push_warning(warning);
    }

    let envelope = if result.errors.is_empty() {
        Envelope::success(meta, result.data)
    } else {
        Envelope::with_errors(meta, result.data, result.errors)
    };

    Ok(CommandOutput {
        envelope,
        text: result.text,
    })
}
