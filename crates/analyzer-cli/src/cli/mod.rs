//! CLI argument definitions and input-mode resolution for `svc-analyzer`.
//!
//! Uses clap derive macros for argument parsing. Exactly one input method is
//! chosen per run: a known service name, a free-text description, or the
//! interactive menu.

pub mod analyze;
pub mod display;
pub mod interactive;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  svc-analyzer --service \"Spotify\"
  svc-analyzer --text \"A social media platform for professionals\"
  svc-analyzer --service \"Notion\" --output report.md
  svc-analyzer --interactive";

/// Generate comprehensive analysis reports for digital services.
#[derive(Parser, Debug)]
#[command(name = "svc-analyzer", version, long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Name of a known service (e.g., Spotify, Notion, Netflix).
    #[arg(short, long, value_name = "NAME", conflicts_with = "text")]
    pub service: Option<String>,

    /// Custom service description text.
    #[arg(short, long, value_name = "DESCRIPTION")]
    pub text: Option<String>,

    /// Output filename (default: service_analysis_report.md).
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Option<String>,

    /// Run in interactive mode.
    #[arg(short, long)]
    pub interactive: bool,

    /// List the recognized services and exit.
    #[arg(long)]
    pub list_services: bool,

    /// Configuration file (default: ~/.service-analyzer/config.toml).
    #[arg(long, value_name = "PATH", env = "SERVICE_ANALYZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the model identifier.
    #[arg(long, env = "SERVICE_ANALYZER_MODEL")]
    pub model: Option<String>,

    /// Override the OpenAI-compatible API base URL.
    #[arg(long, value_name = "URL", env = "SERVICE_ANALYZER_BASE_URL")]
    pub base_url: Option<String>,

    /// Environment file to load before reading the API key (default: .env).
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long)]
    pub otel: bool,

    /// Suppress all log output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed log output (-v for verbose, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How this run obtains its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Interactive,
    Single(String),
}

impl Cli {
    /// Resolve the effective input mode.
    ///
    /// Interactive wins over the single-shot flags; blank `--service` /
    /// `--text` values count as absent. `None` means no method was chosen.
    pub fn input_mode(&self) -> Option<InputMode> {
        if self.interactive {
            return Some(InputMode::Interactive);
        }

        self.service
            .as_deref()
            .or(self.text.as_deref())
            .filter(|s| !s.trim().is_empty())
            .map(|s| InputMode::Single(s.to_string()))
    }
}
