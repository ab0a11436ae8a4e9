//! Service analyzer CLI entry point.
//!
//! Binary name: `svc-analyzer`
//!
//! Parses CLI arguments, loads configuration and the API key, then runs
//! either a single analysis or the interactive menu loop.

mod cli;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use console::style;

use analyzer_core::catalog::KnownServiceCatalog;
use analyzer_core::report::generator::{GenerationSettings, ReportGenerator};
use analyzer_core::report::sink::ReportSaver;
use analyzer_infra::config::{load_config, load_config_file, resolve_data_dir};
use analyzer_infra::filesystem::FileReportSink;
use analyzer_infra::llm::create_provider;
use analyzer_infra::secret::env::{EnvSecretProvider, load_dotenv};
use analyzer_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use analyzer_types::config::AnalyzerConfig;

use cli::interactive::{DialoguerPrompter, InteractiveShell, LinePrompter, Prompter};
use cli::{Cli, InputMode};

// Requests run one at a time; a single-threaded runtime is all the CLI needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let code = run(cli).await;
    shutdown_tracing();
    code
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.list_services {
        cli::display::print_service_table(&KnownServiceCatalog::new());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(mode) = cli.input_mode() else {
        eprintln!(
            "{} Please provide either --service, --text, or use --interactive mode",
            style("Error:").red().bold()
        );
        eprintln!();
        Cli::command().print_help()?;
        return Ok(ExitCode::from(2));
    };

    load_dotenv(cli.env_file.as_deref());
    let config = effective_config(&cli).await?;

    let api_key = match EnvSecretProvider::new().require(&config.api_key_env) {
        Ok(key) => key,
        Err(err) => {
            tracing::debug!(error = %err, "API key unavailable");
            eprintln!("{} {err}.", style("Error:").red().bold());
            eprintln!(
                "Please set your {} in the .env file or as an environment variable.",
                config.credential_label
            );
            return Ok(ExitCode::from(1));
        }
    };

    let provider = create_provider(&config, api_key);
    tracing::debug!(
        provider = provider.name(),
        model = %config.model,
        "Completion provider ready"
    );

    let generator = ReportGenerator::new(provider, GenerationSettings::from(&config));
    let saver = ReportSaver::new(FileReportSink::new(), config.default_output.clone());

    match mode {
        InputMode::Single(input) => {
            cli::analyze::run_single(&generator, &saver, &input, cli.output.as_deref()).await;
        }
        InputMode::Interactive => {
            let mut prompter: Box<dyn Prompter> = if std::io::stdin().is_terminal() {
                Box::new(DialoguerPrompter)
            } else {
                Box::new(LinePrompter::new(std::io::stdin().lock(), std::io::stdout()))
            };
            InteractiveShell::new(&generator, &saver, prompter.as_mut())
                .run()
                .await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Config file (explicit path is strict, the data dir copy is lenient) with
/// CLI overrides applied on top.
async fn effective_config(cli: &Cli) -> anyhow::Result<AnalyzerConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path).await?,
        None => load_config(&resolve_data_dir()).await,
    };

    if let Some(model) = cli.model.as_deref().filter(|m| !m.trim().is_empty()) {
        config.model = model.to_string();
    }
    if let Some(base_url) = cli.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
        config.base_url = base_url.to_string();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("svc-analyzer").chain(args.iter().copied())).unwrap()
    }

    /// Config pointing the key lookup at `key_env` and the endpoint at a closed port.
    fn config_file(dir: &TempDir, key_env: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            format!("api_key_env = \"{key_env}\"\nbase_url = \"http://127.0.0.1:9/v1\"\n"),
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn test_no_input_method_exits_2_before_loading_config() {
        let tmp = TempDir::new().unwrap();
        // Reading this strict config path would fail, so exit 2 means it was never read.
        let missing = tmp.path().join("missing.toml");

        let code = run(cli(&["--config", missing.to_str().unwrap()])).await.unwrap();

        assert_eq!(code, ExitCode::from(2));
    }

    #[tokio::test]
    async fn test_missing_api_key_exits_1() {
        let tmp = TempDir::new().unwrap();
        let config = config_file(&tmp, "SVC_ANALYZER_TEST_UNSET_KEY");
        let env_file = tmp.path().join("absent.env");

        let code = run(cli(&[
            "-s",
            "Spotify",
            "--config",
            config.to_str().unwrap(),
            "--env-file",
            env_file.to_str().unwrap(),
        ]))
        .await
        .unwrap();

        assert_eq!(code, ExitCode::from(1));
    }

    #[tokio::test]
    async fn test_blank_api_key_exits_1() {
        let tmp = TempDir::new().unwrap();
        let config = config_file(&tmp, "SVC_ANALYZER_TEST_BLANK_KEY");
        let env_file = tmp.path().join("absent.env");
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("SVC_ANALYZER_TEST_BLANK_KEY", "   ") };

        let code = run(cli(&[
            "--text",
            "A social media platform for professionals",
            "--config",
            config.to_str().unwrap(),
            "--env-file",
            env_file.to_str().unwrap(),
        ]))
        .await
        .unwrap();

        assert_eq!(code, ExitCode::from(1));
    }
}
