//! Callscope CLI
//!
//! ```text
//! callscope [--domain <name|auto>] [FILE]
//! callscope --coverage [--domain <name>]
//! ```
//!
//! Reads the transcript from FILE, or stdin when absent, and prints the
//! analysis report as pretty JSON. `--coverage` prints the loaded policy
//! coverage instead, for one domain or the whole corpus.

use std::env;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use callscope::adapters::{FileCatalogSource, OfflineReasoning};
use callscope::application::{AnalyzeConversationCommand, AnalyzeConversationHandler, Catalogs};
use callscope::config::{AppConfig, ConfigError, LoggingConfig, ValidationError};
use callscope::domain::conversation::DomainSelection;

const USAGE: &str =
    "usage: callscope [--domain <name|auto>] [FILE]\n       callscope --coverage [--domain <name>]";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("failed to read transcript: {0}")]
    Io(#[from] io::Error),

    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    domain: Option<String>,
    file: Option<PathBuf>,
    coverage: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--domain" | "-d" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
                    parsed.domain = Some(value);
                }
                "--coverage" => parsed.coverage = true,
                "--help" | "-h" => return Err(CliError::Usage(USAGE.to_string())),
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(CliError::Usage(format!("unknown option {flag}\n{USAGE}")));
                }
                path => {
                    if parsed.file.is_some() {
                        return Err(CliError::Usage(USAGE.to_string()));
                    }
                    if path != "-" {
                        parsed.file = Some(PathBuf::from(path));
                    }
                }
            }
        }

        if parsed.coverage && parsed.file.is_some() {
            return Err(CliError::Usage(USAGE.to_string()));
        }
        Ok(parsed)
    }

    fn domain_selection(&self) -> Option<DomainSelection> {
        self.domain.as_deref().map(DomainSelection::parse)
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

async fn run() -> Result<(), CliError> {
    let args = CliArgs::parse(env::args().skip(1))?;

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let source = FileCatalogSource::new(
        &config.catalog.policy_store_path,
        &config.catalog.critical_data_path,
    );
    let catalogs = Catalogs::load(&source).await;

    let domain = args
        .domain_selection()
        .unwrap_or_else(|| config.analysis.domain_selection());

    if args.coverage {
        println!("{}", render_coverage(&catalogs, &domain)?);
        return Ok(());
    }

    let transcript = match &args.file {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input
        }
    };

    if config.reasoning.enabled {
        warn!("No reasoning service is available to this build, running offline");
    }
    let handler = AnalyzeConversationHandler::new(
        catalogs,
        Arc::new(OfflineReasoning),
        config.analysis.chunking(),
        config.reasoning.timeout(),
    );

    let report = handler
        .handle(AnalyzeConversationCommand::new(transcript, domain))
        .await;
    println!("{}", report.to_json_pretty()?);
    Ok(())
}

/// Coverage of one named domain, or of the corpus when detecting.
fn render_coverage(catalogs: &Catalogs, domain: &DomainSelection) -> Result<String, CliError> {
    let name = match domain {
        DomainSelection::Named(name) => Some(name.as_str()),
        DomainSelection::Auto => None,
    };
    Ok(serde_json::to_string_pretty(&catalogs.policies.coverage(name))?)
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_domain_and_file() {
        let parsed = CliArgs::parse(args(&["--domain", "banking", "call.txt"])).unwrap();
        assert_eq!(parsed.domain.as_deref(), Some("banking"));
        assert_eq!(parsed.file, Some(PathBuf::from("call.txt")));
    }

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(CliArgs::parse(args(&[])).unwrap(), CliArgs::default());
        assert_eq!(CliArgs::parse(args(&["-"])).unwrap(), CliArgs::default());
    }

    #[test]
    fn missing_domain_value_is_usage_error() {
        assert!(matches!(
            CliArgs::parse(args(&["--domain"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn coverage_flag_takes_no_file() {
        let parsed = CliArgs::parse(args(&["--coverage", "-d", "Telecom"])).unwrap();
        assert!(parsed.coverage);
        assert_eq!(
            parsed.domain_selection(),
            Some(DomainSelection::Named("telecom".into()))
        );

        assert!(matches!(
            CliArgs::parse(args(&["--coverage", "call.txt"])),
            Err(CliError::Usage(_))
        ));
    }

    async fn shipped_catalogs() -> Catalogs {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let source = FileCatalogSource::new(
            root.join("policy_store"),
            root.join("critical_data_store/sensitive_patterns.json"),
        );
        Catalogs::load(&source).await
    }

    #[tokio::test]
    async fn coverage_reports_named_domain() {
        let rendered = render_coverage(
            &shipped_catalogs().await,
            &DomainSelection::Named("telecom".into()),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["domain"], "telecom");
        assert_eq!(value["policy_count"], 2);
    }

    #[tokio::test]
    async fn coverage_without_domain_reports_corpus() {
        let rendered = render_coverage(&shipped_catalogs().await, &DomainSelection::Auto).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["total_domains"], 2);
        assert_eq!(value["total_policies"], 8);
        assert_eq!(value["domains"], serde_json::json!(["banking", "telecom"]));
    }

    #[test]
    fn unknown_flag_is_usage_error() {
        assert!(matches!(
            CliArgs::parse(args(&["--verbose"])),
            Err(CliError::Usage(_))
        ));
    }
}
