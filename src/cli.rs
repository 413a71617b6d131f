mod report;

use crate::config::{FieldSpec, load_config};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
pub use report::{FilterReport, ReportEntry, create_styled_table, format_text};
use std::path::PathBuf;

/// Parse a filter string against a schema and show the typed values
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Filter string, e.g. "name==john;age>=30;tags==a:b:c"
    #[arg(allow_hyphen_values = true)]
    pub filter: String,

    /// TOML file declaring the separator and the schema fields
    #[arg(short, long, env = "TYPED_FILTER_SCHEMA", required_unless_present = "fields")]
    pub schema: Option<PathBuf>,

    /// Inline schema field, may be repeated (e.g. -f price=float)
    #[arg(short = 'f', long = "field", value_name = "KEY=SHAPE")]
    pub fields: Vec<String>,

    /// Clause separator, overrides the one from the schema file
    #[arg(long)]
    pub separator: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn apply(self) {
        match self {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => {}
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Parse the filter string with the schema assembled from the arguments
    pub fn build_report(&self) -> Result<FilterReport> {
        let mut config = load_config(self.schema.as_deref()).context("Failed to load schema")?;

        for spec in &self.fields {
            config
                .fields
                .push(FieldSpec::parse_inline(spec).context("Invalid schema")?);
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }

        if config.fields.is_empty() {
            tracing::warn!("schema declares no fields, nothing will be bound");
        }

        let filters = config.build_filters().context("Invalid schema")?;
        FilterReport::build(&self.filter, &config.separator, filters)
            .with_context(|| format!("Invalid filter string '{}'", self.filter))
    }

    pub fn render(&self, report: &FilterReport) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(format_text(report)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(report)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

fn init_tracing(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());
    cli.color.apply();

    let report = cli.build_report()?;
    print!("{}", cli.render(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["typed-filter", "-f", "a=float", "a==1"]).unwrap();
        assert_eq!(cli.filter, "a==1");
        assert!(cli.schema.is_none());
        assert_eq!(cli.separator, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.color, ColorMode::Auto);
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_cli_requires_schema_or_fields() {
        let err = Cli::try_parse_from(["typed-filter", "a==1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["typed-filter", "-s", "schema.toml", "a==1"]).unwrap();
        assert!(cli.fields.is_empty());
    }

    #[test]
    fn test_cli_repeated_fields_and_verbosity() {
        let cli = Cli::try_parse_from([
            "typed-filter",
            "-f",
            "a=float",
            "--field",
            "b=bool",
            "-vv",
            "--format",
            "json",
            "a>1",
        ])
        .unwrap();
        assert_eq!(cli.fields, vec!["a=float", "b=bool"]);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_build_report_from_inline_fields() {
        let cli = Cli::try_parse_from([
            "typed-filter",
            "--separator",
            "&",
            "-f",
            "price=float",
            "-f",
            "tags=string_list",
            "price>=10&tags==a:b",
        ])
        .unwrap();

        let report = cli.build_report().unwrap();
        assert_eq!(report.separator, "&");
        assert_eq!(report.entries.len(), 2);
        assert!(report.entries.iter().all(|entry| entry.bound));
    }

    #[test]
    fn test_build_report_surfaces_parse_errors() {
        let cli = Cli::try_parse_from(["typed-filter", "-f", "name=string", "name>x"]).unwrap();
        let err = cli.build_report().unwrap_err();
        assert!(err.to_string().contains("Invalid filter string"));
    }

    #[test]
    fn test_schema_errors_are_not_blamed_on_the_filter() {
        let cli = Cli::try_parse_from(["typed-filter", "-f", "when=date", "when==1"]).unwrap();
        let err = cli.build_report().unwrap_err();
        assert_eq!(err.to_string(), "Invalid schema");
        assert!(format!("{err:#}").contains("Unsupported field shape: 'date'"));

        let cli = Cli::try_parse_from(["typed-filter", "-f", "when", "when==1"]).unwrap();
        let err = cli.build_report().unwrap_err();
        assert_eq!(err.to_string(), "Invalid schema");
    }
}
