//! CLI entry point for iacguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `iacguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use iacguard_app::{
    AnalyzeInput, ConfigSource, ExplainOutput, LoadedConfig, exit_codes, format_check_list,
    format_explanation, format_not_found, list_checks, load_config, render_annotations,
    render_markdown, render_text, result_exit_code, run_analyze, run_explain, serialize_report,
};
use iacguard_settings::{Overrides, Verbosity};
use log::{debug, info};
use std::io::IsTerminal;

#[derive(Parser, Debug)]
#[command(
    name = "iacguard",
    version,
    about = "Static security and cost analysis for Terraform configuration"
)]
struct Cli {
    /// Path to the policy config (YAML, or TOML by extension).
    #[arg(long, global = true, default_value = "config.yaml")]
    config: Utf8PathBuf,

    /// Enable debug logging.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze the Terraform files in a directory.
    Analyze {
        /// Directory containing the .tf files (not searched recursively).
        #[arg(long, default_value = ".")]
        dir: Utf8PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Override the config profile (all|security|cost).
        #[arg(long)]
        profile: Option<String>,

        /// Disable ANSI colors in text output.
        #[arg(long)]
        no_color: bool,

        /// Write the report to a file instead of stdout.
        #[arg(long)]
        out: Option<Utf8PathBuf>,
    },

    /// Explain a check_id with remediation guidance.
    Explain {
        /// The check_id (e.g., "security.open_ssh") to explain.
        identifier: String,
    },

    /// List every built-in check with its group, resource kind, and enablement.
    ListChecks,

    /// Print the JSON schema of the config file.
    ConfigSchema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
    Annotations,
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.cmd {
        Commands::Analyze {
            ref dir,
            output,
            ref profile,
            no_color,
            ref out,
        } => cmd_analyze(&cli, dir, output, profile.clone(), no_color, out.as_deref()),
        Commands::Explain { ref identifier } => {
            init_logging(None, cli.verbose);
            cmd_explain(identifier)
        }
        Commands::ListChecks => cmd_list_checks(&cli),
        Commands::ConfigSchema => {
            init_logging(None, cli.verbose);
            cmd_config_schema()
        }
    };

    std::process::exit(code);
}

/// `RUST_LOG` wins; otherwise `--verbose` forces debug, else the config's verbosity.
fn init_logging(verbosity: Option<Verbosity>, verbose: bool) {
    let filter = if verbose {
        "debug"
    } else {
        verbosity.unwrap_or(Verbosity::Low).log_filter()
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init();
}

fn load_and_init(cli: &Cli, overrides: Overrides) -> Result<LoadedConfig, i32> {
    match load_config(&cli.config, overrides) {
        Ok(loaded) => {
            init_logging(Some(loaded.resolved.verbosity), cli.verbose);
            match &loaded.source {
                ConfigSource::File(path) => debug!("loaded config from {path}"),
                ConfigSource::Defaults => info!("config {} not found; using defaults", cli.config),
            }
            Ok(loaded)
        }
        Err(err) => {
            let code = err.exit_code();
            eprintln!("iacguard error: {:#}", anyhow::Error::from(err));
            Err(code)
        }
    }
}

fn cmd_analyze(
    cli: &Cli,
    dir: &Utf8Path,
    output: OutputFormat,
    profile: Option<String>,
    no_color: bool,
    out: Option<&Utf8Path>,
) -> i32 {
    let overrides = Overrides {
        profile,
        ..Overrides::default()
    };
    let loaded = match load_and_init(cli, overrides) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let output_report = match run_analyze(AnalyzeInput {
        dir,
        config: &loaded.resolved.effective,
    }) {
        Ok(output) => output.report,
        Err(err) => {
            eprintln!(
                "iacguard error: failed to analyze Terraform files in {dir}: {:#}",
                anyhow::Error::from(err)
            );
            return exit_codes::ANALYSIS_FAILED;
        }
    };

    let rendered = match output {
        OutputFormat::Text => {
            let color = !no_color && out.is_none() && std::io::stdout().is_terminal();
            Ok(render_text(&output_report, color))
        }
        OutputFormat::Json => serialize_report(&output_report),
        OutputFormat::Markdown => Ok(render_markdown(&output_report)),
        OutputFormat::Annotations => Ok(render_annotations(&output_report)
            .into_iter()
            .map(|line| line + "\n")
            .collect()),
    };

    let written = rendered.and_then(|text| match out {
        Some(path) => write_text_file(path, &text),
        None => {
            print!("{text}");
            Ok(())
        }
    });
    if let Err(err) = written {
        eprintln!("iacguard error: {err:#}");
        return exit_codes::ANALYSIS_FAILED;
    }

    result_exit_code(&output_report.result)
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            exit_codes::CLEAN
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, available_check_ids));
            1
        }
    }
}

fn cmd_list_checks(cli: &Cli) -> i32 {
    match load_and_init(cli, Overrides::default()) {
        Ok(loaded) => {
            print!(
                "{}",
                format_check_list(&list_checks(&loaded.resolved.effective))
            );
            exit_codes::CLEAN
        }
        Err(code) => code,
    }
}

fn cmd_config_schema() -> i32 {
    let schema = iacguard_settings::config_schema();
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => {
            println!("{json}");
            exit_codes::CLEAN
        }
        Err(err) => {
            eprintln!("iacguard error: {err}");
            1
        }
    }
}
