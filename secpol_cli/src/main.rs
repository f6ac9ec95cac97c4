//! # Local Security Policy CLI
//!

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use secpol_engine::config::{parse_log_level, EngineConfig, LogLevel};
use secpol_engine::logging::{self, codes};
use secpol_engine::{
    catalog, log_error, log_info, DesiredState, PolicyDefinition, PolicyError, PolicyStore,
    Reconciler, ReconcilerProvider, RunMode, Section,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "secpol", version, about = "Inspect and reconcile local security policy")]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Minimum log level (error, warning, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit log events as JSON lines
    #[arg(long, global = true)]
    structured_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List policy instances found in the current system export
    List {
        /// Include catalog entries with no exported value
        #[arg(long)]
        all: bool,
    },
    /// Print the managed policy catalog
    Catalog {
        #[arg(long, value_enum)]
        section: Option<SectionArg>,
    },
    /// Report drift between the system and a desired-state file
    Check { desired: PathBuf },
    /// Converge the system to a desired-state file
    Apply {
        desired: PathBuf,

        /// Plan every change without writing
        #[arg(long)]
        dry_run: bool,

        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SectionArg {
    SystemAccess,
    EventAudit,
    PrivilegeRights,
    RegistryValues,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::SystemAccess => Section::SystemAccess,
            SectionArg::EventAudit => Section::EventAudit,
            SectionArg::PrivilegeRights => Section::PrivilegeRights,
            SectionArg::RegistryValues => Section::RegistryValues,
        }
    }
}

/// Catalog listing row
#[derive(Serialize)]
struct CatalogEntry<'a> {
    name: &'a str,
    section: Section,
    machine_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    registry_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    options: Vec<&'a str>,
}

impl<'a> From<&'a PolicyDefinition> for CatalogEntry<'a> {
    fn from(definition: &'a PolicyDefinition) -> Self {
        Self {
            name: definition.display_name,
            section: definition.section(),
            machine_name: definition.machine_name,
            data_kind: definition.data_kind().map(|k| k.name()),
            registry_type: definition.registry_type().map(|t| t.tag()),
            default_value: definition.default_value,
            options: definition
                .options()
                .map(|table| table.iter().map(|(_, label)| *label).collect())
                .unwrap_or_default(),
        }
    }
}

const EXIT_DRIFT: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if let Err(e) = init_logging(&config) {
        logging::safe_log_error(codes::system::INITIALIZATION_FAILURE, &e);
        return ExitCode::from(EXIT_FAILURE);
    }
    log_info!("secpol starting",
        "version" => env!("CARGO_PKG_VERSION"),
        "log_level" => config.logging.min_log_level.as_str()
    );

    match run(&cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            log_error!(e.code(), "Command failed", "error" => &e);
            eprintln!("Error: {}", e.user_message());
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn load_config(cli: &Cli) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    apply_overrides(cli, config)
}

/// Layer command-line flags over the loaded configuration and validate the result
fn apply_overrides(
    cli: &Cli,
    mut config: EngineConfig,
) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    if let Some(level) = &cli.log_level {
        config.logging.min_log_level =
            parse_log_level(level).ok_or_else(|| format!("unknown log level '{}'", level))?;
    }
    if cli.structured_logs {
        config.logging.use_structured_logging = true;
    }
    config.validate()?;
    Ok(config)
}

fn init_logging(config: &EngineConfig) -> Result<(), String> {
    if config.logging.use_log_facade {
        env_logger::Builder::new()
            .filter_level(level_filter(config.logging.min_log_level))
            .target(env_logger::Target::Stderr)
            .init();
    }
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()
}

fn level_filter(level: LogLevel) -> log::LevelFilter {
    match level {
        LogLevel::Error => log::LevelFilter::Error,
        LogLevel::Warning => log::LevelFilter::Warn,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Debug => log::LevelFilter::Debug,
    }
}

fn run(command: &Command, config: &EngineConfig) -> Result<ExitCode, PolicyError> {
    if let Command::Catalog { section } = command {
        let entries: Vec<CatalogEntry> = match section {
            Some(section) => catalog()
                .in_section((*section).into())
                .map(CatalogEntry::from)
                .collect(),
            None => catalog().definitions().map(CatalogEntry::from).collect(),
        };
        print_json(&entries)?;
        return Ok(ExitCode::SUCCESS);
    }

    let tools = &config.tools;
    let tool = commands::create_policy_tool(tools);
    let resolver = commands::create_identity_resolver(tools);
    let provider = ReconcilerProvider::new(
        PolicyStore::new(&tool, &tools.temp_dir),
        &tool,
        &tool,
        &resolver,
        &tools.temp_dir,
    );

    match command {
        Command::List { all } => {
            let instances = if *all {
                provider.enumerate_all()?
            } else {
                provider.enumerate()?
            };
            print_json(&instances)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { desired } => {
            let desired = DesiredState::load(desired)?;
            let report = Reconciler::new(provider).run(&desired, RunMode::Check)?;
            print_json(&report)?;
            Ok(if report.has_failures() {
                ExitCode::from(EXIT_FAILURE)
            } else if report.has_drift() {
                ExitCode::from(EXIT_DRIFT)
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Apply {
            desired,
            dry_run,
            output,
        } => {
            let desired = DesiredState::load(desired)?;
            let mode = if *dry_run { RunMode::DryRun } else { RunMode::Apply };
            let report = Reconciler::new(provider).run(&desired, mode)?;
            let json = report.to_json().map_err(json_error)?;
            match output {
                Some(path) => write_report(path, &json)?,
                None => println!("{}", json),
            }
            Ok(if report.has_failures() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Catalog { .. } => Ok(ExitCode::SUCCESS),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), PolicyError> {
    let json = serde_json::to_string_pretty(value).map_err(json_error)?;
    println!("{}", json);
    Ok(())
}

fn json_error(e: serde_json::Error) -> PolicyError {
    logging::safe_log_error(codes::system::INTERNAL_ERROR, &e.to_string());
    PolicyError::Io(std::io::Error::other(e))
}

fn write_report(path: &Path, json: &str) -> Result<(), PolicyError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}
