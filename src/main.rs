//! CLI entry point for the interface generator.
//!
//! Prints diagnostics and the rendered interface to stdout. Logs go to stderr.

use anyhow::anyhow;
use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use ifacegen::io::ExitCode;
use ifacegen::{Generator, Report, Settings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Parser)]
#[command(
    name = "ifacegen",
    version,
    about = "Generate a Go interface from the methods of a type",
    styles = clap_cargo_style(),
    after_help = "Examples:\n  ifacegen testdata/alpha B\n  ifacegen --system-root /usr/local/go io/fs dirFS"
)]
struct Cli {
    /// Package path, relative to the working directory or a source root
    package: String,

    /// Name of the type whose methods form the interface
    type_name: String,

    /// Path to custom settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Workspace source root (overrides GOPATH)
    #[arg(long)]
    workspace_root: Option<PathBuf>,

    /// System source root (overrides GOROOT)
    #[arg(long)]
    system_root: Option<PathBuf>,

    /// Print only the interface, without diagnostic lines
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .map_err(|e| anyhow!("loading settings from {}: {e}", path.display()))?,
        None => Settings::load().map_err(|e| anyhow!("loading settings: {e}"))?,
    };

    if let Some(root) = &cli.workspace_root {
        settings.locator.workspace_root = Some(root.clone());
    }
    if let Some(root) = &cli.system_root {
        settings.locator.system_root = Some(root.clone());
    }
    Ok(settings)
}

fn print_report(report: &Report, quiet: bool) {
    if !quiet {
        for diagnostic in &report.diagnostics {
            println!("{diagnostic}");
        }
        println!("Interface:");
    }
    println!("{}", report.interface);
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return ExitCode::ConfigError.into();
        }
    };

    let result = Generator::new(settings)
        .and_then(|generator| generator.run(&cli.package, &cli.type_name));
    match result {
        Ok(report) => {
            print_report(&report, cli.quiet);
            ExitCode::Success.into()
        }
        Err(e) => {
            let code = ExitCode::from_error(&e);
            eprintln!("Error: {e}");
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {suggestion}");
            }
            tracing::debug!("exiting with {} ({})", i32::from(code), code.description());
            code.into()
        }
    }
}
