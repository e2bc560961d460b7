//! oplog CLI - runs sample operations through the lifecycle logging wrapper.
//!
//! Commands:
//! - `oplog demo` - Run every demo scenario, including a failing one
//! - `oplog reverse <text>` - Reverse a string
//! - `oplog upper <text>` - Upper-case a string
//! - `oplog length [text]` - Count characters
//! - `oplog add <a> <b>` - Add two integers
//! - `oplog divide <a> <b>` - Divide two numbers

mod business;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, DivideArgs, LengthArgs, ReverseArgs, UpperArgs};
use context::SinkKind;

/// oplog - Log the lifecycle of every operation call
#[derive(Parser)]
#[command(name = "oplog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print a JSON report of each call's outcome
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Where lifecycle lines are written
    #[arg(long, global = true, value_enum, default_value = "stdout")]
    sink: SinkKind,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every demo scenario
    Demo,

    /// Reverse a string
    Reverse(ReverseArgs),

    /// Upper-case a string
    Upper(UpperArgs),

    /// Count the characters of a string
    Length(LengthArgs),

    /// Add two integers
    Add(AddArgs),

    /// Divide two numbers
    Divide(DivideArgs),
}

fn init_tracing(verbose: bool, sink: SinkKind) {
    let default_filter = match (verbose, sink) {
        (true, _) => "debug",
        (false, SinkKind::Tracing) => "warn,oplog=info",
        (false, SinkKind::Stdout) => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);
    init_tracing(output.is_verbose(), cli.sink);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output, cli.sink)?;

    // Execute command
    let result = match cli.command {
        Commands::Demo => commands::demo::run(&ctx),
        Commands::Reverse(args) => commands::run::reverse(args, &ctx),
        Commands::Upper(args) => commands::run::upper(args, &ctx),
        Commands::Length(args) => commands::run::length(args, &ctx),
        Commands::Add(args) => commands::run::add(args, &ctx),
        Commands::Divide(args) => commands::run::divide(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
