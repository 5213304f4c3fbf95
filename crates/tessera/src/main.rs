//! # tessera
//!
//! Command-line front end for the Tessera render engine. Renders the demo
//! views step by step as plain HTML, full statics/dynamics JSON, or
//! change-only deltas.

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Differential HTML rendering for live server-driven views", long_about = None)]
#[command(version)]
struct Cli {
    /// Log engine events to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a demo view
    Render(commands::render::RenderArgs),

    /// List the available demos
    Demos,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Demos => commands::demos::run(),
    }
}
