//! Render command - render a demo view step by step

use clap::Args;
use std::path::PathBuf;
use tessera::{render_steps, Demo, Format};

use crate::config::load_config;

#[derive(Args)]
pub struct RenderArgs {
    /// Demo to render
    #[arg(value_enum)]
    pub demo: Demo,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Number of steps to render (default: from config, else 1)
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Config file path (default: ./tessera.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: RenderArgs) {
    let config = load_config(args.config.as_deref());
    let steps = args.steps.or(config.render.steps).unwrap_or(1);
    let pretty = args.pretty || config.render.pretty;

    tracing::debug!(demo = args.demo.name(), format = ?args.format, steps, "rendering demo");

    match render_steps(args.demo, args.format, steps, &config.root, pretty) {
        Ok(frames) => {
            for frame in frames {
                println!("{}", frame);
            }
        }
        Err(e) => {
            eprintln!("Error rendering {}: {}", args.demo.name(), e);
            std::process::exit(1);
        }
    }
}
