mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, render, CheckArgs, RenderArgs};

/// Pegboard CLI - render and validate composed page documents
#[derive(Parser, Debug)]
#[command(name = "pegboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a page document to HTML
    Render(RenderArgs),

    /// Validate a page document's structure
    Check(CheckArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render(args) => render(args),
        Command::Check(args) => check(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
