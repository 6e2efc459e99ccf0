//! Todo CLI entry point.

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use todo_cli::cli::Cli;
use todo_cli::input::EditorSource;
use todo_cli::render::Renderer;
use todo_cli::repl::Repl;
use todo_cli::session::TodoSession;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with REPL output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = EditorSource::new(cli.history_path())?;
    let session = TodoSession::new(cli.session_config());
    let renderer = Renderer::new(io::stdout(), cli.format);

    let mut repl = Repl::new(source, session, renderer);
    repl.run()?;
    Ok(())
}
