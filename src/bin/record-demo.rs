//! CLI that runs the record pipeline demonstrations.
//!
//! Usage:
//!   record-demo <DEMO> [--format text|json] [--threads N] [--task-timeout-ms MS] [--verbose]
//!
//! `DEMO` is one demonstration name (e.g. `filter`, `summary-statistics`) or `all`.

use std::io::{self, Write};
use std::process;
use std::time::Duration;

use clap::Parser;
use record_pipeline::demo::{run_demo, Demo, DemoOptions, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "record-demo", version, about = "Run record pipeline demonstrations")]
struct Cli {
    /// Demonstration to run
    #[arg(value_enum)]
    demo: Demo,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Worker threads for the task demonstrations
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    threads: u16,

    /// Milliseconds to wait for a background task's message
    #[arg(long, default_value_t = 1000)]
    task_timeout_ms: u64,

    /// Log worker pool events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let opts = DemoOptions {
        format: cli.format,
        threads: usize::from(cli.threads),
        verbose: cli.verbose,
        task_timeout: Duration::from_millis(cli.task_timeout_ms),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run_demo(cli.demo, &opts, &mut out).and_then(|()| Ok(out.flush()?));
    if let Err(e) = result {
        eprintln!("Error running demo '{}': {}", cli.demo, e);
        process::exit(1);
    }
}
