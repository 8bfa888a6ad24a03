//! Sales Report Engine CLI
//!
//! Command-line interface for building the sales reports.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- process
//! cargo run -- process --data-dir data --output-dir reports
//! cargo run -- generate --output-dir data --products 10 --salespeople 4 --seed 7
//! ```
//!
//! Diagnostics for rejected records go to the error log (`errores.log` by
//! default). Set `RUST_LOG=debug` for progress output on stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Fatal error (missing catalog or roster, unwritable output, etc.)

use sales_report_engine::cli::{self, Command};
use sales_report_engine::generator::DataGenerator;
use sales_report_engine::pipeline;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    match args.command {
        Command::Process(args) => {
            let config = args.to_pipeline_config();
            if let Err(e) = pipeline::run(&config) {
                tracing::error!(error = %e, fatal = e.is_fatal(), "run aborted");
                eprintln!("Error processing files: {}", e);
                process::exit(1);
            }
            println!("Reports generated successfully.");
        }
        Command::Generate(args) => {
            let config = args.to_generator_config();
            let mut generator = match args.seed {
                Some(seed) => DataGenerator::seeded(seed),
                None => DataGenerator::from_entropy(),
            };
            if let Err(e) = generator.generate(&args.output_dir, &config) {
                tracing::error!(error = %e, fatal = e.is_fatal(), "generation aborted");
                eprintln!("Error generating files: {}", e);
                process::exit(1);
            }
            println!("Files generated successfully.");
        }
    }
}
