use crate::generator::GeneratorConfig;
use crate::pipeline::PipelineConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Build ranked sales reports from flat-file catalog, roster and sales data
#[derive(Parser, Debug)]
#[command(name = "sales-report")]
#[command(about = "Build ranked sales reports from flat-file sales data", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the input files and write both reports
    Process(ProcessArgs),

    /// Write random but well-formed input files
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Directory containing productos.txt, vendedores.txt and the sales files
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory the reports are written to
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Error log path (default: <output-dir>/errores.log)
    #[arg(long = "error-log", value_name = "PATH")]
    pub error_log: Option<PathBuf>,

    /// File name prefix of the sales files
    #[arg(long = "prefix", value_name = "PREFIX", default_value = "ventas_")]
    pub prefix: String,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory the generated files are written to
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of products in the catalog
    #[arg(long = "products", value_name = "COUNT", default_value_t = 5)]
    pub products: usize,

    /// Number of salespeople, each with one sales file
    #[arg(long = "salespeople", value_name = "COUNT", default_value_t = 3)]
    pub salespeople: usize,

    /// Sale lines per sales file
    #[arg(long = "sales-lines", value_name = "COUNT", default_value_t = 10)]
    pub sales_lines: usize,

    /// Seed for reproducible output (random when omitted)
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,
}

impl ProcessArgs {
    /// Create a PipelineConfig from CLI arguments
    ///
    /// Starts from the conventional file names under the given directories and
    /// applies the optional overrides.
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::new(&self.data_dir, &self.output_dir);
        config.transaction_prefix = self.prefix.clone();
        if let Some(error_log) = &self.error_log {
            config.error_log_path = error_log.clone();
        }
        config
    }
}

impl GenerateArgs {
    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            products: self.products,
            salespeople: self.salespeople,
            sales_lines: self.sales_lines,
        }
    }
}
