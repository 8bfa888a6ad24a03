//! Pipeline configuration
//!
//! Holds every path the pipeline touches. `PipelineConfig::new` fills in the
//! conventional file names; each can be overridden afterwards.

use std::path::{Path, PathBuf};

pub const CATALOG_FILE: &str = "productos.txt";
pub const ROSTER_FILE: &str = "vendedores.txt";
pub const TRANSACTION_PREFIX: &str = "ventas_";
pub const REVENUE_REPORT_FILE: &str = "reporte_vendedores.csv";
pub const UNITS_REPORT_FILE: &str = "reporte_productos.csv";
pub const ERROR_LOG_FILE: &str = "errores.log";

/// Locations of the inputs and outputs of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory scanned for transaction files
    pub data_dir: PathBuf,
    pub catalog_path: PathBuf,
    pub roster_path: PathBuf,
    /// File name prefix identifying transaction files in `data_dir`
    pub transaction_prefix: String,
    pub revenue_report_path: PathBuf,
    pub units_report_path: PathBuf,
    pub error_log_path: PathBuf,
}

impl PipelineConfig {
    /// Inputs read from `data_dir`, reports and error log written to `output_dir`
    pub fn new(data_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        let output_dir = output_dir.as_ref();

        PipelineConfig {
            data_dir: data_dir.to_path_buf(),
            catalog_path: data_dir.join(CATALOG_FILE),
            roster_path: data_dir.join(ROSTER_FILE),
            transaction_prefix: TRANSACTION_PREFIX.to_string(),
            revenue_report_path: output_dir.join(REVENUE_REPORT_FILE),
            units_report_path: output_dir.join(UNITS_REPORT_FILE),
            error_log_path: output_dir.join(ERROR_LOG_FILE),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig::new(".", ".")
    }
}
