//! Synthetic input generation
//!
//! Produces well-formed `productos.txt`, `vendedores.txt` and one
//! `ventas_<id>.txt` per generated salesperson, for trying the pipeline out
//! and for tests. Values are random; a fixed seed makes them reproducible.

use crate::pipeline::config::{CATALOG_FILE, ROSTER_FILE, TRANSACTION_PREFIX};
use crate::types::{ProductId, ReportError, SalespersonId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const FIRST_NAMES: [&str; 5] = ["Ana", "Luis", "Carlos", "Maria", "Sofia"];
const LAST_NAMES: [&str; 5] = ["Perez", "Gomez", "Ruiz", "Diaz", "Lopez"];
const DOCUMENT_TYPE: &str = "CC";
const FIRST_SALESPERSON_ID: SalespersonId = 100;

/// How much data to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub products: usize,
    pub salespeople: usize,
    /// Sale lines per transaction file
    pub sales_lines: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            products: 5,
            salespeople: 3,
            sales_lines: 10,
        }
    }
}

/// Files written by `DataGenerator::generate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub catalog: PathBuf,
    pub roster: PathBuf,
    pub transactions: Vec<PathBuf>,
}

/// Random input file writer
pub struct DataGenerator<R> {
    rng: R,
}

impl DataGenerator<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        DataGenerator::new(StdRng::from_entropy())
    }

    /// Generator producing the same files for the same seed
    pub fn seeded(seed: u64) -> Self {
        DataGenerator::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DataGenerator<R> {
    pub fn new(rng: R) -> Self {
        DataGenerator { rng }
    }

    /// Write a complete data set into `dir`
    ///
    /// Transaction files reference products `1..=config.products`, so with at
    /// least one product every generated line is valid.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if a file cannot be created or written.
    pub fn generate(&mut self, dir: &Path, config: &GeneratorConfig) -> Result<GeneratedFiles, ReportError> {
        fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;

        let catalog = dir.join(CATALOG_FILE);
        self.write_products_file(&catalog, config.products)?;

        let roster = dir.join(ROSTER_FILE);
        let ids = self.write_roster_file(&roster, config.salespeople)?;

        let mut transactions = Vec::with_capacity(ids.len());
        for id in ids {
            let path = self.write_sales_file(dir, id, config.sales_lines, config.products)?;
            transactions.push(path);
        }

        tracing::info!(dir = %dir.display(), files = transactions.len() + 2, "input files generated");
        Ok(GeneratedFiles {
            catalog,
            roster,
            transactions,
        })
    }

    /// Write `count` products with ids `1..=count` and whole prices in `10..60`
    pub fn write_products_file(&mut self, path: &Path, count: usize) -> Result<(), ReportError> {
        write_lines(path, (1..=count).map(|id| {
            let price: u32 = self.rng.gen_range(10..60);
            format!("{};Producto{};{}", id, id, price)
        }))
    }

    /// Write `count` salespeople with ids starting at 100 and return the ids
    pub fn write_roster_file(
        &mut self,
        path: &Path,
        count: usize,
    ) -> Result<Vec<SalespersonId>, ReportError> {
        let ids: Vec<SalespersonId> = (0..count as SalespersonId)
            .map(|i| FIRST_SALESPERSON_ID + i)
            .collect();

        write_lines(path, ids.iter().map(|id| {
            let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];
            format!("{};{};{};{}", DOCUMENT_TYPE, id, first, last)
        }))?;

        Ok(ids)
    }

    /// Write `ventas_<salesperson>.txt` into `dir` with `lines` random sales
    ///
    /// Product ids are drawn from `1..=product_count`, quantities from `1..=10`.
    pub fn write_sales_file(
        &mut self,
        dir: &Path,
        salesperson: SalespersonId,
        lines: usize,
        product_count: usize,
    ) -> Result<PathBuf, ReportError> {
        let path = dir.join(format!("{}{}.txt", TRANSACTION_PREFIX, salesperson));
        let max_product = ProductId::try_from(product_count.max(1)).unwrap_or(ProductId::MAX);

        let header = format!("{};{}", DOCUMENT_TYPE, salesperson);
        let sales: Vec<String> = (0..lines)
            .map(|_| {
                let product: ProductId = self.rng.gen_range(1..=max_product);
                let quantity: u32 = self.rng.gen_range(1..=10);
                format!("{};{}", product, quantity)
            })
            .collect();

        write_lines(&path, std::iter::once(header).chain(sales))?;
        Ok(path)
    }
}

fn write_lines<I>(path: &Path, lines: I) -> Result<(), ReportError>
where
    I: IntoIterator<Item = String>,
{
    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let mut output = BufWriter::new(file);
    for line in lines {
        writeln!(output, "{}", line).map_err(|e| ReportError::io(path, e))?;
    }
    output.flush().map_err(|e| ReportError::io(path, e))
}
