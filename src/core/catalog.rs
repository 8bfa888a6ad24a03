//! Product catalog
//!
//! Loads `productos.txt` into a lookup table keyed by product id. Rows that
//! fail validation go to the error sink and are left out; only an unreadable
//! file stops the load.

use crate::core::traits::ErrorSink;
use crate::io::record_format::parse_product;
use crate::io::record_reader::RecordReader;
use crate::types::{Product, ProductId, ReportError};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// In-memory product lookup table
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from a file
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound`/`IoError` if the file cannot be opened or stops
    /// being readable. Malformed rows never cause an error here.
    pub fn load(path: &Path, sink: &mut dyn ErrorSink) -> Result<Self, ReportError> {
        let reader = RecordReader::open(path).map_err(|e| ReportError::io(path, e))?;
        let name = reader.name().to_string();
        Self::from_records(&name, reader, sink).map_err(|e| match e {
            ReportError::UnreadableFile { message, .. } => ReportError::IoError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Load the catalog from any reader; `name` labels the diagnostics
    pub fn from_reader<R: Read>(
        name: &str,
        reader: R,
        sink: &mut dyn ErrorSink,
    ) -> Result<Self, ReportError> {
        Self::from_records(name, RecordReader::from_reader(name, reader), sink)
    }

    fn from_records<R: Read>(
        name: &str,
        records: RecordReader<R>,
        sink: &mut dyn ErrorSink,
    ) -> Result<Self, ReportError> {
        let mut catalog = Catalog::new();

        for result in records {
            match result.and_then(|record| parse_product(name, &record)) {
                // Later rows replace earlier ones with the same id
                Ok(product) => catalog.insert(product),
                Err(e @ ReportError::UnreadableFile { .. }) => return Err(e),
                Err(e) => sink.record(&e),
            }
        }

        tracing::debug!(file = name, products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id, product);
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for product in iter {
            catalog.insert(product);
        }
        catalog
    }
}
