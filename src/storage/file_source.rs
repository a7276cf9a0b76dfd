use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{parse_receipt, ReceiptFormat, ReceiptSource};
use crate::{
    errors::{Result, SplitError},
    receipt::Receipt,
};

/// Reads a receipt from a YAML or JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileReceiptSource {
    path: PathBuf,
    format: ReceiptFormat,
}

impl FileReceiptSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ReceiptFormat::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(mut self, format: ReceiptFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ReceiptFormat {
        self.format
    }
}

impl ReceiptSource for FileReceiptSource {
    fn load(&self) -> Result<Receipt> {
        let text = fs::read_to_string(&self.path).map_err(|source| SplitError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), format = %self.format, "read receipt");
        parse_receipt(&text, self.format)
    }
}

pub fn load_receipt_from_path(path: &Path) -> Result<Receipt> {
    FileReceiptSource::new(path).load()
}
