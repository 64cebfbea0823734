//! Table writing for analysis outputs
//!
//! Writes each prepared table into the output directory as Parquet or
//! CSV, one file per table.

use crate::config::OutputFormat;
use crate::error::{ClimateError, Result};

use polars::prelude::{
    CsvWriter, DataFrame, ParquetCompression, ParquetWriter, SerWriter, StatisticsOptions,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writer placing named tables in one output directory
#[derive(Debug, Clone)]
pub struct TableWriter {
    output_dir: PathBuf,
    format: OutputFormat,
}

impl TableWriter {
    /// Create a new table writer
    pub fn new(output_dir: PathBuf, format: OutputFormat) -> Self {
        Self { output_dir, format }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File path a table of this name is written to
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", name, self.format.extension()))
    }

    /// Write `df` as table `name`, creating the output directory if needed
    pub fn write(&self, name: &str, df: &mut DataFrame) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(name);
        let mut file = File::create(&path)?;

        let written = match self.format {
            OutputFormat::Parquet => ParquetWriter::new(file)
                .with_compression(ParquetCompression::Snappy)
                .with_statistics(StatisticsOptions::full())
                .finish(df)
                .map(|_| ()),
            OutputFormat::Csv => CsvWriter::new(&mut file).include_header(true).finish(df),
        };

        written.map_err(|e| ClimateError::WriteFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        debug!(
            "Wrote {} rows x {} columns to {}",
            df.height(),
            df.width(),
            path.display()
        );
        Ok(path)
    }
}
