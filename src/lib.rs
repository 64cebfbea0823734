//! Toronto Climate Library
//!
//! A Rust library for turning monthly climate records from the
//! Environment Canada archive into yearly statistics and chart-ready
//! tables.
//!
//! This library provides tools for:
//! - Loading monthly climate CSV exports into typed records
//! - Aggregating monthly records by year with explicit missing-value handling
//! - Filtering snowy months by a snowfall threshold
//! - Preparing correlation, histogram, bar and box plot datasets
//! - Writing every table to Parquet or CSV

pub mod aggregation;
pub mod charts;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;
pub mod reader;
pub mod schema;

// Re-export commonly used types
pub use aggregation::{aggregate_by_year, filter_by_snow_threshold, month_coverage};
pub use config::{AnalysisConfig, OutputFormat};
pub use error::{ClimateError, Result};
pub use models::{Month, MonthlyRecord, YearlySummary};
pub use processor::{AnalysisProcessor, ClimateAnalysis, analyze};
pub use reader::read_monthly_csv;
