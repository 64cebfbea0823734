//! Basic processing integration tests

use super::{SNOW_BY_MONTH, write_monthly_csv};
use crate::config::{AnalysisConfig, OutputFormat};
use crate::constants::{columns, tables};
use crate::models::Month;
use crate::processor::{AnalysisProcessor, analyze};
use crate::reader::read_monthly_csv;
use polars::prelude::*;
use std::fs::File;
use tempfile::TempDir;

#[test]
fn test_basic_processing_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_monthly_csv(&temp_dir, 1990..1993);
    let output_dir = temp_dir.path().join("output");

    let processor = AnalysisProcessor::new(input, Some(output_dir.clone())).unwrap();
    let stats = processor.process().unwrap();

    assert_eq!(stats.monthly_records, 36);
    assert_eq!(stats.years, 3);
    assert_eq!(stats.snowy_months, 18);
    assert_eq!(stats.tables_written, 7);
    assert_eq!(stats.output_dir, output_dir);

    for table in [
        tables::YEARLY_SUMMARY,
        tables::SNOWY_MONTHS,
        tables::CORRELATION_MATRIX,
        tables::SNOW_HISTOGRAM,
        tables::MONTHLY_SNOWFALL,
        tables::MONTHLY_SNOW_BOX,
        tables::TEMPERATURE_FRAMES,
    ] {
        let path = output_dir.join(format!("{}.parquet", table));
        assert!(path.exists(), "missing table {}", path.display());
    }
}

#[test]
fn test_yearly_summary_table_contents() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_monthly_csv(&temp_dir, 1990..1993);
    let output_dir = temp_dir.path().join("output");

    AnalysisProcessor::new(input, Some(output_dir.clone()))
        .unwrap()
        .process()
        .unwrap();

    let file = File::open(output_dir.join("yearly_summary.parquet")).unwrap();
    let df = ParquetReader::new(file).finish().unwrap();
    assert_eq!(df.height(), 3);

    let years: Vec<Option<i32>> = df
        .column(columns::YEAR)
        .unwrap()
        .as_materialized_series()
        .i32()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(years, vec![Some(1990), Some(1991), Some(1992)]);

    let snow = df
        .column(columns::TOTAL_SNOW_CM)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .get(0)
        .unwrap();
    assert!((snow - SNOW_BY_MONTH.iter().sum::<f64>()).abs() < 1e-9);
}

#[test]
fn test_csv_output_format() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_monthly_csv(&temp_dir, 2000..2002);
    let output_dir = temp_dir.path().join("csv-output");

    let config = AnalysisConfig::default().with_output_format(OutputFormat::Csv);
    let stats = AnalysisProcessor::new(input, Some(output_dir.clone()))
        .unwrap()
        .with_config(config)
        .process()
        .unwrap();

    assert_eq!(stats.tables_written, 7);
    assert!(output_dir.join("yearly_summary.csv").exists());
    assert!(!output_dir.join("yearly_summary.parquet").exists());

    let text = std::fs::read_to_string(output_dir.join("monthly_snowfall.csv")).unwrap();
    assert!(text.starts_with("Month,Mean Snow (cm),Records"));
    assert!(text.contains("Jan,40.0,2") || text.contains("Jan,40,2"));
}

#[test]
fn test_summary_only_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_monthly_csv(&temp_dir, 1990..1992);
    let output_dir = temp_dir.path().join("unused");

    let config = AnalysisConfig::default().with_summary_only();
    let stats = AnalysisProcessor::new(input, Some(output_dir.clone()))
        .unwrap()
        .with_config(config)
        .process()
        .unwrap();

    assert_eq!(stats.years, 2);
    assert_eq!(stats.tables_written, 0);
    assert!(!output_dir.exists());
}

#[test]
fn test_analyze_loaded_records() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_monthly_csv(&temp_dir, 1990..1993);
    let records = read_monthly_csv(input).unwrap();

    let analysis = analyze(&records, &AnalysisConfig::default()).unwrap();

    assert!(analysis.coverage.is_complete());
    assert_eq!(analysis.summaries.len(), 3);

    let first = &analysis.summaries[0];
    assert!((first.mean_temp_c.unwrap() - 7.75).abs() < 1e-9);
    assert!((first.mean_temp_f.unwrap() - 45.95).abs() < 1e-9);
    assert!((first.total_rain_mm.unwrap() - 737.0).abs() < 1e-9);
    assert!((first.extreme_max_temp_c.unwrap() - 33.5).abs() < 1e-9);
    assert!((first.extreme_min_temp_c.unwrap() + 20.0).abs() < 1e-9);

    // October's 1 cm stays below the threshold
    assert!(
        analysis
            .snowy_months
            .iter()
            .all(|r| r.month != Some(Month::October))
    );
    assert_eq!(analysis.monthly_snowfall.len(), 6);
    assert_eq!(analysis.snow_box_stats.len(), 12);
    assert_eq!(analysis.temperature_frames.len(), 100);
    assert_eq!(analysis.temperature_frames[99].len(), 3);
    assert_eq!(analysis.snow_histogram.as_ref().unwrap().total(), 18);
}
