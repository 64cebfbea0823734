//! Main analysis pipeline.
//!
//! Orchestrates the complete climate analysis workflow: loading monthly
//! records, checking month coverage, yearly aggregation, snowy-month
//! filtering, chart dataset preparation and table output.

pub mod tables;
pub mod writer;

#[cfg(test)]
mod tests;

use crate::aggregation::{MonthCoverage, aggregate_by_year, filter_by_snow_threshold, month_coverage};
use crate::charts::{
    self, BoxStats, CorrelationMatrix, Histogram, MonthlySnowfall,
};
use crate::config::AnalysisConfig;
use crate::constants::{DEFAULT_OUTPUT_DIR, tables as table_names};
use crate::error::{ClimateError, Result};
use crate::models::{AnalysisStats, MonthlyRecord, YearlySummary};
use crate::reader::MonthlyReader;
use writer::TableWriter;

use colored::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

/// Everything derived from one set of monthly records
#[derive(Debug, Clone)]
pub struct ClimateAnalysis {
    pub summaries: Vec<YearlySummary>,
    pub snowy_months: Vec<MonthlyRecord>,
    pub coverage: MonthCoverage,
    pub temperature_line: Vec<(i32, f64)>,
    pub temperature_frames: Vec<Vec<(i32, f64)>>,
    pub correlation: CorrelationMatrix,
    pub snow_histogram: Option<Histogram>,
    pub snow_scatter: Vec<(f64, f64)>,
    pub monthly_snowfall: Vec<MonthlySnowfall>,
    pub snow_box_stats: Vec<BoxStats>,
}

/// Run the in-memory part of the analysis
pub fn analyze(records: &[MonthlyRecord], config: &AnalysisConfig) -> Result<ClimateAnalysis> {
    config.validate()?;

    let coverage = month_coverage(records);
    if !coverage.is_complete() {
        let missing: Vec<&str> = coverage.missing.iter().map(|m| m.abbreviation()).collect();
        warn!(
            "Data quality: records cover {} of 12 months (missing: {})",
            coverage.present.len(),
            missing.join(", ")
        );
    }
    if coverage.unlabelled > 0 {
        warn!(
            "Data quality: {} records have no recognisable month",
            coverage.unlabelled
        );
    }

    let summaries = aggregate_by_year(records)?;
    let snowy_months = filter_by_snow_threshold(records, config.snow_threshold_cm);
    debug!(
        "{} of {} months exceed {} cm of snow",
        snowy_months.len(),
        records.len(),
        config.snow_threshold_cm
    );

    let temperature_line = charts::temperature_line(&summaries);
    let temperature_frames = charts::animation_frames(&temperature_line, config.animation_frames);

    Ok(ClimateAnalysis {
        correlation: charts::correlation_matrix(&summaries),
        snow_histogram: charts::histogram(
            &charts::mean_temperatures(&snowy_months),
            config.histogram_bins,
        ),
        snow_scatter: charts::snow_temperature_scatter(&snowy_months),
        monthly_snowfall: charts::monthly_mean_snowfall(&snowy_months),
        snow_box_stats: charts::monthly_snow_box_stats(records),
        summaries,
        snowy_months,
        coverage,
        temperature_line,
        temperature_frames,
    })
}

/// Processor for one monthly climate CSV
pub struct AnalysisProcessor {
    input_path: PathBuf,
    output_dir: PathBuf,
    config: AnalysisConfig,
    reader: MonthlyReader,
}

impl AnalysisProcessor {
    /// Create a new processor, defaulting the output directory to `./output`
    pub fn new(input_path: PathBuf, output_dir: Option<PathBuf>) -> Result<Self> {
        if !input_path.exists() {
            return Err(ClimateError::InputNotFound { path: input_path });
        }

        Ok(Self {
            input_path,
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            config: AnalysisConfig::default(),
            reader: MonthlyReader::new(),
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Main processing entry point
    pub fn process(&self) -> Result<AnalysisStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        println!("{}", "Starting climate analysis".bright_green().bold());
        println!("  {} {}", "Input:".bright_cyan(), self.input_path.display());
        if !self.config.summary_only {
            println!("  {} {}", "Output:".bright_cyan(), self.output_dir.display());
        }

        // Step 1: Load monthly records
        println!("\n{}", "Loading monthly records...".bright_yellow());
        let records = self.reader.read_path(&self.input_path)?;
        println!(
            "  {} {} monthly records",
            "Loaded".bright_green(),
            records.len().to_string().bright_white().bold()
        );

        // Step 2: Aggregate and prepare chart datasets
        println!("\n{}", "Aggregating by year...".bright_yellow());
        let analysis = analyze(&records, &self.config)?;
        self.report_summary(&analysis);

        let mut stats = AnalysisStats {
            monthly_records: records.len(),
            years: analysis.summaries.len(),
            snowy_months: analysis.snowy_months.len(),
            tables_written: 0,
            output_dir: self.output_dir.clone(),
            processing_time_ms: 0,
        };

        // Step 3: Write tables
        if self.config.summary_only {
            println!("\n{}", "Summary only - no tables written".bright_green());
        } else {
            println!("\n{}", "Writing tables...".bright_yellow());
            let writer = TableWriter::new(self.output_dir.clone(), self.config.output_format);
            stats.tables_written = write_tables(&writer, &analysis)?;
            println!(
                "  {} {} tables to {}",
                "Wrote".bright_green(),
                stats.tables_written.to_string().bright_white().bold(),
                writer.output_dir().display()
            );
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        println!(
            "\n{} in {} ms",
            "Analysis complete".bright_green().bold(),
            stats.processing_time_ms
        );
        Ok(stats)
    }

    fn report_summary(&self, analysis: &ClimateAnalysis) {
        let (Some(first), Some(last)) = (analysis.summaries.first(), analysis.summaries.last())
        else {
            return;
        };

        println!(
            "  {} {} years ({}-{})",
            "Aggregated".bright_green(),
            analysis.summaries.len().to_string().bright_white().bold(),
            first.year,
            last.year
        );

        let warmest = analysis
            .temperature_line
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((year, temp_f)) = warmest {
            println!(
                "  {} {} ({:.1} °F)",
                "Warmest year:".bright_cyan(),
                year,
                temp_f
            );
        }

        println!(
            "  {} {} months above {} cm",
            "Snowy months:".bright_cyan(),
            analysis.snowy_months.len(),
            self.config.snow_threshold_cm
        );
    }
}

/// Write every analysis table, returning how many were written
pub fn write_tables(writer: &TableWriter, analysis: &ClimateAnalysis) -> Result<usize> {
    let mut frames = vec![
        (
            table_names::YEARLY_SUMMARY,
            tables::yearly_summary_frame(&analysis.summaries)?,
        ),
        (
            table_names::SNOWY_MONTHS,
            tables::monthly_records_frame(&analysis.snowy_months)?,
        ),
        (
            table_names::CORRELATION_MATRIX,
            tables::correlation_frame(&analysis.correlation)?,
        ),
        (
            table_names::MONTHLY_SNOWFALL,
            tables::monthly_snowfall_frame(&analysis.monthly_snowfall)?,
        ),
        (
            table_names::MONTHLY_SNOW_BOX,
            tables::box_stats_frame(&analysis.snow_box_stats)?,
        ),
        (
            table_names::TEMPERATURE_FRAMES,
            tables::frames_frame(&analysis.temperature_frames)?,
        ),
    ];

    match &analysis.snow_histogram {
        Some(histogram) => frames.push((
            table_names::SNOW_HISTOGRAM,
            tables::histogram_frame(histogram)?,
        )),
        None => warn!("No snowy month has a mean temperature; skipping histogram table"),
    }

    for (name, df) in frames.iter_mut() {
        writer.write(name, df)?;
    }

    Ok(frames.len())
}
