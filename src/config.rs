//! Configuration management and validation.
//!
//! Provides the analysis parameters (snow threshold, histogram bins,
//! animation length) and output settings for a processing run.

use crate::constants::{DEFAULT_ANIMATION_FRAMES, DEFAULT_HISTOGRAM_BINS, DEFAULT_SNOW_THRESHOLD_CM};
use crate::error::{ClimateError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File format of generated tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum OutputFormat {
    /// Snappy-compressed Parquet
    Parquet,
    /// Comma-separated text with a header row
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Parquet => "parquet",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Global configuration for a climate analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Monthly snowfall must exceed this (cm) to count as a snowy month
    pub snow_threshold_cm: f64,

    /// Bins in the snowy-month temperature histogram
    pub histogram_bins: usize,

    /// Frames in the yearly temperature animation
    pub animation_frames: usize,

    /// Format of written tables
    pub output_format: OutputFormat,

    /// Aggregate and report without writing any tables
    pub summary_only: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            snow_threshold_cm: DEFAULT_SNOW_THRESHOLD_CM,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            animation_frames: DEFAULT_ANIMATION_FRAMES,
            output_format: OutputFormat::Parquet,
            summary_only: false,
        }
    }
}

impl AnalysisConfig {
    /// Set the snowy-month threshold in centimetres
    pub fn with_snow_threshold(mut self, threshold_cm: f64) -> Self {
        self.snow_threshold_cm = threshold_cm;
        self
    }

    /// Set the histogram bin count
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    /// Set the animation frame count
    pub fn with_animation_frames(mut self, frames: usize) -> Self {
        self.animation_frames = frames;
        self
    }

    /// Set the table output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Skip writing tables
    pub fn with_summary_only(mut self) -> Self {
        self.summary_only = true;
        self
    }

    /// Reject parameters no analysis can run with
    pub fn validate(&self) -> Result<()> {
        if !self.snow_threshold_cm.is_finite() || self.snow_threshold_cm < 0.0 {
            return Err(ClimateError::configuration(format!(
                "snow threshold must be a non-negative number of centimetres, got {}",
                self.snow_threshold_cm
            )));
        }
        if self.histogram_bins == 0 {
            return Err(ClimateError::configuration("histogram needs at least one bin"));
        }
        if self.animation_frames == 0 {
            return Err(ClimateError::configuration(
                "animation needs at least one frame",
            ));
        }

        debug!("Validated configuration: {:?}", self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_analysis() {
        let config = AnalysisConfig::default();
        assert_eq!(config.snow_threshold_cm, 2.0);
        assert_eq!(config.histogram_bins, 9);
        assert_eq!(config.animation_frames, 100);
        assert_eq!(config.output_format, OutputFormat::Parquet);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = AnalysisConfig::default()
            .with_snow_threshold(5.0)
            .with_histogram_bins(12)
            .with_animation_frames(20)
            .with_output_format(OutputFormat::Csv)
            .with_summary_only();

        assert_eq!(config.snow_threshold_cm, 5.0);
        assert_eq!(config.histogram_bins, 12);
        assert_eq!(config.animation_frames, 20);
        assert_eq!(config.output_format.extension(), "csv");
        assert!(config.summary_only);
    }

    #[test]
    fn test_validation_rejects_bad_parameters() {
        let base = AnalysisConfig::default();
        assert!(base.clone().with_snow_threshold(f64::NAN).validate().is_err());
        assert!(base.clone().with_snow_threshold(-1.0).validate().is_err());
        assert!(base.clone().with_histogram_bins(0).validate().is_err());
        assert!(base.with_animation_frames(0).validate().is_err());
    }
}
