//! Command-line interface components.

use crate::config::{AnalysisConfig, OutputFormat};
use crate::constants::{
    DEFAULT_ANIMATION_FRAMES, DEFAULT_HISTOGRAM_BINS, DEFAULT_SNOW_THRESHOLD_CM,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "toronto-climate")]
#[command(about = "Aggregate monthly Toronto climate records into yearly statistics and chart tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the monthly climate CSV export
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output directory for generated tables (defaults to ./output)
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// Monthly snowfall (cm) a month must exceed to count as snowy
    #[arg(long, default_value_t = DEFAULT_SNOW_THRESHOLD_CM)]
    pub snow_threshold: f64,

    /// Bins in the snowy-month temperature histogram
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub histogram_bins: usize,

    /// Frames in the yearly temperature animation
    #[arg(long, default_value_t = DEFAULT_ANIMATION_FRAMES)]
    pub frames: usize,

    /// Table output format
    #[arg(long, value_enum, default_value = "parquet")]
    pub format: OutputFormat,

    /// Aggregate and report without writing tables
    #[arg(long)]
    pub summary_only: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the analysis configuration from the parsed arguments
    pub fn to_config(&self) -> AnalysisConfig {
        let config = AnalysisConfig::default()
            .with_snow_threshold(self.snow_threshold)
            .with_histogram_bins(self.histogram_bins)
            .with_animation_frames(self.frames)
            .with_output_format(self.format);

        if self.summary_only {
            config.with_summary_only()
        } else {
            config
        }
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["toronto-climate", "monthly.csv"]);
        assert_eq!(args.input_path, PathBuf::from("monthly.csv"));
        assert_eq!(args.get_log_level(), "warn");
        assert_eq!(args.to_config(), AnalysisConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "toronto-climate",
            "monthly.csv",
            "-o",
            "charts",
            "--snow-threshold",
            "5",
            "--histogram-bins",
            "12",
            "--frames",
            "40",
            "--format",
            "csv",
            "--summary-only",
            "-vv",
        ]);

        let config = args.to_config();
        assert_eq!(args.output_path, Some(PathBuf::from("charts")));
        assert_eq!(config.snow_threshold_cm, 5.0);
        assert_eq!(config.histogram_bins, 12);
        assert_eq!(config.animation_frames, 40);
        assert_eq!(config.output_format, OutputFormat::Csv);
        assert!(config.summary_only);
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["toronto-climate", "monthly.csv", "-q", "-v"]).is_err());
        let args = Args::parse_from(["toronto-climate", "monthly.csv", "-q"]);
        assert_eq!(args.get_log_level(), "error");
    }
}
