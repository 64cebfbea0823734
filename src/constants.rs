//! Application constants for the climate analysis
//!
//! Column names of the Environment Canada monthly export, default
//! analysis parameters and output table names.

// =============================================================================
// Input Columns
// =============================================================================

/// Column names as they appear in the monthly climate CSV header
pub mod columns {
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const MEAN_TEMP_C: &str = "Mean Temp (°C)";
    pub const EXTREME_MAX_TEMP_C: &str = "Extr Max Temp (°C)";
    pub const EXTREME_MIN_TEMP_C: &str = "Extr Min Temp (°C)";
    pub const TOTAL_RAIN_MM: &str = "Total Rain (mm)";
    pub const TOTAL_SNOW_CM: &str = "Total Snow (cm)";

    /// Derived column, never read from input
    pub const MEAN_TEMP_F: &str = "Mean Temp (°F)";

    /// Every column the reader requires, in record field order
    pub const REQUIRED: &[&str] = &[
        YEAR,
        MONTH,
        MEAN_TEMP_C,
        EXTREME_MAX_TEMP_C,
        EXTREME_MIN_TEMP_C,
        TOTAL_RAIN_MM,
        TOTAL_SNOW_CM,
    ];
}

// =============================================================================
// Analysis Defaults
// =============================================================================

/// Monthly snowfall above this many centimetres counts as a snowy month
pub const DEFAULT_SNOW_THRESHOLD_CM: f64 = 2.0;

/// Bins used for the snowy-month temperature histogram
pub const DEFAULT_HISTOGRAM_BINS: usize = 9;

/// Frames in the year-by-year temperature animation
pub const DEFAULT_ANIMATION_FRAMES: usize = 100;

/// Box plot whisker reach, as a multiple of the interquartile range
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Default output directory for generated tables
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// =============================================================================
// Output Tables
// =============================================================================

pub mod tables {
    pub const YEARLY_SUMMARY: &str = "yearly_summary";
    pub const SNOWY_MONTHS: &str = "snowy_months";
    pub const CORRELATION_MATRIX: &str = "correlation_matrix";
    pub const SNOW_HISTOGRAM: &str = "snow_histogram";
    pub const MONTHLY_SNOWFALL: &str = "monthly_snowfall";
    pub const MONTHLY_SNOW_BOX: &str = "monthly_snow_box";
    pub const TEMPERATURE_FRAMES: &str = "temperature_frames";
}
