//! Conversion of typed analysis results into data frames
//!
//! Column names follow the input export so downstream charting tools see
//! the same labels the raw data uses.

use crate::charts::{BoxStats, CorrelationMatrix, Histogram, MonthlySnowfall, SummaryColumn};
use crate::constants::columns;
use crate::error::Result;
use crate::models::{MonthlyRecord, YearlySummary};
use polars::prelude::{Column, DataFrame};

/// One row per year, columns in [`SummaryColumn::ALL`] order
pub fn yearly_summary_frame(summaries: &[YearlySummary]) -> Result<DataFrame> {
    let mut frame_columns = vec![Column::new(
        columns::YEAR.into(),
        summaries.iter().map(|s| s.year).collect::<Vec<i32>>(),
    )];

    for column in &SummaryColumn::ALL[1..] {
        frame_columns.push(Column::new(
            column.label().into(),
            summaries.iter().map(|s| column.value(s)).collect::<Vec<Option<f64>>>(),
        ));
    }

    Ok(DataFrame::new(frame_columns)?)
}

/// One row per monthly record, months written as abbreviations
pub fn monthly_records_frame(records: &[MonthlyRecord]) -> Result<DataFrame> {
    let floats = |f: fn(&MonthlyRecord) -> Option<f64>| -> Vec<Option<f64>> {
        records.iter().map(f).collect()
    };

    Ok(DataFrame::new(vec![
        Column::new(
            columns::YEAR.into(),
            records.iter().map(|r| r.year).collect::<Vec<Option<i32>>>(),
        ),
        Column::new(
            columns::MONTH.into(),
            records
                .iter()
                .map(|r| r.month.map(|m| m.abbreviation()))
                .collect::<Vec<Option<&str>>>(),
        ),
        Column::new(columns::MEAN_TEMP_C.into(), floats(|r| r.mean_temp_c)),
        Column::new(columns::EXTREME_MAX_TEMP_C.into(), floats(|r| r.extreme_max_temp_c)),
        Column::new(columns::EXTREME_MIN_TEMP_C.into(), floats(|r| r.extreme_min_temp_c)),
        Column::new(columns::TOTAL_RAIN_MM.into(), floats(|r| r.total_rain_mm)),
        Column::new(columns::TOTAL_SNOW_CM.into(), floats(|r| r.total_snow_cm)),
    ])?)
}

/// Square matrix with a leading `Column` label column
pub fn correlation_frame(matrix: &CorrelationMatrix) -> Result<DataFrame> {
    let mut frame_columns = vec![Column::new(
        "Column".into(),
        matrix.columns.iter().map(|c| c.label()).collect::<Vec<&str>>(),
    )];

    for (j, column) in matrix.columns.iter().enumerate() {
        frame_columns.push(Column::new(
            column.label().into(),
            matrix.values.iter().map(|row| row[j]).collect::<Vec<Option<f64>>>(),
        ));
    }

    Ok(DataFrame::new(frame_columns)?)
}

pub fn histogram_frame(histogram: &Histogram) -> Result<DataFrame> {
    let (mut lower, mut upper, mut counts) = (Vec::new(), Vec::new(), Vec::new());
    for (low, high, count) in histogram.bins() {
        lower.push(low);
        upper.push(high);
        counts.push(count as u32);
    }

    Ok(DataFrame::new(vec![
        Column::new("Bin Lower (°C)".into(), lower),
        Column::new("Bin Upper (°C)".into(), upper),
        Column::new("Count".into(), counts),
    ])?)
}

pub fn monthly_snowfall_frame(bars: &[MonthlySnowfall]) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        Column::new(
            columns::MONTH.into(),
            bars.iter().map(|b| b.month.abbreviation()).collect::<Vec<&str>>(),
        ),
        Column::new(
            "Mean Snow (cm)".into(),
            bars.iter().map(|b| b.mean_snow_cm).collect::<Vec<f64>>(),
        ),
        Column::new(
            "Records".into(),
            bars.iter().map(|b| b.records as u32).collect::<Vec<u32>>(),
        ),
    ])?)
}

pub fn box_stats_frame(stats: &[BoxStats]) -> Result<DataFrame> {
    let floats = |f: fn(&BoxStats) -> f64| -> Vec<f64> { stats.iter().map(f).collect() };

    Ok(DataFrame::new(vec![
        Column::new(
            columns::MONTH.into(),
            stats.iter().map(|s| s.month.abbreviation()).collect::<Vec<&str>>(),
        ),
        Column::new(
            "Count".into(),
            stats.iter().map(|s| s.count as u32).collect::<Vec<u32>>(),
        ),
        Column::new("Whisker Low".into(), floats(|s| s.whisker_low)),
        Column::new("Q1".into(), floats(|s| s.q1)),
        Column::new("Median".into(), floats(|s| s.median)),
        Column::new("Q3".into(), floats(|s| s.q3)),
        Column::new("Whisker High".into(), floats(|s| s.whisker_high)),
        Column::new(
            "Outliers".into(),
            stats.iter().map(|s| s.outliers.len() as u32).collect::<Vec<u32>>(),
        ),
    ])?)
}

/// Animation frames in long format: one row per (frame, point)
pub fn frames_frame(frames: &[Vec<(i32, f64)>]) -> Result<DataFrame> {
    let (mut frame_index, mut years, mut temps) = (Vec::new(), Vec::new(), Vec::new());
    for (index, frame) in frames.iter().enumerate() {
        for (year, temp) in frame {
            frame_index.push(index as u32);
            years.push(*year);
            temps.push(*temp);
        }
    }

    Ok(DataFrame::new(vec![
        Column::new("Frame".into(), frame_index),
        Column::new(columns::YEAR.into(), years),
        Column::new(columns::MEAN_TEMP_F.into(), temps),
    ])?)
}
