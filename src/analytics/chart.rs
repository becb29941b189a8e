use chrono::Datelike;
use serde::Serialize;

use super::VolumePoint;

/// Series shaped for a line chart: parallel label and value arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartSeries {
    pub fn from_series(item: &str, series: &[VolumePoint]) -> Self {
        Self {
            label: format!("{item} Total Volume"),
            labels: series
                .iter()
                .map(|point| format!("{}/{}", point.date.month(), point.date.day()))
                .collect(),
            data: series.iter().map(|point| point.volume).collect(),
        }
    }
}
