//! Delta math between the current and preceding period of a metric.

use serde::{Deserialize, Serialize};

/// Differences below this band read as flat rather than up or down.
const NEUTRAL_BAND: f64 = 0.01;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Current-vs-preceding comparison for a single metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricComparison {
    pub current: f64,
    pub preceding: f64,
    pub delta: f64,
    pub pct_change: f64,
    pub trend: Trend,
}

/// Compares a metric across two periods. A zero preceding value cannot be a
/// percentage base: growth from zero reports as 100%, zero-to-zero as 0%.
pub fn compare(current: f64, preceding: f64) -> MetricComparison {
    let delta = current - preceding;
    let pct_change = if preceding != 0.0 {
        delta / preceding * 100.0
    } else if current > 0.0 {
        100.0
    } else {
        0.0
    };
    let trend = if delta.abs() < NEUTRAL_BAND {
        Trend::Neutral
    } else if delta > 0.0 {
        Trend::Up
    } else {
        Trend::Down
    };
    MetricComparison {
        current,
        preceding,
        delta,
        pct_change,
        trend,
    }
}
