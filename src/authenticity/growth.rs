// src/authenticity/growth.rs
//! Follower time-series analysis: spikes, drops and step patterns.
//!
//! Needs at least 3 chronologically sortable samples; anything less keeps
//! the default score and reports `analyzed: false`. Day differences use
//! calendar dates, never raw unit subtraction.

use super::{Severity, SubScore};
use crate::types::HistoricalData;
use chrono::NaiveDate;

pub const MAX_SCORE: u32 = 20;

const MIN_SAMPLES: usize = 3;
/// A spike: interval rate over 5x the series average with >1000 gained.
const SPIKE_RATE_FACTOR: f64 = 5.0;
const SPIKE_MIN_GAIN: i64 = 1000;
/// A drop: below -5%/day losing more than 500.
const DROP_RATE_PCT: f64 = -5.0;
const DROP_MIN_LOSS: i64 = -500;
/// Step pattern: mostly flat intervals punctuated by sharp jumps.
const FLAT_RATE_PCT: f64 = 0.5;
const FLAT_SHARE: f64 = 0.4;
const SHARP_RATE_PCT: f64 = 10.0;
const SHARP_MIN_COUNT: usize = 2;
/// Organic band for the average daily growth, in percent.
const ORGANIC_MAX_PCT: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct GrowthAnalysis {
    pub sub: SubScore,
    pub analyzed: bool,
    /// Mean daily growth in percent across valid intervals.
    pub average_daily_growth_pct: f64,
    pub assessment: String,
}

fn unanalyzed() -> GrowthAnalysis {
    GrowthAnalysis {
        sub: SubScore::full(MAX_SCORE),
        analyzed: false,
        average_daily_growth_pct: 0.0,
        assessment: "not enough follower history to analyze".to_string(),
    }
}

pub fn analyze(historical: Option<&HistoricalData>) -> GrowthAnalysis {
    let Some(h) = historical else {
        return unanalyzed();
    };
    if h.follower_history.len() < MIN_SAMPLES {
        return unanalyzed();
    }

    let mut samples: Vec<(NaiveDate, u64)> = h
        .follower_history
        .iter()
        .map(|s| (s.date, s.count))
        .collect();
    samples.sort_by_key(|(date, _)| *date);

    // Daily growth rate per interval, skipping zero-day and zero-base pairs.
    let mut rates: Vec<f64> = Vec::new();
    let mut gains: Vec<i64> = Vec::new();
    for w in samples.windows(2) {
        let (prev_date, prev) = w[0];
        let (curr_date, curr) = w[1];
        let days = (curr_date - prev_date).num_days();
        if days > 0 && prev > 0 {
            let gain = curr as i64 - prev as i64;
            rates.push((gain as f64 / prev as f64) / days as f64 * 100.0);
            gains.push(gain);
        }
    }
    if rates.is_empty() {
        return unanalyzed();
    }

    let avg = rates.iter().sum::<f64>() / rates.len() as f64;

    let spikes = rates
        .iter()
        .zip(&gains)
        .filter(|(r, g)| **r > SPIKE_RATE_FACTOR * avg && **g > SPIKE_MIN_GAIN)
        .count();
    let drops = rates
        .iter()
        .zip(&gains)
        .filter(|(r, g)| **r < DROP_RATE_PCT && **g < DROP_MIN_LOSS)
        .count();
    let flat = rates.iter().filter(|r| r.abs() < FLAT_RATE_PCT).count();
    let sharp = rates.iter().filter(|r| **r > SHARP_RATE_PCT).count();

    let mut sub = SubScore::full(MAX_SCORE);
    let mut findings: Vec<&str> = Vec::new();

    if spikes > 0 {
        sub.deduct(10);
        findings.push("spikes");
        sub.flag(
            Severity::High,
            "Follower count spikes",
            format!(
                "{spikes} interval(s) grew over {SPIKE_RATE_FACTOR:.0}x the average rate while gaining more than {SPIKE_MIN_GAIN} followers"
            ),
        );
    }
    if drops > 0 {
        sub.deduct(8);
        findings.push("drops");
        sub.flag(
            Severity::High,
            "Sudden follower drops",
            format!(
                "{drops} interval(s) lost more than {} followers at over {:.0}%/day, typical of purged purchased followers",
                -DROP_MIN_LOSS,
                -DROP_RATE_PCT
            ),
        );
    }
    if flat as f64 / rates.len() as f64 > FLAT_SHARE && sharp > SHARP_MIN_COUNT {
        sub.deduct(5);
        findings.push("step pattern");
        sub.flag(
            Severity::Medium,
            "Step-like follower growth",
            format!(
                "{flat} of {} intervals are flat while {sharp} jump sharply",
                rates.len()
            ),
        );
    }
    if spikes == 0 && drops == 0 && avg > 0.0 && avg < ORGANIC_MAX_PCT {
        sub.positive(
            "Steady organic growth",
            format!("average daily growth of {avg:.2}% with no spikes or drops"),
        );
    }

    let assessment = if findings.is_empty() {
        format!("average daily growth {avg:.2}%, no anomalies")
    } else {
        format!("growth anomalies: {}", findings.join(", "))
    };

    GrowthAnalysis {
        sub,
        analyzed: true,
        average_daily_growth_pct: round2(avg),
        assessment,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
