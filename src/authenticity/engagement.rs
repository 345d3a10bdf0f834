// src/authenticity/engagement.rs
//! Engagement-rate grading against platform benchmark bands.
//!
//! View-based platforms (youtube, tiktok) measure per-post engagement
//! against views; instagram measures against followers. Rates far above the
//! band are as suspicious as rates far below it.

use super::{Severity, SubScore};
use crate::benchmarks::BenchmarkConfig;
use crate::types::{AuthenticityInputs, Platform};

pub const MAX_SCORE: u32 = 25;

#[derive(Debug, Clone)]
pub struct EngagementAnalysis {
    pub sub: SubScore,
    /// Percent of the platform base, 2-decimal precision.
    pub rate: f64,
    pub assessment: String,
}

pub fn analyze(inputs: &AuthenticityInputs, cfg: &BenchmarkConfig) -> EngagementAnalysis {
    let posts = &inputs.content_metrics;
    if posts.is_empty() {
        return EngagementAnalysis {
            sub: SubScore::zero(MAX_SCORE),
            rate: 0.0,
            assessment: "unknown (no content metrics provided)".to_string(),
        };
    }

    let platform = inputs.platform;
    let n = posts.len() as f64;
    let mean_engagement: f64 = posts
        .iter()
        .map(|p| {
            let shares = if platform == Platform::Tiktok { p.shares } else { 0 };
            (p.likes + p.comments + shares) as f64
        })
        .sum::<f64>()
        / n;
    let mean_base: f64 = posts
        .iter()
        .map(|p| {
            if platform.is_view_based() {
                p.views as f64
            } else {
                inputs.profile_metrics.followers as f64
            }
        })
        .sum::<f64>()
        / n;

    let rate = if mean_base > 0.0 {
        round2(100.0 * mean_engagement / mean_base)
    } else {
        0.0
    };

    let b = cfg.for_platform(platform);
    let mut sub = SubScore::zero(MAX_SCORE);

    let (score, assessment) = if rate > b.suspicious_high {
        sub.flag(
            Severity::High,
            "Abnormally high engagement rate",
            format!(
                "{rate:.2}% is above the {} high bound of {:.2}%, consistent with purchased engagement",
                platform.as_str(),
                b.suspicious_high
            ),
        );
        (5, "suspiciously high")
    } else if rate >= b.excellent {
        sub.positive(
            "Excellent engagement rate",
            format!("{rate:.2}% is at or above the {:.2}% excellent band", b.excellent),
        );
        (25, "excellent")
    } else if rate >= b.good {
        sub.positive(
            "Healthy engagement rate",
            format!("{rate:.2}% sits in the good band for {}", platform.as_str()),
        );
        (22, "good")
    } else if rate >= b.average {
        (18, "average")
    } else if rate >= b.suspicious_low {
        (12, "below average")
    } else {
        sub.flag(
            Severity::High,
            "Abnormally low engagement rate",
            format!(
                "{rate:.2}% is below the {} low bound of {:.2}%",
                platform.as_str(),
                b.suspicious_low
            ),
        );
        (5, "suspiciously low")
    };
    sub.score = score;

    EngagementAnalysis {
        sub,
        rate,
        assessment: format!("engagement rate {rate:.2}% ({assessment})"),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
