// src/authenticity/ratios.rs
//! Ratio anomaly checks. Starts at the full 25 and deducts per anomaly;
//! deductions are additive within one call and the score floors at 0.

use super::{Severity, SubScore};
use crate::benchmarks::BenchmarkConfig;
use crate::types::{AuthenticityInputs, Platform};

pub const MAX_SCORE: u32 = 25;

/// Coefficient-of-variation thresholds for per-post engagement, in percent.
const VARIANCE_HIGH_PCT: f64 = 150.0;
const VARIANCE_LOW_PCT: f64 = 10.0;
/// Views-per-follower above this is genuine reach beyond the follower base.
const REACH_BONUS_RATIO: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct RatioAnalysis {
    pub sub: SubScore,
    pub anomalies: u32,
    pub assessment: String,
}

pub fn analyze(inputs: &AuthenticityInputs, cfg: &BenchmarkConfig) -> RatioAnalysis {
    let mut sub = SubScore::full(MAX_SCORE);
    let mut anomalies = 0u32;
    let platform = inputs.platform;
    let b = cfg.for_platform(platform);

    // Following/followers. Division guarded: an account with zero followers
    // is judged as if it had one.
    let followers = inputs.profile_metrics.followers.max(1) as f64;
    let follow_ratio = inputs.profile_metrics.following as f64 / followers;
    if follow_ratio > 1.5 {
        sub.deduct(8);
        anomalies += 1;
        sub.flag(
            Severity::High,
            "High following-to-followers ratio",
            format!("following {follow_ratio:.1}x its follower count suggests mass-follow tactics"),
        );
    } else if follow_ratio > 0.8 && follow_ratio <= 1.2 {
        sub.deduct(4);
        anomalies += 1;
        sub.flag(
            Severity::Medium,
            "Near-1:1 following-to-followers ratio",
            "a ratio close to 1 is typical of follow-for-follow growth".to_string(),
        );
    } else if follow_ratio < 0.3 {
        sub.positive(
            "Healthy follow ratio",
            format!("follows only {follow_ratio:.2}x its follower count"),
        );
    }

    let posts = &inputs.content_metrics;
    if !posts.is_empty() {
        let n = posts.len() as f64;
        let mean_likes = posts.iter().map(|p| p.likes as f64).sum::<f64>() / n;
        let mean_comments = posts.iter().map(|p| p.comments as f64).sum::<f64>() / n;
        let mean_views = posts.iter().map(|p| p.views as f64).sum::<f64>() / n;

        // Likes against the platform base.
        let likes_base = if platform == Platform::Instagram {
            followers
        } else {
            mean_views
        };
        if likes_base > 0.0 {
            let likes_ratio = mean_likes / likes_base;
            if likes_ratio < b.likes_ratio_min {
                sub.deduct(6);
                anomalies += 1;
                sub.flag(
                    Severity::Medium,
                    "Low likes ratio",
                    format!(
                        "{likes_ratio:.3} is under the expected minimum {:.3}",
                        b.likes_ratio_min
                    ),
                );
            } else if likes_ratio > b.likes_ratio_max {
                sub.deduct(10);
                anomalies += 1;
                sub.flag(
                    Severity::High,
                    "Inflated likes ratio",
                    format!(
                        "{likes_ratio:.3} exceeds the expected maximum {:.3}",
                        b.likes_ratio_max
                    ),
                );
            }
        }

        // Comments per like.
        if mean_likes > 0.0 {
            let cl = mean_comments / mean_likes;
            if cl < b.comments_to_likes_min {
                sub.deduct(3);
                anomalies += 1;
                sub.flag(
                    Severity::Low,
                    "Low comment-to-like ratio",
                    format!("{cl:.4} is under the expected minimum {:.4}", b.comments_to_likes_min),
                );
            } else if cl > b.comments_to_likes_max {
                sub.deduct(6);
                anomalies += 1;
                sub.flag(
                    Severity::Medium,
                    "Inflated comment-to-like ratio",
                    format!("{cl:.4} exceeds the expected maximum {:.4}", b.comments_to_likes_max),
                );
            } else {
                sub.positive(
                    "Comment-to-like ratio in band",
                    format!("{cl:.4} sits inside the expected range"),
                );
            }
        }

        // Views per follower only makes sense on view-based platforms.
        if platform.is_view_based() {
            let vf = mean_views / followers;
            if vf < b.views_to_followers_min {
                sub.deduct(6);
                anomalies += 1;
                sub.flag(
                    Severity::Low,
                    "Low views-to-followers ratio",
                    format!(
                        "mean views reach only {vf:.2}x the follower count (minimum {:.2})",
                        b.views_to_followers_min
                    ),
                );
            } else if vf > REACH_BONUS_RATIO {
                sub.positive(
                    "Reach beyond follower base",
                    format!("mean views are {vf:.1}x the follower count"),
                );
            }
        }

        // Engagement variance across posts.
        if posts.len() >= 2 {
            let engagements: Vec<f64> = posts
                .iter()
                .map(|p| (p.likes + p.comments) as f64)
                .collect();
            let mean = engagements.iter().sum::<f64>() / engagements.len() as f64;
            if mean > 0.0 {
                let var = engagements
                    .iter()
                    .map(|e| (e - mean).powi(2))
                    .sum::<f64>()
                    / engagements.len() as f64;
                let cv = 100.0 * var.sqrt() / mean;
                if cv > VARIANCE_HIGH_PCT {
                    sub.deduct(5);
                    anomalies += 1;
                    sub.flag(
                        Severity::Medium,
                        "Highly variable engagement",
                        format!(
                            "coefficient of variation {cv:.0}% across posts points at selective boosting"
                        ),
                    );
                } else if cv < VARIANCE_LOW_PCT {
                    sub.deduct(3);
                    anomalies += 1;
                    sub.flag(
                        Severity::Low,
                        "Suspiciously consistent engagement",
                        format!("coefficient of variation is only {cv:.1}% across posts"),
                    );
                }
            }
        }
    }

    let assessment = if anomalies == 0 {
        "no ratio anomalies".to_string()
    } else {
        format!("{anomalies} ratio anomalies detected")
    };

    RatioAnalysis {
        sub,
        anomalies,
        assessment,
    }
}
