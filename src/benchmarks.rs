// src/benchmarks.rs
//! Per-platform scoring tables for the authenticity analyzers.
//!
//! Loaded from TOML. The embedded `config/benchmarks.toml` is the default
//! seed; deployments can point `BENCHMARKS_CONFIG_PATH` at their own table
//! without recompiling. Values are calibration, not contract.

use crate::types::Platform;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_BENCHMARKS_PATH: &str = "config/benchmarks.toml";
pub const ENV_BENCHMARKS_PATH: &str = "BENCHMARKS_CONFIG_PATH";

const DEFAULT_TOML: &str = include_str!("../config/benchmarks.toml");

static SHARED: Lazy<BenchmarkConfig> = Lazy::new(BenchmarkConfig::default_seed);

/// Engagement-rate bands (percent of the platform base) and ratio bands
/// (raw fractions) for one platform.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlatformBenchmarks {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub suspicious_low: f64,
    pub suspicious_high: f64,
    pub likes_ratio_min: f64,
    pub likes_ratio_max: f64,
    pub comments_to_likes_min: f64,
    pub comments_to_likes_max: f64,
    pub views_to_followers_min: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkConfig {
    pub youtube: PlatformBenchmarks,
    pub tiktok: PlatformBenchmarks,
    pub instagram: PlatformBenchmarks,
}

impl BenchmarkConfig {
    /// The process-wide default table (embedded seed).
    pub fn shared() -> &'static BenchmarkConfig {
        &SHARED
    }

    pub fn for_platform(&self, platform: Platform) -> &PlatformBenchmarks {
        match platform {
            Platform::Youtube => &self.youtube,
            Platform::Tiktok => &self.tiktok,
            Platform::Instagram => &self.instagram,
        }
    }

    /// Parse a TOML table and sanitize the numbers.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let mut cfg: BenchmarkConfig = toml::from_str(toml_str)?;
        cfg.youtube = cfg.youtube.sanitized();
        cfg.tiktok = cfg.tiktok.sanitized();
        cfg.instagram = cfg.instagram.sanitized();
        Ok(cfg)
    }

    /// Load from `BENCHMARKS_CONFIG_PATH` or the default path; falls back to
    /// the embedded seed when no file is present.
    pub fn from_toml() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_BENCHMARKS_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BENCHMARKS_PATH));

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content).map_err(|e| {
                anyhow::anyhow!("invalid benchmark table at {}: {}", path.display(), e)
            }),
            Err(_) => Ok(Self::default_seed()),
        }
    }

    /// The embedded table. Infallible by construction.
    pub fn default_seed() -> Self {
        Self::from_toml_str(DEFAULT_TOML).expect("embedded benchmark table is valid")
    }
}

impl PlatformBenchmarks {
    /// Non-finite or negative entries collapse to 0; the engagement bands are
    /// re-ordered ascending so a hand-edited table cannot invert the grading.
    fn sanitized(self) -> Self {
        let c = |x: f64| if x.is_finite() && x > 0.0 { x } else { 0.0 };
        let mut bands = [
            c(self.suspicious_low),
            c(self.average),
            c(self.good),
            c(self.excellent),
        ];
        bands.sort_by(|a, b| a.total_cmp(b));
        Self {
            suspicious_low: bands[0],
            average: bands[1],
            good: bands[2],
            excellent: bands[3],
            suspicious_high: c(self.suspicious_high).max(bands[3]),
            likes_ratio_min: c(self.likes_ratio_min),
            likes_ratio_max: c(self.likes_ratio_max).max(c(self.likes_ratio_min)),
            comments_to_likes_min: c(self.comments_to_likes_min),
            comments_to_likes_max: c(self.comments_to_likes_max)
                .max(c(self.comments_to_likes_min)),
            views_to_followers_min: c(self.views_to_followers_min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_loads_and_is_ordered() {
        let cfg = BenchmarkConfig::default_seed();
        for platform in [Platform::Youtube, Platform::Tiktok, Platform::Instagram] {
            let b = cfg.for_platform(platform);
            assert!(b.suspicious_low < b.average, "{platform:?}");
            assert!(b.average < b.good, "{platform:?}");
            assert!(b.good < b.excellent, "{platform:?}");
            assert!(b.excellent < b.suspicious_high, "{platform:?}");
            assert!(b.likes_ratio_min <= b.likes_ratio_max);
            assert!(b.comments_to_likes_min <= b.comments_to_likes_max);
        }
    }

    #[test]
    fn custom_table_parses() {
        let toml_str = r#"
[youtube]
excellent = 9.0
good = 6.0
average = 3.0
suspicious_low = 1.0
suspicious_high = 25.0
likes_ratio_min = 0.02
likes_ratio_max = 0.3
comments_to_likes_min = 0.002
comments_to_likes_max = 0.1
views_to_followers_min = 0.2

[tiktok]
excellent = 12.0
good = 8.0
average = 4.0
suspicious_low = 2.0
suspicious_high = 30.0
likes_ratio_min = 0.03
likes_ratio_max = 0.35
comments_to_likes_min = 0.002
comments_to_likes_max = 0.1
views_to_followers_min = 0.3

[instagram]
excellent = 6.0
good = 3.5
average = 1.5
suspicious_low = 0.5
suspicious_high = 12.0
likes_ratio_min = 0.01
likes_ratio_max = 0.2
comments_to_likes_min = 0.005
comments_to_likes_max = 0.15
views_to_followers_min = 0.0
"#;
        let cfg = BenchmarkConfig::from_toml_str(toml_str).expect("parse");
        assert!((cfg.youtube.excellent - 9.0).abs() < 1e-9);
        assert!((cfg.instagram.suspicious_high - 12.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_bands_are_reordered() {
        let toml_str = r#"
[youtube]
excellent = 1.0
good = 5.0
average = 3.0
suspicious_low = 8.0
suspicious_high = 2.0
likes_ratio_min = 0.5
likes_ratio_max = 0.1
comments_to_likes_min = 0.0
comments_to_likes_max = 0.0
views_to_followers_min = 0.0

[tiktok]
excellent = 12.0
good = 8.0
average = 4.0
suspicious_low = 2.0
suspicious_high = 30.0
likes_ratio_min = 0.03
likes_ratio_max = 0.35
comments_to_likes_min = 0.002
comments_to_likes_max = 0.1
views_to_followers_min = 0.3

[instagram]
excellent = 6.0
good = 3.5
average = 1.5
suspicious_low = 0.5
suspicious_high = 12.0
likes_ratio_min = 0.01
likes_ratio_max = 0.2
comments_to_likes_min = 0.005
comments_to_likes_max = 0.15
views_to_followers_min = 0.0
"#;
        let cfg = BenchmarkConfig::from_toml_str(toml_str).expect("parse");
        let y = cfg.youtube;
        assert!(y.suspicious_low <= y.average && y.average <= y.good && y.good <= y.excellent);
        assert!(y.suspicious_high >= y.excellent);
        assert!(y.likes_ratio_max >= y.likes_ratio_min);
    }
}
