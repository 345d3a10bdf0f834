// src/authenticity/mod.rs
//! Composite engagement-authenticity scoring.
//!
//! Four independent analyzers (engagement rate 25, ratio anomalies 25, bot
//! patterns 30, growth patterns 20) sum to a 0-100 score. Hard caps apply
//! after the base verdict, in contract order: the high-flag cap first, then
//! the bot-percentage cap, which may lower an already capped score.

pub mod bot_patterns;
pub mod engagement;
pub mod growth;
pub mod ratios;

use crate::benchmarks::BenchmarkConfig;
use crate::types::AuthenticityInputs;
use serde::{Deserialize, Serialize};

pub use bot_patterns::BotAnalysis;
pub use engagement::EngagementAnalysis;
pub use growth::GrowthAnalysis;
pub use ratios::RatioAnalysis;

/// Three or more high-severity flags cap the composite at 45.
const HIGH_FLAG_CAP_COUNT: usize = 3;
const HIGH_FLAG_CAP: u32 = 45;
/// A bot share above 50% caps the composite at 35.
const BOT_CAP_PCT: f64 = 50.0;
const BOT_CAP: u32 = 35;

/// Severity order matters: flags are reported high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlag {
    pub severity: Severity,
    pub flag: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositiveSignal {
    pub signal: String,
    pub details: String,
}

/// One analyzer's contribution: `0 <= score <= max_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScore {
    pub score: u32,
    pub max_score: u32,
    pub flags: Vec<RedFlag>,
    pub positives: Vec<PositiveSignal>,
}

impl SubScore {
    pub fn full(max_score: u32) -> Self {
        Self {
            score: max_score,
            max_score,
            flags: Vec::new(),
            positives: Vec::new(),
        }
    }

    pub fn zero(max_score: u32) -> Self {
        Self {
            score: 0,
            max_score,
            flags: Vec::new(),
            positives: Vec::new(),
        }
    }

    pub fn deduct(&mut self, amount: u32) {
        self.score = self.score.saturating_sub(amount);
    }

    pub fn flag(&mut self, severity: Severity, flag: impl Into<String>, details: impl Into<String>) {
        self.flags.push(RedFlag {
            severity,
            flag: flag.into(),
            details: details.into(),
        });
    }

    pub fn positive(&mut self, signal: impl Into<String>, details: impl Into<String>) {
        self.positives.push(PositiveSignal {
            signal: signal.into(),
            details: details.into(),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Highly Authentic")]
    HighlyAuthentic,
    #[serde(rename = "Likely Authentic")]
    LikelyAuthentic,
    #[serde(rename = "Some Concerns")]
    SomeConcerns,
    #[serde(rename = "Significant Red Flags")]
    SignificantRedFlags,
    #[serde(rename = "High Fraud Risk")]
    HighFraudRisk,
}

impl Verdict {
    fn for_score(score: u32) -> Self {
        if score >= 90 {
            Verdict::HighlyAuthentic
        } else if score >= 75 {
            Verdict::LikelyAuthentic
        } else if score >= 60 {
            Verdict::SomeConcerns
        } else if score >= 40 {
            Verdict::SignificantRedFlags
        } else {
            Verdict::HighFraudRisk
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::HighlyAuthentic => "Highly Authentic",
            Verdict::LikelyAuthentic => "Likely Authentic",
            Verdict::SomeConcerns => "Some Concerns",
            Verdict::SignificantRedFlags => "Significant Red Flags",
            Verdict::HighFraudRisk => "High Fraud Risk",
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            Verdict::HighlyAuthentic | Verdict::LikelyAuthentic => ColorTag::Success,
            Verdict::SomeConcerns | Verdict::SignificantRedFlags => ColorTag::Warning,
            Verdict::HighFraudRisk => ColorTag::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentBreakdown {
    pub score: u32,
    pub max: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub engagement_analysis: ComponentBreakdown,
    pub ratio_analysis: ComponentBreakdown,
    pub bot_analysis: ComponentBreakdown,
    pub growth_analysis: ComponentBreakdown,
}

/// The full report handed to persistence, prompt assembly and the UI.
/// Computed fresh per call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityResult {
    pub score: u32,
    pub verdict: Verdict,
    pub color: ColorTag,
    pub breakdown: Breakdown,
    pub red_flags: Vec<RedFlag>,
    pub positive_signals: Vec<PositiveSignal>,
    pub recommendations: Vec<String>,
}

/// Score an account with the shared benchmark tables.
pub fn score_authenticity(inputs: &AuthenticityInputs) -> AuthenticityResult {
    score_authenticity_with(inputs, BenchmarkConfig::shared())
}

/// Score an account with an explicit benchmark table.
pub fn score_authenticity_with(
    inputs: &AuthenticityInputs,
    cfg: &BenchmarkConfig,
) -> AuthenticityResult {
    let engagement = engagement::analyze(inputs, cfg);
    let ratios = ratios::analyze(inputs, cfg);
    let bots = bot_patterns::analyze(&inputs.comment_samples);
    let growth = growth::analyze(inputs.historical_data.as_ref());

    let subs = [&engagement.sub, &ratios.sub, &bots.sub, &growth.sub];
    let total: u32 = subs.iter().map(|s| s.score).sum();
    let max_total: u32 = subs.iter().map(|s| s.max_score).sum();
    let mut score = if max_total == 0 {
        0
    } else {
        (100.0 * f64::from(total) / f64::from(max_total)).round() as u32
    };
    let mut verdict = Verdict::for_score(score);

    let mut red_flags: Vec<RedFlag> = Vec::new();
    let mut positive_signals: Vec<PositiveSignal> = Vec::new();
    for s in subs {
        red_flags.extend(s.flags.iter().cloned());
        positive_signals.extend(s.positives.iter().cloned());
    }
    // Stable: within a severity, analyzer order is preserved.
    red_flags.sort_by(|a, b| b.severity.cmp(&a.severity));

    // Hard caps, in contract order. The bot cap can lower a score the flag
    // cap already capped.
    let high_count = red_flags
        .iter()
        .filter(|f| f.severity == Severity::High)
        .count();
    if high_count >= HIGH_FLAG_CAP_COUNT {
        score = score.min(HIGH_FLAG_CAP);
        verdict = Verdict::SignificantRedFlags;
    }
    if bots.suspected_bot_percentage > BOT_CAP_PCT {
        score = score.min(BOT_CAP);
        verdict = Verdict::HighFraudRisk;
    }

    let recommendations = recommendations_for(score, &red_flags);

    AuthenticityResult {
        score,
        color: verdict.color(),
        verdict,
        breakdown: Breakdown {
            engagement_analysis: ComponentBreakdown {
                score: engagement.sub.score,
                max: engagement.sub.max_score,
                reason: engagement.assessment.clone(),
            },
            ratio_analysis: ComponentBreakdown {
                score: ratios.sub.score,
                max: ratios.sub.max_score,
                reason: ratios.assessment.clone(),
            },
            bot_analysis: ComponentBreakdown {
                score: bots.sub.score,
                max: bots.sub.max_score,
                reason: bots.assessment.clone(),
            },
            growth_analysis: ComponentBreakdown {
                score: growth.sub.score,
                max: growth.sub.max_score,
                reason: growth.assessment.clone(),
            },
        },
        red_flags,
        positive_signals,
        recommendations,
    }
}

/// Deterministic, ordered recommendation list keyed on the final score band,
/// with conditional additions driven by the high-severity flags.
fn recommendations_for(score: u32, red_flags: &[RedFlag]) -> Vec<String> {
    let mut recs: Vec<String> = Vec::new();
    if score >= 75 {
        recs.push("Engagement looks organic; proceed with standard campaign tracking.".into());
        recs.push("Re-check the account monthly to catch sudden pattern changes.".into());
    } else if score >= 60 {
        recs.push("Review the flagged areas before committing to a partnership.".into());
        recs.push("Compare recent posts against older ones to see whether the anomalies are new.".into());
    } else if score >= 40 {
        recs.push("Request first-party analytics exports before any paid deal.".into());
        recs.push("Weight recent engagement more heavily than follower count in negotiations.".into());
    } else {
        recs.push("Avoid paid collaborations until the account demonstrates organic engagement.".into());
        recs.push("Treat follower and engagement counts on this account as unreliable.".into());
    }

    let high_text: String = red_flags
        .iter()
        .filter(|f| f.severity == Severity::High)
        .map(|f| format!("{} {}", f.flag, f.details).to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    if high_text.contains("bot") {
        recs.push("Manually audit a sample of recent comments; a large share appears automated.".into());
    }
    if high_text.contains("follower") {
        recs.push("Inspect third-party follower-growth charts for purchased-follower activity.".into());
    }
    recs
}
