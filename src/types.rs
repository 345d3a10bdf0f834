// src/types.rs
//! Caller-owned input records. The analysis core never mutates these; they
//! arrive from external collaborators (scrapers, API clients) as plain data.
//!
//! Wire names are camelCase to stay bit-exact with the consumers of this
//! core's output (`likeCount`, `profileMetrics`, `followerHistory`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single raw comment as delivered by the acquisition layer.
///
/// Malformed records are tolerated: missing fields deserialize to empty
/// string / zero and are counted by the filter rather than dropped silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl RawComment {
    pub fn new(author: impl Into<String>, text: impl Into<String>, like_count: u64) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            like_count,
            published_at: None,
        }
    }
}

/// Supported platforms. Engagement on youtube/tiktok is judged against views,
/// on instagram against followers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Tiktok,
    Instagram,
}

impl Platform {
    /// True for platforms whose engagement base is views rather than followers.
    pub fn is_view_based(self) -> bool {
        !matches!(self, Platform::Instagram)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetrics {
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

/// Per-post interaction counts. `shares` only matters on tiktok; `views`
/// only on view-based platforms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPost {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub views: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSample {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user: String,
}

impl CommentSample {
    pub fn new(text: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user: user.into(),
        }
    }
}

/// One point of a follower-count time series. Dates are calendar dates; day
/// differences between samples use calendar arithmetic, not raw subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerSample {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    #[serde(default)]
    pub follower_history: Vec<FollowerSample>,
}

/// Everything the authenticity scorer needs for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityInputs {
    pub platform: Platform,
    #[serde(default)]
    pub profile_metrics: ProfileMetrics,
    #[serde(default)]
    pub content_metrics: Vec<ContentPost>,
    #[serde(default)]
    pub comment_samples: Vec<CommentSample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_data: Option<HistoricalData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_comment_tolerates_missing_fields() {
        let c: RawComment = serde_json::from_str(r#"{"author":"ann"}"#).unwrap();
        assert_eq!(c.author, "ann");
        assert_eq!(c.text, "");
        assert_eq!(c.like_count, 0);
        assert!(c.published_at.is_none());
    }

    #[test]
    fn inputs_wire_shape_is_camel_case() {
        let inputs = AuthenticityInputs {
            platform: Platform::Tiktok,
            profile_metrics: ProfileMetrics {
                followers: 1000,
                following: 50,
            },
            content_metrics: vec![ContentPost {
                likes: 10,
                comments: 2,
                shares: 1,
                views: 500,
            }],
            comment_samples: vec![CommentSample::new("great breakdown", "ann")],
            historical_data: None,
        };
        let v: serde_json::Value = serde_json::to_value(&inputs).unwrap();
        assert_eq!(v["platform"], serde_json::json!("tiktok"));
        assert_eq!(v["profileMetrics"]["followers"], serde_json::json!(1000));
        assert_eq!(v["contentMetrics"][0]["views"], serde_json::json!(500));
    }

    #[test]
    fn follower_sample_parses_iso_dates() {
        let s: FollowerSample =
            serde_json::from_str(r#"{"date":"2026-03-01","count":1200}"#).unwrap();
        assert_eq!(s.count, 1200);
        assert_eq!(s.date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }
}
