// src/lexicon.rs
//! Shared lexicon: word sets for sentiment scoring and compiled pattern
//! lists for the filter, sampler and bot detector.
//!
//! Word lists live in `comment_lexicon.json` at the crate root; pattern
//! lists are compiled here once. The whole structure is read-only after
//! construction and safe to share across threads.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::load);

#[derive(Debug, Deserialize)]
struct LexiconFile {
    positive: Vec<String>,
    negative: Vec<String>,
    intensifiers: Vec<String>,
    negators: Vec<String>,
}

#[derive(Debug)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    intensifiers: HashSet<String>,
    negators: HashSet<String>,
    spam: Vec<Regex>,
    generic_praise: Vec<Regex>,
    off_topic: Vec<Regex>,
    bot_usernames: Vec<Regex>,
    objection: Regex,
    purchase_intent: Regex,
}

impl Lexicon {
    /// The process-wide shared instance.
    pub fn shared() -> &'static Lexicon {
        &LEXICON
    }

    fn load() -> Self {
        let raw = include_str!("../comment_lexicon.json");
        let file: LexiconFile =
            serde_json::from_str(raw).expect("valid embedded comment lexicon");

        let to_set = |words: Vec<String>| -> HashSet<String> {
            words.into_iter().map(|w| w.to_ascii_lowercase()).collect()
        };

        Self {
            positive: to_set(file.positive),
            negative: to_set(file.negative),
            intensifiers: to_set(file.intensifiers),
            negators: to_set(file.negators),
            spam: compile(SPAM_PATTERNS),
            generic_praise: compile(GENERIC_PRAISE_PATTERNS),
            off_topic: compile(OFF_TOPIC_PATTERNS),
            bot_usernames: compile(BOT_USERNAME_PATTERNS),
            objection: Regex::new(OBJECTION_PATTERN).expect("objection regex"),
            purchase_intent: Regex::new(PURCHASE_INTENT_PATTERN)
                .expect("purchase intent regex"),
        }
    }

    #[inline]
    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    #[inline]
    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    #[inline]
    pub fn is_intensifier(&self, token: &str) -> bool {
        self.intensifiers.contains(token)
    }

    #[inline]
    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token)
    }

    /// Spam/promo content: URLs, subscribe begging, contact channels, promo codes.
    pub fn is_spam(&self, text: &str) -> bool {
        self.spam.iter().any(|re| re.is_match(text))
    }

    /// Canned one-liner praise ("nice", "great video", ...). Matched against
    /// trimmed text; the 30-char cap is enforced by the caller.
    pub fn is_generic_praise(&self, text: &str) -> bool {
        self.generic_praise.iter().any(|re| re.is_match(text))
    }

    /// Engagement noise: "first!", year check-ins, notification squads, bare greetings.
    pub fn is_off_topic(&self, text: &str) -> bool {
        self.off_topic.iter().any(|re| re.is_match(text))
    }

    pub fn is_suspicious_username(&self, username: &str) -> bool {
        self.bot_usernames.iter().any(|re| re.is_match(username))
    }

    pub fn has_objection(&self, text: &str) -> bool {
        self.objection.is_match(text)
    }

    pub fn has_purchase_intent(&self, text: &str) -> bool {
        self.purchase_intent.is_match(text)
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid built-in pattern"))
        .collect()
}

const SPAM_PATTERNS: &[&str] = &[
    r"(?i)https?://",
    r"(?i)\bwww\.",
    r"(?i)\bsubscribe to\b",
    r"(?i)\bsub to\b",
    r"(?i)\bcheck out my\b",
    r"(?i)\bvisit my (channel|page|profile)\b",
    r"(?i)\bdm me\b",
    r"(?i)100%\s*guaranteed",
    r"(?i)\bfree\s+(money|gift|giveaway|followers|crypto)\b",
    r"(?i)\bpromo\s*code\b",
    r"(?i)\b(whatsapp|telegram)\b",
    r"(?i)\bmake money\b",
    r"(?i)\bearn \$?\d",
    r"(?i)\bclick (the |my )?link\b",
    r"(?i)\bfollow (me|back)\b",
];

// Anchored on the whole (trimmed) text; trailing punctuation tolerated.
const GENERIC_PRAISE_PATTERNS: &[&str] = &[
    r"(?i)^(so\s+)?(nice|cool|wow|great|amazing|awesome|perfect|beautiful|good|best|fire|lit|dope|super)\s*[[:punct:]]*$",
    r"(?i)^(nice|great|good|awesome|amazing|cool|lovely)\s+(video|vid|content|post|work|job|stuff|one)\s*[[:punct:]]*$",
    r"(?i)^(good|well)\s+(job|done)\s*[[:punct:]]*$",
    r"(?i)^keep\s+it\s+up\s*[[:punct:]]*$",
    r"(?i)^(i\s+)?(love|loved)\s+(it|this|that|your\s+videos?)\s*[[:punct:]]*$",
    r"(?i)^(too\s+)?good\s*[[:punct:]]*$",
];

const OFF_TOPIC_PATTERNS: &[&str] = &[
    r"(?i)^first\s*[!1[:punct:]]*$",
    r"(?i)^(second|2nd|third|3rd)\s*[[:punct:]]*$",
    r"(?i)\bwho(('|’)?s|\s+is)\s+(here|watching)\s+in\s+20\d\d\b",
    r"(?i)\bwho\s+else\s+is\s+(here|watching)\b",
    r"(?i)\bnotification\s+(squad|gang)\b",
    r"(?i)\bearly\s+(squad|gang|crew)\b",
    r"(?i)^(hi|hello|hey|yo|sup)\s*[[:punct:]]*$",
];

const BOT_USERNAME_PATTERNS: &[&str] = &[
    r"^[A-Za-z]+\d{8,}$",
    r"(?i)^user\d{4,}$",
    r"(?i)(free|earn).*(money|cash|followers)",
    r"(?i)bot\d*$",
    r"(?i)(f4f|l4l|follow4follow|followback)",
];

const OBJECTION_PATTERN: &str =
    r"(?i)\b(but|however|disappointed|issue|problem|wrong|bad|terrible|worst|hate|confused|why|unclear)\b";

const PURCHASE_INTENT_PATTERN: &str =
    r"(?i)\b(buy|purchase|order|link|price|cost|where to get|how much)\b";
