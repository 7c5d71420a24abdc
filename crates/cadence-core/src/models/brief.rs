//! Brief model and the brand-facing enumerations.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of brand voice tones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Warm, conversational voice
    #[default]
    Friendly,

    /// Measured, businesslike voice
    Professional,

    /// Irreverent, meme-adjacent voice
    Playful,

    /// Direct, high-contrast voice
    Bold,
}

impl Tone {
    /// All supported tones, in canonical order.
    pub const ALL: [Tone; 4] = [
        Tone::Friendly,
        Tone::Professional,
        Tone::Playful,
        Tone::Bold,
    ];

    /// Convert to the lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
            Tone::Playful => "playful",
            Tone::Bold => "bold",
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "friendly" => Ok(Tone::Friendly),
            "professional" => Ok(Tone::Professional),
            "playful" => Ok(Tone::Playful),
            "bold" => Ok(Tone::Bold),
            _ => Err(format!(
                "Invalid tone: {s} (expected one of: friendly, professional, playful, bold)"
            )),
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe enumeration of marketing goals.
///
/// The order in which goals appear in a [`Brief`] is significant: the
/// scheduler rotates through them round-robin, per platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Get the brand in front of new people
    Awareness,

    /// Start conversations with the existing audience
    Engagement,

    /// Drive visits to owned content
    Traffic,

    /// Collect demo requests and sign-ups
    Leads,

    /// Convert directly
    Sales,
}

impl Goal {
    /// All supported goals, in canonical order.
    pub const ALL: [Goal; 5] = [
        Goal::Awareness,
        Goal::Engagement,
        Goal::Traffic,
        Goal::Leads,
        Goal::Sales,
    ];

    /// Convert to the lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Awareness => "awareness",
            Goal::Engagement => "engagement",
            Goal::Traffic => "traffic",
            Goal::Leads => "leads",
            Goal::Sales => "sales",
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "awareness" => Ok(Goal::Awareness),
            "engagement" => Ok(Goal::Engagement),
            "traffic" => Ok(Goal::Traffic),
            "leads" => Ok(Goal::Leads),
            "sales" => Ok(Goal::Sales),
            _ => Err(format!(
                "Invalid goal: {s} (expected one of: awareness, engagement, traffic, leads, sales)"
            )),
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe enumeration of target platforms.
///
/// Order in a [`Brief`] is significant for display tie-breaking and mirrors
/// the goal rotation rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Linkedin,
    Facebook,
    Tiktok,
}

impl Platform {
    /// All supported platforms, in canonical order.
    pub const ALL: [Platform; 5] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Facebook,
        Platform::Tiktok,
    ];

    /// Convert to the lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
            Platform::Tiktok => "tiktok",
        }
    }

    /// Fixed time-of-day offset (whole hours from the start of the day,
    /// UTC) used when slotting posts, so no two platforms land on the same
    /// literal minute.
    pub fn hour_offset(&self) -> i64 {
        match self {
            Platform::Twitter => 9,
            Platform::Instagram => 11,
            Platform::Linkedin => 13,
            Platform::Facebook => 15,
            Platform::Tiktok => 17,
        }
    }

    /// Maximum number of hashtags rendered for this platform.
    pub fn hashtag_limit(&self) -> usize {
        match self {
            Platform::Twitter => 3,
            Platform::Linkedin => 3,
            Platform::Facebook => 4,
            Platform::Tiktok => 5,
            Platform::Instagram => 6,
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitter" => Ok(Platform::Twitter),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            "facebook" => Ok(Platform::Facebook),
            "tiktok" => Ok(Platform::Tiktok),
            _ => Err(format!(
                "Invalid platform: {s} (expected one of: twitter, instagram, linkedin, facebook, tiktok)"
            )),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated brand brief: the immutable input to one generation call.
///
/// Construct via [`crate::params::GenerateRequest::validate`], which enforces
/// non-empty text fields, known enum values, and the weeks/cadence bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    /// Brand name, interpolated into titles and captions
    pub brand_name: String,

    /// Short description / value proposition of the brand
    pub brand_description: String,

    /// Who the content speaks to
    pub audience: String,

    /// Voice used by every rendered post
    pub tone: Tone,

    /// Marketing goals, in rotation order (deduplicated, non-empty)
    pub goals: Vec<Goal>,

    /// Target platforms, in input order (deduplicated, non-empty)
    pub platforms: Vec<Platform>,

    /// Planning horizon in weeks (1..=8)
    pub weeks: u8,

    /// Posts per platform per week (1..=7)
    pub cadence_per_week: u8,
}

impl Brief {
    /// Total number of slots this brief expands to.
    pub fn total_slots(&self) -> usize {
        self.platforms.len() * usize::from(self.weeks) * usize::from(self.cadence_per_week)
    }
}
