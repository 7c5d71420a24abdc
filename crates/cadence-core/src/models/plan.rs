//! Plan and PlanItem model definitions.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Goal, Platform};

/// One scheduled, fully-rendered social post.
///
/// Field names are the wire contract shared with the JSON and CSV exporters
/// (`scheduledAt`, `suggestedAsset`); renaming a field here requires updating
/// both sides of [`crate::export`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    /// Platform this post targets
    pub platform: Platform,

    /// Absolute posting time (UTC)
    pub scheduled_at: Timestamp,

    /// Marketing goal this post serves
    pub goal: Goal,

    /// Short post title / hook
    pub title: String,

    /// Body text, shaped per platform
    pub caption: String,

    /// Hashtags, each matching `^#[a-z0-9]+$`, deduplicated per item
    pub hashtags: Vec<String>,

    /// Call-to-action line
    pub cta: String,

    /// Optional creative hint (e.g. "short video"); absent when a plain
    /// text post is expected
    pub suggested_asset: Option<String>,
}

impl PlanItem {
    /// Sort key implementing the calendar ordering contract: scheduled time
    /// ascending, ties broken by platform name then goal name.
    pub fn sort_key(&self) -> (Timestamp, &'static str, &'static str) {
        (self.scheduled_at, self.platform.as_str(), self.goal.as_str())
    }
}

/// A complete generated content plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// One-paragraph description of the overall strategy
    pub summary: String,

    /// Items ordered by scheduled time, then platform, then goal
    pub items: Vec<PlanItem>,
}

impl Plan {
    /// Whether the plan contains no scheduled posts.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of scheduled posts.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
