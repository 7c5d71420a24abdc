//! Parameter structures for the request boundary.
//!
//! This module holds the unvalidated request shape shared by every interface
//! (CLI flags, JSON request bodies, future HTTP handlers). Enum-valued fields
//! arrive as plain strings and optional knobs carry their documented
//! defaults, so framework layers can stay dumb: they deserialize a
//! [`GenerateRequest`] and call [`GenerateRequest::validate`] to obtain a
//! [`Brief`] or a descriptive [`PlanError`].
//!
//! ```text
//! CLI Args / JSON body → GenerateRequest → validate() → Brief → Planner
//! ```
//!
//! Validation rules (all enforced here, none in the engine):
//! - `brandName`, `brandDescription`, `audience` must be non-blank;
//! - `platforms` and `goals` must be non-empty and contain only known tags;
//!   duplicates are dropped, first occurrence wins, order stays significant;
//! - `tone` defaults to `friendly`; unknown tones are rejected, not defaulted;
//! - `weeks` defaults to 2 and must be within 1..=8;
//! - `cadencePerWeek` defaults to 3 and must be within 1..=7.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlanError, Result},
    models::{Brief, Goal, Platform, Tone},
};

/// Default planning horizon when the request omits `weeks`.
pub const DEFAULT_WEEKS: u8 = 2;

/// Default posts per platform per week when the request omits
/// `cadencePerWeek`.
pub const DEFAULT_CADENCE_PER_WEEK: u8 = 3;

/// Inclusive bounds for the planning horizon.
pub const WEEKS_RANGE: (u8, u8) = (1, 8);

/// Inclusive bounds for the per-week cadence.
pub const CADENCE_RANGE: (u8, u8) = (1, 7);

/// Parameters for generating a content plan, as received from the outside.
///
/// Field names match the wire contract of the calendar UI (camelCase).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Brand name (required, non-blank)
    #[serde(default)]
    pub brand_name: String,

    /// Brand description / value props (required, non-blank)
    #[serde(default)]
    pub brand_description: String,

    /// Target audience (required, non-blank)
    #[serde(default)]
    pub audience: String,

    /// Voice tone tag; defaults to "friendly" when absent
    #[serde(default)]
    pub tone: Option<String>,

    /// Marketing goal tags, rotation order significant (required, non-empty)
    #[serde(default)]
    pub goals: Vec<String>,

    /// Platform tags (required, non-empty)
    #[serde(default)]
    pub platforms: Vec<String>,

    /// Planning horizon in weeks; defaults to 2
    #[serde(default)]
    pub weeks: Option<u8>,

    /// Posts per platform per week; defaults to 3
    #[serde(default)]
    pub cadence_per_week: Option<u8>,
}

impl GenerateRequest {
    /// Validate the request and produce an immutable [`Brief`].
    ///
    /// # Errors
    ///
    /// * [`PlanError::MissingField`] when a required text field is blank or
    ///   a required list is empty
    /// * [`PlanError::UnsupportedValue`] when a tone/goal/platform string is
    ///   not a known tag
    /// * [`PlanError::OutOfRange`] when `weeks` or `cadencePerWeek` falls
    ///   outside its documented bounds
    pub fn validate(self) -> Result<Brief> {
        let brand_name = required_text("brandName", &self.brand_name)?;
        let brand_description = required_text("brandDescription", &self.brand_description)?;
        let audience = required_text("audience", &self.audience)?;

        let tone = match &self.tone {
            None => Tone::default(),
            Some(raw) if raw.trim().is_empty() => Tone::default(),
            Some(raw) => Tone::from_str(raw).map_err(|e| PlanError::unsupported("tone", e))?,
        };

        let goals = parse_unique::<Goal>("goals", &self.goals)?;
        let platforms = parse_unique::<Platform>("platforms", &self.platforms)?;

        let weeks = bounded("weeks", self.weeks.unwrap_or(DEFAULT_WEEKS), WEEKS_RANGE)?;
        let cadence_per_week = bounded(
            "cadencePerWeek",
            self.cadence_per_week.unwrap_or(DEFAULT_CADENCE_PER_WEEK),
            CADENCE_RANGE,
        )?;

        Ok(Brief {
            brand_name,
            brand_description,
            audience,
            tone,
            goals,
            platforms,
            weeks,
            cadence_per_week,
        })
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlanError::missing_field(field));
    }
    Ok(trimmed.to_string())
}

/// Parse a list of enum tags, rejecting unknown values and dropping
/// duplicates while preserving first-occurrence order.
fn parse_unique<T>(field: &'static str, raw: &[String]) -> Result<Vec<T>>
where
    T: FromStr<Err = String> + PartialEq + Copy,
{
    if raw.is_empty() {
        return Err(PlanError::missing_field(field));
    }

    let mut parsed: Vec<T> = Vec::with_capacity(raw.len());
    for value in raw {
        let tag = T::from_str(value).map_err(|e| PlanError::unsupported(field, e))?;
        if !parsed.contains(&tag) {
            parsed.push(tag);
        }
    }
    Ok(parsed)
}

fn bounded(field: &'static str, value: u8, (min, max): (u8, u8)) -> Result<u8> {
    if value < min || value > max {
        return Err(PlanError::out_of_range(
            field,
            u64::from(value),
            u64::from(min),
            u64::from(max),
        ));
    }
    Ok(value)
}
