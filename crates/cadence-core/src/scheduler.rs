//! Slot scheduling: expanding a brief into timed, goal-tagged slots.
//!
//! The scheduler decides, for each `(platform, week, cadence-index)`
//! combination, a posting timestamp and a marketing goal, before any text is
//! rendered. Policies:
//!
//! - the `cadencePerWeek` posts for a platform/week are spread roughly evenly
//!   across the 7-day week (`round(index * 7 / cadence)` days from week
//!   start), and weeks advance by exactly 7 days from the plan start;
//! - every platform carries a fixed time-of-day offset
//!   ([`Platform::hour_offset`]) so platforms never collide at the same
//!   literal minute;
//! - goals rotate round-robin in brief order, the rotation continuing across
//!   weeks and cadence indices, independently per platform.

use jiff::{Span, Timestamp};

use crate::models::{Brief, Goal, Platform};

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// An intermediate scheduling unit: one post-to-be, before content exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Platform this slot belongs to
    pub platform: Platform,

    /// Zero-based week index within the horizon
    pub week: u8,

    /// Zero-based index within the week's cadence
    pub index: u8,

    /// Per-platform running slot number (`week * cadence + index`); drives
    /// goal rotation and template variation
    pub seq: usize,

    /// Absolute posting time (UTC)
    pub scheduled_at: Timestamp,

    /// Goal assigned by rotation
    pub goal: Goal,
}

/// Expand a validated brief into `platforms × weeks × cadence` slots.
///
/// Slots are emitted grouped by platform in brief order, each platform's
/// slots in chronological order. The caller owns final calendar sorting.
pub fn schedule(brief: &Brief, start: Timestamp) -> Vec<Slot> {
    let cadence = usize::from(brief.cadence_per_week);
    let mut slots = Vec::with_capacity(brief.total_slots());

    for &platform in &brief.platforms {
        for week in 0..brief.weeks {
            for index in 0..brief.cadence_per_week {
                let seq = usize::from(week) * cadence + usize::from(index);
                let goal = brief.goals[seq % brief.goals.len()];
                slots.push(Slot {
                    platform,
                    week,
                    index,
                    seq,
                    scheduled_at: slot_time(start, platform, week, index, brief.cadence_per_week),
                    goal,
                });
            }
        }
    }

    slots
}

/// Compute the absolute timestamp for one slot.
fn slot_time(start: Timestamp, platform: Platform, week: u8, index: u8, cadence: u8) -> Timestamp {
    let day_in_week = day_offset(index, cadence);
    let days = i64::from(week) * 7 + day_in_week;
    let seconds = days * SECONDS_PER_DAY + platform.hour_offset() * SECONDS_PER_HOUR;
    start
        .saturating_add(Span::new().seconds(seconds))
        .expect("seconds-only span is always valid for a timestamp")
}

/// Day within the week for the given cadence index, spreading posts evenly
/// across the 7 days. Distinct for every index as long as cadence <= 7.
fn day_offset(index: u8, cadence: u8) -> i64 {
    ((f64::from(index) * 7.0) / f64::from(cadence)).round() as i64
}
