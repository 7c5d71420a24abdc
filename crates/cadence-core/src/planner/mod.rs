//! High-level planner API: brief in, content calendar out.
//!
//! The [`Planner`] is the single entry point of the engine. It is a pure,
//! synchronous computation with no I/O and no shared state:
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌───────────┐    ┌───────────┐
//! │  Brief   │───▶│ scheduler │───▶│  content  │───▶│ assembler │──▶ Plan
//! │ (params) │    │  (slots)  │    │ (render)  │    │ (sort +   │
//! └──────────┘    └───────────┘    └───────────┘    │  summary) │
//!                                                   └───────────┘
//! ```
//!
//! Reproducibility contract: the same brief, start timestamp, and seed always
//! produce a byte-identical plan. The seed is the only variation knob; there
//! is no ambient entropy anywhere in the pipeline.

use jiff::Timestamp;
use log::{debug, info};

use crate::{
    content,
    models::{Brief, Plan, PlanItem},
    scheduler::{self, Slot},
};

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Plan generator configured with a start time and a variation seed.
#[derive(Debug, Clone)]
pub struct Planner {
    start: Timestamp,
    seed: u64,
}

impl Planner {
    pub(crate) fn new(start: Timestamp, seed: u64) -> Self {
        Self { start, seed }
    }

    /// The timestamp week 0 is anchored to.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// The template variation seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a complete content plan from a validated brief.
    pub fn generate(&self, brief: &Brief) -> Plan {
        info!(
            "generating plan for '{}': {} platform(s), {} week(s), cadence {}",
            brief.brand_name,
            brief.platforms.len(),
            brief.weeks,
            brief.cadence_per_week
        );

        let slots = scheduler::schedule(brief, self.start);
        debug!("scheduled {} slots", slots.len());

        let plan = self.assemble(brief, &slots);
        info!("assembled {} plan item(s)", plan.items.len());
        plan
    }

    /// Merge scheduler slots with rendered content into a sorted plan.
    ///
    /// Pure aggregation: an empty slot list yields an empty-but-valid plan
    /// whose summary notes that nothing was scheduled.
    pub fn assemble(&self, brief: &Brief, slots: &[Slot]) -> Plan {
        let mut items: Vec<PlanItem> = slots
            .iter()
            .map(|slot| self.render_item(brief, slot))
            .collect();

        // Ordering contract: time ascending, ties by platform then goal.
        items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        Plan {
            summary: compose_summary(brief, &items),
            items,
        }
    }

    fn render_item(&self, brief: &Brief, slot: &Slot) -> PlanItem {
        let rendered = content::render(brief, slot, self.seed);
        PlanItem {
            platform: slot.platform,
            scheduled_at: slot.scheduled_at,
            goal: slot.goal,
            title: rendered.title,
            caption: rendered.caption,
            hashtags: rendered.hashtags,
            cta: rendered.cta,
            suggested_asset: rendered.suggested_asset,
        }
    }
}

/// One-paragraph strategy description: brand, audience, horizon, totals,
/// and the platform/goal breakdown.
fn compose_summary(brief: &Brief, items: &[PlanItem]) -> String {
    if items.is_empty() {
        return format!(
            "No content was scheduled for {}: the brief produced zero posting slots.",
            brief.brand_name
        );
    }

    let platforms = join_names(brief.platforms.iter().map(|p| p.as_str()));
    let goals = join_names(brief.goals.iter().map(|g| g.as_str()));
    let per_platform = usize::from(brief.weeks) * usize::from(brief.cadence_per_week);

    format!(
        "Content plan for {brand} targeting {audience}: {total} posts over {weeks} \
         across {platforms} ({per_platform} per platform, {cadence} per week), \
         rotating through the goals {goals}. Tone: {tone}.",
        brand = brief.brand_name,
        audience = brief.audience,
        total = items.len(),
        weeks = pluralize(usize::from(brief.weeks), "week"),
        platforms = platforms,
        per_platform = per_platform,
        cadence = brief.cadence_per_week,
        goals = goals,
        tone = brief.tone,
    )
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn join_names<'a>(mut names: impl Iterator<Item = &'a str>) -> String {
    let first = match names.next() {
        Some(n) => n.to_string(),
        None => return String::new(),
    };
    let rest: Vec<&str> = names.collect();
    let Some((last, mid)) = rest.split_last() else {
        return first;
    };
    let mut out = first;
    for name in mid {
        out.push_str(", ");
        out.push_str(name);
    }
    out.push_str(" and ");
    out.push_str(last);
    out
}
