//! Display implementations for the domain models.
//!
//! Each model formats as markdown so the CLI can hand the output straight to
//! the terminal renderer. An item renders as a card: platform header with
//! time and goal, bold title, caption, hashtag line, CTA, and the optional
//! asset hint.

use std::fmt;

use crate::models::{Plan, PlanItem};

use super::datetime::ScheduledAt;

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} | {} ({})",
            self.platform.as_str().to_uppercase(),
            ScheduledAt(&self.scheduled_at),
            self.goal
        )?;
        writeln!(f)?;
        writeln!(f, "**{}**", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.caption)?;
        if !self.hashtags.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.hashtags.join(" "))?;
        }
        writeln!(f)?;
        writeln!(f, "CTA: {}", self.cta)?;
        if let Some(asset) = &self.suggested_asset {
            writeln!(f, "Asset: {asset}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        if self.items.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
