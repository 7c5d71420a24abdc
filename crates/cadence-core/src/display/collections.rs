//! Collection wrapper for displaying a calendar of plan items.

use std::{fmt, ops::Index};

use crate::models::PlanItem;

const SECONDS_PER_WEEK: i64 = 7 * 24 * 3_600;

/// Newtype wrapper that formats an ordered item list as a week-by-week
/// calendar, with graceful empty-state handling.
///
/// Week numbering is derived from the first item's day, so a filtered subset
/// still renders with stable headings. Items are expected in calendar order
/// (the order [`crate::planner::Planner::generate`] produces).
pub struct Calendar(pub Vec<PlanItem>);

impl Calendar {
    /// Check if the calendar is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of items in the calendar.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the item at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanItem> {
        self.0.get(index)
    }

    /// Iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanItem> {
        self.0.iter()
    }

    fn week_of(&self, item: &PlanItem) -> i64 {
        let base = self.0[0].scheduled_at.as_second().div_euclid(86_400) * 86_400;
        (item.scheduled_at.as_second() - base).div_euclid(SECONDS_PER_WEEK)
    }
}

impl Index<usize> for Calendar {
    type Output = PlanItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Calendar {
    type Item = PlanItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Calendar {
    type Item = &'a PlanItem;
    type IntoIter = std::slice::Iter<'a, PlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No posts scheduled.");
        }

        let mut current_week = None;
        for item in &self.0 {
            let week = self.week_of(item);
            if current_week != Some(week) {
                writeln!(f, "## Week {}", week + 1)?;
                writeln!(f)?;
                current_week = Some(week);
            }
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
