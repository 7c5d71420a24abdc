//! Filter types for narrowing a generated calendar.

use super::PlanItem;

/// Free-text filter over plan items.
///
/// Matches case-insensitively against the platform name, title, caption, and
/// the space-joined hashtag list. An empty or whitespace-only filter matches
/// everything, so callers can pass user input through unchecked.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Free-text needle; `None` or blank matches every item
    pub text: Option<String>,
}

impl ItemFilter {
    /// Create a filter from any optional text input.
    pub fn new(text: Option<String>) -> Self {
        Self { text }
    }

    /// Whether the given item passes the filter.
    pub fn matches(&self, item: &PlanItem) -> bool {
        let needle = match &self.text {
            Some(t) if !t.trim().is_empty() => t.trim().to_lowercase(),
            _ => return true,
        };

        item.platform.as_str().contains(&needle)
            || item.title.to_lowercase().contains(&needle)
            || item.caption.to_lowercase().contains(&needle)
            || item.hashtags.join(" ").to_lowercase().contains(&needle)
    }

    /// Retain only matching items, preserving order.
    pub fn apply(&self, items: Vec<PlanItem>) -> Vec<PlanItem> {
        items.into_iter().filter(|i| self.matches(i)).collect()
    }
}
