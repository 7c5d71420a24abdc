//! Display formatting for plans and calendars.
//!
//! Presentation stays out of the data models: [`crate::models`] owns the
//! shapes, this module owns how they read. Domain models implement
//! [`std::fmt::Display`] (markdown cards, see [`models`]) and wrapper types
//! add contextual formatting:
//!
//! - [`datetime::ScheduledAt`]: consistent UTC timestamp formatting;
//! - [`collections::Calendar`]: week-by-week calendar with empty-state text.
//!
//! All output is markdown, rendered rich or plain by the CLI.

pub mod collections;
pub mod datetime;
mod models;

pub use collections::Calendar;
pub use datetime::ScheduledAt;
