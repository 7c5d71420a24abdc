//! Data models for briefs, plans, and plan items.
//!
//! This module contains the core domain models of the content planner. The
//! input side is the validated [`Brief`] plus its enumerations ([`Tone`],
//! [`Goal`], [`Platform`]); the output side is [`Plan`] and [`PlanItem`].
//! Display implementations live in [`crate::display`] so data structures stay
//! separate from presentation.
//!
//! All wire-facing types serialize with camelCase field names (`brandName`,
//! `scheduledAt`, `suggestedAsset`) because those names are the JSON contract
//! consumed by the calendar UI and the exporters.

pub mod brief;
pub mod filters;
pub mod plan;

#[cfg(test)]
mod tests;

pub use brief::{Brief, Goal, Platform, Tone};
pub use filters::ItemFilter;
pub use plan::{Plan, PlanItem};
