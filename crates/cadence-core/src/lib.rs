//! Core library for the Cadence content planning application.
//!
//! This crate turns a short brand brief into a concrete, editable
//! social-media content calendar: an ordered list of post items, each
//! scheduled to a specific date/time, tagged with platform and marketing
//! goal, and populated with generated title, caption, hashtags, and
//! call-to-action text.
//!
//! # Architecture
//!
//! The engine is a pure function with three stages, coordinated by
//! [`Planner`]:
//!
//! - [`scheduler`]: expands the brief into `platforms × weeks × cadence`
//!   timed slots, rotating goals round-robin per platform;
//! - [`content`]: renders each slot from `(goal, tone)` phrasing tables with
//!   platform-specific shaping and deterministic variation;
//! - [`planner`]: assembles and sorts the items and composes the summary.
//!
//! There is no persistence, no I/O, and no shared mutable state; the same
//! brief, start timestamp, and seed always reproduce the same plan.
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{params::GenerateRequest, PlannerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = GenerateRequest {
//!     brand_name: "Acme Co".to_string(),
//!     brand_description: "We help small businesses grow.".to_string(),
//!     audience: "small business owners".to_string(),
//!     goals: vec!["awareness".to_string(), "engagement".to_string()],
//!     platforms: vec!["twitter".to_string(), "linkedin".to_string()],
//!     ..Default::default()
//! };
//!
//! let brief = request.validate()?;
//! let plan = PlannerBuilder::new().build().generate(&brief);
//!
//! assert_eq!(plan.items.len(), brief.total_slots());
//! println!("{}", plan.summary);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod content;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod params;
pub mod planner;
pub mod scheduler;

// Re-export commonly used types
pub use display::{Calendar, ScheduledAt};
pub use error::{PlanError, Result};
pub use models::{Brief, Goal, ItemFilter, Plan, PlanItem, Platform, Tone};
pub use params::GenerateRequest;
pub use planner::{Planner, PlannerBuilder};
pub use scheduler::Slot;
