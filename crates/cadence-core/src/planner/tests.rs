//! Property tests for the full generation pipeline.

use jiff::Timestamp;

use crate::{
    models::{Brief, Goal, Plan, Platform, Tone},
    planner::PlannerBuilder,
};

fn fixed_start() -> Timestamp {
    // 2025-01-06T00:00:00Z
    Timestamp::from_second(1_736_121_600).unwrap()
}

fn planner() -> crate::planner::Planner {
    PlannerBuilder::new().with_start(fixed_start()).build()
}

fn acme_brief() -> Brief {
    Brief {
        brand_name: "Acme Co".to_string(),
        brand_description: "We help small businesses grow with simple software.".to_string(),
        audience: "small business owners".to_string(),
        tone: Tone::Friendly,
        goals: vec![Goal::Awareness, Goal::Engagement],
        platforms: vec![Platform::Twitter, Platform::Linkedin],
        weeks: 1,
        cadence_per_week: 2,
    }
}

fn wide_brief() -> Brief {
    Brief {
        brand_name: "Northwind Outfitters".to_string(),
        brand_description: "Rugged gear for people who treat weekends as expeditions. \
                            Everything is field tested."
            .to_string(),
        audience: "outdoor enthusiasts".to_string(),
        tone: Tone::Bold,
        goals: vec![Goal::Awareness, Goal::Traffic, Goal::Sales],
        platforms: vec![Platform::Instagram, Platform::Tiktok, Platform::Facebook],
        weeks: 4,
        cadence_per_week: 3,
    }
}

fn items_for(plan: &Plan, platform: Platform) -> Vec<&crate::models::PlanItem> {
    plan.items.iter().filter(|i| i.platform == platform).collect()
}

#[test]
fn test_item_count_is_platforms_times_weeks_times_cadence() {
    for brief in [acme_brief(), wide_brief()] {
        let plan = planner().generate(&brief);
        assert_eq!(plan.items.len(), brief.total_slots());
    }
}

#[test]
fn test_each_platform_gets_its_full_share() {
    let brief = wide_brief();
    let plan = planner().generate(&brief);
    let per_platform = usize::from(brief.weeks) * usize::from(brief.cadence_per_week);

    for &platform in &brief.platforms {
        assert_eq!(items_for(&plan, platform).len(), per_platform);
    }
}

#[test]
fn test_goals_and_platforms_are_members_of_brief() {
    let brief = wide_brief();
    let plan = planner().generate(&brief);

    for item in &plan.items {
        assert!(brief.goals.contains(&item.goal));
        assert!(brief.platforms.contains(&item.platform));
    }
}

#[test]
fn test_output_is_globally_sorted() {
    let brief = wide_brief();
    let plan = planner().generate(&brief);

    for pair in plan.items.windows(2) {
        assert!(pair[0].sort_key() <= pair[1].sort_key());
    }
}

#[test]
fn test_per_platform_times_strictly_increase_and_span_horizon() {
    let brief = wide_brief();
    let plan = planner().generate(&brief);
    let week_seconds = 7 * 24 * 3_600;

    for &platform in &brief.platforms {
        let items = items_for(&plan, platform);
        for pair in items.windows(2) {
            assert!(pair[0].scheduled_at < pair[1].scheduled_at);
        }

        // posts must not cluster in one week
        let first = items.first().unwrap().scheduled_at.as_second();
        let last = items.last().unwrap().scheduled_at.as_second();
        assert!(last - first >= i64::from(brief.weeks - 1) * week_seconds);
    }
}

#[test]
fn test_consecutive_same_platform_items_never_repeat() {
    for brief in [acme_brief(), wide_brief()] {
        let plan = planner().generate(&brief);
        for &platform in &brief.platforms {
            let items = items_for(&plan, platform);
            for pair in items.windows(2) {
                assert_ne!(pair[0].title, pair[1].title);
                assert_ne!(pair[0].caption, pair[1].caption);
            }
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let brief = wide_brief();
    let first = PlannerBuilder::new()
        .with_start(fixed_start())
        .with_seed(11)
        .build()
        .generate(&brief);
    let second = PlannerBuilder::new()
        .with_start(fixed_start())
        .with_seed(11)
        .build()
        .generate(&brief);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_different_seed_still_yields_valid_plan() {
    let brief = acme_brief();
    let base = planner().generate(&brief);
    let seeded = PlannerBuilder::new()
        .with_start(fixed_start())
        .with_seed(1)
        .build()
        .generate(&brief);

    assert_eq!(seeded.items.len(), base.items.len());
    assert_ne!(base.items[0].title, seeded.items[0].title);
}

#[test]
fn test_acme_example_scenario() {
    let brief = acme_brief();
    let plan = planner().generate(&brief);

    // exactly 4 items, 2 per platform
    assert_eq!(plan.items.len(), 4);
    assert_eq!(items_for(&plan, Platform::Twitter).len(), 2);
    assert_eq!(items_for(&plan, Platform::Linkedin).len(), 2);

    // goals alternate awareness/engagement per platform
    for platform in [Platform::Twitter, Platform::Linkedin] {
        let goals: Vec<Goal> = items_for(&plan, platform).iter().map(|i| i.goal).collect();
        assert_eq!(goals, vec![Goal::Awareness, Goal::Engagement]);
    }

    // all hashtags well-formed, all text non-empty
    for item in &plan.items {
        assert!(!item.title.is_empty());
        assert!(!item.caption.is_empty());
        assert!(!item.cta.is_empty());
        for tag in &item.hashtags {
            let body = tag.strip_prefix('#').unwrap();
            assert!(body.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}

#[test]
fn test_boundary_single_slot() {
    let brief = Brief {
        brand_name: "Solo".to_string(),
        brand_description: "One thing, done well.".to_string(),
        audience: "minimalists".to_string(),
        tone: Tone::Professional,
        goals: vec![Goal::Leads],
        platforms: vec![Platform::Linkedin],
        weeks: 1,
        cadence_per_week: 1,
    };
    let plan = planner().generate(&brief);

    assert_eq!(plan.items.len(), 1);
    assert_eq!(plan.items[0].goal, Goal::Leads);
    assert_eq!(plan.items[0].platform, Platform::Linkedin);
}

#[test]
fn test_zero_slots_is_an_empty_valid_plan() {
    let brief = acme_brief();
    let plan = planner().assemble(&brief, &[]);

    assert!(plan.is_empty());
    assert!(plan.summary.contains("No content was scheduled"));
    assert!(plan.summary.contains("Acme Co"));
}

#[test]
fn test_summary_mentions_strategy_facts() {
    let brief = wide_brief();
    let plan = planner().generate(&brief);

    assert!(plan.summary.contains("Northwind Outfitters"));
    assert!(plan.summary.contains("outdoor enthusiasts"));
    assert!(plan.summary.contains("36 posts"));
    assert!(plan.summary.contains("4 weeks"));
    assert!(plan.summary.contains("instagram"));
    assert!(plan.summary.contains("sales"));
    assert!(plan.summary.contains("bold"));
}
