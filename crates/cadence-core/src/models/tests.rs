use std::str::FromStr;

use jiff::Timestamp;

use crate::models::{Brief, Goal, ItemFilter, PlanItem, Platform, Tone};

fn test_item() -> PlanItem {
    PlanItem {
        platform: Platform::Twitter,
        scheduled_at: Timestamp::from_second(1_736_154_000).unwrap(),
        goal: Goal::Awareness,
        title: "Meet Acme Co".to_string(),
        caption: "Say hello to Acme Co!".to_string(),
        hashtags: vec!["#acmeco".to_string(), "#smallbusiness".to_string()],
        cta: "Follow us for more".to_string(),
        suggested_asset: None,
    }
}

#[test]
fn test_enum_round_trips() {
    for tone in Tone::ALL {
        assert_eq!(Tone::from_str(tone.as_str()).unwrap(), tone);
    }
    for goal in Goal::ALL {
        assert_eq!(Goal::from_str(goal.as_str()).unwrap(), goal);
    }
    for platform in Platform::ALL {
        assert_eq!(Platform::from_str(platform.as_str()).unwrap(), platform);
    }
}

#[test]
fn test_enum_parsing_is_case_insensitive() {
    assert_eq!(Tone::from_str("FRIENDLY").unwrap(), Tone::Friendly);
    assert_eq!(Platform::from_str("TikTok").unwrap(), Platform::Tiktok);
}

#[test]
fn test_unknown_enum_errors_list_alternatives() {
    let err = Goal::from_str("virality").unwrap_err();
    assert!(err.contains("virality"));
    assert!(err.contains("awareness"));
    assert!(err.contains("sales"));
}

#[test]
fn test_platform_constants_are_distinct() {
    let mut offsets: Vec<i64> = Platform::ALL.iter().map(Platform::hour_offset).collect();
    offsets.sort_unstable();
    offsets.dedup();
    assert_eq!(offsets.len(), Platform::ALL.len());

    for platform in Platform::ALL {
        let limit = platform.hashtag_limit();
        assert!((3..=6).contains(&limit));
    }
}

#[test]
fn test_brief_total_slots() {
    let brief = Brief {
        brand_name: "Acme Co".to_string(),
        brand_description: "Simple software.".to_string(),
        audience: "small business owners".to_string(),
        tone: Tone::Friendly,
        goals: vec![Goal::Awareness],
        platforms: vec![Platform::Twitter, Platform::Linkedin],
        weeks: 3,
        cadence_per_week: 2,
    };
    assert_eq!(brief.total_slots(), 12);
}

#[test]
fn test_item_serde_uses_camel_case() {
    let json = serde_json::to_string(&test_item()).unwrap();
    assert!(json.contains("\"scheduledAt\""));
    assert!(json.contains("\"suggestedAsset\""));
    assert!(json.contains("\"platform\":\"twitter\""));
    assert!(json.contains("\"goal\":\"awareness\""));

    let back: PlanItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, test_item());
}

#[test]
fn test_sort_key_orders_time_then_platform_then_goal() {
    let mut a = test_item();
    let mut b = test_item();

    b.scheduled_at = Timestamp::from_second(1_736_157_600).unwrap();
    assert!(a.sort_key() < b.sort_key());

    b.scheduled_at = a.scheduled_at;
    a.platform = Platform::Facebook;
    b.platform = Platform::Twitter;
    assert!(a.sort_key() < b.sort_key());

    b.platform = a.platform;
    a.goal = Goal::Awareness;
    b.goal = Goal::Engagement;
    assert!(a.sort_key() < b.sort_key());
}

#[test]
fn test_filter_blank_matches_everything() {
    assert!(ItemFilter::default().matches(&test_item()));
    assert!(ItemFilter::new(Some("   ".to_string())).matches(&test_item()));
}

#[test]
fn test_filter_matches_each_field() {
    let item = test_item();
    for needle in ["twitter", "meet acme", "say hello", "#smallbusiness"] {
        let filter = ItemFilter::new(Some(needle.to_string()));
        assert!(filter.matches(&item), "needle {needle}");
    }

    let miss = ItemFilter::new(Some("linkedin".to_string()));
    assert!(!miss.matches(&item));
}

#[test]
fn test_filter_apply_preserves_order() {
    let mut second = test_item();
    second.title = "Another day".to_string();
    let filter = ItemFilter::new(Some("acme".to_string()));

    let kept = filter.apply(vec![test_item(), second.clone()]);
    assert_eq!(kept.len(), 2); // caption still mentions Acme
    assert_eq!(kept[1].title, "Another day");
}
