//! Content templating: rendering slot text from the brief.
//!
//! The templater maps `(goal, tone)` to a small ordered list of phrasing
//! variants (title hook + caption skeleton), interpolates the brand fields,
//! and then shapes the result per platform (caption length/style, hashtag
//! count, asset hints). Variant selection is pure index arithmetic over the
//! slot's per-platform sequence number plus the planner seed, so the same
//! brief, start, and seed always reproduce the same plan, and consecutive
//! posts on one platform never repeat verbatim.
//!
//! A `(goal, tone)` pair with no dedicated variants falls back to a generic
//! per-goal table; rendering never fails and never emits empty text.

use crate::models::{Brief, Goal, Platform, Tone};
use crate::scheduler::Slot;

/// Longest description excerpt interpolated into captions.
const EXCERPT_MAX_CHARS: usize = 90;

/// Fully rendered text for one slot, before assembly into a `PlanItem`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub title: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub cta: String,
    pub suggested_asset: Option<String>,
}

/// A single phrasing variant. Placeholders: `{brand}`, `{audience}`,
/// `{desc}` (description excerpt).
struct Variant {
    title: &'static str,
    caption: &'static str,
}

/// Render title, caption, hashtags, CTA, and asset hint for one slot.
pub fn render(brief: &Brief, slot: &Slot, seed: u64) -> Rendered {
    let variants = variants(slot.goal, brief.tone).unwrap_or_else(|| generic(slot.goal));
    let variant = &variants[pick(slot.seq, seed, variants.len())];

    let ctas = ctas(slot.goal);
    let cta = fill(ctas[pick(slot.seq, seed, ctas.len())], brief);

    let base_caption = fill(variant.caption, brief);

    Rendered {
        title: fill(variant.title, brief),
        caption: shape_caption(slot.platform, &base_caption, brief),
        hashtags: hashtags(brief, slot.platform, slot.goal),
        cta,
        suggested_asset: asset_hint(slot.platform, slot.goal).map(str::to_string),
    }
}

/// Deterministic variant index for a slot.
fn pick(seq: usize, seed: u64, len: usize) -> usize {
    ((seq as u64 + seed) % len as u64) as usize
}

/// Interpolate brand fields into a template.
fn fill(template: &str, brief: &Brief) -> String {
    template
        .replace("{brand}", &brief.brand_name)
        .replace("{audience}", &brief.audience)
        .replace("{desc}", &excerpt(&brief.brand_description))
}

/// First sentence of the description, capped at [`EXCERPT_MAX_CHARS`].
fn excerpt(description: &str) -> String {
    let first = description
        .split_inclusive(['.', '!', '?'])
        .next()
        .unwrap_or(description)
        .trim();

    if first.chars().count() <= EXCERPT_MAX_CHARS {
        return first.to_string();
    }
    let mut cut: String = first.chars().take(EXCERPT_MAX_CHARS).collect();
    cut.truncate(cut.trim_end().len());
    cut.push_str("...");
    cut
}

fn first_sentence(text: &str) -> &str {
    text.split_inclusive(['.', '!', '?'])
        .next()
        .unwrap_or(text)
        .trim()
}

/// Platform-specific caption shaping. This is where the per-platform
/// differentiation required by the output contract happens: concise for
/// twitter, long-form for linkedin, question-led for facebook, visual-first
/// for instagram, hook-led for tiktok.
fn shape_caption(platform: Platform, base: &str, brief: &Brief) -> String {
    match platform {
        Platform::Twitter => first_sentence(base).to_string(),
        Platform::Linkedin => format!(
            "{base}\n\nWe work with {audience} every day, and the pattern is consistent: {desc}",
            audience = brief.audience,
            desc = excerpt(&brief.brand_description),
        ),
        Platform::Facebook => format!("{base} What has worked for you?"),
        Platform::Instagram => format!("{base}\n\nSave this post for later."),
        Platform::Tiktok => format!("{} Watch to the end.", first_sentence(base)),
    }
}

/// Derive hashtags from brand name, audience terms, and goal/platform
/// keywords. Tags are normalized to lowercase alphanumeric, deduplicated
/// preserving order, and capped at the platform's limit.
fn hashtags(brief: &Brief, platform: Platform, goal: Goal) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    push_tag(&mut tags, &brief.brand_name);
    push_tag(&mut tags, &brief.audience);
    for word in brief
        .audience
        .split_whitespace()
        .filter(|w| w.chars().filter(|c| c.is_alphanumeric()).count() >= 5)
        .take(2)
    {
        push_tag(&mut tags, word);
    }
    for keyword in goal_keywords(goal) {
        push_tag(&mut tags, keyword);
    }
    for keyword in platform_keywords(platform) {
        push_tag(&mut tags, keyword);
    }

    tags.truncate(platform.hashtag_limit());
    tags
}

fn push_tag(tags: &mut Vec<String>, raw: &str) {
    let normalized: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .flat_map(char::to_lowercase)
        .collect();
    if normalized.is_empty() {
        return;
    }
    let tag = format!("#{normalized}");
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}

fn goal_keywords(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::Awareness => &["brandawareness"],
        Goal::Engagement => &["community"],
        Goal::Traffic => &["blog", "tips"],
        Goal::Leads => &["growth"],
        Goal::Sales => &["deal"],
    }
}

fn platform_keywords(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Twitter => &["marketing"],
        Platform::Instagram => &["instagood", "reels", "inspo"],
        Platform::Linkedin => &["business", "b2b"],
        Platform::Facebook => &["smallbiz"],
        Platform::Tiktok => &["fyp", "foryou"],
    }
}

/// Creative hint for platforms where a plain text post is not the norm.
fn asset_hint(platform: Platform, goal: Goal) -> Option<&'static str> {
    match platform {
        Platform::Twitter => None,
        Platform::Tiktok => Some("short video"),
        Platform::Instagram => match goal {
            Goal::Awareness | Goal::Sales => Some("carousel image"),
            _ => Some("behind-the-scenes photo"),
        },
        Platform::Linkedin => match goal {
            Goal::Traffic | Goal::Leads => Some("infographic"),
            _ => None,
        },
        Platform::Facebook => match goal {
            Goal::Engagement => Some("poll graphic"),
            _ => None,
        },
    }
}

/// Dedicated phrasing table. Every list holds exactly two variants with
/// distinct opening sentences, which is what keeps consecutive same-platform
/// posts from repeating after platform shaping.
///
/// Playful phrasing for traffic and sales never got dedicated variants;
/// those pairs take the generic per-goal fallback.
fn variants(goal: Goal, tone: Tone) -> Option<&'static [Variant]> {
    let table: &'static [Variant] = match (goal, tone) {
        (Goal::Traffic | Goal::Sales, Tone::Playful) => return None,
        (Goal::Awareness, Tone::Friendly) => &[
            Variant {
                title: "Meet {brand}",
                caption: "Say hello to {brand}! {desc} We're here for {audience} everywhere.",
            },
            Variant {
                title: "Why {audience} love {brand}",
                caption: "{desc} That's the idea behind {brand}, made with {audience} in mind.",
            },
        ],
        (Goal::Awareness, Tone::Professional) => &[
            Variant {
                title: "Introducing {brand}",
                caption: "{brand} helps {audience} work smarter. {desc}",
            },
            Variant {
                title: "What {brand} stands for",
                caption: "{desc} Built for {audience} who expect results.",
            },
        ],
        (Goal::Awareness, Tone::Playful) => &[
            Variant {
                title: "Psst. Have you met {brand}?",
                caption: "Plot twist: {desc} Yes, {brand} is that good.",
            },
            Variant {
                title: "{brand} has entered the chat",
                caption: "Hey {audience}, guess who just showed up? {desc}",
            },
        ],
        (Goal::Awareness, Tone::Bold) => &[
            Variant {
                title: "{brand} changes the game",
                caption: "Forget the old way. {desc} {brand} sets a new bar for {audience}.",
            },
            Variant {
                title: "The {brand} difference",
                caption: "Most tools talk. {brand} delivers. {desc}",
            },
        ],
        (Goal::Engagement, Tone::Friendly) => &[
            Variant {
                title: "We want to hear from you",
                caption: "Tell us, {audience}: what's your biggest win this week? We'll share our favorites.",
            },
            Variant {
                title: "Your turn, {audience}",
                caption: "Drop a comment with how you got started. The {brand} community loves a good story.",
            },
        ],
        (Goal::Engagement, Tone::Professional) => &[
            Variant {
                title: "A question for {audience}",
                caption: "Which part of your week would you automate first? {brand} is listening.",
            },
            Variant {
                title: "Join the conversation",
                caption: "We're comparing notes on what works for {audience}. Weigh in with your experience.",
            },
        ],
        (Goal::Engagement, Tone::Playful) => &[
            Variant {
                title: "Hot take time",
                caption: "Spicy question for {audience}: what's the most overrated productivity hack? Wrong answers only.",
            },
            Variant {
                title: "Caption this",
                caption: "Our week in one picture. Caption it and tag a friend who needs {brand}.",
            },
        ],
        (Goal::Engagement, Tone::Bold) => &[
            Variant {
                title: "Prove us wrong",
                caption: "We think {brand} saves {audience} hours every week. Disagree? Bring the receipts.",
            },
            Variant {
                title: "Sound off, {audience}",
                caption: "Real talk: what's actually blocking your growth right now? No sugarcoating in this thread.",
            },
        ],
        (Goal::Traffic, Tone::Friendly) => &[
            Variant {
                title: "Fresh on the blog",
                caption: "We just published a guide for {audience}. Come take a look and tell us what you think.",
            },
            Variant {
                title: "Something new for {audience}",
                caption: "{desc} Head to our site for the full walkthrough.",
            },
        ],
        (Goal::Traffic, Tone::Professional) => &[
            Variant {
                title: "New resource for {audience}",
                caption: "We broke the process down step by step. Read the full article on our site.",
            },
            Variant {
                title: "In depth: how {brand} works",
                caption: "{desc} The complete guide is on our blog.",
            },
        ],
        (Goal::Traffic, Tone::Bold) => &[
            Variant {
                title: "Read this before your competitors do",
                caption: "The playbook {audience} are using to pull ahead. On our site now.",
            },
            Variant {
                title: "Stop scrolling, start reading",
                caption: "This one guide beats a month of trial and error. {desc}",
            },
        ],
        (Goal::Leads, Tone::Friendly) => &[
            Variant {
                title: "Let's chat",
                caption: "Curious whether {brand} fits? Book a friendly walkthrough, no strings attached.",
            },
            Variant {
                title: "A little gift for {audience}",
                caption: "Grab our free starter kit and see what {brand} can do for you.",
            },
        ],
        (Goal::Leads, Tone::Professional) => &[
            Variant {
                title: "Request a demo",
                caption: "See how {brand} fits your workflow. Schedule a 20-minute walkthrough with our team.",
            },
            Variant {
                title: "Free assessment for {audience}",
                caption: "{desc} Request your tailored assessment today.",
            },
        ],
        (Goal::Leads, Tone::Playful) => &[
            Variant {
                title: "Free stuff alert",
                caption: "We made a starter kit for {audience} and we're giving it away. You in?",
            },
            Variant {
                title: "Your future self says thanks",
                caption: "Ten minutes with {brand} now, hours saved later. Grab a slot.",
            },
        ],
        (Goal::Leads, Tone::Bold) => &[
            Variant {
                title: "Serious about growth?",
                caption: "Then stop guessing. Get a {brand} demo and see the numbers for yourself.",
            },
            Variant {
                title: "{audience}: claim your edge",
                caption: "The assessment takes ten minutes. The advantage lasts all year.",
            },
        ],
        (Goal::Sales, Tone::Friendly) => &[
            Variant {
                title: "A deal made for {audience}",
                caption: "Ready when you are: get started with {brand} today and keep the momentum going.",
            },
            Variant {
                title: "Treat your business",
                caption: "{desc} Start with {brand} this week; the first steps are on us.",
            },
        ],
        (Goal::Sales, Tone::Professional) => &[
            Variant {
                title: "Get started with {brand}",
                caption: "Transparent pricing, fast onboarding, measurable results. {desc}",
            },
            Variant {
                title: "An offer for {audience}",
                caption: "Start this week and see value before the month is out.",
            },
        ],
        (Goal::Sales, Tone::Bold) => &[
            Variant {
                title: "Buy once, benefit all year",
                caption: "No fluff: {brand} pays for itself. {desc}",
            },
            Variant {
                title: "The best time was yesterday",
                caption: "The second best time is right now. Start with {brand} today.",
            },
        ],
    };
    Some(table)
}

/// Generic per-goal fallback, parameterized only by goal. Used when a
/// `(goal, tone)` pair has no dedicated variants.
fn generic(goal: Goal) -> &'static [Variant] {
    match goal {
        Goal::Awareness => &[
            Variant {
                title: "Get to know {brand}",
                caption: "{desc} Made for {audience}.",
            },
            Variant {
                title: "{brand}, in one post",
                caption: "Here's what {brand} does for {audience}: {desc}",
            },
        ],
        Goal::Engagement => &[
            Variant {
                title: "Over to you, {audience}",
                caption: "What should we cover next? Tell us in the comments.",
            },
            Variant {
                title: "Let's talk",
                caption: "One question for {audience} today: what's working for you right now?",
            },
        ],
        Goal::Traffic => &[
            Variant {
                title: "New on our site",
                caption: "A fresh resource for {audience} is live. Full details on our site.",
            },
            Variant {
                title: "Worth a read",
                caption: "We put together a guide for {audience}. Find it on our blog.",
            },
        ],
        Goal::Leads => &[
            Variant {
                title: "See {brand} in action",
                caption: "Book a walkthrough and see whether {brand} fits your needs.",
            },
            Variant {
                title: "Start with a free kit",
                caption: "Our starter kit for {audience} is free. Request yours today.",
            },
        ],
        Goal::Sales => &[
            Variant {
                title: "Ready when you are",
                caption: "Get started with {brand} today. {desc}",
            },
            Variant {
                title: "Make it official",
                caption: "Join the {audience} already running on {brand}.",
            },
        ],
    }
}

/// Call-to-action phrasings per goal, rotated by the same slot arithmetic
/// as the caption variants.
fn ctas(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::Awareness => &["Follow us for more", "Learn more about {brand}"],
        Goal::Engagement => &["Comment below", "Share your take", "Tag a friend"],
        Goal::Traffic => &["Read the full guide", "Visit our site"],
        Goal::Leads => &["Book a demo", "Get the free kit"],
        Goal::Sales => &["Start today", "Claim the offer"],
    }
}
