//! Command handlers gluing the engine to the terminal.
//!
//! The handlers own all I/O of the binary: reading brief files, writing
//! output files, and rendering. The engine itself stays pure; everything
//! here is a straightforward pass-through over its inputs and outputs.

use std::fs;

use anyhow::{Context, Result};
use cadence_core::{
    export, params::GenerateRequest, Calendar, Goal, ItemFilter, Plan, Platform, PlannerBuilder,
    Tone,
};
use jiff::Timestamp;
use log::debug;

use crate::args::{GenerateArgs, OutputFormat};
use crate::renderer::TerminalRenderer;

pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Handle `cadence generate`.
    pub fn handle_generate(&self, args: &GenerateArgs) -> Result<()> {
        let request = build_request(args)?;
        let brief = request.validate()?;
        debug!("validated brief for '{}'", brief.brand_name);

        let mut builder = PlannerBuilder::new();
        if let Some(seed) = args.seed {
            builder = builder.with_seed(seed);
        }
        if let Some(raw) = &args.start {
            let start: Timestamp = raw
                .parse()
                .with_context(|| format!("Invalid --start timestamp '{raw}'"))?;
            builder = builder.with_start(start);
        }

        let plan = builder.build().generate(&brief);
        let items = ItemFilter::new(args.filter.clone()).apply(plan.items);
        debug!("{} item(s) after filtering", items.len());

        let output = match args.format {
            OutputFormat::Markdown => format!("{}\n\n{}", plan.summary, Calendar(items)),
            OutputFormat::Json => export::to_json(&Plan {
                summary: plan.summary,
                items,
            })?,
            OutputFormat::Csv => export::to_csv(&items),
        };

        match &args.out {
            Some(path) => fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None if args.format == OutputFormat::Markdown => self.renderer.render(&output),
            None => print!("{output}"),
        }
        Ok(())
    }

    /// Handle the enum listing commands (`platforms`, `goals`, `tones`).
    pub fn list_platforms(&self) {
        for platform in Platform::ALL {
            println!("{platform}");
        }
    }

    pub fn list_goals(&self) {
        for goal in Goal::ALL {
            println!("{goal}");
        }
    }

    pub fn list_tones(&self) {
        for tone in Tone::ALL {
            println!("{tone}");
        }
    }
}

/// Build the request from the brief file (if given) plus inline overrides.
fn build_request(args: &GenerateArgs) -> Result<GenerateRequest> {
    let mut request = match &args.brief {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read brief {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid brief JSON in {}", path.display()))?
        }
        None => GenerateRequest::default(),
    };

    if let Some(name) = &args.brand_name {
        request.brand_name = name.clone();
    }
    if let Some(description) = &args.brand_description {
        request.brand_description = description.clone();
    }
    if let Some(audience) = &args.audience {
        request.audience = audience.clone();
    }
    if args.tone.is_some() {
        request.tone = args.tone.clone();
    }
    if !args.platforms.is_empty() {
        request.platforms = args.platforms.clone();
    }
    if !args.goals.is_empty() {
        request.goals = args.goals.clone();
    }
    if args.weeks.is_some() {
        request.weeks = args.weeks;
    }
    if args.cadence.is_some() {
        request.cadence_per_week = args.cadence;
    }

    Ok(request)
}
