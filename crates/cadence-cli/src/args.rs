use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Main command-line interface for the Cadence content planner
///
/// Cadence turns a short brand brief (name, description, audience, tone,
/// goals, platforms, horizon, cadence) into a deterministic social-media
/// content calendar, rendered as markdown, JSON, or CSV.
#[derive(Parser)]
#[command(version, about, name = "cadence", args_override_self = true)]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Cadence CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a content plan from a brand brief
    #[command(alias = "g")]
    Generate(GenerateArgs),

    /// List supported platform tags
    Platforms,

    /// List supported goal tags
    Goals,

    /// List supported tone tags
    Tones,
}

/// Output format for a generated plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown calendar (default), rendered rich in a terminal
    Markdown,
    /// Wire-contract JSON (`summary` + `items`)
    Json,
    /// Flat tabular rows, one line per post
    Csv,
}

/// Generate a content plan
///
/// The brief can come from a JSON file (`--brief`, wire-contract field
/// names) or inline flags; inline flags override file values.
#[derive(ClapArgs)]
#[command(args_override_self = true)]
pub struct GenerateArgs {
    /// Path to a JSON brief (same shape as the generate API request)
    #[arg(long)]
    pub brief: Option<PathBuf>,

    /// Brand name
    #[arg(long)]
    pub brand_name: Option<String>,

    /// Brand description / value props
    #[arg(long = "description")]
    pub brand_description: Option<String>,

    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,

    /// Voice tone (friendly, professional, playful, bold)
    #[arg(long)]
    pub tone: Option<String>,

    /// Comma-separated platform tags
    #[arg(long, value_delimiter = ',')]
    pub platforms: Vec<String>,

    /// Comma-separated goal tags, rotation order significant
    #[arg(long, value_delimiter = ',')]
    pub goals: Vec<String>,

    /// Planning horizon in weeks (1-8, default 2)
    #[arg(long)]
    pub weeks: Option<u8>,

    /// Posts per platform per week (1-7, default 3)
    #[arg(long)]
    pub cadence: Option<u8>,

    /// Template variation seed (default 0); same seed reproduces the plan
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plan start timestamp (ISO-8601, e.g. 2025-01-06T00:00:00Z);
    /// defaults to the next whole UTC day
    #[arg(long)]
    pub start: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Free-text filter over platform, title, caption, and hashtags
    #[arg(long)]
    pub filter: Option<String>,
}
