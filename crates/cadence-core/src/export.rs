//! Export boundary: flat CSV rows and wire-contract JSON.
//!
//! A [`crate::models::PlanItem`] serializes losslessly to a flat tabular row
//! and back, with one documented exception: newlines inside free text (title,
//! caption, CTA) are flattened to single spaces so every record stays on one
//! physical line. Hashtags are joined by a single space; a missing
//! `suggestedAsset` becomes the empty string. Quoting follows standard CSV
//! rules: fields containing a comma, quote, or newline are wrapped in double
//! quotes with inner quotes doubled.
//!
//! The column names are the same camelCase identifiers the JSON contract
//! uses; both exporters must change together with the model.

use std::str::FromStr;

use jiff::Timestamp;

use crate::{
    error::{PlanError, Result},
    models::{Goal, Plan, PlanItem, Platform},
};

/// Column order of the CSV export.
pub const CSV_HEADERS: [&str; 8] = [
    "platform",
    "scheduledAt",
    "title",
    "caption",
    "hashtags",
    "cta",
    "goal",
    "suggestedAsset",
];

/// Serialize items to CSV, one line per item, header line first.
pub fn to_csv(items: &[PlanItem]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADERS.join(","));
    out.push('\n');

    for item in items {
        let fields = [
            item.platform.as_str().to_string(),
            item.scheduled_at.to_string(),
            flatten(&item.title),
            flatten(&item.caption),
            item.hashtags.join(" "),
            flatten(&item.cta),
            item.goal.as_str().to_string(),
            item.suggested_asset.as_deref().map(flatten).unwrap_or_default(),
        ];
        let escaped: Vec<String> = fields.iter().map(|f| escape(f)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }

    out
}

/// Parse a CSV calendar back into plan items.
///
/// Accepts exactly the shape [`to_csv`] writes: the header line must match
/// [`CSV_HEADERS`], every record must have eight fields, enum and timestamp
/// fields must round-trip.
pub fn from_csv(input: &str) -> Result<Vec<PlanItem>> {
    let records = parse_records(input)?;
    let mut rows = records.into_iter();

    let header = rows.next().ok_or_else(|| PlanError::csv(1, "input is empty"))?;
    if header.fields != CSV_HEADERS {
        return Err(PlanError::csv(
            header.line,
            format!("unexpected header: {}", header.fields.join(",")),
        ));
    }

    rows.map(record_to_item).collect()
}

/// Serialize a full plan (summary + items) as pretty JSON with the wire
/// field names.
pub fn to_json(plan: &Plan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

fn flatten(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

struct Record {
    line: usize,
    fields: Vec<String>,
}

/// Minimal CSV reader: quoted fields, doubled quotes, records separated by
/// newlines outside quotes. Tracks line numbers for error reporting.
fn parse_records(input: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = input.chars().peekable();
    let mut pending = false;

    while let Some(c) = chars.next() {
        pending = true;
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            '"' => {
                return Err(PlanError::csv(line, "unexpected quote inside unquoted field"));
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
                records.push(Record {
                    line: record_line,
                    fields: std::mem::take(&mut fields),
                });
                pending = false;
                line += 1;
                record_line = line;
            }
            '\r' if !in_quotes => {}
            '\n' => {
                field.push('\n');
                line += 1;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(PlanError::csv(record_line, "unterminated quoted field"));
    }
    if pending {
        fields.push(field);
        records.push(Record {
            line: record_line,
            fields,
        });
    }

    Ok(records)
}

fn record_to_item(record: Record) -> Result<PlanItem> {
    let Record { line, fields } = record;
    if fields.len() != CSV_HEADERS.len() {
        return Err(PlanError::csv(
            line,
            format!("expected {} fields, found {}", CSV_HEADERS.len(), fields.len()),
        ));
    }

    let platform =
        Platform::from_str(&fields[0]).map_err(|e| PlanError::csv(line, e))?;
    let scheduled_at: Timestamp = fields[1]
        .parse()
        .map_err(|e| PlanError::csv(line, format!("bad scheduledAt: {e}")))?;
    let goal = Goal::from_str(&fields[6]).map_err(|e| PlanError::csv(line, e))?;

    let hashtags = fields[4]
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let suggested_asset = if fields[7].is_empty() {
        None
    } else {
        Some(fields[7].clone())
    };

    Ok(PlanItem {
        platform,
        scheduled_at,
        goal,
        title: fields[2].clone(),
        caption: fields[3].clone(),
        hashtags,
        cta: fields[5].clone(),
        suggested_asset,
    })
}
