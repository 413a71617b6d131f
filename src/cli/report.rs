use crate::filter::{ClauseTable, DynamicFilters, FieldValue, FilterSet, ParseError, bind};
use colored::Colorize;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::fmt::Write as _;

/// Outcome of parsing one filter string against a runtime schema
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub filter: String,
    pub separator: String,
    pub entries: Vec<ReportEntry>,
    /// Clause keys that no schema field asked for
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub key: String,
    /// Whether the filter string had a clause for this key
    pub bound: bool,
    #[serde(flatten)]
    pub value: FieldValue,
}

impl FilterReport {
    /// Parse `filter` into `filters`, recording which fields were bound
    pub fn build(
        filter: &str,
        separator: &str,
        mut filters: DynamicFilters,
    ) -> Result<Self, ParseError> {
        let table = if filter.is_empty() {
            ClauseTable::default()
        } else {
            ClauseTable::parse(filter, separator)?
        };
        bind(filters.schema(), &table)?;

        let mut ignored_keys: Vec<String> = table
            .keys()
            .filter(|key| filters.get(key).is_none())
            .map(str::to_string)
            .collect();
        ignored_keys.sort();
        for key in &ignored_keys {
            tracing::info!(key = %key, "clause has no matching schema field, ignored");
        }

        let entries = filters
            .fields
            .into_iter()
            .map(|field| ReportEntry {
                bound: table.contains_key(&field.key),
                key: field.key,
                value: field.value,
            })
            .collect();

        Ok(FilterReport {
            filter: filter.to_string(),
            separator: separator.to_string(),
            entries,
            ignored_keys,
        })
    }
}

pub fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|header| Cell::new(header).add_attribute(Attribute::Bold)),
        );
    table
}

fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(filter) => format!("{:?}", filter.value),
        FieldValue::StringList(filter) => format!("{:?}", filter.value),
        FieldValue::Bool(filter) => filter.value.to_string(),
        FieldValue::Float(filter) => filter.value.to_string(),
        FieldValue::FloatList(filter) => format!("{:?}", filter.value),
        FieldValue::FloatRange(filter) => filter.value.to_string(),
    }
}

fn operator_of(value: &FieldValue) -> &'static str {
    match value {
        FieldValue::String(filter) => filter.operator.symbol(),
        FieldValue::StringList(filter) => filter.operator.symbol(),
        FieldValue::Bool(filter) => filter.operator.symbol(),
        FieldValue::Float(filter) => filter.operator.symbol(),
        FieldValue::FloatList(filter) => filter.operator.symbol(),
        FieldValue::FloatRange(filter) => filter.operator.symbol(),
    }
}

/// Format a report as a table followed by any ignored keys
pub fn format_text(report: &FilterReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", "Filter:".bold(), report.filter);
    let _ = writeln!(out, "{} {:?}", "Separator:".bold(), report.separator);

    let mut table = create_styled_table(&["Key", "Shape", "Operator", "Value", "Bound"]);
    // comfy-table checks the tty on its own, follow the colored override instead
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    for entry in &report.entries {
        let bound = if entry.bound {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(&entry.key),
            Cell::new(entry.value.shape()),
            Cell::new(operator_of(&entry.value)),
            Cell::new(format_value(&entry.value)),
            bound,
        ]);
    }
    let _ = writeln!(out, "{table}");

    if !report.ignored_keys.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            "Ignored keys:".yellow().bold(),
            report.ignored_keys.join(", ")
        );
    }

    out
}
