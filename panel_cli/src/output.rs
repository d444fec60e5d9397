use anyhow::{bail, Result};
use panel_lib::types::{MetaData, Record};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// Keys tried, in order, for the display name column.
const NAME_KEYS: &[&str] = &[
    "name",
    "title",
    "subject",
    "username",
    "file_name",
    "email",
];

/// Keys tried, in order, for the status column.
const STATUS_KEYS: &[&str] = &["status", "is_active", "file_type", "priority"];

#[derive(Tabled, Serialize)]
struct RecordRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

// -- Row builders --

fn build_record_rows(records: &[Record]) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| RecordRow {
            id: r.id,
            name: r.first_str(NAME_KEYS).unwrap_or_default().to_string(),
            status: STATUS_KEYS
                .iter()
                .find(|k| r.fields.get(**k).is_some_and(|v| !v.is_null()))
                .map(|k| r.display_field(k))
                .unwrap_or_default(),
        })
        .collect()
}

/// Fails with the envelope's message when it reports an error.
pub fn print_envelope_status(meta: &MetaData) -> Result<()> {
    if !meta.is_success() {
        bail!("{} (status {})", meta.message, meta.app_status_code);
    }
    Ok(())
}

/// Prints rows in the chosen format. JSON prints the whole envelope.
pub fn print_records<E: Serialize>(
    records: &[Record],
    envelope: &E,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_record_rows(records))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_record_rows(records));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in build_record_rows(records) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(envelope),
    }
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
