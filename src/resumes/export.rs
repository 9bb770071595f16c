// src/resumes/export.rs
//! CSV serialization of the visible resume projection.

use super::models::ResumeRecord;

/// Fixed export header. Column order is part of the export contract.
pub const CSV_HEADER: &str = "Name,Email,Position,Experience,Skills,Match Score,Status";

/// Serialize records into CSV, one row per record in the given order.
///
/// Skills are joined with "; " inside a single field. Every data field is
/// quoted with embedded quotes doubled (RFC 4180), so names or summaries
/// containing commas and quotes survive a round trip through spreadsheet
/// tools. An absent match score renders as an empty field.
pub fn to_csv(records: &[ResumeRecord]) -> String {
    let mut csv_content = String::from(CSV_HEADER);
    csv_content.push('\n');

    for record in records {
        let skills = record.skills.join("; ");
        let score = record
            .match_score
            .map(|s| s.to_string())
            .unwrap_or_default();
        let fields = [
            record.name.as_str(),
            record.email.as_str(),
            record.position.as_str(),
            record.experience.as_str(),
            skills.as_str(),
            score.as_str(),
            record.status.as_str(),
        ];
        let row = fields
            .iter()
            .map(|field| quote_field(field))
            .collect::<Vec<_>>()
            .join(",");
        csv_content.push_str(&row);
        csv_content.push('\n');
    }

    csv_content
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
