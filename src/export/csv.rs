//! CSV encoding for the import archive
//!
//! Turns seed records into the comma-separated text blocks the importer
//! expects. Every function here is pure: records in, text out.

use crate::models::{Account, JournalTemplate};

use super::layout::{ACCOUNTS_HEADER, TEMPLATES_HEADER, TEMPLATE_LINES_HEADER, TEMPLATE_TAGS_HEADER};

/// Escape a string for CSV format
///
/// Fields containing a comma, a double quote or a newline are quoted, with
/// embedded quotes doubled. Everything else, including the empty string, is
/// written verbatim.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// A CSV document under construction: a header line plus data rows, each
/// terminated by `\n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    text: String,
    rows: usize,
}

impl CsvTable {
    /// Start a table with the given header line
    pub fn with_header(header: &str) -> Self {
        let mut text = String::with_capacity(header.len() + 1);
        text.push_str(header);
        text.push('\n');
        Self { text, rows: 0 }
    }

    /// Append a row of already-escaped fields
    pub fn push_row<S: AsRef<str>>(&mut self, fields: &[S]) {
        for (idx, field) in fields.iter().enumerate() {
            if idx > 0 {
                self.text.push(',');
            }
            self.text.push_str(field.as_ref());
        }
        self.text.push('\n');
        self.rows += 1;
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Template-derived tables, one per archive entry
#[derive(Debug, Clone)]
pub struct EncodedTemplates {
    pub templates: CsvTable,
    pub lines: CsvTable,
    pub tags: CsvTable,
}

/// Encode the chart of accounts
pub fn encode_accounts(accounts: &[Account]) -> CsvTable {
    let mut table = CsvTable::with_header(ACCOUNTS_HEADER);

    for account in accounts {
        table.push_row(&[
            escape_csv(&account.code).as_str(),
            escape_csv(&account.name).as_str(),
            escape_csv(account.account_type_str()).as_str(),
            escape_csv(account.parent_code_str()).as_str(),
            escape_csv(account.normal_balance.as_str()).as_str(),
            "true",
            "",
        ]);
    }

    table
}

/// Encode journal templates into the templates, lines and tags tables
///
/// Line order restarts at 1 for each template and follows source order.
pub fn encode_templates(templates: &[JournalTemplate]) -> EncodedTemplates {
    let mut template_table = CsvTable::with_header(TEMPLATES_HEADER);
    let mut line_table = CsvTable::with_header(TEMPLATE_LINES_HEADER);
    let mut tag_table = CsvTable::with_header(TEMPLATE_TAGS_HEADER);

    for template in templates {
        let name = escape_csv(&template.name);

        template_table.push_row(&[
            name.as_str(),
            escape_csv(&template.category).as_str(),
            escape_csv(&template.cash_flow_category).as_str(),
            "SIMPLE",
            escape_csv(&template.description).as_str(),
            "false",
            "false",
            "true",
            "1",
            "0",
            "",
        ]);

        for (order, line) in template.numbered_lines() {
            line_table.push_row(&[
                name.clone(),
                order.to_string(),
                escape_csv(&line.account_code),
                escape_csv(&line.account_hint),
                escape_csv(line.position.as_str()),
                escape_csv(&line.formula),
                escape_csv(&line.description),
            ]);
        }

        for tag in &template.tags {
            tag_table.push_row(&[name.as_str(), escape_csv(tag).as_str()]);
        }
    }

    EncodedTemplates {
        templates: template_table,
        lines: line_table,
        tags: tag_table,
    }
}

/// Encode a header-only placeholder table
pub fn encode_empty(header: &str) -> CsvTable {
    CsvTable::with_header(header)
}
