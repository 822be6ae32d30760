//! Journal template model
//!
//! Reusable journal-entry patterns with predefined debit/credit lines.

use serde::Deserialize;

use super::account::Position;
use super::lenient;
use super::null_as_default;

/// Category used when a template doesn't declare one
pub const DEFAULT_CATEGORY: &str = "EXPENSE";

/// Cash-flow category used when a template doesn't declare one
pub const DEFAULT_CASH_FLOW_CATEGORY: &str = "OPERATING";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_cash_flow_category() -> String {
    DEFAULT_CASH_FLOW_CATEGORY.to_string()
}

/// A single debit or credit line of a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateLine {
    /// Account the line posts to
    #[serde(default, deserialize_with = "lenient::text")]
    pub account_code: String,

    /// Free-text hint shown when the account has to be picked at entry time
    #[serde(default, deserialize_with = "lenient::text")]
    pub account_hint: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub position: Position,

    /// Amount expression (e.g., "amount * 0.11"); may be empty
    #[serde(default, deserialize_with = "lenient::text")]
    pub formula: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

impl TemplateLine {
    pub fn new(account_code: impl Into<String>, position: Position) -> Self {
        Self {
            account_code: account_code.into(),
            position,
            ..Default::default()
        }
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = formula.into();
        self
    }
}

/// A journal template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalTemplate {
    /// Human-readable key that ties lines and tags to their template
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    /// Absent or `null` means EXPENSE
    #[serde(default = "default_category", deserialize_with = "lenient::category")]
    pub category: String,

    /// Absent or `null` means OPERATING
    #[serde(
        default = "default_cash_flow_category",
        deserialize_with = "lenient::cash_flow_category"
    )]
    pub cash_flow_category: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    /// Lines in posting order
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines: Vec<TemplateLine>,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub tags: Vec<String>,
}

impl JournalTemplate {
    /// Create an empty template with default categories
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: default_category(),
            cash_flow_category: default_cash_flow_category(),
            description: String::new(),
            lines: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: TemplateLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Lines paired with their 1-based order within this template
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &TemplateLine)> {
        self.lines.iter().enumerate().map(|(idx, line)| (idx + 1, line))
    }
}

/// Top-level shape of `journal-templates.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateCatalog {
    pub templates: Vec<JournalTemplate>,
}
