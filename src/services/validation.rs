//! Seed data integrity checks
//!
//! The importer trusts whatever the archive says, so dangling account codes
//! and duplicate template names would only surface at import time. These
//! checks flag them before the archive is built.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::warn;

use crate::error::{SeedError, SeedResult};
use crate::storage::SeedData;

/// A single integrity problem in the seed data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The same account code appears more than once
    DuplicateAccountCode { code: String, occurrences: usize },
    /// An account points to a parent code that isn't in the chart
    UnknownParent { code: String, parent_code: String },
    /// Two or more templates share a name, so their lines and tags merge
    DuplicateTemplateName { name: String, occurrences: usize },
    /// A template line posts to an account that isn't in the chart
    UnknownLineAccount {
        template: String,
        line_order: usize,
        account_code: String,
    },
    /// A template with nothing to post
    EmptyTemplate { name: String },
    /// A type, balance or position outside the importer's vocabulary
    UnrecognisedValue {
        owner: String,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAccountCode { code, occurrences } => {
                write!(f, "account code '{}' appears {} times", code, occurrences)
            }
            Self::UnknownParent { code, parent_code } => write!(
                f,
                "account '{}' has unknown parent code '{}'",
                code, parent_code
            ),
            Self::DuplicateTemplateName { name, occurrences } => {
                write!(f, "template name '{}' appears {} times", name, occurrences)
            }
            Self::UnknownLineAccount {
                template,
                line_order,
                account_code,
            } => write!(
                f,
                "template '{}' line {} uses unknown account code '{}'",
                template, line_order, account_code
            ),
            Self::EmptyTemplate { name } => write!(f, "template '{}' has no lines", name),
            Self::UnrecognisedValue { owner, field, value } => {
                write!(f, "{} has unrecognised {} '{}'", owner, field, value)
            }
        }
    }
}

/// Runs the integrity checks over loaded seed data
pub struct SeedValidator<'a> {
    seed: &'a SeedData,
}

impl<'a> SeedValidator<'a> {
    pub fn new(seed: &'a SeedData) -> Self {
        Self { seed }
    }

    /// Collect every finding, accounts first, in source order
    pub fn findings(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        let codes: HashSet<&str> = self.seed.accounts.iter().map(|a| a.code.as_str()).collect();

        for (code, occurrences) in duplicates(self.seed.accounts.iter().map(|a| a.code.as_str())) {
            findings.push(Finding::DuplicateAccountCode {
                code: code.to_string(),
                occurrences,
            });
        }

        for account in &self.seed.accounts {
            let owner = || format!("account '{}'", account.code);
            if let Some(account_type) = account.account_type.as_ref().filter(|t| !t.is_recognised()) {
                findings.push(Finding::UnrecognisedValue {
                    owner: owner(),
                    field: "type",
                    value: account_type.to_string(),
                });
            }
            if !account.normal_balance.is_recognised() {
                findings.push(Finding::UnrecognisedValue {
                    owner: owner(),
                    field: "normal balance",
                    value: account.normal_balance.to_string(),
                });
            }

            if let Some(parent) = account.parent_code.as_deref() {
                if !parent.is_empty() && !codes.contains(parent) {
                    findings.push(Finding::UnknownParent {
                        code: account.code.clone(),
                        parent_code: parent.to_string(),
                    });
                }
            }
        }

        for (name, occurrences) in duplicates(self.seed.templates.iter().map(|t| t.name.as_str())) {
            findings.push(Finding::DuplicateTemplateName {
                name: name.to_string(),
                occurrences,
            });
        }

        for template in &self.seed.templates {
            if template.lines.is_empty() {
                findings.push(Finding::EmptyTemplate {
                    name: template.name.clone(),
                });
            }

            for (order, line) in template.numbered_lines() {
                if !line.position.is_recognised() {
                    findings.push(Finding::UnrecognisedValue {
                        owner: format!("template '{}' line {}", template.name, order),
                        field: "position",
                        value: line.position.to_string(),
                    });
                }
                // Blank codes are resolved through the account hint at entry time
                if !line.account_code.is_empty() && !codes.contains(line.account_code.as_str()) {
                    findings.push(Finding::UnknownLineAccount {
                        template: template.name.clone(),
                        line_order: order,
                        account_code: line.account_code.clone(),
                    });
                }
            }
        }

        findings
    }

    /// Log findings as warnings, or fail on the first batch in strict mode
    ///
    /// Returns the number of findings when not strict.
    pub fn check(&self, strict: bool) -> SeedResult<usize> {
        let findings = self.findings();

        if strict && !findings.is_empty() {
            let summary = findings
                .iter()
                .map(Finding::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SeedError::Validation(format!(
                "{} problem(s) in seed data: {}",
                findings.len(),
                summary
            )));
        }

        for finding in &findings {
            warn!("{}", finding);
        }

        Ok(findings.len())
    }
}

/// Values that occur more than once, with their counts, in first-seen order
fn duplicates<'s>(values: impl Iterator<Item = &'s str>) -> Vec<(&'s str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|v| match counts[v] {
            n if n > 1 => Some((v, n)),
            _ => None,
        })
        .collect()
}
