//! Account model
//!
//! Represents ledger accounts from the chart-of-accounts seed file.

use serde::{Deserialize, Deserializer};
use std::fmt;

use super::lenient;
use super::null_as_default;

/// Ledger account category
///
/// Values outside the five known spellings are kept verbatim in `Other` so
/// they reach the archive unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
    Other(String),
}

impl AccountType {
    /// Map the seed file's text onto a known type, keeping anything else raw
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ASSET" => Self::Asset,
            "LIABILITY" => Self::Liability,
            "EQUITY" => Self::Equity,
            "REVENUE" => Self::Revenue,
            "EXPENSE" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }

    /// The import format's spelling of this type
    pub fn as_str(&self) -> &str {
        match self {
            Self::Asset => "ASSET",
            Self::Liability => "LIABILITY",
            Self::Equity => "EQUITY",
            Self::Revenue => "REVENUE",
            Self::Expense => "EXPENSE",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_recognised(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::text(deserializer).map(|raw| Self::parse(&raw))
    }
}

/// Debit or credit side, used both for an account's normal balance and for
/// a template line's position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Debit,
    Credit,
    Other(String),
}

impl Position {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "DEBIT" => Self::Debit,
            "CREDIT" => Self::Credit,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Debit => "DEBIT",
            Self::Credit => "CREDIT",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_recognised(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::text(deserializer).map(|raw| Self::parse(&raw))
    }
}

/// A ledger account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account code (e.g., "1.1.01"); numeric codes are read as text
    #[serde(default, deserialize_with = "lenient::text")]
    pub code: String,

    /// Display name
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    /// Account category; left blank in the export when absent
    #[serde(rename = "type", default)]
    pub account_type: Option<AccountType>,

    /// Code of the parent account, if this is a child in the tree
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub parent_code: Option<String>,

    /// Side on which the balance normally sits
    #[serde(default, deserialize_with = "null_as_default")]
    pub normal_balance: Position,
}

impl Account {
    /// Create a new top-level account with a debit normal balance
    pub fn new(code: impl Into<String>, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            account_type: Some(account_type),
            parent_code: None,
            normal_balance: Position::Debit,
        }
    }

    /// Set the parent account code
    pub fn with_parent(mut self, parent_code: impl Into<String>) -> Self {
        self.parent_code = Some(parent_code.into());
        self
    }

    /// Set the normal balance side
    pub fn with_normal_balance(mut self, normal_balance: Position) -> Self {
        self.normal_balance = normal_balance;
        self
    }

    /// The parent code, or an empty string for root accounts
    pub fn parent_code_str(&self) -> &str {
        self.parent_code.as_deref().unwrap_or("")
    }

    /// The account type's text, or an empty string when absent
    pub fn account_type_str(&self) -> &str {
        self.account_type.as_ref().map(AccountType::as_str).unwrap_or("")
    }
}

/// Top-level shape of `coa.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartOfAccounts {
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_optional_fields() {
        let account: Account =
            serde_json::from_str(r#"{"code": "1000", "name": "Cash", "type": "ASSET"}"#).unwrap();

        assert_eq!(account.account_type, Some(AccountType::Asset));
        assert_eq!(account.normal_balance, Position::Debit);
        assert_eq!(account.parent_code_str(), "");
    }

    #[test]
    fn test_full_account() {
        let account: Account = serde_json::from_str(
            r#"{
                "code": "2100",
                "name": "Accounts Payable",
                "type": "LIABILITY",
                "parentCode": "2000",
                "normalBalance": "CREDIT",
                "isHeader": false
            }"#,
        )
        .unwrap();

        assert_eq!(account.parent_code_str(), "2000");
        assert_eq!(account.normal_balance, Position::Credit);
        assert_eq!(account.account_type_str(), "LIABILITY");
    }

    #[test]
    fn test_nulls_treated_as_absent() {
        let account: Account = serde_json::from_str(
            r#"{"code": "1000", "name": null, "type": null, "parentCode": null, "normalBalance": null}"#,
        )
        .unwrap();

        assert_eq!(account.name, "");
        assert_eq!(account.account_type, None);
        assert_eq!(account.parent_code, None);
        assert_eq!(account.normal_balance, Position::Debit);
    }

    #[test]
    fn test_unrecognised_type_and_balance_kept_verbatim() {
        let account: Account = serde_json::from_str(
            r#"{"code": "1", "type": "Asset", "normalBalance": "debit"}"#,
        )
        .unwrap();

        assert_eq!(account.account_type, Some(AccountType::Other("Asset".into())));
        assert_eq!(account.account_type_str(), "Asset");
        assert_eq!(account.normal_balance, Position::Other("debit".into()));
        assert!(!account.normal_balance.is_recognised());
    }

    #[test]
    fn test_numeric_code_and_parent_read_as_text() {
        let account: Account = serde_json::from_str(
            r#"{"code": 1110, "name": "Bank", "type": "ASSET", "parentCode": 1100}"#,
        )
        .unwrap();

        assert_eq!(account.code, "1110");
        assert_eq!(account.parent_code_str(), "1100");
    }

    #[test]
    fn test_chart_requires_accounts_key() {
        assert!(serde_json::from_str::<ChartOfAccounts>(r#"{"name": "COA"}"#).is_err());

        let chart: ChartOfAccounts =
            serde_json::from_str(r#"{"name": "COA", "version": "2.1", "accounts": []}"#).unwrap();
        assert!(chart.accounts.is_empty());
    }

    #[test]
    fn test_builders() {
        let account = Account::new("1110", "Bank BCA", AccountType::Asset)
            .with_parent("1100")
            .with_normal_balance(Position::Debit);
        assert_eq!(account.parent_code.as_deref(), Some("1100"));
    }
}
