use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Label shown in the cashier field when an employee reference cannot be
/// resolved.
pub const CASHIER_PLACEHOLDER: &str = "N/A";

/// An employee or cashier identifier as sent by the POS front-end.
///
/// Front-ends are inconsistent about ids: some send `7`, others `"7"`.
/// Both shapes are accepted and compare loosely through [`Identifier::matches`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Identifier {
    Number(f64),
    Text(String),
}

impl Identifier {
    /// Loose equality: same text, same number, or a number against text
    /// that parses to that number. Blank text counts as `0`.
    pub fn matches(&self, other: &Identifier) -> bool {
        match (self, other) {
            (Identifier::Number(a), Identifier::Number(b)) => a == b,
            (Identifier::Text(a), Identifier::Text(b)) => a == b,
            (Identifier::Number(n), Identifier::Text(t))
            | (Identifier::Text(t), Identifier::Number(n)) => {
                let t = t.trim();
                if t.is_empty() {
                    return *n == 0.0;
                }
                t.parse::<f64>().is_ok_and(|parsed| parsed == *n)
            }
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Employee {
    pub id: Identifier,
    pub name: String,
}

/// Resolve the cashier display name for `id`, falling back to
/// [`CASHIER_PLACEHOLDER`] when the id is absent or unknown. Never fails.
pub fn resolve_cashier<'a>(employees: &'a [Employee], id: Option<&Identifier>) -> &'a str {
    id.and_then(|id| employees.iter().find(|e| e.id.matches(id)))
        .map(|e| e.name.as_str())
        .unwrap_or(CASHIER_PLACEHOLDER)
}
