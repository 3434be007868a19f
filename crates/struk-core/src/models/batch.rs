use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::employee::Employee;
use super::transaction::Transaction;

/// Request body as it arrives, before presence checks. Absent and `null`
/// collections both deserialize to `None`.
#[derive(Debug, Default, Deserialize)]
pub struct RawBatchRequest {
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(default)]
    pub employees: Option<Vec<Employee>>,
}

/// A validated batch: at least one transaction and an employee directory
/// (possibly empty).
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct BatchRequest {
    transactions: Vec<Transaction>,
    employees: Vec<Employee>,
}

impl BatchRequest {
    pub fn new(
        transactions: Vec<Transaction>,
        employees: Vec<Employee>,
    ) -> Result<Self, CoreError> {
        if transactions.is_empty() {
            return Err(CoreError::IncompleteData);
        }
        Ok(Self {
            transactions,
            employees,
        })
    }

    /// Parse and validate a JSON request body.
    pub fn from_json(body: &[u8]) -> Result<Self, CoreError> {
        let raw: RawBatchRequest = serde_json::from_slice(body)?;
        Self::try_from(raw)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Always false for a validated batch.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TryFrom<RawBatchRequest> for BatchRequest {
    type Error = CoreError;

    fn try_from(raw: RawBatchRequest) -> Result<Self, Self::Error> {
        match (raw.transactions, raw.employees) {
            (Some(transactions), Some(employees)) => Self::new(transactions, employees),
            _ => Err(CoreError::IncompleteData),
        }
    }
}
