//! Expense Model
//!
//! Expenses are intentionally lax: the caller supplies whatever subset of
//! fields it has, including the id, and the store keeps the document as
//! given. Uniqueness of `expense_id` is not enforced.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Expense document as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub expense_id: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Expense creation payload (wire shape).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseCreate {
    pub id: Option<f64>,
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Wire representation of an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub id: Option<f64>,
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl From<Expense> for ExpenseResponse {
    fn from(e: Expense) -> Self {
        Self {
            id: e.expense_id,
            date: e.date,
            amount: e.amount,
            category: e.category,
            description: e.description,
        }
    }
}
