//! Expense Repository

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Expense, ExpenseCreate};

const TABLE: &str = "expense";

#[derive(Clone)]
pub struct ExpenseRepository {
    base: BaseRepository,
}

impl ExpenseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all expenses, lowest id first (records without an id sort first).
    pub async fn find_all(&self) -> RepoResult<Vec<Expense>> {
        self.base
            .run(async {
                let expenses: Vec<Expense> = self
                    .base
                    .db()
                    .query("SELECT * FROM expense ORDER BY expense_id ASC")
                    .await?
                    .take(0)?;
                Ok(expenses)
            })
            .await
    }

    /// Store the record as given; no required-field enforcement.
    pub async fn create(&self, data: ExpenseCreate) -> RepoResult<Expense> {
        self.base
            .run(async {
                let expense = Expense {
                    id: None,
                    expense_id: data.id,
                    date: data.date,
                    amount: data.amount,
                    category: data.category,
                    description: data.description,
                };
                let created: Option<Expense> =
                    self.base.db().create(TABLE).content(expense).await?;
                created.ok_or_else(|| RepoError::Database("Failed to create expense".into()))
            })
            .await
    }

    /// Delete every record whose id matches. Matching nothing is a
    /// successful no-op by contract.
    pub async fn delete(&self, expense_id: f64) -> RepoResult<()> {
        self.base
            .run(async {
                self.base
                    .db()
                    .query("DELETE expense WHERE expense_id = $expense_id")
                    .bind(("expense_id", expense_id))
                    .await?
                    .check()?;
                Ok(())
            })
            .await
    }
}
