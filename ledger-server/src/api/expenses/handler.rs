//! Expense API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{ExpenseCreate, ExpenseResponse};
use crate::db::repository::ExpenseRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/expenses - list every expense
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ExpenseResponse>>> {
    let repo = ExpenseRepository::new(state.db.clone());
    let expenses = repo.find_all().await?;
    Ok(Json(
        expenses.into_iter().map(ExpenseResponse::from).collect(),
    ))
}

/// POST /api/expenses - store the record as given
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseCreate>,
) -> AppResult<(StatusCode, Json<ExpenseResponse>)> {
    let repo = ExpenseRepository::new(state.db.clone());
    let expense = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(expense.into())))
}

/// DELETE /api/expenses/:id - delete by id; absent ids succeed as a no-op
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id: f64 = id
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("invalid expense id '{id}'")))?;
    let repo = ExpenseRepository::new(state.db.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
