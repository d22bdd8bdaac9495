//! Donation API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{DonationCreate, DonationResponse};
use crate::db::repository::DonationRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/donations - list every donation
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DonationResponse>>> {
    let repo = DonationRepository::new(state.db.clone());
    let donations = repo.find_all().await?;
    Ok(Json(
        donations.into_iter().map(DonationResponse::from).collect(),
    ))
}

/// POST /api/donations - store the record as given
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DonationCreate>,
) -> AppResult<(StatusCode, Json<DonationResponse>)> {
    let repo = DonationRepository::new(state.db.clone());
    let donation = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(donation.into())))
}

/// DELETE /api/donations/:id - delete by id; absent ids succeed as a no-op
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id: f64 = id
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("invalid donation id '{id}'")))?;
    let repo = DonationRepository::new(state.db.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
