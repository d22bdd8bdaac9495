//! Member API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{MemberCreate, MemberResponse, MemberUpdate};
use crate::db::repository::MemberRepository;
use crate::utils::{AppError, AppResult};

/// Parse the path id. A non-integer id is a validation failure with the
/// contract's error body, not a framework rejection.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("invalid member id '{raw}'")))
}

/// GET /api/members - list every member
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MemberResponse>>> {
    let repo = MemberRepository::new(state.db.clone());
    let members = repo.find_all().await?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// GET /api/members/:id - fetch a single member
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MemberResponse>> {
    let id = parse_id(&id)?;
    let repo = MemberRepository::new(state.db.clone());
    let member = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("member {id} not found")))?;
    Ok(Json(member.into()))
}

/// POST /api/members - create a member; the server assigns the id
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MemberCreate>,
) -> AppResult<(StatusCode, Json<MemberResponse>)> {
    let repo = MemberRepository::new(state.db.clone());
    let member = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(member.into())))
}

/// PUT /api/members/:id - update a member (payment history is preserved)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberUpdate>,
) -> AppResult<Json<MemberResponse>> {
    let id = parse_id(&id)?;
    let repo = MemberRepository::new(state.db.clone());
    let member = repo.update(id, payload).await?;
    Ok(Json(member.into()))
}

/// DELETE /api/members/:id - delete a member
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let id = parse_id(&id)?;
    let repo = MemberRepository::new(state.db.clone());
    if !repo.delete(id).await? {
        return Err(AppError::not_found(format!("member {id} not found")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
