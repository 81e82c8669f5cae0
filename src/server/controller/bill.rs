use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::bill::{BillProofDto, BillStatus, CreateBillDto, UpdateBillStatusDto},
    server::{
        controller::{default_entries, page_size, parse_status},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bill::{Bill, BillFilter, CreateBillParams},
        service::bill::BillService,
        state::AppState,
        util::date::parse_billing_month,
    },
};

#[derive(Deserialize)]
pub struct BillQuery {
    pub status: Option<String>,
    /// `YYYY-MM`
    pub month: Option<String>,
    pub room_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn bill_service(state: &AppState) -> BillService<'_> {
    BillService::new(
        &state.db,
        state.storage.as_ref(),
        state.mailer.as_ref(),
        &state.app_url,
    )
}

/// POST /api/bills - Issue a monthly bill and email the renter
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Unpaid bill
/// - `400 Bad Request` - Invalid amounts or month
/// - `404 Not Found` - Room does not exist
/// - `409 Conflict` - The room already has a bill for the month
pub async fn create_bill(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let bill = bill_service(&state)
        .create(CreateBillParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(bill.into_dto())))
}

/// GET /api/bills - Paginated bills, latest month first
///
/// Admins see every room, other accounts only their own.
pub async fn get_bills(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BillQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let month = query
        .month
        .filter(|m| !m.is_empty())
        .map(|m| parse_billing_month(&m))
        .transpose()?;
    let filter = BillFilter {
        status: parse_status::<BillStatus>(query.status)?,
        month,
        room_id: query.room_id,
    };

    let bills = bill_service(&state)
        .get_paginated(&user, filter, query.page, page_size(query.entries)?)
        .await?;

    Ok((StatusCode::OK, Json(bills.into_dto(Bill::into_dto))))
}

/// GET /api/bills/{id}
///
/// # Access Control
/// - Admin or the account of the bill's room
pub async fn get_bill(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let bill = bill_service(&state).get_for(&user, id).await?;

    Ok((StatusCode::OK, Json(bill.into_dto())))
}

/// PUT /api/bills/{id}/proof - Attach a payment slip
///
/// The bill moves to `pending_review` until an admin marks it paid.
///
/// # Returns
/// - `200 OK` - Updated bill
/// - `403 Forbidden` - Bill of another room
/// - `409 Conflict` - Bill already paid
pub async fn submit_proof(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<BillProofDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let bill = bill_service(&state)
        .submit_proof(&user, id, &payload.image)
        .await?;

    Ok((StatusCode::OK, Json(bill.into_dto())))
}

/// PUT /api/bills/{id}/status - Mark paid or unpaid
///
/// # Access Control
/// - `Admin`
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBillStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let bill = bill_service(&state)
        .set_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(bill.into_dto())))
}

/// DELETE /api/bills/{id}
///
/// # Access Control
/// - `Admin`
pub async fn delete_bill(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    bill_service(&state).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
