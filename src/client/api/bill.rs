use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, query_string,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        bill::{BillDto, BillProofDto, BillStatus, CreateBillDto, UpdateBillStatusDto},
    },
};

pub async fn create_bill(payload: CreateBillDto) -> Result<BillDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/bills").body(body)).await?;
    parse_response(response).await
}

/// `month` is `YYYY-MM`.
pub async fn get_bills(
    status: Option<BillStatus>,
    month: Option<String>,
    page: u64,
    entries: u64,
) -> Result<PaginatedDto<BillDto>, ApiError> {
    let url = format!(
        "/api/bills{}",
        query_string(&[
            ("status", status.map(|s| s.as_str().to_string())),
            ("month", month.filter(|m| !m.is_empty())),
            ("page", Some(page.to_string())),
            ("entries", Some(entries.to_string())),
        ])
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Uploads a transfer slip given as a data URL.
pub async fn submit_proof(id: i32, image: String) -> Result<BillDto, ApiError> {
    let body = serialize_json(&BillProofDto { image })?;
    let url = format!("/api/bills/{}/proof", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn update_status(id: i32, status: BillStatus) -> Result<BillDto, ApiError> {
    let body = serialize_json(&UpdateBillStatusDto { status })?;
    let url = format!("/api/bills/{}/status", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_bill(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/bills/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
