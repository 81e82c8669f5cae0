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
        parcel::{CreateParcelDto, ParcelDto},
    },
};

pub async fn create_parcel(payload: CreateParcelDto) -> Result<ParcelDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/parcels").body(body)).await?;
    parse_response(response).await
}

pub async fn get_parcels(
    picked_up: Option<bool>,
    page: u64,
    entries: u64,
) -> Result<PaginatedDto<ParcelDto>, ApiError> {
    let url = format!(
        "/api/parcels{}",
        query_string(&[
            ("picked_up", picked_up.map(|v| v.to_string())),
            ("page", Some(page.to_string())),
            ("entries", Some(entries.to_string())),
        ])
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn pick_up(id: i32) -> Result<ParcelDto, ApiError> {
    let url = format!("/api/parcels/{}/pickup", id);
    let response = send_request(put(&url)).await?;
    parse_response(response).await
}

pub async fn delete_parcel(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/parcels/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
