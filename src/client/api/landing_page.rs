use crate::{
    client::{
        api::helper::{get, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::landing_page::{LandingPageDto, UpdateLandingPageDto},
};

pub async fn get_landing_page() -> Result<LandingPageDto, ApiError> {
    let response = send_request(get("/api/landing-page")).await?;
    parse_response(response).await
}

pub async fn update_landing_page(payload: UpdateLandingPageDto) -> Result<LandingPageDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(put("/api/landing-page").body(body)).await?;
    parse_response(response).await
}
