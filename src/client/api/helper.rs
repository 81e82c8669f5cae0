use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::ErrorDto};

/// Reads the `{error}` body of a failed response, falling back to the raw text.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status() as u64;

    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "เกิดข้อผิดพลาดที่ไม่ทราบสาเหตุ".to_string())
    };

    ApiError { status, message }
}

fn is_success(response: &Response) -> bool {
    (200..300).contains(&response.status())
}

/// Parses a JSON success body or turns the error body into an `ApiError`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !is_success(&response) {
        return Err(error_from_response(response).await);
    }

    response.json::<T>().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to parse response: {}", e),
    })
}

/// Like `parse_response` but maps `401 Unauthorized` to `Ok(None)`.
pub async fn parse_optional_response<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, ApiError> {
    if response.status() == 401 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}

/// For endpoints answering `204 No Content`.
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    if is_success(&response) {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}

/// Builds `?key=value&...` from the pairs that are set.
pub fn query_string(params: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{}={}", key, v)))
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}
