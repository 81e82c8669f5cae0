use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// One page of a list endpoint.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct UploadDto {
    pub url: String,
}
