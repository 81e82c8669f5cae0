use crate::model::api::PaginatedDto;

/// A page of domain items with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    pub fn into_dto<D>(self, convert: impl FnMut(T) -> D) -> PaginatedDto<D> {
        let total_pages = self.total_pages();
        PaginatedDto {
            items: self.items.into_iter().map(convert).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}
