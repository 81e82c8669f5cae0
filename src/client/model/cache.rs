use crate::client::model::error::ApiError;

/// Fetch state of data loaded by a page.
#[derive(Clone, Default)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.data().map(f)
    }
}

impl<T> From<Result<T, ApiError>> for Cache<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => Cache::Error(err),
        }
    }
}
