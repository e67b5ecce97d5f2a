use thiserror::Error;

/// Failure reported by a storage collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached (pool exhausted, connection refused).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage query failed: {0}")]
    Query(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid page request: page {page}, page size {page_size}")]
    InvalidPageRequest { page: i64, page_size: i64 },

    #[error("invalid radius: {0} km")]
    InvalidRadius(f64),

    #[error(transparent)]
    StorageUnavailable(#[from] StoreError),

    #[error(
        "inconsistent page: {content_len} items for page size {page_size} with total {total_elements}"
    )]
    InconsistentPage {
        content_len: usize,
        page_size: i64,
        total_elements: i64,
    },
}

impl SearchError {
    /// Whether the error stems from caller input rather than the backend.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidPageRequest { .. } | SearchError::InvalidRadius(_)
        )
    }
}
