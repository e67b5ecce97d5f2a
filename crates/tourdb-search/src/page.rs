//! Page requests and assembled result pages.

use serde::Serialize;

use crate::error::SearchError;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
    offset: i64,
}

impl PageRequest {
    /// Validate a 1-based page number against a page size.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPageRequest`] when `page_size <= 0`, when
    /// the derived offset `(page - 1) * page_size` is negative, or when it
    /// overflows.
    pub fn new(page: i64, page_size: i64) -> Result<Self, SearchError> {
        let invalid = || SearchError::InvalidPageRequest { page, page_size };
        if page_size <= 0 {
            return Err(invalid());
        }
        let offset = page
            .checked_sub(1)
            .and_then(|index| index.checked_mul(page_size))
            .ok_or_else(invalid)?;
        if offset < 0 {
            return Err(invalid());
        }
        Ok(Self {
            page,
            page_size,
            offset,
        })
    }

    /// Zero-based page index.
    #[must_use]
    pub fn index(&self) -> i64 {
        self.page - 1
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    #[must_use]
    pub fn page_size(&self) -> i64 {
        self.page_size
    }
}

/// One page of results plus totals for the whole filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_pages: i64,
    /// 1-based.
    pub current_page: i64,
    pub total_elements: i64,
    pub page_size: i64,
    pub content: Vec<T>,
}

/// Combine a content slice with its independently counted total.
///
/// Empty content with a positive total is a legitimate page past the end.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPageRequest`] for a non-positive page size or
/// negative index, and [`SearchError::InconsistentPage`] when the content
/// cannot belong to the given total: more items than `page_size`, a negative
/// total, or items present while the total is zero.
pub fn assemble<T>(
    content: Vec<T>,
    page_size: i64,
    zero_based_index: i64,
    total_elements: i64,
) -> Result<Page<T>, SearchError> {
    if page_size <= 0 || zero_based_index < 0 {
        return Err(SearchError::InvalidPageRequest {
            page: zero_based_index.saturating_add(1),
            page_size,
        });
    }

    let too_long = i64::try_from(content.len()).map_or(true, |len| len > page_size);
    let orphaned = !content.is_empty() && total_elements == 0;
    if too_long || orphaned || total_elements < 0 {
        tracing::error!(
            content_len = content.len(),
            page_size,
            total_elements,
            "count and content disagree"
        );
        return Err(SearchError::InconsistentPage {
            content_len: content.len(),
            page_size,
            total_elements,
        });
    }

    let total_pages = total_elements / page_size + i64::from(total_elements % page_size != 0);

    Ok(Page {
        total_pages,
        current_page: zero_based_index + 1,
        total_elements,
        page_size,
        content,
    })
}
