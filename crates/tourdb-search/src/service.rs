use tourdb_core::{Coordinate, SearchConfig};

use crate::enrich::enrich_results;
use crate::error::SearchError;
use crate::keyword::keyword_search;
use crate::nearby::nearby_search;
use crate::page::{Page, PageRequest};
use crate::result::SearchResult;
use crate::source::{BookmarkStore, CallerId, CandidateSource, ImageStore};

/// Entry point for both search modes: ranks, pages and enriches.
///
/// Holds no per-request state; clone it freely across tasks.
#[derive(Debug, Clone)]
pub struct SearchService<S, I, B> {
    source: S,
    images: I,
    bookmarks: B,
    config: SearchConfig,
}

impl<S, I, B> SearchService<S, I, B>
where
    S: CandidateSource,
    I: ImageStore,
    B: BookmarkStore,
{
    #[must_use]
    pub fn new(source: S, images: I, bookmarks: B, config: SearchConfig) -> Self {
        Self {
            source,
            images,
            bookmarks,
            config,
        }
    }

    /// Places near `origin`. `radius_km` falls back to the configured default.
    ///
    /// # Errors
    ///
    /// See [`nearby_search`]; additionally [`SearchError::InvalidPageRequest`]
    /// for `page < 1`, checked before storage is touched.
    pub async fn nearby_search(
        &self,
        origin: Coordinate,
        radius_km: Option<f64>,
        page: i64,
        caller: Option<CallerId>,
    ) -> Result<Page<SearchResult>, SearchError> {
        let request = PageRequest::new(page, self.config.page_size)?;
        let radius_km = radius_km.unwrap_or(self.config.default_radius_km);
        let page = nearby_search(&self.source, origin, radius_km, request).await?;
        Ok(self.enrich(page, caller).await)
    }

    /// Places matching `keyword`, optionally tie-broken by distance to `origin`.
    ///
    /// # Errors
    ///
    /// See [`keyword_search`]; additionally [`SearchError::InvalidPageRequest`]
    /// for `page < 1`, checked before storage is touched.
    pub async fn keyword_search(
        &self,
        keyword: &str,
        origin: Option<Coordinate>,
        page: i64,
        caller: Option<CallerId>,
    ) -> Result<Page<SearchResult>, SearchError> {
        let request = PageRequest::new(page, self.config.page_size)?;
        let page = keyword_search(&self.source, keyword, origin, request).await?;
        Ok(self.enrich(page, caller).await)
    }

    async fn enrich(
        &self,
        mut page: Page<SearchResult>,
        caller: Option<CallerId>,
    ) -> Page<SearchResult> {
        let content = std::mem::take(&mut page.content);
        page.content = enrich_results(
            &self.images,
            &self.bookmarks,
            caller,
            self.config.enrichment_timeout,
            content,
        )
        .await;
        page
    }
}
