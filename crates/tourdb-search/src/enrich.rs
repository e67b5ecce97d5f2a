//! Post-ranking enrichment: thumbnails and per-caller bookmark flags.
//!
//! Lookups for every item run concurrently. A failed or slow lookup only
//! affects its own field, which keeps its default.

use std::time::Duration;

use futures::future::join_all;

use crate::result::SearchResult;
use crate::source::{BookmarkStore, CallerId, ImageStore};

/// Attach `thumbnail_url` and `bookmark_status` to every result.
///
/// Anonymous callers (`caller == None`) get `bookmark_status = false`
/// without the bookmark store being consulted. Output order matches input.
pub async fn enrich_results<I, B>(
    images: &I,
    bookmarks: &B,
    caller: Option<CallerId>,
    timeout: Duration,
    results: Vec<SearchResult>,
) -> Vec<SearchResult>
where
    I: ImageStore,
    B: BookmarkStore,
{
    join_all(
        results
            .into_iter()
            .map(|result| enrich_one(images, bookmarks, caller, timeout, result)),
    )
    .await
}

async fn enrich_one<I, B>(
    images: &I,
    bookmarks: &B,
    caller: Option<CallerId>,
    timeout: Duration,
    mut result: SearchResult,
) -> SearchResult
where
    I: ImageStore,
    B: BookmarkStore,
{
    let place_id = result.place_id;
    let (thumbnail_url, bookmark_status) = tokio::join!(
        resolve_thumbnail(images, place_id, timeout),
        resolve_bookmark(bookmarks, caller, place_id, timeout),
    );
    result.thumbnail_url = thumbnail_url;
    result.bookmark_status = bookmark_status;
    result
}

async fn resolve_thumbnail<I: ImageStore>(
    images: &I,
    place_id: i64,
    timeout: Duration,
) -> Option<String> {
    match tokio::time::timeout(timeout, images.find_thumbnail_url(place_id)).await {
        Ok(Ok(url)) => url,
        Ok(Err(e)) => {
            tracing::warn!(place_id, error = %e, "thumbnail lookup failed; leaving empty");
            None
        }
        Err(_) => {
            tracing::warn!(
                place_id,
                timeout_ms = timeout.as_millis(),
                "thumbnail lookup timed out; leaving empty"
            );
            None
        }
    }
}

async fn resolve_bookmark<B: BookmarkStore>(
    bookmarks: &B,
    caller: Option<CallerId>,
    place_id: i64,
    timeout: Duration,
) -> bool {
    let Some(caller) = caller else {
        return false;
    };

    match tokio::time::timeout(timeout, bookmarks.exists(caller, place_id)).await {
        Ok(Ok(exists)) => exists,
        Ok(Err(e)) => {
            tracing::warn!(
                place_id,
                caller = caller.0,
                error = %e,
                "bookmark lookup failed; treating as not bookmarked"
            );
            false
        }
        Err(_) => {
            tracing::warn!(
                place_id,
                caller = caller.0,
                timeout_ms = timeout.as_millis(),
                "bookmark lookup timed out; treating as not bookmarked"
            );
            false
        }
    }
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod tests;
