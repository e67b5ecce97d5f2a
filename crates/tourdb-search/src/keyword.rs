//! Keyword search ranked by match quality.

use tourdb_core::Coordinate;

use crate::error::SearchError;
use crate::page::{assemble, Page, PageRequest};
use crate::predicate::SearchQuery;
use crate::result::SearchResult;
use crate::source::CandidateSource;

/// Places whose name, country, city or district contains `keyword`.
///
/// Ordered by relevance tiers (name, country, city, district), then by
/// distance from `origin` when one is given, then newest id first.
/// `distance_km` is only populated with an `origin`. The keyword is used
/// verbatim; trimming and blank rejection happen at the request edge.
///
/// # Errors
///
/// - [`SearchError::StorageUnavailable`] if either storage call fails.
/// - [`SearchError::InconsistentPage`] if the source's count and content
///   disagree.
pub async fn keyword_search<S>(
    source: &S,
    keyword: &str,
    origin: Option<Coordinate>,
    request: PageRequest,
) -> Result<Page<SearchResult>, SearchError>
where
    S: CandidateSource,
{
    let query = SearchQuery::keyword(keyword, origin);
    let (total, places) = source
        .count_and_fetch(
            &query.predicate,
            &query.order,
            request.offset(),
            request.page_size(),
        )
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, keyword, "keyword search storage call failed");
        })?;

    tracing::debug!(
        keyword,
        with_origin = origin.is_some(),
        total,
        returned = places.len(),
        "keyword search"
    );

    let content = places
        .into_iter()
        .map(|place| SearchResult::from_place(place, query.order.origin()))
        .collect();

    assemble(content, request.page_size(), request.index(), total)
}

#[cfg(test)]
mod tests {
    use tourdb_core::PlaceRecord;

    use super::*;
    use crate::memory::InMemoryPlaces;

    fn place(id: i64, name: &str, city: &str, district: &str, lat: f64, lng: f64) -> PlaceRecord {
        PlaceRecord {
            id,
            name: name.to_string(),
            country_name: "Korea".to_string(),
            city_name: city.to_string(),
            district_name: district.to_string(),
            address: String::new(),
            detail_address: None,
            coordinate: Coordinate::new(lat, lng),
            bookmark_count: 0,
        }
    }

    fn first_page() -> PageRequest {
        PageRequest::new(1, 10).unwrap()
    }

    #[tokio::test]
    async fn exact_district_ranks_before_contained_district() {
        let source = InMemoryPlaces::new(vec![
            place(1, "Riverside Bistro", "Seoul", "South Gangnam", 37.5, 127.0),
            place(2, "Hidden Garden", "Seoul", "Gangnam", 37.5, 127.0),
        ]);

        let page = keyword_search(&source, "Gangnam", None, first_page())
            .await
            .unwrap();

        let ids: Vec<i64> = page.content.iter().map(|r| r.place_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(page.content.iter().all(|r| r.distance_km.is_none()));
    }

    #[tokio::test]
    async fn name_match_outranks_district_match() {
        let source = InMemoryPlaces::new(vec![
            place(1, "Hidden Garden", "Seoul", "Gangnam", 37.5, 127.0),
            place(2, "Gangnam Tower", "Seoul", "Jung", 37.5, 127.0),
        ]);

        let page = keyword_search(&source, "Gangnam", None, first_page())
            .await
            .unwrap();

        assert_eq!(page.content[0].place_id, 2);
    }

    #[tokio::test]
    async fn origin_breaks_relevance_ties_by_distance() {
        let origin = Coordinate::new(37.5665, 126.9780);
        let source = InMemoryPlaces::new(vec![
            place(9, "Cafe", "Seoul", "Jung", 37.6000, 126.9780),
            place(3, "Cafe", "Seoul", "Jung", 37.5670, 126.9780),
        ]);

        let page = keyword_search(&source, "Seoul", Some(origin), first_page())
            .await
            .unwrap();

        assert_eq!(page.content[0].place_id, 3);
        assert!(page.content.iter().all(|r| r.distance_km.is_some()));
    }

    #[tokio::test]
    async fn no_match_is_empty_not_error() {
        let source = InMemoryPlaces::new(vec![place(1, "Cafe", "Seoul", "Jung", 37.5, 127.0)]);

        let page = keyword_search(&source, "Jeju", None, first_page())
            .await
            .unwrap();

        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.content.is_empty());
    }

    #[tokio::test]
    async fn matching_is_case_sensitive() {
        let source = InMemoryPlaces::new(vec![place(1, "Cafe", "Seoul", "Jung", 37.5, 127.0)]);

        let page = keyword_search(&source, "seoul", None, first_page())
            .await
            .unwrap();

        assert_eq!(page.total_elements, 0);
    }
}
