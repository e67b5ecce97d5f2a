//! Radius search ordered by distance.

use tourdb_core::Coordinate;

use crate::error::SearchError;
use crate::page::{assemble, Page, PageRequest};
use crate::predicate::SearchQuery;
use crate::result::SearchResult;
use crate::source::CandidateSource;

/// Places within `radius_km` of `origin`, nearest first, newest id first on
/// ties. Every result carries a truncated `distance_km`.
///
/// Count and content come from one `count_and_fetch` call on the same
/// predicate.
///
/// # Errors
///
/// - [`SearchError::InvalidRadius`] for a negative or non-finite radius,
///   raised before any storage call.
/// - [`SearchError::StorageUnavailable`] if either storage call fails.
/// - [`SearchError::InconsistentPage`] if the source's count and content
///   disagree.
pub async fn nearby_search<S>(
    source: &S,
    origin: Coordinate,
    radius_km: f64,
    request: PageRequest,
) -> Result<Page<SearchResult>, SearchError>
where
    S: CandidateSource,
{
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(SearchError::InvalidRadius(radius_km));
    }

    let query = SearchQuery::nearby(origin, radius_km);
    let (total, places) = source
        .count_and_fetch(
            &query.predicate,
            &query.order,
            request.offset(),
            request.page_size(),
        )
        .await
        .inspect_err(|e| tracing::error!(error = %e, "nearby search storage call failed"))?;

    tracing::debug!(
        latitude = origin.latitude,
        longitude = origin.longitude,
        radius_km,
        total,
        returned = places.len(),
        "nearby search"
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

    fn place(id: i64, lat: f64, lng: f64) -> PlaceRecord {
        PlaceRecord {
            id,
            name: format!("Place {id}"),
            country_name: "Korea".to_string(),
            city_name: "Seoul".to_string(),
            district_name: "Jung".to_string(),
            address: String::new(),
            detail_address: None,
            coordinate: Coordinate::new(lat, lng),
            bookmark_count: 0,
        }
    }

    const CITY_HALL: Coordinate = Coordinate::new(37.5665, 126.9780);

    #[tokio::test]
    async fn two_close_places_nearest_first() {
        let source = InMemoryPlaces::new(vec![
            place(1, 37.5796, 126.9770),
            place(2, 37.5665, 126.9780),
        ]);

        let page = nearby_search(&source, CITY_HALL, 5.0, PageRequest::new(1, 10).unwrap())
            .await
            .unwrap();

        assert_eq!(page.total_elements, 2);
        assert_eq!(page.content[0].place_id, 2);
        assert_eq!(page.content[0].distance_km, Some(0.0));
        assert_eq!(page.content[1].place_id, 1);
        assert_eq!(page.content[1].distance_km, Some(1.4));
    }

    #[tokio::test]
    async fn excludes_places_outside_radius() {
        let source = InMemoryPlaces::new(vec![
            place(1, 37.5796, 126.9770),
            place(2, 35.1796, 129.0756),
        ]);

        let page = nearby_search(&source, CITY_HALL, 5.0, PageRequest::new(1, 10).unwrap())
            .await
            .unwrap();

        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].place_id, 1);
    }

    #[tokio::test]
    async fn negative_radius_is_rejected() {
        let source = InMemoryPlaces::default();
        let result =
            nearby_search(&source, CITY_HALL, -1.0, PageRequest::new(1, 10).unwrap()).await;
        assert!(matches!(result, Err(SearchError::InvalidRadius(_))));
    }

    #[tokio::test]
    async fn nan_radius_is_rejected() {
        let source = InMemoryPlaces::default();
        let result = nearby_search(
            &source,
            CITY_HALL,
            f64::NAN,
            PageRequest::new(1, 10).unwrap(),
        )
        .await;
        assert!(matches!(result, Err(SearchError::InvalidRadius(_))));
    }

    #[tokio::test]
    async fn equidistant_places_newest_first() {
        let source = InMemoryPlaces::new(vec![
            place(4, 37.57, 126.98),
            place(11, 37.57, 126.98),
            place(7, 37.57, 126.98),
        ]);

        let page = nearby_search(&source, CITY_HALL, 5.0, PageRequest::new(1, 10).unwrap())
            .await
            .unwrap();

        let ids: Vec<i64> = page.content.iter().map(|r| r.place_id).collect();
        assert_eq!(ids, vec![11, 7, 4]);
    }
}
