//! Filter and ordering descriptions handed to a [`crate::CandidateSource`].
//!
//! A [`SearchQuery`] is built once per request and the same predicate value
//! is passed to both the count and the page fetch, so the total can never be
//! computed against a different filter than the content.

use std::cmp::Ordering;

use tourdb_core::{Coordinate, PlaceRecord};

use crate::geo::distance_km;
use crate::relevance::RelevanceKey;

/// Which places a search considers.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPredicate {
    /// Places whose great-circle distance from `origin` is `<= radius_km`.
    WithinRadius { origin: Coordinate, radius_km: f64 },
    /// Places whose name, country, city or district contains `keyword`
    /// (case-sensitive substring).
    KeywordMatch { keyword: String },
}

impl SearchPredicate {
    #[must_use]
    pub fn matches(&self, place: &PlaceRecord) -> bool {
        match self {
            SearchPredicate::WithinRadius { origin, radius_km } => {
                distance_km(*origin, place.coordinate) <= *radius_km
            }
            SearchPredicate::KeywordMatch { keyword } => {
                let k = keyword.as_str();
                place.country_name.contains(k)
                    || place.city_name.contains(k)
                    || place.district_name.contains(k)
                    || place.name.contains(k)
            }
        }
    }
}

/// How matching places are ordered. Every variant ends with `id DESC`, so
/// the order is total.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderSpec {
    /// Ascending distance from `origin`.
    Nearest { origin: Coordinate },
    /// Ascending relevance tiers (name, country, city, district), then
    /// ascending distance when `origin` is present.
    Relevance {
        keyword: String,
        origin: Option<Coordinate>,
    },
}

impl OrderSpec {
    /// Compute the sort key for one place.
    #[must_use]
    pub fn rank_key(&self, place: &PlaceRecord) -> RankKey {
        match self {
            OrderSpec::Nearest { origin } => RankKey {
                relevance: None,
                distance_km: Some(distance_km(*origin, place.coordinate)),
                id: place.id,
            },
            OrderSpec::Relevance { keyword, origin } => RankKey {
                relevance: Some(RelevanceKey::score(place, keyword)),
                distance_km: origin.map(|o| distance_km(o, place.coordinate)),
                id: place.id,
            },
        }
    }

    /// The reference point distances are measured from, if any.
    #[must_use]
    pub fn origin(&self) -> Option<Coordinate> {
        match self {
            OrderSpec::Nearest { origin } => Some(*origin),
            OrderSpec::Relevance { origin, .. } => *origin,
        }
    }
}

/// Composite sort key: relevance tiers, then distance, then id descending.
///
/// Keys built from the same [`OrderSpec`] always carry the same set of
/// components, so comparing `Some` against `None` never decides an order in
/// practice.
#[derive(Debug, Clone, Copy)]
pub struct RankKey {
    pub relevance: Option<RelevanceKey>,
    pub distance_km: Option<f64>,
    pub id: i64,
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.relevance
            .cmp(&other.relevance)
            .then_with(|| match (self.distance_km, other.distance_km) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (a, b) => a.is_some().cmp(&b.is_some()),
            })
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

/// A predicate and the matching order, built together from one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub predicate: SearchPredicate,
    pub order: OrderSpec,
}

impl SearchQuery {
    #[must_use]
    pub fn nearby(origin: Coordinate, radius_km: f64) -> Self {
        Self {
            predicate: SearchPredicate::WithinRadius { origin, radius_km },
            order: OrderSpec::Nearest { origin },
        }
    }

    #[must_use]
    pub fn keyword(keyword: &str, origin: Option<Coordinate>) -> Self {
        Self {
            predicate: SearchPredicate::KeywordMatch {
                keyword: keyword.to_string(),
            },
            order: OrderSpec::Relevance {
                keyword: keyword.to_string(),
                origin,
            },
        }
    }
}
