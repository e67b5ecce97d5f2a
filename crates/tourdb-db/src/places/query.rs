//! SQL rendering of search predicates and orderings.
//!
//! The count and page queries both call [`push_predicate`], so their `WHERE`
//! clauses are produced by the same code. The expressions mirror
//! `tourdb_search::distance_km` and `tourdb_search::MatchTier` exactly.

use sqlx::{Postgres, QueryBuilder};
use tourdb_core::Coordinate;
use tourdb_search::{OrderSpec, SearchPredicate, EARTH_RADIUS_KM};

const TIERED_COLUMNS: [&str; 4] = ["name", "country_name", "city_name", "district_name"];

/// Append ` WHERE <predicate>`.
pub(crate) fn push_predicate(qb: &mut QueryBuilder<'_, Postgres>, predicate: &SearchPredicate) {
    qb.push(" WHERE ");
    match predicate {
        SearchPredicate::WithinRadius { origin, radius_km } => {
            push_distance(qb, *origin);
            qb.push(" <= ").push_bind(*radius_km);
        }
        SearchPredicate::KeywordMatch { keyword } => {
            qb.push("(");
            for (i, column) in ["country_name", "city_name", "district_name", "name"]
                .iter()
                .enumerate()
            {
                if i > 0 {
                    qb.push(" OR ");
                }
                qb.push("strpos(")
                    .push(column)
                    .push(", ")
                    .push_bind(keyword.clone())
                    .push(") > 0");
            }
            qb.push(")");
        }
    }
}

/// Append ` ORDER BY <keys>, id DESC`.
pub(crate) fn push_order(qb: &mut QueryBuilder<'_, Postgres>, order: &OrderSpec) {
    qb.push(" ORDER BY ");
    match order {
        OrderSpec::Nearest { origin } => {
            push_distance(qb, *origin);
            qb.push(" ASC");
        }
        OrderSpec::Relevance { keyword, origin } => {
            for (i, column) in TIERED_COLUMNS.iter().enumerate() {
                if i > 0 {
                    qb.push(", ");
                }
                push_tier(qb, column, keyword);
                qb.push(" ASC");
            }
            if let Some(origin) = origin {
                qb.push(", ");
                push_distance(qb, *origin);
                qb.push(" ASC");
            }
        }
    }
    qb.push(", id DESC");
}

/// Great-circle distance in km from `origin` to the row's coordinate.
///
/// The exact-match branch keeps a place sitting on the origin at 0.0 even
/// when the trigonometry lands a hair away from 1.0.
fn push_distance(qb: &mut QueryBuilder<'_, Postgres>, origin: Coordinate) {
    qb.push("(CASE WHEN latitude = ")
        .push_bind(origin.latitude)
        .push(" AND longitude = ")
        .push_bind(origin.longitude)
        .push(" THEN 0.0::float8 ELSE ")
        .push(EARTH_RADIUS_KM)
        .push(" * acos(LEAST(1.0::float8, GREATEST(-1.0::float8, sin(radians(")
        .push_bind(origin.latitude)
        .push(")) * sin(radians(latitude)) + cos(radians(")
        .push_bind(origin.latitude)
        .push(")) * cos(radians(latitude)) * cos(radians(longitude - ")
        .push_bind(origin.longitude)
        .push("))))) END)");
}

/// Relevance tier of `column` against `keyword`: 0 exact, 1 prefix,
/// 2 contains, 4 none.
fn push_tier(qb: &mut QueryBuilder<'_, Postgres>, column: &str, keyword: &str) {
    qb.push("(CASE WHEN ")
        .push(column)
        .push(" = ")
        .push_bind(keyword.to_owned())
        .push(" THEN 0 WHEN left(")
        .push(column)
        .push(", char_length(")
        .push_bind(keyword.to_owned())
        .push(")) = ")
        .push_bind(keyword.to_owned())
        .push(" THEN 1 WHEN strpos(")
        .push(column)
        .push(", ")
        .push_bind(keyword.to_owned())
        .push(") > 0 THEN 2 ELSE 4 END)");
}
