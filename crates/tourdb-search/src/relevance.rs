//! Match-quality tiers for keyword ranking.

use tourdb_core::PlaceRecord;

/// How closely a text field matches a keyword. Lower sorts first.
///
/// Discriminants mirror the numeric tiers exposed in SQL ordering. Tier 3
/// is intentionally absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    Exact = 0,
    Prefix = 1,
    Contains = 2,
    NoMatch = 4,
}

impl MatchTier {
    /// Score `field` against `keyword`. Case-sensitive.
    #[must_use]
    pub fn of(field: &str, keyword: &str) -> Self {
        if field == keyword {
            MatchTier::Exact
        } else if field.starts_with(keyword) {
            MatchTier::Prefix
        } else if field.contains(keyword) {
            MatchTier::Contains
        } else {
            MatchTier::NoMatch
        }
    }
}

/// Per-field tiers in ranking priority order.
///
/// Field order matters: the derived `Ord` compares `name` first, then
/// country, city and district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelevanceKey {
    pub name: MatchTier,
    pub country: MatchTier,
    pub city: MatchTier,
    pub district: MatchTier,
}

impl RelevanceKey {
    #[must_use]
    pub fn score(place: &PlaceRecord, keyword: &str) -> Self {
        Self {
            name: MatchTier::of(&place.name, keyword),
            country: MatchTier::of(&place.country_name, keyword),
            city: MatchTier::of(&place.city_name, keyword),
            district: MatchTier::of(&place.district_name, keyword),
        }
    }
}

#[cfg(test)]
mod tests {
    use tourdb_core::Coordinate;

    use super::*;

    fn place(name: &str, country: &str, city: &str, district: &str) -> PlaceRecord {
        PlaceRecord {
            id: 1,
            name: name.to_string(),
            country_name: country.to_string(),
            city_name: city.to_string(),
            district_name: district.to_string(),
            address: String::new(),
            detail_address: None,
            coordinate: Coordinate::new(0.0, 0.0),
            bookmark_count: 0,
        }
    }

    #[test]
    fn tier_exact() {
        assert_eq!(MatchTier::of("Gangnam", "Gangnam"), MatchTier::Exact);
    }

    #[test]
    fn tier_prefix() {
        assert_eq!(
            MatchTier::of("Gangnam Station", "Gangnam"),
            MatchTier::Prefix
        );
    }

    #[test]
    fn tier_contains() {
        assert_eq!(
            MatchTier::of("South Gangnam", "Gangnam"),
            MatchTier::Contains
        );
    }

    #[test]
    fn tier_no_match() {
        assert_eq!(MatchTier::of("Jongno", "Gangnam"), MatchTier::NoMatch);
    }

    #[test]
    fn tier_is_case_sensitive() {
        assert_eq!(MatchTier::of("gangnam", "Gangnam"), MatchTier::NoMatch);
    }

    #[test]
    fn ranks_match_sql_tiers() {
        assert_eq!(MatchTier::Exact as i32, 0);
        assert_eq!(MatchTier::Prefix as i32, 1);
        assert_eq!(MatchTier::Contains as i32, 2);
        assert_eq!(MatchTier::NoMatch as i32, 4);
    }

    #[test]
    fn name_tier_dominates_district_tier() {
        let name_contains = RelevanceKey::score(&place("Cafe Gangnam", "", "", ""), "Gangnam");
        let district_exact = RelevanceKey::score(&place("Cafe", "", "", "Gangnam"), "Gangnam");
        assert!(name_contains < district_exact);
    }

    #[test]
    fn district_exact_beats_district_contains() {
        let exact = RelevanceKey::score(&place("Cafe", "Korea", "Seoul", "Gangnam"), "Gangnam");
        let contains = RelevanceKey::score(
            &place("Bistro", "Korea", "Seoul", "South Gangnam"),
            "Gangnam",
        );
        assert!(exact < contains);
    }
}
