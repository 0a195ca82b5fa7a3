//! Filter specification for restaurant queries.

use crate::Restaurant;
use serde::{Deserialize, Serialize};

/// An explicit query specification over the restaurant collection.
///
/// Each present field is a substring predicate on the corresponding
/// attribute; present predicates combine with logical AND, and an absent
/// predicate always passes. Construction does no I/O; evaluation happens in
/// the repository, either via [`matches`](Self::matches) or by translating
/// the same semantics to SQL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantFilter {
    /// Substring predicate on the restaurant name.
    pub name: Option<String>,
    /// Substring predicate on the restaurant type.
    pub kind: Option<String>,
    /// Substring predicate on the city.
    pub city: Option<String>,
}

impl RestaurantFilter {
    /// Creates a filter, skipping empty or blank fields.
    #[must_use]
    pub fn new(name: Option<String>, kind: Option<String>, city: Option<String>) -> Self {
        Self {
            name: normalize(name),
            kind: normalize(kind),
            city: normalize(city),
        }
    }

    /// Returns a filter matching the whole collection.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns true if no predicate is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none() && self.city.is_none()
    }

    /// Evaluates the filter against a single record.
    #[must_use]
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        contains(&restaurant.name, self.name.as_deref())
            && contains(&restaurant.kind, self.kind.as_deref())
            && contains(&restaurant.city, self.city.as_deref())
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn contains(attribute: &str, predicate: Option<&str>) -> bool {
    predicate.map_or(true, |p| attribute.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RestaurantId;

    fn restaurant(name: &str, kind: &str, city: &str) -> Restaurant {
        Restaurant {
            id: RestaurantId::new(1),
            name: name.to_string(),
            kind: kind.to_string(),
            address: "Rua Augusta 100".to_string(),
            city: city.to_string(),
            region: "Lisboa".to_string(),
            country: "Portugal".to_string(),
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = RestaurantFilter::all();
        assert!(filter.is_empty());
        assert!(filter.matches(&restaurant("Solar 31", "Marisqueira", "Lisboa")));
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        let filter = RestaurantFilter::new(
            Some(String::new()),
            Some("   ".to_string()),
            None,
        );
        assert!(filter.is_empty());
    }

    #[test]
    fn test_substring_match_on_single_field() {
        let filter = RestaurantFilter::new(Some("Solar".to_string()), None, None);
        assert!(filter.matches(&restaurant("Solar 31", "Marisqueira", "Lisboa")));
        assert!(!filter.matches(&restaurant("Ramiro", "Marisqueira", "Lisboa")));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let filter = RestaurantFilter::new(
            Some("Ramiro".to_string()),
            Some("Marisqueira".to_string()),
            Some("Lisboa".to_string()),
        );
        assert!(filter.matches(&restaurant("Cervejaria Ramiro", "Marisqueira", "Lisboa")));
        assert!(!filter.matches(&restaurant("Cervejaria Ramiro", "Marisqueira", "Porto")));
        assert!(!filter.matches(&restaurant("Cervejaria Ramiro", "Tasca", "Lisboa")));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let filter = RestaurantFilter::new(None, None, Some("lisboa".to_string()));
        assert!(!filter.matches(&restaurant("Solar 31", "Marisqueira", "Lisboa")));
    }

    #[test]
    fn test_partial_city_match() {
        let filter = RestaurantFilter::new(None, None, Some("Lis".to_string()));
        assert!(filter.matches(&restaurant("Solar 31", "Marisqueira", "Lisboa")));
    }
}
