// SPDX-License-Identifier: MIT

//! Name-based category classification.
//!
//! An ordered table of (predicate, category) rules evaluated top to
//! bottom, first match wins. The order is load-bearing: "Parking du
//! Jardin" must classify as Parking because the parking rule precedes the
//! green-space rule. Matching is case-insensitive substring matching on
//! the place name.
//!
//! The cafeteria abbreviation "RU" ("restaurant universitaire") is matched
//! with a trailing space or tab only, so "RU Nord" hits but "péruvien"
//! does not; a leading boundary is deliberately not required, matching the
//! behavior the map has always had.

use crate::models::Category;

type Predicate = fn(&str) -> bool;

/// Rule table, highest priority first.
const RULES: [(Predicate, Category); 5] = [
    (is_restaurant, Category::Restaurant),
    (is_parking, Category::Parking),
    (is_green, Category::Green),
    (is_service, Category::Service),
    (is_building, Category::Building),
];

fn is_restaurant(name: &str) -> bool {
    name.contains("restaurant")
        || name.contains("cafet")
        || name.contains("ru ")
        || name.contains("ru\t")
        || name.contains("cantine")
}

fn is_parking(name: &str) -> bool {
    name.contains("parking") || name.contains("park")
}

fn is_green(name: &str) -> bool {
    name.contains("jardin") || name.contains("parc") || name.contains("vert")
}

fn is_service(name: &str) -> bool {
    name.contains("biblio")
        || name.contains("admin")
        || name.contains("scolarité")
        || name.contains("scolarite")
}

fn is_building(name: &str) -> bool {
    name.contains("bât")
        || name.contains("batiment")
        || name.contains("salle")
        || name.contains("amphi")
        || name.contains("hall")
}

/// Classify a place name. Pure and total; an empty or whitespace-only name
/// is `Default` without any rule evaluation.
pub fn classify(name: &str) -> Category {
    if name.trim().is_empty() {
        return Category::Default;
    }

    let lower = name.to_lowercase();
    RULES
        .iter()
        .find(|(predicate, _)| predicate(&lower))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_category() {
        assert_eq!(classify("Restaurant universitaire"), Category::Restaurant);
        assert_eq!(classify("La Cafet du campus"), Category::Restaurant);
        assert_eq!(classify("RU Nord"), Category::Restaurant);
        assert_eq!(classify("Parking P2"), Category::Parking);
        assert_eq!(classify("Jardin botanique"), Category::Green);
        assert_eq!(classify("Espace vert sud"), Category::Green);
        assert_eq!(classify("Bibliothèque universitaire"), Category::Service);
        assert_eq!(classify("Scolarité"), Category::Service);
        assert_eq!(classify("Bâtiment S"), Category::Building);
        assert_eq!(classify("Amphi bioclimatique"), Category::Building);
        assert_eq!(classify("Terrain de sport"), Category::Default);
    }

    #[test]
    fn test_classify_priority_order() {
        // Matches both the parking and green rules; parking is checked first.
        assert_eq!(classify("Parking du Jardin"), Category::Parking);
        // Matches both restaurant and building; restaurant is checked first.
        assert_eq!(classify("Cafet du Bâtiment A"), Category::Restaurant);
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify("PARKING VISITEURS"), Category::Parking);
        assert_eq!(classify("bâTIMENT t"), Category::Building);
    }

    #[test]
    fn test_classify_empty_and_whitespace() {
        assert_eq!(classify(""), Category::Default);
        assert_eq!(classify("   \t "), Category::Default);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify("Salle polyvalente"), Category::Building);
        }
    }

    #[test]
    fn test_classify_ru_boundary() {
        // Trailing boundary required...
        assert_eq!(classify("Prune"), Category::Default);
        assert_eq!(classify("RU\tCentral"), Category::Restaurant);
        // ...but no leading boundary, by long-standing behavior.
        assert_eq!(classify("couru vite"), Category::Restaurant);
    }
}
