//! Wire types for the planets API
//!
//! Fields are kept as the opaque display strings the API returns. Anything the
//! API sends beyond these fields is ignored.

use serde::{Deserialize, Serialize};

/// Population value the API uses when it has no data
pub const UNKNOWN_POPULATION: &str = "unknown";

/// A single planet record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Planet {
    pub name: String,
    pub climate: String,
    pub population: String,
    pub terrain: String,
    /// Resident URLs in API order
    pub residents: Vec<String>,
}

impl Planet {
    /// Whether the population is anything other than the "unknown" sentinel.
    ///
    /// Used to decide if residents can be revealed; it does not look at
    /// `residents` itself.
    pub fn population_known(&self) -> bool {
        self.population != UNKNOWN_POPULATION
    }

    /// Population as shown to the user
    pub fn population_label(&self) -> &str {
        if self.population_known() {
            &self.population
        } else {
            "Unknown"
        }
    }
}

/// One page of the planets listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanetPage {
    #[serde(default)]
    pub results: Vec<Planet>,
    /// URL of the following page; `None` on the last page
    #[serde(default)]
    pub next: Option<String>,
}

/// A resident of a planet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resident {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub gender: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_decodes_api_shape() {
        let body = r#"{
            "count": 60,
            "next": "https://swapi.dev/api/planets/?page=2&format=json",
            "previous": null,
            "results": [
                {
                    "name": "Tatooine",
                    "rotation_period": "23",
                    "climate": "arid",
                    "terrain": "desert",
                    "population": "200000",
                    "residents": [
                        "https://swapi.dev/api/people/1/",
                        "https://swapi.dev/api/people/2/"
                    ]
                }
            ]
        }"#;

        let page: PlanetPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Tatooine");
        assert_eq!(page.results[0].residents.len(), 2);
        assert_eq!(
            page.next.as_deref(),
            Some("https://swapi.dev/api/planets/?page=2&format=json")
        );
    }

    #[test]
    fn test_null_and_missing_next() {
        let last: PlanetPage = serde_json::from_str(r#"{"results": [], "next": null}"#).unwrap();
        assert_eq!(last.next, None);

        let bare: PlanetPage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(bare.next, None);
    }

    #[test]
    fn test_missing_planet_fields_default() {
        let planet: Planet = serde_json::from_str(r#"{"name": "Hoth"}"#).unwrap();
        assert_eq!(planet.name, "Hoth");
        assert!(planet.residents.is_empty());
        assert_eq!(planet.climate, "");
    }

    #[test]
    fn test_population_sentinel() {
        let known = Planet {
            population: "1000".to_string(),
            ..Default::default()
        };
        let unknown = Planet {
            population: UNKNOWN_POPULATION.to_string(),
            ..Default::default()
        };

        assert!(known.population_known());
        assert_eq!(known.population_label(), "1000");
        assert!(!unknown.population_known());
        assert_eq!(unknown.population_label(), "Unknown");
    }

    #[test]
    fn test_population_known_ignores_residents() {
        let planet = Planet {
            population: "0".to_string(),
            residents: Vec::new(),
            ..Default::default()
        };
        assert!(planet.population_known());
    }

    #[test]
    fn test_resident_decodes() {
        let resident: Resident = serde_json::from_str(
            r#"{"name": "Luke Skywalker", "height": "172", "mass": "77", "gender": "male", "films": []}"#,
        )
        .unwrap();
        assert_eq!(resident.name, "Luke Skywalker");
        assert_eq!(resident.mass, "77");
    }
}
