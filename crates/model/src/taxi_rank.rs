use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utility::{geo, id::HasId};

use crate::{ExampleData, WithDistance};

/// A taxi pickup location and its metadata.
///
/// `routes_served`, `hours` and `facilities` are semi-structured and stored
/// as JSON columns; `hours` maps a day-range label ("Mon-Fri") to a
/// time-range string ("6am-10pm"), `facilities` maps a facility name to its
/// availability. Both keep their insertion order.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiRank {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub district: Option<String>,
    pub routes_served: Vec<String>,
    pub hours: IndexMap<String, String>,
    pub phone: Option<String>,
    pub facilities: IndexMap<String, bool>,
}

impl HasId for TaxiRank {
    type IdType = i32;
}

impl TaxiRank {
    pub fn distance_to_km(&self, latitude: f64, longitude: f64) -> f64 {
        geo::haversine_distance_km(self.latitude, self.longitude, latitude, longitude)
    }

    pub fn with_distance_to(self, latitude: f64, longitude: f64) -> WithDistance<TaxiRank> {
        let distance_km = self.distance_to_km(latitude, longitude);
        WithDistance::new(distance_km, self)
    }
}

impl ExampleData for TaxiRank {
    fn example_data() -> Self {
        TaxiRank {
            name: "Central Rank".to_owned(),
            description: Some("Busy central taxi rank in Johannesburg".to_owned()),
            address: Some("Main Street 123".to_owned()),
            latitude: -26.2041,
            longitude: 28.0473,
            district: Some("Johannesburg".to_owned()),
            routes_served: vec![
                "Route1".to_owned(),
                "Route2".to_owned(),
                "Route3".to_owned(),
            ],
            hours: IndexMap::from([
                ("Mon-Fri".to_owned(), "6am-10pm".to_owned()),
                ("Sat-Sun".to_owned(), "7am-9pm".to_owned()),
            ]),
            phone: Some("0123456789".to_owned()),
            facilities: IndexMap::from([
                ("wifi".to_owned(), true),
                ("restrooms".to_owned(), true),
                ("parking".to_owned(), false),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_data_matches_seed_record() {
        let rank = TaxiRank::example_data();
        assert_eq!(rank.name, "Central Rank");
        assert_eq!(rank.district.as_deref(), Some("Johannesburg"));
        assert_eq!(rank.phone.as_deref(), Some("0123456789"));
        assert_eq!(rank.routes_served, ["Route1", "Route2", "Route3"]);
        assert_eq!(rank.hours.get("Mon-Fri").map(String::as_str), Some("6am-10pm"));
        assert_eq!(rank.hours.get("Sat-Sun").map(String::as_str), Some("7am-9pm"));
        assert_eq!(rank.facilities.get("wifi"), Some(&true));
        assert_eq!(rank.facilities.get("restrooms"), Some(&true));
        assert_eq!(rank.facilities.get("parking"), Some(&false));
    }

    #[test]
    fn structured_fields_serialize_as_json() {
        let rank = TaxiRank::example_data();
        let json = serde_json::to_value(&rank).unwrap();
        assert_eq!(json["routesServed"][0], "Route1");
        assert_eq!(json["hours"]["Mon-Fri"], "6am-10pm");
        assert_eq!(json["facilities"]["wifi"], true);
        assert_eq!(json["facilities"]["parking"], false);
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let rank = TaxiRank {
            description: None,
            phone: None,
            ..TaxiRank::example_data()
        };
        let json = serde_json::to_value(&rank).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn distance_to_own_location_is_zero() {
        let rank = TaxiRank::example_data();
        assert!(rank.distance_to_km(rank.latitude, rank.longitude) < 1e-9);
    }

    #[test]
    fn with_distance_annotates_without_changing_the_rank() {
        let rank = TaxiRank::example_data();
        // Pretoria, roughly 55 km from the rank
        let annotated = rank.clone().with_distance_to(-25.7479, 28.2293);
        assert!(annotated.distance_km > 50.0 && annotated.distance_km < 60.0);
        assert_eq!(annotated.content, rank);
    }
}
