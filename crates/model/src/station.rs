use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{Entity, SortValue};

/// A bike parking location. `id` is assigned by the server and absent on a
/// create payload. Coordinates travel as strings and may be missing or
/// unparseable; such stations stay in the table but never become markers.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: Option<Id<Station>>,
    pub name: String,
    pub description: Option<String>,
    pub capacity: u32,
    #[serde(default)]
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl Coordinates {
    /// Both coordinates parsed as floats, or `None` if either is missing or
    /// not a number.
    pub fn parsed(&self) -> Option<(f64, f64)> {
        let latitude = self.latitude.as_deref()?.trim().parse::<f64>().ok()?;
        let longitude = self.longitude.as_deref()?.trim().parse::<f64>().ok()?;
        Some((latitude, longitude))
    }
}

impl HasId for Station {
    type IdType = i64;
}

impl Entity for Station {
    type Key = Id<Station>;

    fn label() -> &'static str {
        "station"
    }

    fn key(&self) -> Option<Self::Key> {
        self.id
    }

    fn search_text(&self) -> String {
        [
            Some(self.name.clone()),
            self.description.clone(),
            self.id.map(|id| id.to_string()),
            Some(self.capacity.to_string()),
            self.coordinates.latitude.clone(),
            self.coordinates.longitude.clone(),
        ]
        .into_iter()
        .flatten()
        .join(" ")
        .to_lowercase()
    }

    fn sort_value(&self, column: &str) -> Option<SortValue> {
        match column {
            "id" => self.id.map(|id| SortValue::Int(id.raw())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "description" => self.description.clone().map(SortValue::Text),
            "capacity" => Some(SortValue::Int(self.capacity as i64)),
            "latitude" => self.coordinates.parsed().map(|(lat, _)| SortValue::Float(lat)),
            "longitude" => self.coordinates.parsed().map(|(_, lon)| SortValue::Float(lon)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, lat: Option<&str>, lon: Option<&str>) -> Station {
        Station {
            id: Some(Id::new(7)),
            name: name.to_owned(),
            description: Some("by the north entrance".to_owned()),
            capacity: 12,
            coordinates: Coordinates {
                latitude: lat.map(str::to_owned),
                longitude: lon.map(str::to_owned),
            },
        }
    }

    #[test]
    fn coordinates_parse_or_reject() {
        assert_eq!(
            station("a", Some("47.3947"), Some("0.6850")).coordinates.parsed(),
            Some((47.3947, 0.6850))
        );
        assert_eq!(station("a", None, Some("0.6850")).coordinates.parsed(), None);
        assert_eq!(
            station("a", Some("not a number"), Some("0.6850")).coordinates.parsed(),
            None
        );
    }

    #[test]
    fn search_text_covers_user_facing_fields() {
        let text = station("Gare Centrale", Some("47.39"), None).search_text();
        assert!(text.contains("gare centrale"));
        assert!(text.contains("north entrance"));
        assert!(text.contains("12"));
        assert!(text.contains("47.39"));
        assert!(text.contains('7'));
    }
}
