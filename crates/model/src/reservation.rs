use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utility::id::Id;

use crate::{Entity, SortValue, Station, User};

/// A claim by a user on part of a station's capacity. There is no surrogate
/// id; a reservation is addressed by the `(user, station)` pair. The server
/// enriches list responses with the nested `user` and `station` records, and
/// either the flat id fields or the nested records may be missing on any
/// given row, so the key is derived with a fallback and can be absent.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub user_id: Option<Id<User>>,
    pub station_id: Option<Id<Station>>,
    pub user: Option<User>,
    pub station: Option<Station>,
    pub quantity: u32,
}

/// Composite reservation key.
pub type ReservationKey = (Id<User>, Id<Station>);

impl Reservation {
    pub fn user_key(&self) -> Option<Id<User>> {
        self.user_id.or(self.user.as_ref().and_then(|user| user.id))
    }

    pub fn station_key(&self) -> Option<Id<Station>> {
        self.station_id
            .or(self.station.as_ref().and_then(|station| station.id))
    }
}

impl Entity for Reservation {
    type Key = ReservationKey;

    fn label() -> &'static str {
        "reservation"
    }

    fn key(&self) -> Option<Self::Key> {
        self.user_key().zip(self.station_key())
    }

    fn search_text(&self) -> String {
        [
            self.station.as_ref().map(|station| station.name.clone()),
            self.user.as_ref().map(|user| user.email.clone()),
            Some(self.quantity.to_string()),
        ]
        .into_iter()
        .flatten()
        .join(" ")
        .to_lowercase()
    }

    fn sort_value(&self, column: &str) -> Option<SortValue> {
        match column {
            "station" => self
                .station
                .as_ref()
                .map(|station| SortValue::Text(station.name.clone())),
            "user" => self
                .user
                .as_ref()
                .map(|user| SortValue::Text(format!("{} {}", user.name, user.surname))),
            "quantity" => Some(SortValue::Int(self.quantity as i64)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinates;

    fn nested(user_id: i64, station_id: i64) -> Reservation {
        Reservation {
            user_id: None,
            station_id: None,
            user: Some(User {
                id: Some(Id::new(user_id)),
                name: "Jean".to_owned(),
                surname: "Petit".to_owned(),
                email: "jean@example.org".to_owned(),
                username: "jean".to_owned(),
                password: None,
            }),
            station: Some(Station {
                id: Some(Id::new(station_id)),
                name: "Place Plumereau".to_owned(),
                description: None,
                capacity: 20,
                coordinates: Coordinates::default(),
            }),
            quantity: 2,
        }
    }

    #[test]
    fn key_falls_back_to_nested_records() {
        let reservation = nested(4, 9);
        assert_eq!(reservation.key(), Some((Id::new(4), Id::new(9))));
    }

    #[test]
    fn key_is_absent_when_one_half_is_missing() {
        let mut reservation = nested(4, 9);
        reservation.station = None;
        assert_eq!(reservation.key(), None);
    }

    #[test]
    fn flat_ids_win_over_nested_records() {
        let mut reservation = nested(4, 9);
        reservation.user_id = Some(Id::new(40));
        assert_eq!(reservation.key(), Some((Id::new(40), Id::new(9))));
    }
}
