//! Dialog form drafts. A draft is a local copy of a record (or an empty
//! shell for a create), mutated field by field while the dialog is open and
//! only turned into a wire record on explicit submit. Canonical state is
//! never touched before the submit is confirmed by the server.

use std::{error, fmt};

use utility::id::Id;

use crate::{Coordinates, Reservation, Station, User};

/// A draft that does not pass its form validation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidDraft(pub String);

impl fmt::Display for InvalidDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid form: {}", self.0)
    }
}

impl error::Error for InvalidDraft {}

#[derive(Debug, Clone, Default)]
pub struct StationDraft {
    pub id: Option<Id<Station>>,
    pub name: String,
    pub description: String,
    pub capacity: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StationDraft {
    /// Draft for editing an existing row, starting from a copy of it.
    pub fn edit(station: &Station) -> Self {
        let parsed = station.coordinates.parsed();
        Self {
            id: station.id,
            name: station.name.clone(),
            description: station.description.clone().unwrap_or_default(),
            capacity: Some(station.capacity),
            latitude: parsed.map(|(lat, _)| lat),
            longitude: parsed.map(|(_, lon)| lon),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.capacity.is_some()
    }

    /// The wire record. Coordinates are stringified here, matching the wire
    /// format of the station DTO.
    pub fn submit(&self) -> Result<Station, InvalidDraft> {
        if !self.is_valid() {
            return Err(InvalidDraft("station needs a name and a capacity".to_owned()));
        }
        Ok(Station {
            id: self.id,
            name: self.name.trim().to_owned(),
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.trim().to_owned())
            },
            capacity: self.capacity.unwrap_or(0),
            coordinates: Coordinates {
                latitude: self.latitude.map(|lat| lat.to_string()),
                longitude: self.longitude.map(|lon| lon.to_string()),
            },
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReservationDraft {
    pub user_id: Option<Id<User>>,
    pub station_id: Option<Id<Station>>,
    pub quantity: u32,
}

impl ReservationDraft {
    /// Draft opened from a map marker: the station half of the key is
    /// already fixed.
    pub fn for_station(station_id: Id<Station>) -> Self {
        Self {
            user_id: None,
            station_id: Some(station_id),
            quantity: 1,
        }
    }

    pub fn edit(reservation: &Reservation) -> Self {
        Self {
            user_id: reservation.user_key(),
            station_id: reservation.station_key(),
            quantity: reservation.quantity,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.user_id.is_some() && self.station_id.is_some() && self.quantity >= 1
    }

    pub fn submit(&self) -> Result<Reservation, InvalidDraft> {
        if self.user_id.is_none() || self.station_id.is_none() {
            return Err(InvalidDraft(
                "reservation needs both a user and a station".to_owned(),
            ));
        }
        if self.quantity < 1 {
            return Err(InvalidDraft("reservation quantity must be at least 1".to_owned()));
        }
        Ok(Reservation {
            user_id: self.user_id,
            station_id: self.station_id,
            user: None,
            station: None,
            quantity: self.quantity,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub id: Option<Id<User>>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl UserDraft {
    pub fn edit(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            // Never pre-filled; an empty password on edit means "keep".
            password: String::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        let has_password = self.id.is_some() || !self.password.is_empty();
        !self.username.trim().is_empty() && !self.email.trim().is_empty() && has_password
    }

    pub fn submit(&self) -> Result<User, InvalidDraft> {
        if !self.is_valid() {
            return Err(InvalidDraft(
                "user needs a username, an email and a password".to_owned(),
            ));
        }
        Ok(User {
            id: self.id,
            name: self.name.trim().to_owned(),
            surname: self.surname.trim().to_owned(),
            email: self.email.trim().to_owned(),
            username: self.username.trim().to_owned(),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_draft_requires_name_and_capacity() {
        let mut draft = StationDraft::default();
        assert!(draft.submit().is_err());
        draft.name = "Les Halles".to_owned();
        draft.capacity = Some(8);
        let station = draft.submit().unwrap();
        assert_eq!(station.name, "Les Halles");
        assert_eq!(station.description, None);
    }

    #[test]
    fn station_draft_stringifies_coordinates_on_submit() {
        let draft = StationDraft {
            name: "Les Halles".to_owned(),
            capacity: Some(8),
            latitude: Some(47.3947),
            longitude: Some(0.685),
            ..Default::default()
        };
        let station = draft.submit().unwrap();
        assert_eq!(station.coordinates.latitude.as_deref(), Some("47.3947"));
        assert_eq!(station.coordinates.longitude.as_deref(), Some("0.685"));
    }

    #[test]
    fn reservation_draft_rejects_missing_key_half() {
        let draft = ReservationDraft {
            user_id: Some(Id::new(1)),
            station_id: None,
            quantity: 2,
        };
        assert!(draft.submit().is_err());
    }

    #[test]
    fn editing_a_row_copies_it_instead_of_borrowing_it() {
        let station = Station {
            id: Some(Id::new(1)),
            name: "Old".to_owned(),
            description: None,
            capacity: 5,
            coordinates: Coordinates::default(),
        };
        let mut draft = StationDraft::edit(&station);
        draft.name = "New".to_owned();
        // The canonical record is untouched until the submit round-trips.
        assert_eq!(station.name, "Old");
        assert_eq!(draft.submit().unwrap().name, "New");
    }
}
