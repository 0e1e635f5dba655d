//! The map screen: a geospatial projection of the station collection, kept
//! in lock-step with it. Every sync fully rebuilds the marker set from the
//! current snapshot; markers are never mutated independently.

use backend::DataSource;
use indexmap::IndexMap;
use model::{draft::ReservationDraft, Reservation, Station};
use tokio::sync::mpsc::UnboundedReceiver;
use utility::id::Id;

use crate::notify::{Observers, ScreenEvent, Severity};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub station_id: Id<Station>,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub description: Option<String>,
    pub capacity: u32,
}

impl Marker {
    /// The interaction bound to the marker: a reservation form with the
    /// station half of the key already fixed.
    pub fn reservation_draft(&self) -> ReservationDraft {
        ReservationDraft::for_station(self.station_id)
    }

    pub fn popup_text(&self) -> String {
        format!(
            "{}\n{}\nCapacity: {} spots\nLat: {:.6}\nLon: {:.6}",
            self.name,
            self.description.as_deref().unwrap_or("No description"),
            self.capacity,
            self.latitude,
            self.longitude,
        )
    }
}

/// Derives the marker set from a station snapshot. Stations without an id or
/// without parseable coordinates are skipped; that is expected data quality,
/// logged but never surfaced as an error.
pub fn sync(stations: &[Station]) -> IndexMap<Id<Station>, Marker> {
    let mut markers = IndexMap::new();
    for station in stations {
        let id = match station.id {
            Some(id) => id,
            None => {
                log::warn!("station '{}' has no id, no marker", station.name);
                continue;
            }
        };
        match station.coordinates.parsed() {
            Some((latitude, longitude)) => {
                markers.insert(
                    id,
                    Marker {
                        station_id: id,
                        latitude,
                        longitude,
                        name: station.name.clone(),
                        description: station.description.clone(),
                        capacity: station.capacity,
                    },
                );
            }
            None => {
                log::warn!("station '{}' has no usable coordinates, no marker", station.name);
            }
        }
    }
    log::debug!("{} markers built from {} stations", markers.len(), stations.len());
    markers
}

pub struct MapScreen<S, R>
where
    S: DataSource<Station>,
    R: DataSource<Reservation>,
{
    stations: S,
    reservations: R,
    markers: IndexMap<Id<Station>, Marker>,
    observers: Observers,
}

impl<S, R> MapScreen<S, R>
where
    S: DataSource<Station>,
    R: DataSource<Reservation>,
{
    pub fn new(stations: S, reservations: R) -> Self {
        Self {
            stations,
            reservations,
            markers: IndexMap::new(),
            observers: Observers::default(),
        }
    }

    pub fn subscribe(&mut self) -> UnboundedReceiver<ScreenEvent> {
        self.observers.subscribe()
    }

    pub fn markers(&self) -> &IndexMap<Id<Station>, Marker> {
        &self.markers
    }

    /// Fetches the station collection and rebuilds the marker set from it.
    /// On failure the previous markers stay up.
    pub async fn load(&mut self) -> bool {
        match self.stations.fetch_all().await {
            Ok(stations) => {
                self.markers = sync(&stations);
                self.observers.changed();
                true
            }
            Err(why) => {
                log::error!("loading stations for the map failed: {}", why);
                self.observers
                    .notice(Severity::Error, why.notice("Error while loading stations"));
                false
            }
        }
    }

    /// Submits a reservation opened from a marker and re-fetches the
    /// stations afterwards, so capacities reflect server truth. No capacity
    /// arithmetic happens client-side.
    pub async fn reserve(&mut self, draft: &ReservationDraft) -> bool {
        let record = match draft.submit() {
            Ok(record) => record,
            Err(why) => {
                self.observers.notice(Severity::Error, why.0);
                return false;
            }
        };
        match self.reservations.create(&record).await {
            Ok(_) => {
                self.observers
                    .notice(Severity::Success, "reservation created successfully".to_owned());
                self.load().await
            }
            Err(why) => {
                log::error!("reservation from marker failed: {}", why);
                self.observers.notice(
                    Severity::Error,
                    why.notice("Error while creating the reservation"),
                );
                false
            }
        }
    }
}
