//! REST implementation of the data source contract, against the
//! `/api/v1/{station,reservation,user}` endpoints.

use std::marker::PhantomData;

use async_trait::async_trait;
use model::{Entity, Reservation, Station, User};
use serde::{de::DeserializeOwned, Serialize};

use crate::{DataSource, RequestError, RequestResult};

/// Maps an entity kind onto its REST endpoint and key path.
pub trait Resource: Entity + Serialize + DeserializeOwned {
    const ENDPOINT: &'static str;

    /// The path segment(s) addressing one record, e.g. `4` for a station or
    /// `4/9` for a reservation key pair.
    fn key_path(key: &Self::Key) -> String;
}

impl Resource for Station {
    const ENDPOINT: &'static str = "station";

    fn key_path(key: &Self::Key) -> String {
        key.to_string()
    }
}

impl Resource for User {
    const ENDPOINT: &'static str = "user";

    fn key_path(key: &Self::Key) -> String {
        key.to_string()
    }
}

impl Resource for Reservation {
    const ENDPOINT: &'static str = "reservation";

    fn key_path((user_id, station_id): &Self::Key) -> String {
        format!("{}/{}", user_id, station_id)
    }
}

#[derive(Debug, Clone)]
pub struct RestDataSource<T> {
    base_url: String,
    client: reqwest::Client,
    _entity: PhantomData<T>,
}

impl<T: Resource> RestDataSource<T> {
    /// `base_url` is the api root, e.g. `http://localhost:8080/api/v1`.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
            _entity: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, T::ENDPOINT)
    }

    fn record_url(&self, key: &T::Key) -> String {
        format!("{}/{}/{}", self.base_url, T::ENDPOINT, T::key_path(key))
    }

    /// Turns a non-success response into the error taxonomy: 404 becomes
    /// `NotFound`, everything else `Transport` carrying the response body as
    /// the server message when there is one.
    async fn check(response: reqwest::Response) -> RequestResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RequestError::NotFound);
        }
        let body = response.text().await.unwrap_or_default();
        log::error!("{} request failed with {}: {}", T::label(), status, body);
        let message = body.trim();
        Err(RequestError::Transport(if message.is_empty() {
            None
        } else {
            Some(message.to_owned())
        }))
    }

    fn transport(why: reqwest::Error) -> RequestError {
        log::error!("{} request error: {}", T::label(), why);
        RequestError::Transport(None)
    }
}

#[async_trait]
impl<T: Resource> DataSource<T> for RestDataSource<T> {
    async fn fetch_all(&self) -> RequestResult<Vec<T>> {
        let url = self.collection_url();
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(Self::transport)?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|why| RequestError::other(why))
    }

    async fn fetch_one(&self, key: &T::Key) -> RequestResult<T> {
        let url = self.record_url(key);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(Self::transport)?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|why| RequestError::other(why))
    }

    async fn create(&self, record: &T) -> RequestResult<T> {
        let url = self.collection_url();
        log::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|why| RequestError::other(why))
    }

    async fn update(&self, key: &T::Key, record: &T) -> RequestResult<T> {
        let url = self.record_url(key);
        log::debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|why| RequestError::other(why))
    }

    async fn delete(&self, key: &T::Key) -> RequestResult<()> {
        let url = self.record_url(key);
        log::debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utility::id::Id;

    #[test]
    fn record_urls_use_the_key_path() {
        let stations: RestDataSource<Station> =
            RestDataSource::new("http://localhost:8080/api/v1/");
        assert_eq!(
            stations.record_url(&Id::new(7)),
            "http://localhost:8080/api/v1/station/7"
        );

        let reservations: RestDataSource<Reservation> =
            RestDataSource::new("http://localhost:8080/api/v1");
        assert_eq!(
            reservations.record_url(&(Id::new(4), Id::new(9))),
            "http://localhost:8080/api/v1/reservation/4/9"
        );
    }
}
