use std::{error::Error, fmt};

use async_trait::async_trait;
use model::{draft::InvalidDraft, Entity};

pub mod rest;

#[derive(Debug)]
pub enum RequestError {
    /// The mutation target does not exist (locally or on the server).
    NotFound,
    /// The payload was rejected before any network call was made.
    Validation(String),
    /// Network or server failure, with the server-supplied message if the
    /// response carried one.
    Transport(Option<String>),
    Other(Box<dyn Error + Send + Sync>),
}

impl RequestError {
    pub fn other<T: Error + Send + Sync + 'static>(why: T) -> Self {
        Self::Other(Box::new(why))
    }

    /// The user-visible notice text: the server/validation message when one
    /// exists, the given generic fallback otherwise.
    pub fn notice(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Transport(Some(message)) => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Validation(message) => write!(f, "validation failed: {}", message),
            Self::Transport(Some(message)) => write!(f, "request failed: {}", message),
            Self::Transport(None) => write!(f, "request failed"),
            Self::Other(why) => write!(f, "{}", why),
        }
    }
}

impl Error for RequestError {}

impl From<InvalidDraft> for RequestError {
    fn from(why: InvalidDraft) -> Self {
        Self::Validation(why.0)
    }
}

pub type RequestResult<O> = Result<O, RequestError>;

/// The uniform CRUD contract a screen consumes for one entity kind. The
/// server assigns identity on `create`; `update` and `delete` address the
/// record by its key (the composite pair for reservations).
#[async_trait]
pub trait DataSource<T: Entity>: Send + Sync {
    async fn fetch_all(&self) -> RequestResult<Vec<T>>;
    async fn fetch_one(&self, key: &T::Key) -> RequestResult<T>;
    async fn create(&self, record: &T) -> RequestResult<T>;
    async fn update(&self, key: &T::Key, record: &T) -> RequestResult<T>;
    async fn delete(&self, key: &T::Key) -> RequestResult<()>;
}
