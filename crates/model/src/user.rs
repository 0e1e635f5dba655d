use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{Entity, SortValue};

/// A staff-managed account. `password` is write-only: it is sent on create
/// and update but the server never echoes it back, and it is kept out of the
/// searchable text.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<Id<User>>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub username: String,
    pub password: Option<String>,
}

impl HasId for User {
    type IdType = i64;
}

impl Entity for User {
    type Key = Id<User>;

    fn label() -> &'static str {
        "user"
    }

    fn key(&self) -> Option<Self::Key> {
        self.id
    }

    fn search_text(&self) -> String {
        [
            self.id.map(|id| id.to_string()),
            Some(self.name.clone()),
            Some(self.surname.clone()),
            Some(self.email.clone()),
            Some(self.username.clone()),
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
            "surname" => Some(SortValue::Text(self.surname.clone())),
            "email" => Some(SortValue::Text(self.email.clone())),
            "username" => Some(SortValue::Text(self.username.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_stays_out_of_search_text() {
        let user = User {
            id: Some(Id::new(3)),
            name: "Ada".to_owned(),
            surname: "Lovelace".to_owned(),
            email: "ada@example.org".to_owned(),
            username: "ada".to_owned(),
            password: Some("hunter2".to_owned()),
        };
        let text = user.search_text();
        assert!(text.contains("ada@example.org"));
        assert!(!text.contains("hunter2"));
    }
}
