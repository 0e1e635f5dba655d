use std::{cmp::Ordering, fmt::Debug, hash::Hash};

pub mod draft;
pub mod reservation;
pub mod station;
pub mod user;

pub use reservation::Reservation;
pub use station::{Coordinates, Station};
pub use user::User;

/// A record kind that can be held in an entity store and projected into the
/// filtered/sorted/paginated table views.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The key records of this kind are addressed by. A plain id for stations
    /// and users, the `(user, station)` pair for reservations.
    type Key: Clone + PartialEq + Eq + Hash + Debug + Send + Sync;

    /// Human readable kind name, used in notices and log output.
    fn label() -> &'static str;

    /// The record's key, or `None` if the record is missing the fields the
    /// key is derived from (possible for reservations, whose key halves are
    /// all optional on the wire).
    fn key(&self) -> Option<Self::Key>;

    /// A single lower-cased text over the record's user-facing fields. The
    /// filter engine matches the query as a substring of this.
    fn search_text(&self) -> String;

    /// The record's value under a named table column, `None` if the record
    /// has no value there. Absent values sort last.
    fn sort_value(&self, column: &str) -> Option<SortValue>;
}

/// A per-column comparison key. Numeric columns compare numerically, text
/// columns case-insensitively by code point.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl SortValue {
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Self::Int(a), Self::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Self::Float(a), Self::Int(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (Self::Text(a), Self::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            // Mixed text/number columns should not happen; fall back to a
            // stable "equal" so the input order wins.
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_values_compare_numerically() {
        assert_eq!(SortValue::Int(2).compare(&SortValue::Int(10)), Ordering::Less);
        assert_eq!(
            SortValue::Float(2.5).compare(&SortValue::Int(2)),
            Ordering::Greater
        );
    }

    #[test]
    fn text_comparison_ignores_case() {
        assert_eq!(
            SortValue::Text("Bahnhof".into()).compare(&SortValue::Text("bahnhof".into())),
            Ordering::Equal
        );
        assert_eq!(
            SortValue::Text("atrium".into()).compare(&SortValue::Text("Zentrum".into())),
            Ordering::Less
        );
    }
}
