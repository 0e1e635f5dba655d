use std::cmp::Ordering;

use model::{Entity, SortValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Orders records by one column. `Vec::sort_by` is stable, so records with
/// equal keys keep their relative input order. Records with no value under
/// the column sort last, for either direction.
pub fn sort<T: Entity>(records: &mut [T], column: &str, direction: Direction) {
    records.sort_by(|a, b| compare(a.sort_value(column), b.sort_value(column), direction));
}

fn compare(a: Option<SortValue>, b: Option<SortValue>, direction: Direction) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ordering = a.compare(&b);
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
