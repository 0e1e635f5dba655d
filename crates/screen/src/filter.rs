use model::Entity;

/// Projects the collection into the subset whose synthesized searchable text
/// contains the query. Case-insensitive substring match, order preserving,
/// and the empty query is the identity.
pub fn filter<T: Entity>(records: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return records.to_vec();
    }
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.search_text().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Coordinates, Station};
    use utility::id::Id;

    fn stations() -> Vec<Station> {
        ["Gare Centrale", "Place Plumereau", "Les Halles"]
            .iter()
            .enumerate()
            .map(|(index, name)| Station {
                id: Some(Id::new(index as i64 + 1)),
                name: (*name).to_owned(),
                description: None,
                capacity: 10,
                coordinates: Coordinates::default(),
            })
            .collect()
    }

    #[test]
    fn empty_query_is_the_identity() {
        let records = stations();
        let filtered = filter(&records, "");
        assert_eq!(filtered.len(), records.len());
        let names: Vec<_> = filtered.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Gare Centrale", "Place Plumereau", "Les Halles"]);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let filtered = filter(&stations(), "plume");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Place Plumereau");
        assert!(filter(&stations(), "PLUMEREAU").len() == 1);
    }

    #[test]
    fn non_matching_records_are_excluded() {
        assert!(filter(&stations(), "velodrome").is_empty());
    }
}
