/// One rendered table page plus the navigation state it was derived from.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Collection size after filtering, before slicing.
    pub total: usize,
    pub page_index: usize,
    pub page_size: usize,
}

/// Slices an ordered sequence into one page. An index past the end yields an
/// empty page; the controller deliberately does not clamp it (the caller
/// resets the index to 0 whenever the filter query changes).
pub fn paginate<T: Clone>(records: &[T], page_index: usize, page_size: usize) -> Page<T> {
    let total = records.len();
    let start = page_index.saturating_mul(page_size);
    let items = if start >= total {
        Vec::new()
    } else {
        records[start..(start + page_size).min(total)].to_vec()
    };
    Page {
        items,
        total,
        page_index,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_records_at_page_size_five() {
        let records: Vec<u32> = (0..7).collect();
        let first = paginate(&records, 0, 5);
        assert_eq!(first.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(first.total, 7);
        let second = paginate(&records, 1, 5);
        assert_eq!(second.items, vec![5, 6]);
        assert_eq!(second.total, 7);
        let third = paginate(&records, 2, 5);
        assert!(third.items.is_empty());
        assert_eq!(third.total, 7);
    }

    #[test]
    fn page_never_exceeds_page_size() {
        let records: Vec<u32> = (0..23).collect();
        for index in 0..6 {
            assert!(paginate(&records, index, 5).items.len() <= 5);
        }
    }

    #[test]
    fn empty_collection_yields_an_empty_page() {
        let page = paginate::<u32>(&[], 0, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
