use crate::models::PackingItem;

use super::{distinct, percent};

#[derive(Debug, Clone, PartialEq)]
pub struct PackingProgress<'a> {
    /// Items in the selected category, or all items.
    pub filtered_items: Vec<&'a PackingItem>,
    /// Counts cover the whole list, not just the filtered view.
    pub packed_count: usize,
    pub total_count: usize,
    pub percent_packed: i64,
}

pub fn packing_progress<'a>(items: &'a [PackingItem], category: Option<&str>) -> PackingProgress<'a> {
    let filtered_items = items
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .collect();
    let packed_count = items.iter().filter(|item| item.packed).count();
    let total_count = items.len();

    PackingProgress {
        filtered_items,
        packed_count,
        total_count,
        percent_packed: percent(packed_count as f64, total_count as f64),
    }
}

pub fn packing_categories(items: &[PackingItem]) -> Vec<String> {
    distinct(items.iter().map(|item| item.category.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn with_packed(count: usize) -> Vec<PackingItem> {
        seed::packing_items()
            .into_iter()
            .enumerate()
            .map(|(i, mut item)| {
                item.packed = i < count;
                item
            })
            .collect()
    }

    #[test]
    fn three_of_ten_is_thirty_percent() {
        let items = with_packed(3);
        let progress = packing_progress(&items, None);
        assert_eq!(progress.packed_count, 3);
        assert_eq!(progress.total_count, 10);
        assert_eq!(progress.percent_packed, 30);
    }

    #[test]
    fn empty_list_is_zero_percent() {
        let progress = packing_progress(&[], None);
        assert_eq!(progress.total_count, 0);
        assert_eq!(progress.percent_packed, 0);
        assert!(progress.filtered_items.is_empty());
    }

    #[test]
    fn counts_ignore_the_category_filter() {
        let items = with_packed(3);
        let progress = packing_progress(&items, Some("Documents"));
        assert_eq!(progress.filtered_items.len(), 2);
        assert!(progress.filtered_items.iter().all(|i| i.category == "Documents"));
        assert_eq!(progress.total_count, 10);
        assert_eq!(progress.packed_count, 3);
    }

    #[test]
    fn percent_never_decreases_as_items_are_packed() {
        let mut last = 0;
        for count in 0..=10 {
            let items = with_packed(count);
            let pct = packing_progress(&items, None).percent_packed;
            assert!(pct >= last);
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        let mut items = with_packed(1);
        items.truncate(3);
        assert_eq!(packing_progress(&items, None).percent_packed, 33);
        let mut items = with_packed(2);
        items.truncate(3);
        assert_eq!(packing_progress(&items, None).percent_packed, 67);
    }

    #[test]
    fn categories_in_encounter_order() {
        assert_eq!(
            packing_categories(&seed::packing_items()),
            vec!["Documents", "Electronics", "Clothing", "Toiletries", "Health", "Comfort"]
        );
    }
}
