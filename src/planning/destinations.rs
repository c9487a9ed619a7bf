use crate::models::Destination;

use super::distinct;

/// Region facets in the order they first appear.
pub fn regions(destinations: &[Destination]) -> Vec<String> {
    distinct(destinations.iter().map(|d| d.region.as_str()))
}

/// Destinations in the given region whose name or description contains
/// `query`, case-insensitively. A blank query matches everything.
pub fn filter_destinations<'a>(
    destinations: &'a [Destination],
    region: Option<&str>,
    query: Option<&str>,
) -> Vec<&'a Destination> {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    destinations
        .iter()
        .filter(|d| region.is_none_or(|r| d.region == r))
        .filter(|d| match &needle {
            Some(needle) => {
                d.name.to_lowercase().contains(needle)
                    || d.description.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect()
}
