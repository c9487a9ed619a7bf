//! Views derived from store contents.
//!
//! Every function here is pure: it takes explicit snapshots and recomputes
//! from scratch, so callers can hand it whatever the store currently holds.

pub mod budget;
pub mod currency;
pub mod destinations;
pub mod packing;
pub mod phrases;
pub mod timeline;

/// Distinct values in first-encounter order.
pub(crate) fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// `round(part / whole * 100)`, or 0 when `whole` is zero or not finite.
pub(crate) fn percent(part: f64, whole: f64) -> i64 {
    if whole == 0.0 || !whole.is_finite() {
        return 0;
    }
    (part / whole * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_degenerate_whole_is_zero() {
        assert_eq!(percent(3.0, 10.0), 30);
        assert_eq!(percent(1.0, 0.0), 0);
        assert_eq!(percent(f64::INFINITY, f64::INFINITY), 0);
    }
}
