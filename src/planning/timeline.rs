use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::models::{Activity, TripDay};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Activities in display order: ascending by `time` as plain strings, equal
/// times keeping their stored order. The input is left as it was.
pub fn sorted_activities(activities: &[Activity]) -> Vec<&Activity> {
    let mut sorted: Vec<&Activity> = activities.iter().collect();
    sorted.sort_by(|a, b| a.time.cmp(&b.time));
    sorted
}

/// Whole days until the trip, rounded up. Negative once the trip has started.
pub fn days_until(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (start - now).num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) != 0)
}

/// Date for a newly added day: the day after the last planned day, or the
/// trip start date when nothing is planned yet.
pub fn next_day_date(days: &[TripDay], start: Option<DateTime<Utc>>) -> Option<NaiveDate> {
    match days.last() {
        Some(last) => last.parsed_date()?.checked_add_days(Days::new(1)),
        None => start.map(|s| s.date_naive()),
    }
}

/// `true` for a 24-hour `HH:MM` string, the only shape that sorts correctly.
pub fn is_time_of_day(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let (hours, minutes) = (&text[..2], &text[3..]);
    digits(hours)
        && digits(minutes)
        && hours.parse::<u8>().is_ok_and(|h| h < 24)
        && minutes.parse::<u8>().is_ok_and(|m| m < 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn activity(id: &str, time: &str) -> Activity {
        Activity {
            id: id.to_string(),
            time: time.to_string(),
            description: String::new(),
            location: String::new(),
        }
    }

    #[test]
    fn sorts_by_time_without_touching_storage() {
        let stored = vec![activity("a", "14:00"), activity("b", "09:00"), activity("c", "12:00")];
        let times: Vec<_> = sorted_activities(&stored).iter().map(|a| a.time.as_str()).collect();
        assert_eq!(times, vec!["09:00", "12:00", "14:00"]);
        let stored_times: Vec<_> = stored.iter().map(|a| a.time.as_str()).collect();
        assert_eq!(stored_times, vec!["14:00", "09:00", "12:00"]);
    }

    #[test]
    fn equal_times_keep_insertion_order() {
        let stored = vec![activity("a", "10:00"), activity("b", "08:00"), activity("c", "10:00")];
        let ids: Vec<_> = sorted_activities(&stored).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn countdown_rounds_up_partial_days() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(days_until(now + Duration::days(30), now), 30);
        assert_eq!(days_until(now + Duration::hours(1), now), 1);
        assert_eq!(days_until(now + Duration::days(2) + Duration::minutes(1), now), 3);
        assert_eq!(days_until(now, now), 0);
    }

    #[test]
    fn countdown_goes_negative_after_the_start() {
        let now = Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap();
        assert_eq!(days_until(now - Duration::days(3), now), -3);
        // ceil(-2.5) is -2
        assert_eq!(days_until(now - Duration::hours(60), now), -2);
        assert_eq!(days_until(now - Duration::hours(1), now), 0);
    }

    #[test]
    fn next_day_follows_the_last_day() {
        let days = vec![TripDay::new(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap())];
        assert_eq!(next_day_date(&days, None), NaiveDate::from_ymd_opt(2026, 3, 1));
    }

    #[test]
    fn next_day_falls_back_to_the_start_date() {
        let start = Utc.with_ymd_and_hms(2026, 5, 4, 8, 0, 0).unwrap();
        assert_eq!(next_day_date(&[], Some(start)), NaiveDate::from_ymd_opt(2026, 5, 4));
        assert_eq!(next_day_date(&[], None), None);
    }

    #[test]
    fn time_of_day_shape() {
        assert!(is_time_of_day("00:00"));
        assert!(is_time_of_day("23:59"));
        assert!(!is_time_of_day("24:00"));
        assert!(!is_time_of_day("9:00"));
        assert!(!is_time_of_day("09:60"));
        assert!(!is_time_of_day("09-00"));
        assert!(!is_time_of_day(""));
    }
}
