use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{new_id, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    /// 24-hour `HH:MM`.
    pub time: String,
    pub description: String,
    pub location: String,
}

impl Activity {
    pub const DEFAULT_LOCATION: &'static str = "Not specified";

    pub fn new(time: String, description: String, location: Option<String>) -> Self {
        let location = location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LOCATION.to_string());
        Self {
            id: new_id(),
            time,
            description,
            location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDay {
    pub id: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// Insertion order. Display order comes from `planning::timeline::sorted_activities`.
    pub activities: Vec<Activity>,
    pub notes: String,
}

impl TripDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: new_id(),
            date: date.format("%Y-%m-%d").to_string(),
            activities: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl Record for TripDay {
    fn id(&self) -> &str {
        &self.id
    }
}
