use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagePhrase {
    pub phrase: String,
    pub translation: String,
    pub category: String,
}

/// The kind of trip a phrasebook page is tailored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Beach,
    City,
    Mountain,
    Cultural,
    Adventure,
}

impl TravelType {
    pub const ALL: [TravelType; 5] = [
        TravelType::Beach,
        TravelType::City,
        TravelType::Mountain,
        TravelType::Cultural,
        TravelType::Adventure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TravelType::Beach => "Beach Vacation",
            TravelType::City => "City Exploration",
            TravelType::Mountain => "Mountain Adventure",
            TravelType::Cultural => "Cultural Experience",
            TravelType::Adventure => "Adventure Trip",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TravelType::Beach => "🏖️",
            TravelType::City => "🏙️",
            TravelType::Mountain => "⛰️",
            TravelType::Cultural => "🏛️",
            TravelType::Adventure => "🧗",
        }
    }
}

impl std::fmt::Display for TravelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelType::Beach => write!(f, "beach"),
            TravelType::City => write!(f, "city"),
            TravelType::Mountain => write!(f, "mountain"),
            TravelType::Cultural => write!(f, "cultural"),
            TravelType::Adventure => write!(f, "adventure"),
        }
    }
}
