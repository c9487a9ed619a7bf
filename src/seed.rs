//! The fixed sample snapshot every store starts from.
//!
//! Dates that the sample data expresses relative to "now" are computed from
//! the `today` argument so a seeded store is reproducible in tests.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::models::{
    Activity, BudgetItem, Currency, Destination, GalleryImage, LanguagePhrase, PackingItem,
    TravelType, TripDay,
};

/// Offset of the first seeded trip day from `today`.
pub const FIRST_DAY_OFFSET: u64 = 30;

pub fn destinations() -> Vec<Destination> {
    let rows = [
        ("1", "Paris", "Europe", "🇫🇷", "699466", "The City of Light featuring the iconic Eiffel Tower and world-class museums."),
        ("2", "Tokyo", "Asia", "🇯🇵", "2506923", "A bustling metropolis that perfectly blends ultramodern and traditional."),
        ("3", "New York", "North America", "🇺🇸", "802024", "The Big Apple with its iconic skyline and diverse neighborhoods."),
        ("4", "Sydney", "Oceania", "🇦🇺", "1878293", "Harbor city known for its iconic Opera House and beautiful beaches."),
        ("5", "Cape Town", "Africa", "🇿🇦", "259447", "Stunning coastal city with Table Mountain as its backdrop."),
        ("6", "Rio de Janeiro", "South America", "🇧🇷", "2868242", "Famous for its Carnival, beautiful beaches, and the Christ the Redeemer statue."),
    ];

    rows.into_iter()
        .map(|(id, name, region, emoji, photo, description)| Destination {
            id: id.to_string(),
            name: name.to_string(),
            region: region.to_string(),
            emoji: emoji.to_string(),
            image_url: pexels_url(photo),
            description: description.to_string(),
        })
        .collect()
}

pub fn packing_items() -> Vec<PackingItem> {
    let rows = [
        ("1", "Passport", "Documents", true),
        ("2", "Phone Charger", "Electronics", true),
        ("3", "T-shirts", "Clothing", true),
        ("4", "Toothbrush", "Toiletries", true),
        ("5", "Travel Insurance", "Documents", true),
        ("6", "Camera", "Electronics", false),
        ("7", "Swimwear", "Clothing", false),
        ("8", "Sunscreen", "Toiletries", true),
        ("9", "First Aid Kit", "Health", true),
        ("10", "Travel Pillow", "Comfort", false),
    ];

    rows.into_iter()
        .map(|(id, name, category, essential)| PackingItem {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            packed: false,
            essential,
        })
        .collect()
}

pub fn trip_days(today: NaiveDate) -> Vec<TripDay> {
    let first = today + Days::new(FIRST_DAY_OFFSET);
    let second = first + Days::new(1);

    vec![
        TripDay {
            id: "1".to_string(),
            date: iso(first),
            activities: vec![
                activity("1", "09:00", "Check-in at hotel", "Hotel"),
                activity("2", "12:00", "Lunch at local restaurant", "Downtown"),
                activity("3", "14:00", "City tour", "Various landmarks"),
            ],
            notes: "First day of our trip!".to_string(),
        },
        TripDay {
            id: "2".to_string(),
            date: iso(second),
            activities: vec![
                activity("1", "10:00", "Visit museum", "National Museum"),
                activity("2", "13:00", "Lunch", "Cafe near museum"),
                activity("3", "16:00", "Shopping", "Main shopping district"),
            ],
            notes: "Museum closes at 5pm!".to_string(),
        },
    ]
}

pub fn budget_items(today: NaiveDate) -> Vec<BudgetItem> {
    let rows = [
        ("1", "Flights", 1200.0, "Transportation"),
        ("2", "Hotel (7 nights)", 1400.0, "Accommodation"),
        ("3", "Food budget", 700.0, "Food"),
        ("4", "Local transportation", 200.0, "Transportation"),
        ("5", "Sightseeing & activities", 500.0, "Activities"),
        ("6", "Shopping", 300.0, "Shopping"),
    ];

    rows.into_iter()
        .map(|(id, description, amount, category)| BudgetItem {
            id: id.to_string(),
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date: iso(today),
        })
        .collect()
}

pub fn gallery_images() -> Vec<GalleryImage> {
    let rows = [
        ("1", "3155666", "Beautiful sunset at the beach", "Bali, Indonesia", "2023-07-15"),
        ("2", "3889843", "Mountain hiking adventure", "Swiss Alps", "2023-06-22"),
        ("3", "1851481", "Historic city center", "Prague, Czech Republic", "2023-05-10"),
        ("4", "3265460", "Traditional food market", "Bangkok, Thailand", "2023-04-05"),
        ("5", "3310691", "Safari adventure", "Serengeti, Tanzania", "2023-03-18"),
        ("6", "1078983", "Famous landmark", "Rome, Italy", "2023-02-14"),
    ];

    rows.into_iter()
        .map(|(id, photo, description, location, date)| GalleryImage {
            id: id.to_string(),
            url: pexels_url(photo),
            description: description.to_string(),
            location: location.to_string(),
            date: date.to_string(),
        })
        .collect()
}

pub fn currencies() -> Vec<Currency> {
    let rows = [
        ("USD", "US Dollar", "$", 1.0),
        ("EUR", "Euro", "€", 0.93),
        ("GBP", "British Pound", "£", 0.79),
        ("JPY", "Japanese Yen", "¥", 149.52),
        ("AUD", "Australian Dollar", "A$", 1.52),
        ("CAD", "Canadian Dollar", "C$", 1.37),
        ("CHF", "Swiss Franc", "Fr", 0.90),
        ("CNY", "Chinese Yuan", "¥", 7.25),
        ("INR", "Indian Rupee", "₹", 83.30),
        ("MXN", "Mexican Peso", "$", 17.04),
    ];

    rows.into_iter()
        .map(|(code, name, symbol, rate)| Currency {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            rate,
        })
        .collect()
}

pub fn phrasebook() -> HashMap<TravelType, Vec<LanguagePhrase>> {
    let rows: [(TravelType, [(&str, &str, &str); 3]); 5] = [
        (
            TravelType::Beach,
            [
                ("Where is the beach?", "Où est la plage?", "Navigation"),
                ("I need sunscreen", "J'ai besoin de crème solaire", "Shopping"),
                ("Can I rent a beach chair?", "Puis-je louer une chaise de plage?", "Services"),
            ],
        ),
        (
            TravelType::City,
            [
                ("Where is the museum?", "Où est le musée?", "Navigation"),
                ("How much is the ticket?", "Combien coûte le billet?", "Shopping"),
                ("Is there public transportation?", "Y a-t-il des transports en commun?", "Transportation"),
            ],
        ),
        (
            TravelType::Mountain,
            [
                ("Where are the hiking trails?", "Où sont les sentiers de randonnée?", "Navigation"),
                ("I need hiking boots", "J'ai besoin de chaussures de randonnée", "Shopping"),
                ("Is it safe to climb?", "Est-ce sécuritaire de grimper?", "Safety"),
            ],
        ),
        (
            TravelType::Cultural,
            [
                ("What time does the museum open?", "À quelle heure ouvre le musée?", "Navigation"),
                ("Do you speak English?", "Parlez-vous anglais?", "Communication"),
                ("This is delicious", "C'est délicieux", "Dining"),
            ],
        ),
        (
            TravelType::Adventure,
            [
                ("Where can I go rafting?", "Où puis-je faire du rafting?", "Activities"),
                ("I need safety equipment", "J'ai besoin d'équipement de sécurité", "Shopping"),
                ("Is there a guide available?", "Y a-t-il un guide disponible?", "Services"),
            ],
        ),
    ];

    rows.into_iter()
        .map(|(travel_type, phrases)| {
            let phrases = phrases
                .into_iter()
                .map(|(phrase, translation, category)| LanguagePhrase {
                    phrase: phrase.to_string(),
                    translation: translation.to_string(),
                    category: category.to_string(),
                })
                .collect();
            (travel_type, phrases)
        })
        .collect()
}

fn activity(id: &str, time: &str, description: &str, location: &str) -> Activity {
    Activity {
        id: id.to_string(),
        time: time.to_string(),
        description: description.to_string(),
        location: location.to_string(),
    }
}

fn pexels_url(photo: &str) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg")
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
