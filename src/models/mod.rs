pub mod budget;
pub mod currency;
pub mod destination;
pub mod gallery;
pub mod packing;
pub mod phrase;
pub mod trip_day;

pub use budget::BudgetItem;
pub use currency::Currency;
pub use destination::Destination;
pub use gallery::GalleryImage;
pub use packing::PackingItem;
pub use phrase::{LanguagePhrase, TravelType};
pub use trip_day::{Activity, TripDay};

/// A record that lives in one of the store's collections and is addressed by id.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
