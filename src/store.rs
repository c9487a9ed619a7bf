//! The trip store: the one container of travel-plan state.
//!
//! Collections are only ever changed through the operations here. Readers get
//! shared slices, so nothing outside the store holds a copy that can diverge.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Activity, BudgetItem, Currency, Destination, GalleryImage, LanguagePhrase, PackingItem,
    Record, TravelType, TripDay,
};
use crate::seed;

/// An ordered collection of records addressed by id.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    fn update(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                patch(item);
                true
            }
            None => false,
        }
    }
}

/// Record types the store lets callers create, edit and delete.
pub trait Editable: Record + Sized {
    fn collection(store: &TripStore) -> &Collection<Self>;
    fn collection_mut(store: &mut TripStore) -> &mut Collection<Self>;
}

impl Editable for PackingItem {
    fn collection(store: &TripStore) -> &Collection<Self> {
        &store.packing_items
    }

    fn collection_mut(store: &mut TripStore) -> &mut Collection<Self> {
        &mut store.packing_items
    }
}

impl Editable for BudgetItem {
    fn collection(store: &TripStore) -> &Collection<Self> {
        &store.budget_items
    }

    fn collection_mut(store: &mut TripStore) -> &mut Collection<Self> {
        &mut store.budget_items
    }
}

impl Editable for TripDay {
    fn collection(store: &TripStore) -> &Collection<Self> {
        &store.trip_days
    }

    fn collection_mut(store: &mut TripStore) -> &mut Collection<Self> {
        &mut store.trip_days
    }
}

#[derive(Debug, Clone, Default)]
pub struct TripStore {
    destinations: Collection<Destination>,
    packing_items: Collection<PackingItem>,
    trip_days: Collection<TripDay>,
    budget_items: Collection<BudgetItem>,
    gallery_images: Collection<GalleryImage>,
    currencies: Vec<Currency>,
    phrasebook: HashMap<TravelType, Vec<LanguagePhrase>>,
    selected_destination: Option<Destination>,
    trip_start_date: Option<DateTime<Utc>>,
}

impl TripStore {
    /// A store loaded with the sample snapshot, with relative dates anchored on `today`.
    pub fn seeded(today: NaiveDate, trip_start_date: Option<DateTime<Utc>>) -> Self {
        Self {
            destinations: Collection::new(seed::destinations()),
            packing_items: Collection::new(seed::packing_items()),
            trip_days: Collection::new(seed::trip_days(today)),
            budget_items: Collection::new(seed::budget_items(today)),
            gallery_images: Collection::new(seed::gallery_images()),
            currencies: seed::currencies(),
            phrasebook: seed::phrasebook(),
            selected_destination: None,
            trip_start_date,
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        self.destinations.as_slice()
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.get(id)
    }

    pub fn packing_items(&self) -> &[PackingItem] {
        self.packing_items.as_slice()
    }

    pub fn trip_days(&self) -> &[TripDay] {
        self.trip_days.as_slice()
    }

    pub fn budget_items(&self) -> &[BudgetItem] {
        self.budget_items.as_slice()
    }

    pub fn gallery_images(&self) -> &[GalleryImage] {
        self.gallery_images.as_slice()
    }

    pub fn gallery_image(&self, id: &str) -> Option<&GalleryImage> {
        self.gallery_images.get(id)
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn phrases(&self, travel_type: TravelType) -> &[LanguagePhrase] {
        self.phrasebook
            .get(&travel_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn selected_destination(&self) -> Option<&Destination> {
        self.selected_destination.as_ref()
    }

    pub fn trip_start_date(&self) -> Option<DateTime<Utc>> {
        self.trip_start_date
    }

    pub fn get<T: Editable>(&self, id: &str) -> Option<&T> {
        T::collection(self).get(id)
    }

    pub fn replace_all<T: Editable>(&mut self, items: Vec<T>) {
        T::collection_mut(self).replace_all(items);
    }

    /// Appends `item`. The caller supplies a fresh id.
    pub fn add<T: Editable>(&mut self, item: T) {
        T::collection_mut(self).add(item);
    }

    /// Removes the record with `id`. Returns whether anything was removed.
    pub fn remove<T: Editable>(&mut self, id: &str) -> bool {
        T::collection_mut(self).remove(id)
    }

    /// Applies `patch` to the record with `id`, leaving every other record
    /// untouched. `patch` must not change the id.
    pub fn update<T: Editable>(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> bool {
        T::collection_mut(self).update(id, patch)
    }

    pub fn toggle_packed(&mut self, id: &str) -> bool {
        self.update::<PackingItem>(id, |item| item.packed = !item.packed)
    }

    /// Appends to the day's stored activities, whatever the activity's time.
    pub fn add_activity(&mut self, day_id: &str, activity: Activity) -> bool {
        self.update::<TripDay>(day_id, |day| day.activities.push(activity))
    }

    pub fn remove_activity(&mut self, day_id: &str, activity_id: &str) -> bool {
        let mut removed = false;
        self.update::<TripDay>(day_id, |day| {
            let before = day.activities.len();
            day.activities.retain(|a| a.id != activity_id);
            removed = day.activities.len() != before;
        });
        removed
    }

    pub fn set_day_notes(&mut self, day_id: &str, notes: String) -> bool {
        self.update::<TripDay>(day_id, |day| day.notes = notes)
    }

    pub fn set_selected_destination(&mut self, destination: Option<Destination>) {
        self.selected_destination = destination;
    }

    /// Selects the destination with `id`. Unknown ids leave the selection as it was.
    pub fn select_destination(&mut self, id: &str) -> bool {
        match self.destination(id).cloned() {
            Some(destination) => {
                self.selected_destination = Some(destination);
                true
            }
            None => false,
        }
    }

    pub fn set_trip_start_date(&mut self, date: Option<DateTime<Utc>>) {
        self.trip_start_date = date;
    }
}
