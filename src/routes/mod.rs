pub mod budget;
pub mod currency;
pub mod destinations;
pub mod export;
pub mod gallery;
pub mod packing;
pub mod phrases;
pub mod timeline;

use url::form_urlencoded;

use crate::store::TripStore;

/// The features reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Destinations,
    Packing,
    Timeline,
    Budget,
    Gallery,
    Currency,
    Phrases,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Destinations,
        Feature::Packing,
        Feature::Timeline,
        Feature::Budget,
        Feature::Gallery,
        Feature::Currency,
        Feature::Phrases,
    ];

    pub fn href(self) -> &'static str {
        match self {
            Feature::Destinations => "/destinations",
            Feature::Packing => "/packing",
            Feature::Timeline => "/timeline",
            Feature::Budget => "/budget",
            Feature::Gallery => "/gallery",
            Feature::Currency => "/currency",
            Feature::Phrases => "/phrases",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::Destinations => "Destinations",
            Feature::Packing => "Packing List",
            Feature::Timeline => "Trip Timeline",
            Feature::Budget => "Budget",
            Feature::Gallery => "Gallery",
            Feature::Currency => "Currency",
            Feature::Phrases => "Phrases",
        }
    }

    /// Heading shown above the feature's panel.
    pub fn title(self) -> &'static str {
        match self {
            Feature::Destinations => "Explore Destinations",
            Feature::Packing => "Packing Checklist",
            Feature::Timeline => "Trip Timeline",
            Feature::Budget => "Budget Tracker",
            Feature::Gallery => "Travel Gallery",
            Feature::Currency => "Currency Converter",
            Feature::Phrases => "Language Phrases",
        }
    }
}

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Shell data every page template renders: sidebar, header, asset hash.
pub struct PageContext {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    /// "🇯🇵 Tokyo" when a destination is selected.
    pub selected_destination: Option<String>,
    pub asset_hash: &'static str,
}

impl PageContext {
    pub fn new(active: Feature, store: &TripStore) -> Self {
        Self {
            title: active.title(),
            nav: Feature::ALL
                .into_iter()
                .map(|feature| NavLink {
                    href: feature.href(),
                    label: feature.label(),
                    active: feature == active,
                })
                .collect(),
            selected_destination: store
                .selected_destination()
                .map(|d| format!("{} {}", d.emoji, d.name)),
            asset_hash: crate::ASSET_HASH,
        }
    }
}

/// A facet button: a filter value plus the link that applies it.
pub struct FacetLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// `path` with `params` form-encoded as its query string. Empty values are dropped.
pub fn link_with_query(path: &str, params: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params.iter().filter(|(_, v)| !v.is_empty()) {
        query.append_pair(key, value);
        any = true;
    }
    if any {
        format!("{path}?{}", query.finish())
    } else {
        path.to_string()
    }
}

/// Treats a blank form or query value as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
