use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub description: String,
    pub location: String,
    pub date: String,
}

impl Record for GalleryImage {
    fn id(&self) -> &str {
        &self.id
    }
}
