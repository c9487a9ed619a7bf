use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub region: String,
    pub emoji: String,
    pub image_url: String,
    pub description: String,
}

impl Record for Destination {
    fn id(&self) -> &str {
        &self.id
    }
}
