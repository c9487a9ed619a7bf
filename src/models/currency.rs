use serde::{Deserialize, Serialize};

/// A currency with its exchange rate expressed against one US dollar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub rate: f64,
}
