use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{new_id, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl BudgetItem {
    pub fn new(description: String, amount: f64, category: String, date: NaiveDate) -> Self {
        Self {
            id: new_id(),
            description,
            amount,
            category,
            date: date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Record for BudgetItem {
    fn id(&self) -> &str {
        &self.id
    }
}
