use crate::models::BudgetItem;

use super::{distinct, percent};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    /// Rounded independently per category; the column need not sum to 100.
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_budget: f64,
    /// Largest first. Equal amounts keep the order their category first appeared.
    pub category_totals: Vec<CategoryTotal>,
}

/// Per-category sums, largest first, with ties in first-encounter order.
fn grouped_totals<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Vec<(&'a str, f64)> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    for (category, amount) in entries {
        match totals.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total += amount,
            None => totals.push((category, amount)),
        }
    }
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
}

fn sum_of(totals: &[(&str, f64)]) -> f64 {
    totals.iter().map(|(_, amount)| amount).sum()
}

/// Category amounts add up to `total_budget` exactly: the total is summed
/// from the sorted category totals, not from the raw items.
pub fn budget_summary(items: &[BudgetItem]) -> BudgetSummary {
    let totals = grouped_totals(items.iter().map(|item| (item.category.as_str(), item.amount)));
    let total_budget = sum_of(&totals);

    let category_totals = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
            percentage: percent(amount, total_budget),
        })
        .collect();

    BudgetSummary {
        total_budget,
        category_totals,
    }
}

/// Whether adding `amount` under `category` keeps the budget total finite.
/// A finite total implies every category total is finite too.
pub fn total_stays_finite(items: &[BudgetItem], amount: f64, category: &str) -> bool {
    let entries = items
        .iter()
        .map(|item| (item.category.as_str(), item.amount))
        .chain([(category, amount)]);
    sum_of(&grouped_totals(entries)).is_finite()
}

pub fn budget_categories(items: &[BudgetItem]) -> Vec<String> {
    distinct(items.iter().map(|item| item.category.as_str()))
}
