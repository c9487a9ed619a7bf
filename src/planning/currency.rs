use crate::models::Currency;

/// Parses user-entered amount text. Blank, malformed and non-finite input
/// all yield `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn find_currency<'a>(currencies: &'a [Currency], code: &str) -> Option<&'a Currency> {
    currencies.iter().find(|c| c.code == code)
}

/// Converts through the dollar: `amount / rate[from] * rate[to]`.
///
/// Returns `None` if either code is unknown or the result overflows. The
/// result is unrounded; use [`format_amount`] for display.
pub fn convert(amount: f64, from: &str, to: &str, currencies: &[Currency]) -> Option<f64> {
    let from_rate = find_currency(currencies, from)?.rate;
    let to_rate = find_currency(currencies, to)?.rate;
    Some(amount / from_rate * to_rate).filter(|value| value.is_finite())
}

pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// The converter's inputs. The result is recomputed from these on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: String,
    pub from: String,
    pub to: String,
}

impl Default for Conversion {
    fn default() -> Self {
        Self {
            amount: "100".to_string(),
            from: "USD".to_string(),
            to: "EUR".to_string(),
        }
    }
}

impl Conversion {
    pub fn swapped(&self) -> Self {
        Self {
            amount: self.amount.clone(),
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }

    pub fn result(&self, currencies: &[Currency]) -> Option<f64> {
        let amount = parse_amount(&self.amount)?;
        convert(amount, &self.from, &self.to, currencies)
    }
}
