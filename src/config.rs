use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TRIP_LEAD_DAYS: i64 = 30;
const MAX_TRIP_LEAD_DAYS: i64 = 36_500;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// How far after startup the sample trip begins. Negative puts it in the past.
    pub trip_lead_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            trip_lead_days: DEFAULT_TRIP_LEAD_DAYS,
        }
    }
}

impl Config {
    /// Reads `BIND_ADDR` and `TRIP_LEAD_DAYS`. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset variables take their defaults; unparsable ones are logged and
    /// also take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Invalid BIND_ADDR {raw:?}: {e}, using {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let trip_lead_days = match lookup("TRIP_LEAD_DAYS") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(days) if days.abs() <= MAX_TRIP_LEAD_DAYS => days,
                _ => {
                    tracing::warn!("Invalid TRIP_LEAD_DAYS {raw:?}, using {DEFAULT_TRIP_LEAD_DAYS}");
                    defaults.trip_lead_days
                }
            },
            None => defaults.trip_lead_days,
        };

        Self {
            bind_addr,
            trip_lead_days,
        }
    }
}
