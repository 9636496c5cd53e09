use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const API_PREFIX: &str = "/api/v1";

/// Minimum seconds between two uncached health reports.
pub const HEALTH_CACHE_SECS: i64 = 5;
