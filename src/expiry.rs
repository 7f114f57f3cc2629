// SPDX-License-Identifier: MIT

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{FeedError, FeedResult};

/// The feed's rates are good for the calendar day they were published.
const DAY_MS: i64 = 1000 * 60 * 60 * 24;

/// Cache window derived from the feed's rate date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    /// Expiry instant, epoch seconds: local midnight of the rate date plus
    /// one day.
    pub expires: i64,
    /// Remaining freshness relative to "now". May be zero or negative when
    /// the feed's date is already in the past; that simply tells downstream
    /// caches the payload is stale on arrival.
    pub max_age_secs: i64,
}

/// Compute the cache window for a `DD.MM.YYYY` rate date.
///
/// "Local midnight" is midnight in the configured feed timezone, not the
/// server's ambient zone, so the result is identical across deployments.
pub fn compute_expiry(rate_date: &str, now: DateTime<Utc>, feed_tz: Tz) -> FeedResult<Expiry> {
    let date = NaiveDate::parse_from_str(rate_date, "%d.%m.%Y").map_err(|_| {
        FeedError::MalformedRecord(format!("rate date {rate_date:?} is not DD.MM.YYYY"))
    })?;

    let local_midnight = date
        .and_time(NaiveTime::MIN)
        .and_local_timezone(feed_tz)
        .earliest()
        .ok_or_else(|| {
            FeedError::MalformedRecord(format!(
                "rate date {rate_date:?} has no midnight in {feed_tz}"
            ))
        })?;

    let expiry_ms = local_midnight.timestamp_millis() + DAY_MS;
    Ok(Expiry {
        expires: expiry_ms.div_euclid(1000),
        max_age_secs: (expiry_ms - now.timestamp_millis()).div_euclid(1000),
    })
}
