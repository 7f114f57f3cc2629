// SPDX-License-Identifier: MIT

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{FeedError, FeedResult};
use crate::feed::RawRateRecord;
use crate::names::format_currency_name;

/// Aggregated output unit: one entry per distinct currency code, combining
/// all countries that use the currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyEntry {
    pub code: String,
    pub symbol: Option<String>,
    pub name: String,
    pub rate: f64,
    pub countries: Vec<String>,
}

/// Build the code-keyed entry map from decoded records.
///
/// Records are ordered by currency code first; that ordering becomes the
/// map's insertion order and therefore its serialization order. The first
/// record seen for a code establishes `name`, `symbol` and `rate`; later
/// records for the same code only extend `countries`.
pub fn aggregate_rates<F>(
    mut records: Vec<RawRateRecord>,
    lookup_symbol: F,
) -> FeedResult<IndexMap<String, CurrencyEntry>>
where
    F: Fn(&str) -> Option<&'static str>,
{
    records.sort_by(|a, b| compare_codes(&a.currency_code, &b.currency_code));

    let mut entries: IndexMap<String, CurrencyEntry> = IndexMap::new();
    for record in records {
        if let Some(entry) = entries.get_mut(&record.currency_code) {
            merge_country(entry, record.country);
        } else {
            let rate = parse_rate(&record.rate_value)?;
            entries.insert(
                record.currency_code.clone(),
                CurrencyEntry {
                    symbol: lookup_symbol(&record.currency_code).map(str::to_string),
                    code: record.currency_code,
                    name: format_currency_name(&record.description),
                    rate,
                    countries: vec![record.country],
                },
            );
        }
    }

    Ok(entries)
}

fn merge_country(entry: &mut CurrencyEntry, country: String) {
    if !entry.countries.contains(&country) {
        entry.countries.push(country);
        // Countries use plain ordinal order, unlike the code ordering above.
        entry.countries.sort();
    }
}

/// Case-folded comparison, raw code as tiebreak. Feed codes are ASCII
/// uppercase, for which this agrees with locale collation.
fn compare_codes(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The raw feed may write decimals with a comma separator.
fn parse_rate(text: &str) -> FeedResult<f64> {
    let rate = text
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| FeedError::MalformedRecord(format!("rate value {text:?} is not numeric")))?;
    if !rate.is_finite() || rate < 0.0 {
        return Err(FeedError::MalformedRecord(format!(
            "rate value {text:?} is out of range"
        )));
    }
    Ok(rate)
}
