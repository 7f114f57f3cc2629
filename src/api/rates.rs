use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

use crate::aggregate::{aggregate_rates, CurrencyEntry};
use crate::api::AppState;
use crate::error::FeedError;
use crate::expiry::compute_expiry;
use crate::feed::decode_feed;
use crate::symbols::lookup_symbol;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesPayload {
    pub currency_date: String,
    pub expires: i64,
    pub list: IndexMap<String, CurrencyEntry>,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_rates))
        .route("/rates", get(get_rates))
}

/// Fetch the upstream feed, normalize it, and serve it with a cache window
/// matching the feed's validity. Every failure maps to the same opaque 500.
async fn get_rates(State(state): State<Arc<AppState>>) -> Result<Response, FeedError> {
    let body = state
        .feed_client
        .fetch_document(&state.config.feed_url)
        .await?;

    let records = decode_feed(&body)?;
    tracing::debug!(records = records.len(), "decoded feed");

    // The decoder guarantees at least one record; all records of a document
    // carry the same date.
    let currency_date = records
        .first()
        .map(|record| record.rate_date.clone())
        .ok_or_else(|| FeedError::FeedUnavailable("feed contains no rate elements".to_string()))?;

    let list = aggregate_rates(records, lookup_symbol)?;
    let expiry = compute_expiry(&currency_date, Utc::now(), state.feed_tz)?;

    let payload = RatesPayload {
        currency_date,
        expires: expiry.expires,
        list,
    };

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/json; charset=utf-8".to_string(),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                state.config.allowed_origin.clone(),
            ),
            (
                HeaderName::from_static("access-control-request-method"),
                "GET".to_string(),
            ),
            (
                header::CACHE_CONTROL,
                format!("s-maxage={}", expiry.max_age_secs),
            ),
        ],
        Json(payload),
    )
        .into_response())
}
