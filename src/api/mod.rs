pub mod feed_client;
pub mod rates;

use std::sync::Arc;

use axum::Router;
use chrono_tz::Tz;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use feed_client::FeedClientTrait;

/// Shared, immutable per-process state. Each request builds everything else
/// fresh; nothing here is mutated after boot.
pub struct AppState {
    pub config: Config,
    pub feed_tz: Tz,
    pub feed_client: Arc<dyn FeedClientTrait>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(rates::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
