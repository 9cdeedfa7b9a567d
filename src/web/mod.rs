// src/web/mod.rs

pub mod page;

use std::convert::Infallible;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info};
use warp::http::StatusCode;
use warp::{reject::Rejection, reply::Reply, Filter};

use crate::tables;

const CACHE_CONTROL: &str = "cache-control";
const NO_STORE: &str = "no-store, max-age=0";

/// Source of the reference instant for each request.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub type SharedClock = Arc<dyn Clock>;

/// `GET /`, `GET /api/sports-tables` and `GET /health`.
pub fn routes(
    clock: SharedClock,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(health_check);

    let api = warp::path!("api" / "sports-tables")
        .and(warp::get())
        .and(with_clock(clock.clone()))
        .and_then(sports_tables);

    let index = warp::path::end()
        .and(warp::get())
        .and(with_clock(clock))
        .and_then(index_page);

    health.or(api).or(index).with(warp::trace::request())
}

fn with_clock(
    clock: SharedClock,
) -> impl Filter<Extract = (SharedClock,), Error = Infallible> + Clone {
    warp::any().map(move || clock.clone())
}

fn no_store(reply: impl Reply) -> impl Reply {
    warp::reply::with_header(reply, CACHE_CONTROL, NO_STORE)
}

async fn health_check() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "sportsboard"
    })))
}

async fn sports_tables(clock: SharedClock) -> Result<impl Reply, Rejection> {
    let payload = tables::generate(clock.now());
    info!(
        start = %payload.window.start,
        end = %payload.window.end,
        rows = payload.row_count(),
        "serving sports tables"
    );
    Ok(no_store(warp::reply::json(&payload)))
}

async fn index_page(clock: SharedClock) -> Result<warp::reply::Response, Rejection> {
    let payload = tables::generate(clock.now());
    match page::render_index(&payload) {
        Ok(html) => Ok(no_store(warp::reply::html(html)).into_response()),
        Err(e) => {
            error!("index page failed: {:#}", e);
            Ok(warp::reply::with_status(
                "failed to render page",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response())
        }
    }
}
