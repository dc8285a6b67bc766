use actix_web::{HttpResponse, Responder};
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, TextEncoder};

/// Serialise all registered metrics in Prometheus text format.
pub async fn metrics_handler() -> impl Responder {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&prometheus::gather(), &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}

/// Force lazy evaluation from main() so every counter shows up in
/// /metrics before its first increment.
pub fn init_metrics() {
    let _ = &*TOKEN_REQUESTS_TOTAL;
    let _ = &*TOKEN_FAILURES_TOTAL;
    let _ = &*RAW_SQL_LOOKUPS_TOTAL;
}

/// Create and register a counter, falling back to an unregistered dummy
/// so a registry collision cannot panic inside a Lazy initializer.
fn register_counter(name: &str, help: &str) -> IntCounter {
    IntCounter::new(name, help)
        .and_then(|c| {
            prometheus::default_registry().register(Box::new(c.clone()))?;
            Ok(c)
        })
        .unwrap_or_else(|e| {
            tracing::error!("failed to register {} counter: {}", name, e);
            IntCounter::new(format!("dummy_{}", name), "dummy").expect("dummy counter")
        })
}

/// Incremented for every POST /auth/token attempt
static TOKEN_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "token_requests_total",
        "Total number of access token requests",
    )
});

/// Incremented when token issuance fails (unknown user or wrong password)
static TOKEN_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "token_failures_total",
        "Total number of failed access token requests",
    )
});

/// Incremented for every lookup served by the interpolated-SQL endpoint
static RAW_SQL_LOOKUPS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "raw_sql_lookups_total",
        "Total number of lookups served by the unsafe interpolated-SQL endpoint",
    )
});

#[inline]
pub fn inc_token_requests() {
    TOKEN_REQUESTS_TOTAL.inc();
}

#[inline]
pub fn inc_token_failures() {
    TOKEN_FAILURES_TOTAL.inc();
}

#[inline]
pub fn inc_raw_sql_lookups() {
    RAW_SQL_LOOKUPS_TOTAL.inc();
}
