//! Admission control for the classification endpoint.
//!
//! A per-client sliding window: each client id may make at most `limit`
//! requests within any `window`-long interval.

use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::error::AppError;

/// Client id used when the peer address is not known (in-process calls).
const UNKNOWN_CLIENT: &str = "unknown";

/// A request ceiling such as `10000/hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: usize,
    pub window: Duration,
}

impl RateLimit {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self { limit, window }
    }
}

impl FromStr for RateLimit {
    type Err = AppError;

    /// Parses `<count>/<unit>`; unit is one of second, minute, hour, day
    /// (singular, plural, or the first letter).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| AppError::Config(format!("Invalid rate limit '{}': {}", s, why));

        let (count, unit) = s.trim().split_once('/').ok_or_else(|| invalid("expected <count>/<unit>"))?;
        let limit: usize = count
            .trim()
            .parse()
            .map_err(|_| invalid("count is not a positive integer"))?;
        if limit == 0 {
            return Err(invalid("count must be at least 1"));
        }

        let seconds = match unit.trim().to_ascii_lowercase().as_str() {
            "s" | "second" | "seconds" => 1,
            "m" | "minute" | "minutes" => 60,
            "h" | "hour" | "hours" => 3600,
            "d" | "day" | "days" => 86_400,
            _ => return Err(invalid("unknown unit")),
        };

        Ok(Self::new(limit, Duration::from_secs(seconds)))
    }
}

impl fmt::Display for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per {}s", self.limit, self.window.as_secs())
    }
}

/// Sliding-window limiter tracking request timestamps per client id.
///
/// Clients with no request inside the window are dropped by a sweep that
/// runs at most once per window.
pub struct RateLimiter {
    requests: HashMap<String, Vec<Instant>>,
    limit: usize,
    window: Duration,
    last_sweep: Instant,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        RateLimiter {
            requests: HashMap::new(),
            limit,
            window,
            last_sweep: Instant::now(),
        }
    }

    pub fn from_rate(rate: RateLimit) -> Self {
        Self::new(rate.limit, rate.window)
    }

    /// Records and admits the request if `id` is under its limit.
    /// Returns `false` (and records nothing) otherwise.
    pub fn check(&mut self, id: &str) -> bool {
        let now = Instant::now();
        self.sweep_expired(now);

        let client_requests = self.requests.entry(id.to_string()).or_default();

        // Drop timestamps that fell out of the window
        let window = self.window;
        client_requests.retain(|&timestamp| now.duration_since(timestamp) < window);

        if client_requests.len() < self.limit {
            client_requests.push(now);
            true
        } else {
            false
        }
    }

    fn sweep_expired(&mut self, now: Instant) {
        if now.duration_since(self.last_sweep) < self.window {
            return;
        }
        let window = self.window;
        // Timestamps are pushed in order, so the last one is the newest
        self.requests.retain(|_, timestamps| {
            timestamps
                .last()
                .is_some_and(|&newest| now.duration_since(newest) < window)
        });
        self.last_sweep = now;
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.requests.len()
    }
}

/// Shared limiter handed to the middleware.
#[derive(Clone)]
pub struct Admission {
    limiter: Arc<Mutex<RateLimiter>>,
    rate: RateLimit,
}

impl Admission {
    pub fn new(rate: RateLimit) -> Self {
        Self {
            limiter: Arc::new(Mutex::new(RateLimiter::from_rate(rate))),
            rate,
        }
    }

    pub fn admit(&self, id: &str) -> Result<(), AppError> {
        let mut limiter = self
            .limiter
            .lock()
            .map_err(|_| AppError::Internal("rate limiter lock poisoned".to_string()))?;
        if limiter.check(id) {
            Ok(())
        } else {
            Err(AppError::RateLimited(self.rate.to_string()))
        }
    }
}

/// Middleware rejecting callers over their limit before the handler runs.
pub async fn enforce_rate_limit(
    State(admission): State<Admission>,
    request: Request,
    next: Next,
) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());

    match admission.admit(&client) {
        Ok(()) => next.run(request).await,
        Err(e) => {
            warn!(client = %client, "Request rejected: {}", e);
            e.into_response()
        }
    }
}
