//! Sources for the `id` field of outgoing JSON-RPC requests.
//!
//! Electronero's own clients send the literal id `"0"` on every request,
//! so concurrent calls cannot be told apart by id. Over plain HTTP each
//! response travels on its own request, so that is harmless; callers that
//! want distinct ids on the wire can opt into [`RequestIds::sequential`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default id sent on every request.
pub const DEFAULT_REQUEST_ID: &str = "0";

/// Where a client takes the `id` of each request from.
///
/// Build one with [`RequestIds::fixed`], [`RequestIds::sequential`] or
/// [`RequestIds::sequential_from`]; the default is the fixed id `"0"`.
#[derive(Debug)]
pub struct RequestIds(Source);

#[derive(Debug)]
enum Source {
    Fixed(String),
    Sequential(AtomicU64),
}

impl RequestIds {
    /// The same id on every request.
    pub fn fixed(id: impl Into<String>) -> Self {
        Self(Source::Fixed(id.into()))
    }

    /// A counter seeded from the wall clock so ids from separate processes
    /// are unlikely to collide.
    pub fn sequential() -> Self {
        Self::sequential_from(initial_request_id())
    }

    /// A per-client counter starting at `start`, rendered as a decimal
    /// string.
    pub fn sequential_from(start: u64) -> Self {
        Self(Source::Sequential(AtomicU64::new(start)))
    }

    pub(crate) fn next(&self) -> String {
        match &self.0 {
            Source::Fixed(id) => id.clone(),
            Source::Sequential(counter) => counter.fetch_add(1, Ordering::Relaxed).to_string(),
        }
    }
}

impl Default for RequestIds {
    fn default() -> Self {
        Self::fixed(DEFAULT_REQUEST_ID)
    }
}

fn initial_request_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| u64::try_from(d.as_nanos()).ok())
        .unwrap_or(1)
}
