use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one request within a flow.
pub type RequestToken = u64;

/// A value tagged with the token of the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<T> {
    pub token: RequestToken,
    pub value: T,
}

/// Issues increasing tokens so that only the newest response of a flow is applied.
///
/// Overlapping requests may complete in any order; a response whose token is no
/// longer the latest issued is stale.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestToken {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest(&self) -> RequestToken {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token == self.latest()
    }
}
