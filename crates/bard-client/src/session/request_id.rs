//! Per-session `_reqid` selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest request id handed out.
pub const MIN_REQUEST_ID: u32 = 1000;
/// Exclusive upper bound; the largest id is `MAX_REQUEST_ID - 1`.
pub const MAX_REQUEST_ID: u32 = 9999;

/// Source of the request id a session sends with every write.
pub trait RequestIdSource {
    fn next_request_id(&mut self) -> u32;
}

/// Uniform draw from `MIN_REQUEST_ID..MAX_REQUEST_ID`.
#[derive(Debug, Clone)]
pub struct RandomRequestIds<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomRequestIds<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRequestIds<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Default for RandomRequestIds<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RequestIdSource for RandomRequestIds<R> {
    fn next_request_id(&mut self) -> u32 {
        self.rng.gen_range(MIN_REQUEST_ID..MAX_REQUEST_ID)
    }
}

/// Always yields the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRequestId(pub u32);

impl RequestIdSource for FixedRequestId {
    fn next_request_id(&mut self) -> u32 {
        self.0
    }
}
