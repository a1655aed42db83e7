//! Per-request generators.
//!
//! Every request gets its own generator seeded from the wall clock and a request
//! identifier, so two requests landing in the same clock tick still diverge.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Hash the current time together with `request` into a seed
pub fn seed<T: Hash + ?Sized>(request: &T) -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    seed_at(nanos, request)
}

pub(crate) fn seed_at<T: Hash + ?Sized>(nanos: u128, request: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    nanos.hash(&mut hasher);
    request.hash(&mut hasher);
    hasher.finish()
}

/// Fresh generator for a single request
pub fn generator<T: Hash + ?Sized>(request: &T) -> StdRng {
    StdRng::seed_from_u64(seed(request))
}
