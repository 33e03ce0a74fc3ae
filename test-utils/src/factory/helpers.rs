//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique UDISE code that satisfies the six-digit minimum.
///
/// # Returns
/// - `String` - Seven digit code starting at `1000001`
pub fn next_udise_code() -> String {
    (1_000_000 + next_id()).to_string()
}
