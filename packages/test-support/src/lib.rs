//! Test support utilities for generating unique test data
//!
//! This crate provides utilities to help generate unique test data using ULIDs
//! to ensure test isolation and avoid conflicts between test runs, plus a
//! shared logging initializer for tests.

pub mod logging;

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Arguments
/// * `prefix` - The prefix to use for the unique string
///
/// # Returns
/// A unique string in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let id1 = unique_str("user");
/// let id2 = unique_str("user");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique user id suitable for room fixtures
///
/// # Returns
/// A unique string in the format `user-{ulid}`
///
/// # Examples
/// ```
/// use test_support::unique_user_id;
///
/// let id1 = unique_user_id();
/// let id2 = unique_user_id();
/// assert_ne!(id1, id2);
/// ```
pub fn unique_user_id() -> String {
    unique_str("user")
}
