//! Shared building blocks for lookups.
//!
//! This module provides the request filters sent to describe APIs and the
//! CIDR comparison used when scanning routes and entries.

/// CIDR block canonicalization and comparison.
pub mod cidr;

/// Name/values filters for describe requests.
pub mod filter;

pub(crate) fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}
