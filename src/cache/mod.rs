//! Cache module for storing upstream responses to disk
//!
//! This module provides a cache manager that persists upstream responses to
//! the filesystem with per-entry TTL values. Expired entries read as absent,
//! so consumers fall through to a fresh fetch rather than serving stale data.

mod manager;

pub use manager::CacheManager;
