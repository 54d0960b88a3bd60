//! flagcdn client library
//!
//! Country code lookups and flag image URL derivation backed by flagcdn.com,
//! with a disk cache for the code list. This module exposes the cache, CLI,
//! and data modules for the binary and integration tests.

pub mod cache;
pub mod cli;
pub mod data;
