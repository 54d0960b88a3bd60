//! Country code data types and upstream client
//!
//! This module contains the country code map type and the flagcdn.com client
//! used throughout the application.

pub mod countries;

pub use countries::{CountryCodeClient, CountryCodeError};

use std::collections::HashMap;

/// Map of two-letter lowercase ISO 3166-1 alpha-2 codes to country names
///
/// Produced wholly by a single upstream fetch; never partially merged. Keys
/// are lowercased at parse time, before storage or lookup.
pub type CountryCodeMap = HashMap<String, String>;
