//! Command-line interface parsing for the flagcdn CLI
//!
//! This module handles parsing of CLI arguments using clap, including the
//! global cache flags and construction of the country code client from the
//! parsed arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cache::CacheManager;
use crate::data::CountryCodeClient;

/// flagcdn CLI - Country code lookups and flag image URLs
#[derive(Parser, Debug)]
#[command(name = "flagcdn")]
#[command(about = "Country code lookups and flag image URLs from flagcdn.com")]
#[command(version)]
pub struct Cli {
    /// Use a custom cache directory instead of the platform default
    #[arg(long, value_name = "DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Bypass the on-disk cache and always fetch from the upstream
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands supported by the CLI
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a two-letter country code is valid
    Check {
        /// The country code to check, e.g. "us"
        code: String,
    },
    /// Look up the country name for a code
    Name {
        /// The country code to look up, e.g. "ua"
        code: String,
    },
    /// Print the flag image URL for a code
    Url {
        /// The country code, e.g. "de"
        code: String,
        /// Flag image width in pixels
        #[arg(long, default_value_t = 16)]
        width: u32,
        /// Flag image height in pixels
        #[arg(long, default_value_t = 12)]
        height: u32,
    },
    /// List all known country codes and names
    List,
}

impl Cli {
    /// Builds the country code client described by the parsed flags
    ///
    /// `--no-cache` wins over `--cache-dir`; without either, the platform
    /// default cache directory is used.
    pub fn build_client(&self) -> CountryCodeClient {
        if self.no_cache {
            return CountryCodeClient::without_cache();
        }
        match &self.cache_dir {
            Some(dir) => CountryCodeClient::with_cache(CacheManager::with_dir(dir.clone())),
            None => CountryCodeClient::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["flagcdn", "check", "us"]);
        match cli.command {
            Command::Check { code } => assert_eq!(code, "us"),
            other => panic!("Expected Check, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_name() {
        let cli = Cli::parse_from(["flagcdn", "name", "UA"]);
        match cli.command {
            Command::Name { code } => assert_eq!(code, "UA"),
            other => panic!("Expected Name, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_url_defaults() {
        let cli = Cli::parse_from(["flagcdn", "url", "us"]);
        match cli.command {
            Command::Url { code, width, height } => {
                assert_eq!(code, "us");
                assert_eq!(width, 16);
                assert_eq!(height, 12);
            }
            other => panic!("Expected Url, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_url_with_size() {
        let cli = Cli::parse_from(["flagcdn", "url", "us", "--width", "32", "--height", "24"]);
        match cli.command {
            Command::Url { code, width, height } => {
                assert_eq!(code, "us");
                assert_eq!(width, 32);
                assert_eq!(height, 24);
            }
            other => panic!("Expected Url, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::parse_from(["flagcdn", "list"]);
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["flagcdn", "check", "us", "--no-cache"]);
        assert!(cli.no_cache);

        let cli = Cli::parse_from(["flagcdn", "list", "--cache-dir", "/tmp/flags"]);
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/flags")));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let result = Cli::try_parse_from(["flagcdn"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        let result = Cli::try_parse_from(["flagcdn", "frobnicate"]);
        assert!(result.is_err());
    }
}
