//! flagcdn CLI - country code lookups and flag image URLs
//!
//! A thin front-end over the library: validates codes, resolves names, and
//! derives flag image URLs, caching the upstream code list on disk.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flagcdn::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Warnings only by default; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flagcdn=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = cli.build_client();

    match cli.command {
        Command::Check { code } => {
            if client.is_valid_code(&code).await {
                println!("{}: valid", code.to_lowercase());
                ExitCode::SUCCESS
            } else {
                println!("{}: unknown", code.to_lowercase());
                ExitCode::FAILURE
            }
        }
        Command::Name { code } => match client.country_name(&code).await {
            Some(name) => {
                println!("{name}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("unknown country code: {}", code.to_lowercase());
                ExitCode::FAILURE
            }
        },
        Command::Url { code, width, height } => {
            println!("{}", client.flag_url_sized(&code, width, height));
            ExitCode::SUCCESS
        }
        Command::List => {
            let codes = client.country_codes().await;
            if codes.is_empty() {
                eprintln!("no country codes available");
                return ExitCode::FAILURE;
            }
            let mut entries: Vec<_> = codes.into_iter().collect();
            entries.sort();
            for (code, name) in entries {
                println!("{code}  {name}");
            }
            ExitCode::SUCCESS
        }
    }
}
