// ABOUTME: Content seeder for the corporate site backend
// ABOUTME: Writes built-in banners, settings, and placeholder subsidiaries into empty storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! Content seeder for a fresh deployment.
//!
//! Usage:
//! ```bash
//! # Seed whatever is missing
//! cargo run --bin corpsite-seed
//!
//! # Clear content tables first (uploads are kept)
//! cargo run --bin corpsite-seed -- --reset
//!
//! # Seed a specific database
//! cargo run --bin corpsite-seed -- --database-url sqlite:./data/staging.db
//! ```

use anyhow::Result;
use clap::Parser;
use corpsite_server::config::{DatabaseUrl, ServerConfig};
use corpsite_server::content::defaults::{default_banners, default_subsidiaries};
use corpsite_server::content::KNOWN_PAGES;
use corpsite_server::database::Database;
use corpsite_server::logging;
use corpsite_server::models::SettingKey;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "corpsite-seed",
    about = "Corpsite content seeder",
    long_about = "Populate empty storage with built-in banners, settings, and subsidiaries"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Clear content tables before seeding
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
    }

    info!("Seeding content into {}", config.database.url);
    let database = Database::connect(&config.database).await?;
    database.migrate().await?;

    if args.reset {
        let removed = database.clear_content().await?;
        info!("Reset: removed {removed} content rows");
    }

    let mut banner_count = 0;
    for page in KNOWN_PAGES {
        banner_count += database.seed_banners(page, default_banners(page)).await?.len();
    }
    info!("Banners: inserted {banner_count}");

    let pairs: Vec<(SettingKey, String)> = SettingKey::ALL
        .into_iter()
        .map(|key| (key, key.default_value().to_owned()))
        .collect();
    let settings = database.insert_missing_settings(&pairs).await?;
    info!("Settings: inserted {}", settings.len());

    let mut subsidiary_count = 0;
    for subsidiary in default_subsidiaries() {
        if database
            .get_subsidiary_by_path(&subsidiary.path)
            .await?
            .is_none()
        {
            database.create_subsidiary(subsidiary).await?;
            subsidiary_count += 1;
        }
    }
    info!("Subsidiaries: inserted {subsidiary_count}");

    database.close().await;
    info!("Seeding complete");
    Ok(())
}
