// ABOUTME: Banner resolution for public pages with rotation padding and static fallbacks
// ABOUTME: Also seeds a known page's built-in banners when its stored list is empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::defaults::{default_banners, fallback_banners, is_known_page, KNOWN_PAGES};
use crate::database::Database;
use corpsite_core::models::Banner;
use tracing::{debug, info, warn};

/// Shape stored banners for the rotating display
///
/// - none: the page's built-in list (generic list for unknown pages)
/// - one: the banner plus its rotation clone
/// - two or more: unchanged
#[must_use]
pub fn fill_rotation(page: &str, mut banners: Vec<Banner>) -> Vec<Banner> {
    if banners.is_empty() {
        return fallback_banners(page);
    }
    if let [only] = banners.as_slice() {
        let clone = only.rotation_clone();
        banners.push(clone);
    }
    banners
}

/// Active banners for `page`, never empty
///
/// Query failures are logged and treated as an empty result.
pub async fn resolve_page_banners(database: &Database, page: &str) -> Vec<Banner> {
    match database.list_active_banners(page).await {
        Ok(stored) => {
            debug!(page, stored = stored.len(), "resolved page banners");
            fill_rotation(page, stored)
        }
        Err(e) => {
            warn!(page, error = %e, "banner query failed, serving built-in banners");
            fallback_banners(page)
        }
    }
}

/// Store the built-in banners for a known page and return the stored rows
///
/// Returns `None` for unknown pages. When another request seeded the page
/// first, its rows are returned instead. A storage failure is logged and the
/// built-in banners are returned unsaved.
pub async fn seed_page_banners(database: &Database, page: &str) -> Option<Vec<Banner>> {
    if !is_known_page(page) {
        return None;
    }

    let stored = match database.seed_banners(page, default_banners(page)).await {
        Ok(inserted) if inserted.is_empty() => {
            debug!(page, "page already seeded, reading stored banners");
            database.list_banners(Some(page)).await
        }
        Ok(inserted) => {
            info!(page, count = inserted.len(), "seeded built-in banners");
            Ok(inserted)
        }
        Err(e) => Err(e),
    };

    match stored {
        Ok(banners) => Some(banners),
        Err(e) => {
            warn!(page, error = %e, "banner seeding failed, serving built-in banners");
            Some(fallback_banners(page))
        }
    }
}

/// Built-in banners for an admin listing that could not be read
///
/// Without a page filter every known page's set is returned.
#[must_use]
pub fn builtin_banner_listing(page: Option<&str>) -> Vec<Banner> {
    page.map_or_else(
        || KNOWN_PAGES.iter().flat_map(|page| fallback_banners(page)).collect(),
        fallback_banners,
    )
}
