// ABOUTME: Page content assembly with built-in fallbacks so public pages never render empty
// ABOUTME: Banner rotation resolver, seed-on-empty helpers, and settings fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! # Content Fallbacks
//!
//! Reads that back public pages never fail: a query error or an empty result
//! is replaced by static built-in content and logged at `warn`.

/// Banner resolution and seeding
pub mod banners;
/// Static built-in content
pub mod defaults;
/// Settings reads with built-in fallbacks
pub mod settings;

pub use banners::{builtin_banner_listing, fill_rotation, resolve_page_banners, seed_page_banners};
pub use defaults::{fallback_banners, is_known_page, KNOWN_PAGES};
pub use settings::{load_site_settings, organization_chart_url, seed_default_settings};
