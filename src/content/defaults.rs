// ABOUTME: Static built-in banners, subsidiaries, and page keys used when storage is empty
// ABOUTME: Every fallback banner list holds at least two entries for the rotating display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use chrono::{DateTime, Utc};
use corpsite_core::models::{Banner, NewBanner, NewSubsidiary};

/// Page keys with their own built-in banner set
pub const KNOWN_PAGES: [&str; 7] = [
    "home",
    "about",
    "subsidiaries",
    "projects",
    "clients",
    "legal",
    "contact",
];

/// Title, subtitle, image
type StaticBanner = (&'static str, &'static str, &'static str);

const HOME: &[StaticBanner] = &[
    (
        "Building the Future Together",
        "A diversified group delivering across industries",
        "/images/banners/home-1.jpg",
    ),
    (
        "Excellence in Every Project",
        "Trusted by government, state-owned and private partners",
        "/images/banners/home-2.jpg",
    ),
    (
        "One Group, Many Strengths",
        "Discover the companies that make up our group",
        "/images/banners/home-3.jpg",
    ),
];

const ABOUT: &[StaticBanner] = &[
    (
        "About Us",
        "Our history, mission and values",
        "/images/banners/about-1.jpg",
    ),
    (
        "Our Commitment",
        "Integrity and care in everything we do",
        "/images/banners/about-2.jpg",
    ),
];

const SUBSIDIARIES: &[StaticBanner] = &[
    (
        "Our Subsidiaries",
        "Specialist companies under one group",
        "/images/banners/subsidiaries-1.jpg",
    ),
    (
        "Focused Expertise",
        "Each subsidiary leads in its own field",
        "/images/banners/subsidiaries-2.jpg",
    ),
];

const PROJECTS: &[StaticBanner] = &[
    (
        "Our Projects",
        "A portfolio of completed and ongoing work",
        "/images/banners/projects-1.jpg",
    ),
    (
        "Delivered With Care",
        "From planning to handover",
        "/images/banners/projects-2.jpg",
    ),
];

const CLIENTS: &[StaticBanner] = &[
    (
        "Our Clients",
        "Partners who trust our work",
        "/images/banners/clients-1.jpg",
    ),
    (
        "Lasting Partnerships",
        "Relationships built over many years",
        "/images/banners/clients-2.jpg",
    ),
];

const LEGAL: &[StaticBanner] = &[
    (
        "Legal Documents",
        "Licences, certificates and policies",
        "/images/banners/legal-1.jpg",
    ),
    (
        "Compliance",
        "Operating to the highest standards",
        "/images/banners/legal-2.jpg",
    ),
];

const CONTACT: &[StaticBanner] = &[
    (
        "Contact Us",
        "We would be glad to hear from you",
        "/images/banners/contact-1.jpg",
    ),
    (
        "Visit Our Office",
        "Find our head office address below",
        "/images/banners/contact-2.jpg",
    ),
];

const GENERIC: &[StaticBanner] = &[
    ("Welcome", "", "/images/banners/default-1.jpg"),
    ("Discover More", "", "/images/banners/default-2.jpg"),
];

/// True for page keys with a dedicated built-in banner set
#[must_use]
pub fn is_known_page(page: &str) -> bool {
    KNOWN_PAGES.contains(&page)
}

fn static_banners(page: &str) -> &'static [StaticBanner] {
    match page {
        "home" => HOME,
        "about" => ABOUT,
        "subsidiaries" => SUBSIDIARIES,
        "projects" => PROJECTS,
        "clients" => CLIENTS,
        "legal" => LEGAL,
        "contact" => CONTACT,
        _ => GENERIC,
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_owned())
}

/// Built-in banners for `page` as insertable records
///
/// Unknown pages receive the generic set.
#[must_use]
pub fn default_banners(page: &str) -> Vec<NewBanner> {
    static_banners(page)
        .iter()
        .zip(0_i64..)
        .map(|(&(title, subtitle, image_url), sort_order)| NewBanner {
            page: page.to_owned(),
            title: non_empty(title),
            subtitle: non_empty(subtitle),
            image_url: image_url.to_owned(),
            sort_order,
            is_active: true,
        })
        .collect()
}

/// Built-in banners for `page` as display records
///
/// Identifiers are stable (`default-<page>-<n>`) and timestamps are the Unix epoch.
#[must_use]
pub fn fallback_banners(page: &str) -> Vec<Banner> {
    let epoch = DateTime::<Utc>::default();
    default_banners(page)
        .into_iter()
        .map(|banner| Banner {
            id: format!("default-{page}-{}", banner.sort_order + 1),
            page: banner.page,
            title: banner.title,
            subtitle: banner.subtitle,
            image_url: banner.image_url,
            sort_order: banner.sort_order,
            is_active: true,
            created_at: epoch,
            updated_at: epoch,
        })
        .collect()
}

/// Placeholder subsidiaries written by the seeder
#[must_use]
pub fn default_subsidiaries() -> Vec<NewSubsidiary> {
    vec![
        NewSubsidiary {
            name: "Group Construction".to_owned(),
            path: "group-construction".to_owned(),
            description: Some("Civil works and building construction.".to_owned()),
            image_url: Some("/images/subsidiaries/construction.jpg".to_owned()),
            display_order: 0,
        },
        NewSubsidiary {
            name: "Group Trading".to_owned(),
            path: "group-trading".to_owned(),
            description: Some("Supply and distribution of materials.".to_owned()),
            image_url: Some("/images/subsidiaries/trading.jpg".to_owned()),
            display_order: 1,
        },
    ]
}
