// ABOUTME: Core types for the corporate site backend
// ABOUTME: Foundation crate with error handling and content models shared by the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

#![deny(unsafe_code)]

//! # Corpsite Core
//!
//! Shared types for the corporate site backend. This crate changes rarely,
//! which keeps incremental builds of the server crate fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP error bodies
//! - **models**: Content records (banners, clients, projects, subsidiaries, legal
//!   documents, settings, uploads) and their request payloads

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Content models and request payload validation
pub mod models;
