//! Brandcolor - perceptual brand color service
//!
//! Matches arbitrary colors to a catalog of 12-step palettes, applies brand
//! mood transforms and resolves accent/neutral themes. The matching itself
//! lives in the `oklch-match` crate; this crate adds the catalog file, the
//! HTTP API and the CLI.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
