// src/checker/mod.rs
// =============================================================================
// This module contains everything about inspecting a single URL.
//
// Submodules:
// - fetch: Issues the HTTP requests (behind a trait so tests can fake it)
// - status: Decides whether a fetch outcome counts as broken
// - html: Extracts same-origin links from a fetched page body
//
// This file (mod.rs) is the module root - it re-exports the public API
// that the crawl engine and main use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod fetch;
mod html;
mod status;

// Re-export public items from submodules
// This lets users write `checker::is_broken()` instead of
// `checker::status::is_broken()`
pub use fetch::{FetchOutcome, HttpFetcher, PageFetcher};
pub use html::{extract_links, strip_trailing_slash};
pub use status::is_broken;
