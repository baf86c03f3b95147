// src/crawl/mod.rs
// =============================================================================
// This module is the crawl itself: the traversal and its bookkeeping.
//
// Submodules:
// - registry: One record per discovered URL (visited/broken/referrer)
// - engine: The wave loop that expands the frontier until it's empty
//
// The split keeps the tricky part honest: the registry owns ALL mutable
// crawl state, the engine only talks to it through its methods.
// =============================================================================

mod engine;
mod registry;

// Re-export the types the rest of the application uses
pub use engine::CrawlEngine;
pub use registry::{UrlRecord, UrlRegistry};
