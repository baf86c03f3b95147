// src/checker/html.rs
// =============================================================================
// This module extracts crawlable links from an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Pipeline for each <a href="...">:
// 1. Root-relative hrefs ("/pricing") get the base origin prefixed
// 2. Exactly one trailing slash is stripped (so "/docs" and "/docs/"
//    are the same link)
// 3. A link survives only if it stays on the base origin, is not a
//    cdn-cgi email-protection stub, and is not a substring of the page
//    it was found on
//
// Rust concepts:
// - Iterators: For walking the selected elements
// - &str vs String: Borrowing the href, owning the normalized link
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;

// Cloudflare rewrites obfuscated email links under /cdn-cgi/; they are
// not navigable pages, so any href containing this marker is skipped
const EMAIL_OBFUSCATION_MARKER: &str = "cdn-cgi";

// Extracts the same-origin links found on one page
//
// Parameters:
//   page_url: URL of the page the HTML came from (already normalized)
//   html: the page body to parse
//   base_origin: the site origin, no trailing slash (e.g., "https://x.test")
//
// Returns: deduplicated links in the order they first appear on the page.
// The caller only invokes this for pages that answered 200; error pages
// contribute no links.
//
// Example:
//   page_url = "https://x.test"
//   html = r#"<a href="/about">About</a>"#
//   result = ["https://x.test/about"]
pub fn extract_links(page_url: &str, html: &str, base_origin: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Our selector is a constant and known to be valid, so .unwrap() here
    // can only panic on a programmer error
    let selector = Selector::parse("a[href]").unwrap();

    // HashSet for O(1) "seen this already?" checks, Vec to keep the
    // order links were discovered in
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        // Resolve root-relative hrefs against the site origin.
        // Other relative forms ("about.html", "../x") and non-http
        // schemes ("mailto:", "tel:") are left untouched and fall out
        // at the origin check below.
        let absolute = if href.starts_with('/') {
            format!("{}{}", base_origin, href)
        } else {
            href.to_string()
        };

        // Normalize: "/docs/" and "/docs" are the same page
        let normalized = strip_trailing_slash(&absolute);

        // Filter 1: must stay on the site we're crawling
        if !normalized.starts_with(base_origin) {
            continue;
        }

        // Filter 2: skip email-protection stubs
        if normalized.contains(EMAIL_OBFUSCATION_MARKER) {
            continue;
        }

        // Filter 3: self-link suppression. This is a substring test, not
        // an equality test, so a link that is a prefix of the current
        // page's URL (like "/docs" found on "/docs/install") is also
        // dropped. Known quirk, kept on purpose.
        if page_url.contains(normalized) {
            continue;
        }

        if seen.insert(normalized.to_string()) {
            links.push(normalized.to_string());
        }
    }

    links
}

// Strips exactly one trailing '/' if present
//
// "https://x.test/foo/" -> "https://x.test/foo"
// "https://x.test/foo"  -> unchanged
pub fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is let-else?
//    - `let Some(href) = ... else { continue; }` binds on success and
//      bails out of this iteration otherwise
//    - Cleaner than an if-let with all the real work nested inside
//
// 2. Why only resolve hrefs starting with '/'?
//    - Those are root-relative: the browser resolves them against the
//      site origin, and so do we
//    - Page-relative hrefs ("about.html") would need the full current
//      path to resolve; this crawler doesn't do that, so they simply
//      fail the origin filter and are skipped
//
// 3. Why does dedup live here AND in the registry?
//    - Here: the same page often repeats a link (nav + footer), no need
//      to hand the engine duplicates
//    - Registry: the same link appears on many different pages; only the
//      registry can dedup across pages
//
// 4. What does strip_suffix do?
//    - Returns Some(rest) with the suffix removed, or None if the
//      string doesn't end with it
//    - .unwrap_or(url) falls back to the original, so exactly one '/'
//      is removed at most
// -----------------------------------------------------------------------------
