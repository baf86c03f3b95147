// src/crawl/registry.rs
// =============================================================================
// This module owns every URL the crawl has ever discovered.
//
// One UrlRecord per normalized URL, keyed in a HashMap. The registry is
// the single source of truth for three questions:
// - Have we seen this URL before? (insert-if-absent dedup)
// - Which URLs still need fetching? (the unvisited frontier)
// - What did the check say? (broken flag + the page that found the URL)
//
// The crawl engine is the only writer; the reporter only reads.
//
// Rust concepts:
// - HashMap: O(1) lookup by URL
// - Option<bool>: "not yet classified" vs. a real answer
// - Iterators: all_records() walks records lazily
// =============================================================================

use std::collections::HashMap;

// Everything we know about one discovered URL
#[derive(Debug, Clone)]
pub struct UrlRecord {
    /// The normalized URL itself (also the registry key)
    pub url: String,
    /// The page this URL was FIRST discovered on; never changes even if
    /// other pages link to the same URL later
    pub referring_page: String,
    /// Flipped to true exactly once, when the engine claims the URL
    pub visited: bool,
    /// None until the status check ran
    pub broken: Option<bool>,
}

// The registry itself
//
// `order` remembers insertion order so reports come out in the order
// URLs were discovered - HashMap iteration order is random.
#[derive(Debug, Default)]
pub struct UrlRegistry {
    records: HashMap<String, UrlRecord>,
    order: Vec<String>,
}

impl UrlRegistry {
    pub fn new() -> Self {
        UrlRegistry::default()
    }

    // Creates a record for a URL we haven't seen before
    //
    // If the URL is already known this does nothing at all - in
    // particular the existing referring_page is NOT overwritten.
    // First discoverer wins.
    pub fn register_if_absent(&mut self, url: &str, referring_page: &str) {
        if self.records.contains_key(url) {
            return;
        }
        self.records.insert(
            url.to_string(),
            UrlRecord {
                url: url.to_string(),
                referring_page: referring_page.to_string(),
                visited: false,
                broken: None,
            },
        );
        self.order.push(url.to_string());
    }

    // Marks a URL as claimed for fetching
    //
    // Idempotent: marking an already-visited URL is a no-op. The engine
    // still takes care to claim each URL only once, since "visited" is
    // what guarantees a URL is fetched at most once.
    pub fn mark_visited(&mut self, url: &str) {
        if let Some(record) = self.records.get_mut(url) {
            record.visited = true;
        }
    }

    // Stores the classification result for a URL
    pub fn set_broken(&mut self, url: &str, is_broken: bool) {
        if let Some(record) = self.records.get_mut(url) {
            record.broken = Some(is_broken);
        }
    }

    // Looks up a single record
    pub fn get(&self, url: &str) -> Option<&UrlRecord> {
        self.records.get(url)
    }

    // Snapshot of every URL still waiting to be fetched, in discovery
    // order
    //
    // It's a snapshot on purpose: the engine registers new URLs while
    // working through a batch, and those should surface in the NEXT
    // snapshot, not mutate this one
    pub fn unvisited_urls(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|url| !self.records[url.as_str()].visited)
            .cloned()
            .collect()
    }

    // Every record, in discovery order, for reporting
    pub fn all_records(&self) -> impl Iterator<Item = &UrlRecord> {
        self.order.iter().map(|url| &self.records[url.as_str()])
    }

    // How many URLs have been discovered in total
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HashMap + Vec instead of just one collection?
//    - HashMap gives O(1) dedup checks, but iterates in random order
//    - The Vec of keys remembers discovery order for stable reports
//    - The Vec only grows when the HashMap does, so they never disagree
//
// 2. What is get_mut?
//    - Like get, but returns Option<&mut V> so we can modify the value
//      in place
//    - if let Some(record) = ... quietly skips URLs we don't know,
//      which makes mark_visited and set_broken safe to call with any URL
//
// 3. Why Option<bool> for broken?
//    - Three states: not checked yet (None), fine (Some(false)),
//      broken (Some(true))
//    - A plain bool would silently conflate "not checked" with "fine"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_creates_unvisited_record() {
        let mut registry = UrlRegistry::new();
        registry.register_if_absent("https://x.test/a", "https://x.test");

        let record = registry.get("https://x.test/a").unwrap();
        assert!(!record.visited);
        assert_eq!(record.broken, None);
        assert_eq!(record.referring_page, "https://x.test");
    }

    #[test]
    fn test_duplicate_registration_is_ignored() {
        let mut registry = UrlRegistry::new();
        registry.register_if_absent("https://x.test/a", "https://x.test");
        registry.register_if_absent("https://x.test/a", "https://x.test/other");

        assert_eq!(registry.len(), 1);
        // First discoverer wins: the second referring page is dropped
        let record = registry.get("https://x.test/a").unwrap();
        assert_eq!(record.referring_page, "https://x.test");
    }

    #[test]
    fn test_mark_visited_shrinks_frontier() {
        let mut registry = UrlRegistry::new();
        registry.register_if_absent("https://x.test/a", "https://x.test");
        registry.register_if_absent("https://x.test/b", "https://x.test");

        assert_eq!(registry.unvisited_urls().len(), 2);

        registry.mark_visited("https://x.test/a");
        assert_eq!(registry.unvisited_urls(), vec!["https://x.test/b".to_string()]);

        registry.mark_visited("https://x.test/b");
        assert!(registry.unvisited_urls().is_empty());
    }

    #[test]
    fn test_mark_visited_is_idempotent() {
        let mut registry = UrlRegistry::new();
        registry.register_if_absent("https://x.test/a", "https://x.test");
        registry.mark_visited("https://x.test/a");
        registry.mark_visited("https://x.test/a");
        assert!(registry.get("https://x.test/a").unwrap().visited);
    }

    #[test]
    fn test_set_broken_records_classification() {
        let mut registry = UrlRegistry::new();
        registry.register_if_absent("https://x.test/a", "https://x.test");
        registry.set_broken("https://x.test/a", true);
        assert_eq!(registry.get("https://x.test/a").unwrap().broken, Some(true));
    }

    #[test]
    fn test_records_come_back_in_discovery_order() {
        let mut registry = UrlRegistry::new();
        registry.register_if_absent("https://x.test/c", "https://x.test");
        registry.register_if_absent("https://x.test/a", "https://x.test");
        registry.register_if_absent("https://x.test/b", "https://x.test");

        let urls: Vec<&str> = registry.all_records().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://x.test/c", "https://x.test/a", "https://x.test/b"]
        );
    }

    #[test]
    fn test_unknown_urls_are_no_ops() {
        let mut registry = UrlRegistry::new();
        registry.mark_visited("https://x.test/ghost");
        registry.set_broken("https://x.test/ghost", true);
        assert!(registry.is_empty());
    }
}
