// src/report.rs
// =============================================================================
// This module turns a finished crawl into the broken-link report.
//
// The report is just the registry filtered down to records that were
// classified broken, paired with the page that first referenced them.
// main.rs decides how to render it (table or JSON).
//
// Rust concepts:
// - Serialize: Derived so --json output comes for free via serde_json
// - Iterator chains: filter + map over the registry records
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::crawl::UrlRegistry;

// One entry in the final report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokenLink {
    /// The URL that failed its check
    pub url: String,
    /// The page the URL was first discovered on
    pub referring_page: String,
}

// Collects every broken record from the registry, in discovery order
pub fn broken_links(registry: &UrlRegistry) -> Vec<BrokenLink> {
    registry
        .all_records()
        .filter(|record| record.broken == Some(true))
        .map(|record| BrokenLink {
            url: record.url.clone(),
            referring_page: record.referring_page.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_broken_records_are_reported() {
        let mut registry = UrlRegistry::new();
        registry.register_if_absent("https://x.test/ok", "https://x.test");
        registry.register_if_absent("https://x.test/dead", "https://x.test");
        registry.register_if_absent("https://x.test/unchecked", "https://x.test");
        registry.set_broken("https://x.test/ok", false);
        registry.set_broken("https://x.test/dead", true);

        let report = broken_links(&registry);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].url, "https://x.test/dead");
        assert_eq!(report[0].referring_page, "https://x.test");
    }

    #[test]
    fn test_report_preserves_discovery_order() {
        let mut registry = UrlRegistry::new();
        registry.register_if_absent("https://x.test/b", "https://x.test");
        registry.register_if_absent("https://x.test/a", "https://x.test");
        registry.set_broken("https://x.test/b", true);
        registry.set_broken("https://x.test/a", true);

        let report = broken_links(&registry);
        let urls: Vec<&str> = report.iter().map(|b| b.url.as_str()).collect();
        assert_eq!(urls, vec!["https://x.test/b", "https://x.test/a"]);
    }
}
