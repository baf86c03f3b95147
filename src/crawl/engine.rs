// src/crawl/engine.rs
// =============================================================================
// This module drives the whole crawl.
//
// How it works:
// 1. Fetch the base page and register every link found on it
// 2. Take a snapshot of all unvisited URLs (a "wave"), mark them visited
// 3. Fetch and classify the wave concurrently (bounded by --concurrency)
// 4. Links found on healthy pages are registered; brand-new ones form
//    the next wave
// 5. Repeat until a snapshot comes back empty
//
// Termination: the registry only grows when a genuinely new URL shows up,
// and a finite site only has so many same-origin URLs, so eventually a
// wave is empty and the loop ends. Cycles are harmless because a visited
// URL is never claimed again.
//
// Rust concepts:
// - Generics: The engine works with any PageFetcher (real or scripted)
// - Destructuring: Splitting self into fields to borrow them separately
// - Streams: buffer_unordered() for bounded concurrent fetches
// =============================================================================

use anyhow::{anyhow, bail, Result};
use futures::stream::{self, StreamExt};
use url::Url;

use super::registry::UrlRegistry;
use crate::checker::{extract_links, is_broken, strip_trailing_slash, FetchOutcome, PageFetcher};

// The crawl engine: one site, one registry, one fetcher
pub struct CrawlEngine<F> {
    fetcher: F,
    base_url: String,
    concurrency: usize,
    registry: UrlRegistry,
}

impl<F: PageFetcher> CrawlEngine<F> {
    // Sets up an engine for one crawl
    //
    // The base URL is validated here because a bad one can never produce
    // a single link - it's the only configuration error this tool has.
    // The URL is normalized (trailing slash stripped) so it can serve
    // as the origin prefix for link filtering.
    pub fn new(fetcher: F, base_url: &str, concurrency: usize) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| anyhow!("invalid base URL '{}': {}", base_url, e))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            bail!("base URL must be http or https, got '{}'", parsed.scheme());
        }
        if parsed.host_str().is_none() {
            bail!("base URL has no host: {}", base_url);
        }

        Ok(CrawlEngine {
            fetcher,
            base_url: strip_trailing_slash(base_url).to_string(),
            // buffer_unordered(0) would never start anything
            concurrency: concurrency.max(1),
            registry: UrlRegistry::new(),
        })
    }

    // Runs the crawl to completion and hands back the filled registry
    //
    // The only hard error is an unreachable base page. Every later
    // failure (404s, timeouts, server errors) is a classification
    // result, not an error.
    pub async fn run(self) -> Result<UrlRegistry> {
        // Split self into fields so the wave loop can borrow the fetcher
        // immutably while mutating the registry
        let CrawlEngine {
            fetcher,
            base_url,
            concurrency,
            mut registry,
        } = self;

        println!("  Fetching base page: {}", base_url);
        match fetcher.fetch(&base_url).await {
            FetchOutcome::Failed(reason) => {
                bail!("base URL {} is unreachable: {}", base_url, reason);
            }
            FetchOutcome::Response { status: 200, body } => {
                for link in extract_links(&base_url, &body, &base_url) {
                    registry.register_if_absent(&link, &base_url);
                }
            }
            FetchOutcome::Response { status, .. } => {
                // The site answered, just not with a page we can read.
                // Not fatal - the crawl simply has nothing to do.
                eprintln!("Warning: base page answered HTTP {}, no links to follow", status);
            }
        }

        loop {
            // Snapshot the frontier. URLs registered while we work the
            // wave below land in the NEXT snapshot.
            let wave = registry.unvisited_urls();
            if wave.is_empty() {
                break;
            }

            // Claim the whole wave up front; this is what makes each URL
            // fetched at most once
            for url in &wave {
                registry.mark_visited(url);
            }

            let checks = wave.into_iter().map(|url| {
                let fetcher = &fetcher;
                async move {
                    println!("  Checking: {}", url);
                    let outcome = fetcher.fetch(&url).await;
                    (url, outcome)
                }
            });

            // Run up to `concurrency` checks at once, handling results
            // in whatever order they finish
            let mut outcomes = stream::iter(checks).buffer_unordered(concurrency);
            while let Some((url, outcome)) = outcomes.next().await {
                let broken = is_broken(&outcome);
                registry.set_broken(&url, broken);

                if broken {
                    if let Some(record) = registry.get(&url) {
                        println!("  ❌ Broken: {} (linked from {})", url, record.referring_page);
                    }
                } else if let FetchOutcome::Response { status: 200, body } = outcome {
                    // Only healthy pages get expanded; a page's links are
                    // never registered before the page itself was fetched
                    for link in extract_links(&url, &body, &base_url) {
                        registry.register_if_absent(&link, &url);
                    }
                }
            }
        }

        Ok(registry)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why waves instead of a recursive crawl?
//    - Recursing "for every unchecked URL, check it and recurse" while
//      new URLs keep getting added is easy to get subtly wrong
//    - A snapshot per wave makes the mutation boundary obvious: this
//      wave is fixed, discoveries go to the next one
//
// 2. What does destructuring self buy us?
//    - `let CrawlEngine { fetcher, mut registry, .. } = self;`
//    - Now fetcher and registry are separate local variables
//    - The stream can hold &fetcher while we call &mut registry methods,
//      which the borrow checker is happy with because they're disjoint
//
// 3. Why mark the wave visited before fetching it?
//    - A page in this wave might link to another page in the same wave
//    - Registering is insert-if-absent so the record isn't touched, and
//      because it's already visited it won't be claimed again later
//
// 4. What is buffer_unordered?
//    - Takes a stream of futures, runs up to N at once
//    - Results come back as they complete, not in submission order
//    - That's fine: sibling links have no ordering guarantees
// -----------------------------------------------------------------------------
