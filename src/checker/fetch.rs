// src/checker/fetch.rs
// =============================================================================
// This module does the actual HTTP fetching for the crawler.
//
// Key decisions:
// - Fetching is behind a trait (PageFetcher) so the crawl engine can be
//   driven by a scripted in-memory fetcher in tests - no network needed
// - A fetch NEVER fails the crawl: a 404 or a timeout is a result we want
//   to see, not an error to bubble up
// - We use GET (not HEAD) because we need the response body to extract
//   links from pages that answer 200
//
// Rust concepts:
// - Traits: Define shared behavior that multiple types can implement
// - async-trait: Lets trait methods be async (not natively supported
//   in edition 2021)
// =============================================================================

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// What came back from fetching a URL
//
// Either we got an HTTP response (any status - 200, 404, 500, ...)
// or the request never completed at all (timeout, DNS failure, refused
// connection). Both are normal inputs to the crawl.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The server answered with some status code and a body
    Response { status: u16, body: String },
    /// The request itself failed; the string says why
    Failed(String),
}

// The seam between the crawl engine and the network
//
// Production uses HttpFetcher below; tests implement this with a
// HashMap of canned pages.
#[async_trait]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

// The real fetcher, backed by reqwest
//
// One Client is built up front and reused for every request, which gives
// us connection pooling for free.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher with a per-request timeout
    //
    // Building a Client can fail (e.g., TLS backend initialization),
    // so this returns Result
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Reading the body can also fail mid-stream; that counts
                // as a failed fetch just like a connection error
                match response.text().await {
                    Ok(body) => FetchOutcome::Response { status, body },
                    Err(e) => FetchOutcome::Failed(e.to_string()),
                }
            }
            Err(e) => FetchOutcome::Failed(e.to_string()),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The crawl engine only cares about "give me what this URL returns"
//    - With a trait, tests can swap in a fake site defined as a HashMap
//    - This is the Rust version of dependency injection
//
// 2. Why Policy::none() for redirects?
//    - We classify links by the FIRST status the server sends
//    - If reqwest silently followed a 301 to a 200, we would never see
//      the 301 - and redirects are something we report on
//
// 3. Why doesn't fetch() return Result?
//    - Because for this tool there is no failure case worth propagating
//    - Every way a request can go wrong is folded into FetchOutcome
//    - The caller decides what an outcome means (see checker::status)
// -----------------------------------------------------------------------------
