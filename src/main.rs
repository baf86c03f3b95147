// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the HTTP fetcher and crawl engine
// 3. Run the crawl to completion
// 4. Print the broken-link report (table or JSON)
// 5. Exit with proper code (0 = clean, 1 = broken links, 2 = error)
//
// Rust concepts:
// - async/await: Because we make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Modules: Each concern lives in its own file
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - fetching, classification, link extraction
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - the crawl engine and URL registry
mod report; // src/report.rs - broken-link report assembly

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use std::time::Duration;

use checker::HttpFetcher;
use crawl::{CrawlEngine, UrlRegistry};
use report::BrokenLink;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // An unrecoverable error (in practice: a bad or unreachable
            // base URL). Print it and exit with code 2.
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl finished, no broken links
//   Ok(1) = broken links found
//   Err = base URL invalid or unreachable
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This automatically handles --help, --version, etc.
    let cli = Cli::parse();

    println!("🔍 Scanning site: {}", cli.base_url);

    // One HTTP client for the whole crawl, with the configured timeout
    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout))?;

    // The engine validates the base URL before anything is fetched
    let engine = CrawlEngine::new(fetcher, &cli.base_url, cli.concurrency)?;
    let registry = engine.run().await?;

    println!("📄 Checked {} link(s)", registry.len());

    // Pull the broken records out of the registry and print them
    let broken = report::broken_links(&registry);
    print_report(&registry, &broken, cli.json)?;

    if broken.is_empty() {
        Ok(0) // Exit code 0 = all good
    } else {
        Ok(1) // Exit code 1 = broken links found
    }
}

// Prints the report either as a table or JSON
// Parameters:
//   registry: the finished crawl state (for summary counts)
//   broken: the broken-link entries
//   json: whether to output JSON format
fn print_report(registry: &UrlRegistry, broken: &[BrokenLink], json: bool) -> Result<()> {
    if json {
        // Serialize the broken entries to JSON and print
        let json_output = serde_json::to_string_pretty(broken)?;
        println!("{}", json_output);
    } else {
        // Print human-readable table
        print_table(registry, broken);
    }
    Ok(())
}

// Prints the report as a human-readable table in the terminal
fn print_table(registry: &UrlRegistry, broken: &[BrokenLink]) {
    println!();

    if broken.is_empty() {
        println!("✅ No broken links found");
    } else {
        // Print table header
        println!("{:<60} {:<40}", "BROKEN URL", "FOUND ON");
        println!("{}", "=".repeat(100));

        for link in broken {
            // Truncate URL if too long for display
            let url_display = if link.url.len() > 57 {
                format!("{}...", &link.url[..57])
            } else {
                link.url.clone()
            };

            println!("{:<60} {:<40}", url_display, link.referring_page);
        }
    }

    println!();

    // Print summary
    let ok_count = registry.len() - broken.len();
    println!("📊 Summary:");
    println!("   ✅ OK: {}", ok_count);
    println!("   ❌ Broken: {}", broken.len());
    println!("   📋 Total: {}", registry.len());
}
