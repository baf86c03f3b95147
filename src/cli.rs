// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// link-sentry does exactly one thing (crawl a site, report broken links),
// so there are no subcommands - just the base URL and a few flags.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-sentry",
    version = "0.1.0",
    about = "Crawl a website and report broken links",
    long_about = "link-sentry starts at a site's base URL, follows every same-origin link it \
                  can find, and reports each link that doesn't come back healthy along with \
                  the page that referenced it. Handy in CI to keep a site free of dead ends."
)]
pub struct Cli {
    /// Base URL of the site to crawl (e.g., https://example.com)
    ///
    /// This is a positional argument (required, no flag needed).
    /// All same-origin filtering and relative-link resolution is
    /// done against this URL.
    pub base_url: String,

    /// Output the final report in JSON format instead of a table
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,

    /// How many link checks to run at the same time (default: 8)
    ///
    /// Higher is faster but hits the server harder.
    /// #[arg(long, default_value_t = 8)] creates --concurrency with a default
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// Per-request timeout in seconds (default: 10)
    ///
    /// A link that doesn't answer within this window counts as broken.
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - clap supports subcommands (like `git commit`, `git push`)
//    - We only have one mode of operation, so a flat struct is simpler
//    - The doc comments on each field become the --help text
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
//
// 4. What is default_value_t?
//    - Sets the default used when the flag is not passed
//    - The _t suffix means "typed" - the default is a real value,
//      not a string that gets parsed later
// -----------------------------------------------------------------------------
