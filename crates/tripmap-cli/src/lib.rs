//! tripmap-cli
//! ===========
//!
//! Command-line interface for the `tripmap-core` travel tracker.
//!
//! This crate primarily provides a binary (`tripmap-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install tripmap-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! tripmap-cli --help
//! tripmap-cli stats
//! tripmap-cli resolve "United States of America"
//! tripmap-cli style France --selected FR
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`tripmap-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/tripmap/tripmap-rs>
//!
// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
