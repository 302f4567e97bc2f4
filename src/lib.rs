//! Link preview extraction driven by page markup
//!
//! A page marks a region with `np-for="<key>"` and declares how to read it
//! with `np-view="<type>[ > selector | >> selector]"`. [`NextPage::get`]
//! fetches the page, locates the region, runs the declared view type and
//! fills whatever is still missing from the document head:
//!
//! ```no_run
//! use nextpage::NextPage;
//!
//! let client = NextPage::new();
//! match client.get("https://example.com/post", "hero") {
//!     Ok(preview) => println!("{:?} {:?}", preview.title, preview.result),
//!     Err(e) => eprintln!("stage {:?} failed ({}): {}", e.stage(), e.code(), e),
//! }
//! ```

pub mod basics;
pub mod client;
pub mod config;
pub mod directive;
pub mod document;
pub mod error;
pub mod fallback;
pub mod fetch;
pub mod preview;
pub mod query;
pub mod region;
pub mod views;
pub mod vocabulary;

pub use client::NextPage;
pub use config::Config;
pub use directive::{Directive, Query};
pub use document::Node;
pub use error::{PreviewError, Stage};
pub use fetch::{Fetcher, HttpFetcher};
pub use preview::{BasicProperties, ExtractionResult, ViewContent};
pub use views::{ViewRegistry, ViewType};
