//! Plain-text rendering of federated wiki pages and sitemaps.
//!
//! A federated wiki page is a JSON document with a `title` and an ordered
//! `story` of typed content blocks. This crate turns such documents into
//! bounded plain text, and turns a site's `system/sitemap.json` into a list
//! of page slugs.
//!
//! Both transforms are pure: they take already-fetched JSON text and never
//! perform I/O.
//!
//! # Example
//!
//! ```
//! use fw_story::{PageDocument, RenderLimits, extract_slugs, render_page};
//!
//! let page = PageDocument::parse(
//!     r#"{"title": "Welcome", "story": [{"type": "paragraph", "text": "hello"}]}"#,
//! )
//! .unwrap();
//! assert_eq!(render_page(&page, &RenderLimits::full(true)), "Welcome\n\nhello");
//!
//! let slugs = extract_slugs(r#"["welcome-visitors", {"slug": "how-to-wiki"}]"#).unwrap();
//! assert_eq!(slugs, vec!["welcome-visitors", "how-to-wiki"]);
//! ```

mod block;
mod error;
mod fields;
mod page;
mod render;
mod sitemap;

pub use block::{Block, BlockKind, RenderRule};
pub use error::StoryError;
pub use page::PageDocument;
pub use render::{RenderLimits, render_page, render_page_json};
pub use sitemap::{SitemapShape, SlugEntry, extract_slugs, slug_listing};
