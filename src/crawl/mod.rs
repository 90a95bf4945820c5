//! The retrieval-and-assembly pipeline.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        crawl(conn, options)                     │
//! │                                                                 │
//! │  schemas → database info → data types → tables → routines →     │
//! │  synonyms → sequences → weak associations                       │
//! │                                                                 │
//! │  tables stage:                                                  │
//! │    tables → columns → primary keys → indexes (unique, rest) →   │
//! │    primary-key replacement → foreign keys → dependency graph →  │
//! │    reduce → triggers/constraints/definitions/privileges         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │      Retriever (lookup-or-create merges into one Catalog)       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each retrieval stage queries one metadata endpoint through the
//! [`SourceConnection`](crate::source::SourceConnection) and merges rows
//! into the shared catalog; objects are identified by name plus parent
//! path, so records seen by several endpoints land on the same object.

mod columns;
mod crawler;
mod data_types;
mod database_info;
mod error;
mod extras;
mod indexes;
mod info_level;
mod keys;
mod options;
mod retriever;
mod routines;
mod schemas;
mod sequences;
mod synonyms;
mod tables;

pub use crawler::crawl;
pub use error::{CrawlError, CrawlResult};
pub use info_level::InfoLevel;
pub use options::CrawlOptions;
