//! # schemascope
//!
//! Database schema introspection: crawl a live database into a
//! navigable, filterable catalog of its schemas, tables, columns, keys,
//! indexes, constraints, routines, and related metadata.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Live database connection                 │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [source]
//! ┌─────────────────────────────────────────────────────────┐
//! │   MetadataSource capability trait + SourceConnection     │
//! │   (cached identifiers, information-schema views)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [crawl]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Retrievers (lookup-or-create merge, stage by stage)    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [filter + analyze]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Inclusion/grep reducers · dependency graph ordering    │
//! │   · weak association inference                           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [schema]
//! ┌─────────────────────────────────────────────────────────┐
//! │              Catalog (the final object graph)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use schemascope::config::ConnectionConfig;
//! use schemascope::crawl::{crawl, CrawlOptions, InfoLevel};
//!
//! let conn = ConnectionConfig::sqlite("./data.db").connect()?;
//! let options = CrawlOptions::with_info_level(InfoLevel::detailed());
//! let catalog = crawl(&conn, &options).await?;
//!
//! for table in catalog.tables_natural_order() {
//!     println!("{}", table.full_name());
//! }
//! ```

pub mod analyze;
pub mod config;
pub mod crawl;
pub mod filter;
pub mod schema;
pub mod source;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::analyze::{assign_natural_sort_order, TableGraph};
    pub use crate::config::{ConnectionConfig, Driver, Settings};
    pub use crate::crawl::{crawl, CrawlError, CrawlOptions, CrawlResult, InfoLevel};
    pub use crate::filter::{GrepOptions, InclusionRule};
    pub use crate::schema::{
        Catalog, Column, ForeignKey, Index, PrimaryKey, Routine, SchemaRef, Table, TableKind,
    };
    pub use crate::source::{
        MetadataCursor, MetadataRows, MetadataSource, SourceConnection, SqliteSource,
    };
}

// Also export the entry point and core types at the crate root.
pub use crawl::{crawl, CrawlOptions, InfoLevel};
pub use schema::Catalog;
pub use source::SourceConnection;
