//! The metadata source layer.
//!
//! Retrievers never see a driver handle. They talk to a
//! [`SourceConnection`], which wraps a [`MetadataSource`] capability
//! trait together with the dictionaries cached at connect time:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SourceConnection                       │
//! │  ┌───────────────────────┐  ┌─────────────────────────────┐ │
//! │  │ MetadataSource (async)│  │ Cached dictionaries         │ │
//! │  │ - schemas()           │  │ - Identifiers (quoting,     │ │
//! │  │ - tables()/columns()  │  │   reserved words)           │ │
//! │  │ - keys/indexes        │  │ - InformationSchemaViews    │ │
//! │  │ - query(sql)          │  │ - supported table types     │ │
//! │  └───────────────────────┘  └─────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │          SqliteSource (bundled reference driver)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every endpoint returns a [`MetadataRows`] table; the
//! [`MetadataCursor`] gives retrievers typed access and turns the
//! columns they did not consume into generic attributes.

mod connection;
mod error;
mod identifiers;
mod provider;
mod rows;
mod sqlite;
mod views;

pub use connection::SourceConnection;
pub use error::{SourceError, SourceResult};
pub use identifiers::Identifiers;
pub use provider::MetadataSource;
pub use rows::{MetadataCursor, MetadataRows};
pub use sqlite::SqliteSource;
pub use views::{InformationSchemaKey, InformationSchemaViews};
