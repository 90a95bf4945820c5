//! The schema object model.
//!
//! Named, attribute-bearing objects forming a tree rooted at the
//! [`Catalog`], with foreign-key and synonym edges crossing tree
//! boundaries:
//!
//! ```text
//! Catalog
//! ├── SchemaRef*
//! ├── Table*
//! │   ├── Column*
//! │   ├── PrimaryKey
//! │   ├── Index*
//! │   ├── Trigger*
//! │   ├── CheckConstraint*
//! │   └── Privilege*
//! ├── ForeignKey*          (column-pair edges between tables)
//! ├── Routine*
//! │   └── RoutineParameter*
//! ├── Synonym*
//! ├── Sequence*
//! └── ColumnDataType*
//! ```
//!
//! Identity is name + parent-path based (see [`NamedObject`]), which is
//! what lets the retrievers merge records from several metadata queries
//! into one object without duplicates.

mod attributes;
mod catalog;
mod column;
mod constraint;
mod data_type;
mod index;
mod info;
mod keys;
mod named;
mod privilege;
mod routine;
mod schema_ref;
mod sequence;
mod synonym;
mod table;
mod trigger;

pub use attributes::{merge_attributes, AttributeMap};
pub use catalog::{Catalog, TableRelationship, WeakAssociation};
pub use column::{Column, ColumnRef};
pub use constraint::CheckConstraint;
pub use data_type::ColumnDataType;
pub use index::{Index, IndexColumn, SortSequence};
pub use info::DatabaseInfo;
pub use keys::{Deferrability, FkRule, ForeignKey, ForeignKeyColumnPair, PrimaryKey};
pub use named::{join_key, NamedObject, NamedObjectList};
pub use privilege::Privilege;
pub use routine::{
    ParameterMode, Routine, RoutineKind, RoutineParameter, RoutineReturnKind,
};
pub use schema_ref::SchemaRef;
pub use sequence::Sequence;
pub use synonym::Synonym;
pub use table::{Table, TableKind};
pub use trigger::{ActionOrientation, ConditionTiming, Trigger, TriggerEvent};
