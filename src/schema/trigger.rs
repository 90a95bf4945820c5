//! Triggers.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeMap;
use super::named::NamedObject;

/// The statement event a trigger fires on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerEvent {
    Insert,
    Update,
    Delete,
    #[default]
    Unknown,
}

impl TriggerEvent {
    pub fn from_metadata(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
            Some("INSERT") => TriggerEvent::Insert,
            Some("UPDATE") => TriggerEvent::Update,
            Some("DELETE") => TriggerEvent::Delete,
            _ => TriggerEvent::Unknown,
        }
    }
}

/// When the trigger action runs relative to the event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionTiming {
    Before,
    After,
    InsteadOf,
    #[default]
    Unknown,
}

impl ConditionTiming {
    pub fn from_metadata(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
            Some("BEFORE") => ConditionTiming::Before,
            Some("AFTER") => ConditionTiming::After,
            Some("INSTEAD OF") => ConditionTiming::InsteadOf,
            _ => ConditionTiming::Unknown,
        }
    }
}

/// Whether the action runs per row or per statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionOrientation {
    Row,
    Statement,
    #[default]
    Unknown,
}

impl ActionOrientation {
    pub fn from_metadata(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
            Some("ROW") => ActionOrientation::Row,
            Some("STATEMENT") => ActionOrientation::Statement,
            _ => ActionOrientation::Unknown,
        }
    }
}

/// A trigger attached to a table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Trigger {
    pub name: String,
    pub event: TriggerEvent,
    pub condition_timing: ConditionTiming,
    pub action_orientation: ActionOrientation,
    pub action_condition: Option<String>,
    pub action_statement: Option<String>,
    pub action_order: Option<i64>,
    pub attributes: AttributeMap,
}

impl Trigger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl NamedObject for Trigger {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_key(&self) -> String {
        self.name.clone()
    }
}
