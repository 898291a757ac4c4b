// file: src/models/entity.rs
// description: named entity spans and their semantic categories

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityLabel {
    Organization,
    Product,
    Event,
    Person,
    Location,
    Date,
    Other,
}

impl EntityLabel {
    /// Categories kept for theme ranking unless configured otherwise.
    pub fn theme_defaults() -> Vec<EntityLabel> {
        vec![
            EntityLabel::Organization,
            EntityLabel::Product,
            EntityLabel::Event,
        ]
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityLabel::Organization => "organization",
            EntityLabel::Product => "product",
            EntityLabel::Event => "event",
            EntityLabel::Person => "person",
            EntityLabel::Location => "location",
            EntityLabel::Date => "date",
            EntityLabel::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}
