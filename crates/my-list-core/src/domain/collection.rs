//! Collection Summary
//!
//! Named groupings shown in the navigation panel. Presentation data only:
//! nothing here is persisted or derived from the item list.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Accent color of a collection badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Violet,
    Blue,
    Green,
    Orange,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Violet => "violet",
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Orange => "orange",
        }
    }
}

/// A collection entry in the navigation panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: String,
    pub name: String,
    pub item_count: u32,
    pub color_tag: ColorTag,
}

impl CollectionSummary {
    pub fn new(id: &str, name: &str, item_count: u32, color_tag: ColorTag) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            item_count,
            color_tag,
        }
    }
}

impl Entity for CollectionSummary {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Placeholder collections listed in the panel
pub fn demo_collections() -> Vec<CollectionSummary> {
    vec![
        CollectionSummary::new("1", "Shopping List", 5, ColorTag::Violet),
        CollectionSummary::new("2", "Work Tasks", 3, ColorTag::Blue),
        CollectionSummary::new("3", "Home Projects", 8, ColorTag::Green),
        CollectionSummary::new("4", "Travel Plans", 2, ColorTag::Orange),
    ]
}
