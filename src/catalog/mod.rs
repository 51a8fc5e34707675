pub mod category;
pub mod item;
pub mod item_id;

use std::fmt;

use serde::{ Deserialize, Serialize };

pub use category::{ CategoryIndex, CategoryIndexEntry, CategoryMeta };
pub use item::{ ItemAccessibility, ItemMedia, ItemMeta, LearningItem, LearningItemList };
pub use item_id::ItemId;

/// Same text in the three catalog languages. All three are required;
/// language fallback is the consumer's problem, not the schema's.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Localized {
    pub en: String,
    pub hi: String,
    pub gu: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gradient {
    pub start: String, // Opaque CSS-style color strings, not validated here
    pub end: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")] // Match the JSON naming convention
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
