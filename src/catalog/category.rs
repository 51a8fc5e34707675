use serde::{ Deserialize, Serialize };

use crate::{ catalog::{ Difficulty, Gradient, Localized }, core::CatalogError };

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryMeta {
    pub category: String,
    pub order: u32, // The category's own order among sibling categories
}

/// One category in the top-level index document. Unlike learning items,
/// categories are always numerically keyed, so `id` is a plain integer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CategoryIndexEntry {
    pub index: u32, // Array position at decode time, maintained upstream
    pub id: u32,
    pub title: Localized,
    pub slug: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>, // Absent means no image, which is valid
    pub icon: String,
    pub description: Localized,
    pub tags: Vec<String>,
    pub meta: CategoryMeta,
    pub primary_color: String,
    pub secondary_color: String,
    pub gradient: Gradient,
    pub difficulty: Difficulty,
    pub featured: bool,
    pub locale: Vec<String>, // Advisory only, not checked against en/hi/gu
    pub alt_title: Localized, // Authored independently, not derived from title
}

pub type CategoryIndex = Vec<CategoryIndexEntry>;

pub fn parse_category_index(json: &str) -> Result<CategoryIndex, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
