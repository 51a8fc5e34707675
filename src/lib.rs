pub mod catalog;
pub mod core;

pub use catalog::{
    category::{ parse_category_index, CategoryIndex, CategoryIndexEntry, CategoryMeta },
    item::{
        find_item_by_slug,
        index_items_by_id,
        parse_learning_items,
        ItemAccessibility,
        ItemMedia,
        ItemMeta,
        LearningItem,
        LearningItemList,
    },
    item_id::ItemId,
    Difficulty,
    Gradient,
    Localized,
};
pub use crate::core::CatalogError;
