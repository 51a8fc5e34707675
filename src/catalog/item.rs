use std::collections::HashMap;

use serde::{ Deserialize, Serialize };

use crate::{ catalog::{ item_id::ItemId, Localized }, core::CatalogError };

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemMedia {
    pub image: String, // Path or URL, existence not checked at this layer
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemAccessibility {
    #[serde(rename = "altText")]
    pub alt_text: Localized,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemMeta {
    pub category: String,
    pub order: u32, // Display order among siblings; ties are the renderer's call
}

/// One piece of learnable content, decoded once from a category's item
/// document and immutable afterward. `id` and `slug` are parallel identity
/// channels; keeping them in agreement is the feed builder's job.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LearningItem {
    pub id: ItemId,
    pub slug: String,
    pub name: Localized,
    pub media: ItemMedia,
    pub meta: ItemMeta,
    pub tags: Vec<String>,
    pub accessibility: ItemAccessibility,
}

pub type LearningItemList = Vec<LearningItem>;

pub fn parse_learning_items(json: &str) -> Result<LearningItemList, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Map id -> item for membership checks and joins. Duplicate ids keep the
/// first occurrence (feeds are supposed to be unique per category).
pub fn index_items_by_id(items: &[LearningItem]) -> HashMap<&ItemId, &LearningItem> {
    let mut by_id = HashMap::new();
    for item in items {
        by_id.entry(&item.id).or_insert(item);
    }
    by_id
}

pub fn find_item_by_slug<'a>(items: &'a [LearningItem], slug: &str) -> Option<&'a LearningItem> {
    items.iter().find(|item| item.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTING_ITEM: &str =
        r#"{
        "id": 3,
        "slug": "counting-1",
        "name": {"en": "Count", "hi": "गिनती", "gu": "ગણતરી"},
        "media": {"image": "img.png"},
        "meta": {"category": "math", "order": 1},
        "tags": ["numbers"],
        "accessibility": {"altText": {"en": "a", "hi": "a", "gu": "a"}}
    }"#;

    fn string_id_item() -> LearningItem {
        LearningItem {
            id: ItemId::Text("shapes-intro".to_string()),
            slug: "shapes-intro".to_string(),
            name: Localized {
                en: "Shapes".to_string(),
                hi: "आकार".to_string(),
                gu: "આકારો".to_string(),
            },
            media: ItemMedia { image: "shapes.png".to_string() },
            meta: ItemMeta { category: "geometry".to_string(), order: 2 },
            tags: vec!["shapes".to_string(), "shapes".to_string()],
            accessibility: ItemAccessibility {
                alt_text: Localized {
                    en: "shape chart".to_string(),
                    hi: "आकार".to_string(),
                    gu: "આકાર".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_decode_then_reencode_matches_source_document() {
        let item: LearningItem = serde_json::from_str(COUNTING_ITEM).unwrap();
        assert_eq!(item.id, ItemId::Int(3));
        assert_eq!(item.slug, "counting-1");
        assert_eq!(item.name.gu, "ગણતરી");
        assert_eq!(item.meta.order, 1);

        let reencoded = serde_json::to_value(&item).unwrap();
        let original: serde_json::Value = serde_json::from_str(COUNTING_ITEM).unwrap();
        assert_eq!(reencoded, original);
    }

    #[test]
    fn test_round_trip_for_both_id_variants() {
        let numeric: LearningItem = serde_json::from_str(COUNTING_ITEM).unwrap();
        let encoded = serde_json::to_string(&numeric).unwrap();
        let back: LearningItem = serde_json::from_str(&encoded).unwrap();
        assert_eq!(back, numeric);

        let text = string_id_item();
        let encoded = serde_json::to_string(&text).unwrap();
        let back: LearningItem = serde_json::from_str(&encoded).unwrap();
        assert_eq!(back, text);
        assert_eq!(back.id, ItemId::Text("shapes-intro".to_string()));
    }

    #[test]
    fn test_missing_slug_is_a_decode_error() {
        let mut doc: serde_json::Value = serde_json::from_str(COUNTING_ITEM).unwrap();
        doc.as_object_mut().unwrap().remove("slug");

        let err = serde_json::from_value::<LearningItem>(doc).unwrap_err();
        assert!(err.to_string().contains("slug"), "error should name the missing key: {}", err);
    }

    #[test]
    fn test_parse_learning_items_list() {
        let json = format!("[{}]", COUNTING_ITEM);
        let items = parse_learning_items(&json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].tags, vec!["numbers".to_string()]);

        assert!(parse_learning_items("{\"not\": \"a list\"}").is_err());
    }

    #[test]
    fn test_lookup_helpers() {
        let numeric: LearningItem = serde_json::from_str(COUNTING_ITEM).unwrap();
        let items = vec![numeric.clone(), string_id_item()];

        let by_id = index_items_by_id(&items);
        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id[&ItemId::Int(3)].slug, "counting-1");
        // Integer 3 and string "3" would be distinct keys
        assert!(!by_id.contains_key(&ItemId::Text("3".to_string())));

        assert_eq!(find_item_by_slug(&items, "shapes-intro").unwrap().meta.order, 2);
        assert!(find_item_by_slug(&items, "missing").is_none());
    }
}
