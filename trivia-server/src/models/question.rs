//! Question and category records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A trivia question as stored and as rendered in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id; not guaranteed to reference an existing category
    pub category: i32,
    pub difficulty: i32,
}

/// A question category (read-only through the API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    /// Display name, stored in the `type` column
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category id to display name, ordered by id
pub type CategoryMap = BTreeMap<i32, String>;

impl Category {
    /// Collect categories into the id -> type mapping used by responses.
    pub fn to_map(categories: &[Category]) -> CategoryMap {
        categories
            .iter()
            .map(|c| (c.id, c.kind.clone()))
            .collect()
    }
}

/// Fields for a question insert; the id is generated by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_type_field() {
        let category = Category {
            id: 3,
            kind: "Geography".into(),
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["type"], "Geography");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn category_map_keys_render_as_strings() {
        let categories = vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ];
        let json = serde_json::to_value(Category::to_map(&categories)).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }
}
