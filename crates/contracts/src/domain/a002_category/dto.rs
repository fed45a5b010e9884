use serde::{Deserialize, Serialize};

/// DTO категории каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
}

impl CategoryDto {
    /// Совпадение по id или slug (маршрут `/category/:category` допускает оба)
    pub fn matches_key(&self, key: &str) -> bool {
        self.id == key || self.slug.as_deref() == Some(key)
    }
}

/// Ответ `GET /api/categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<CategoryDto>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CategoryListResponse {
    pub fn into_categories(self) -> Result<Vec<CategoryDto>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "Не удалось загрузить категории".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_key() {
        let category = CategoryDto {
            id: "c1".to_string(),
            name: "Обувь".to_string(),
            slug: Some("shoes".to_string()),
            parent: None,
        };
        assert!(category.matches_key("c1"));
        assert!(category.matches_key("shoes"));
        assert!(!category.matches_key("bags"));
    }

    #[test]
    fn test_category_response() {
        let json = r#"{"success": true, "data": [{"_id": "c1", "name": "Обувь", "slug": "shoes"}]}"#;
        let response: CategoryListResponse = serde_json::from_str(json).unwrap();
        let categories = response.into_categories().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "c1");
    }
}
