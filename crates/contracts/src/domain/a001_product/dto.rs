use crate::shared::sort::{SortDirection, SortField};
use serde::{Deserialize, Serialize};

// ============================================================================
// Product summary
// ============================================================================

/// Ссылка на категорию в карточке товара.
///
/// Backend отдаёт либо голый id, либо вложенный объект (populate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(String),
    Object {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl CategoryRef {
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Object { id, .. } => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::Id(_) => None,
            CategoryRef::Object { name, .. } => name.as_deref(),
        }
    }
}

/// DTO товара в списке каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryDto {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub price: f64,
    /// Цена до скидки (зачёркнутая)
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    /// Остаток; отсутствие поля трактуется как 0
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// ISO 8601
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ProductSummaryDto {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Процент скидки, если старая цена выше текущей
    pub fn discount_percent(&self) -> Option<u32> {
        let old = self.compare_at_price?;
        if old <= self.price || old <= 0.0 {
            return None;
        }
        Some((((old - self.price) / old) * 100.0).round() as u32)
    }
}

// ============================================================================
// Listing request / response
// ============================================================================

/// Запрос списка товаров (`GET /api/products?...`).
///
/// Незаданные ограничения не передаются вовсе: backend считает отсутствующее
/// поле неограниченным, поэтому пустые строки и `false` не сериализуются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub in_stock: bool,
    #[serde(default)]
    pub sort_by: SortField,
    #[serde(default)]
    pub sort_order: SortDirection,
    #[serde(default = "default_page")]
    pub page: u32,
}

impl Default for ProductListRequest {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            min_price: None,
            max_price: None,
            in_stock: false,
            sort_by: SortField::default(),
            sort_order: SortDirection::default(),
            page: default_page(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_page() -> u32 {
    1
}

/// Ответ backend со страницей товаров
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<ProductSummaryDto>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub pages: u32,
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default)]
    pub message: Option<String>,
}

impl ProductListResponse {
    /// Разворачивает конверт `success/message` в страницу товаров
    pub fn into_listing(self) -> Result<ProductListing, String> {
        if !self.success {
            return Err(self
                .message
                .unwrap_or_else(|| "Не удалось загрузить товары".to_string()));
        }
        Ok(ProductListing {
            items: self.data,
            total: self.total,
            total_pages: self.pages,
            current_page: self.current_page,
        })
    }
}

/// Страница каталога: заменяется целиком при каждой успешной загрузке
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub items: Vec<ProductSummaryDto>,
    pub total: u64,
    pub total_pages: u32,
    pub current_page: u32,
}
