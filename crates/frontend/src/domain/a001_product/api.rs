use crate::shared::api_utils::{api_base, get_json};
use crate::shared::catalog_query::ProductSource;
use async_trait::async_trait;
use contracts::domain::a001_product::dto::{ProductListRequest, ProductListResponse, ProductListing};

/// Каталог товаров через REST (`GET /api/products`)
#[derive(Clone, Debug)]
pub struct HttpProductSource {
    base_url: String,
}

impl HttpProductSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Источник с адресом backend из `api_base()`
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    /// URL списка товаров; пустые фильтры в строку запроса не попадают
    pub fn listing_url(&self, query: &ProductListRequest) -> Result<String, String> {
        let params = serde_qs::to_string(query)
            .map_err(|e| format!("Failed to encode query: {}", e))?;
        Ok(format!("{}/api/products?{}", self.base_url, params))
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self, query: &ProductListRequest) -> Result<ProductListing, String> {
        let url = self.listing_url(query)?;
        get_json::<ProductListResponse>(&url).await?.into_listing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::sort::{SortDirection, SortField};

    #[test]
    fn test_listing_url_default() {
        let source = HttpProductSource::new("http://localhost:3000");
        let url = source.listing_url(&ProductListRequest::default()).unwrap();
        assert_eq!(
            url,
            "http://localhost:3000/api/products?sortBy=createdAt&sortOrder=desc&page=1"
        );
    }

    #[test]
    fn test_listing_url_encodes_search() {
        let source = HttpProductSource::new("");
        let query = ProductListRequest {
            category: Some("shoes".to_string()),
            search: Some("red & blue".to_string()),
            sort_by: SortField::Name,
            sort_order: SortDirection::Asc,
            page: 2,
            ..ProductListRequest::default()
        };
        let url = source.listing_url(&query).unwrap();
        assert!(url.starts_with("/api/products?category=shoes&search=red"));
        assert!(!url.contains("red & blue"));
        assert!(url.ends_with("sortBy=name&sortOrder=asc&page=2"));
    }
}
