use crate::shared::api_utils::{api_url, get_json};
use contracts::domain::a002_category::dto::{CategoryDto, CategoryListResponse};

/// Загрузить все категории каталога
pub async fn fetch_categories() -> Result<Vec<CategoryDto>, String> {
    get_json::<CategoryListResponse>(&api_url("/api/categories"))
        .await?
        .into_categories()
}
