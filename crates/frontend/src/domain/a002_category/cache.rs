//! Кэш категорий каталога.
//!
//! Один экземпляр на приложение, передаётся через контекст (`App`), а не
//! живёт в глобальной переменной. Загружается при первом обращении.

use super::api;
use contracts::domain::a002_category::dto::CategoryDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CategoryCache {
    pub categories: RwSignal<Vec<CategoryDto>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    loaded: RwSignal<bool>,
}

impl CategoryCache {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            loaded: RwSignal::new(false),
        }
    }

    /// Запускает загрузку, если категорий ещё нет и загрузка не идёт.
    /// После ошибки повторный вызов пробует снова.
    pub fn ensure_loaded(&self) {
        if self.loaded.get_untracked() || self.loading.get_untracked() {
            return;
        }
        self.loading.set(true);
        self.error.set(None);

        let this = *self;
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(categories) => {
                    log::debug!("Loaded {} categories", categories.len());
                    this.categories.set(categories);
                    this.loaded.set(true);
                }
                Err(e) => {
                    log::warn!("Failed to fetch categories: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    /// Имя категории по id или slug
    pub fn name_of(&self, key: &str) -> Option<String> {
        self.categories.with(|list| find_name(list, key))
    }

    /// Варианты для селектора: первой идёт "Все категории" с пустым значением
    pub fn select_options(&self) -> Vec<(String, String)> {
        self.categories.with(|list| select_options(list))
    }
}

impl Default for CategoryCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_category_cache() -> CategoryCache {
    use_context::<CategoryCache>().expect("CategoryCache context not found")
}

fn find_name(categories: &[CategoryDto], key: &str) -> Option<String> {
    categories
        .iter()
        .find(|c| c.matches_key(key))
        .map(|c| c.name.clone())
}

fn select_options(categories: &[CategoryDto]) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Все категории".to_string())];
    options.extend(categories.iter().map(|c| (c.id.clone(), c.name.clone())));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<CategoryDto> {
        vec![
            CategoryDto {
                id: "c1".to_string(),
                name: "Обувь".to_string(),
                slug: Some("shoes".to_string()),
                parent: None,
            },
            CategoryDto {
                id: "c2".to_string(),
                name: "Сумки".to_string(),
                slug: None,
                parent: None,
            },
        ]
    }

    #[test]
    fn test_find_name_by_id_or_slug() {
        let list = categories();
        assert_eq!(find_name(&list, "shoes").as_deref(), Some("Обувь"));
        assert_eq!(find_name(&list, "c2").as_deref(), Some("Сумки"));
        assert_eq!(find_name(&list, "hats"), None);
    }

    #[test]
    fn test_select_options_start_with_all() {
        let options = select_options(&categories());
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], (String::new(), "Все категории".to_string()));
        assert_eq!(options[2].0, "c2");
    }
}
