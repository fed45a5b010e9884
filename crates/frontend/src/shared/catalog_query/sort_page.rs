//! Селектор сортировки и номер страницы (1-based)

use contracts::shared::sort::{SortDirection, SortField, SortKey};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.field = field;
        self.direction = direction;
    }

    /// Клик по тому же полю меняет направление, по другому - ставит asc
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn key(&self) -> SortKey {
        SortKey::new(self.field, self.direction)
    }

    /// Применяет составной ключ из `<select>`; некорректный ключ игнорируется
    pub fn set_key(&mut self, raw: &str) -> bool {
        match raw.parse::<SortKey>() {
            Ok(key) => {
                self.set_sort(key.field, key.direction);
                true
            }
            Err(e) => {
                log::warn!("Ignoring sort key: {}", e);
                false
            }
        }
    }
}

/// Варианты для селектора сортировки: (ключ, подпись)
pub fn sort_options() -> Vec<(String, String)> {
    [
        (SortField::CreatedAt, SortDirection::Desc, "Сначала новые"),
        (SortField::CreatedAt, SortDirection::Asc, "Сначала старые"),
        (SortField::Price, SortDirection::Asc, "Сначала дешёвые"),
        (SortField::Price, SortDirection::Desc, "Сначала дорогие"),
        (SortField::Name, SortDirection::Asc, "По названию, А-Я"),
        (SortField::Name, SortDirection::Desc, "По названию, Я-А"),
    ]
    .into_iter()
    .map(|(field, direction, label)| (SortKey::new(field, direction).to_string(), label.to_string()))
    .collect()
}

/// Номер страницы. Размер страницы задаёт сервер.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub page: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::first()
    }
}

impl PageState {
    pub fn first() -> Self {
        Self { page: 1 }
    }

    /// Границы `[1, total_pages]` проверяет вызывающий код
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort() {
        let mut sort = SortState::default();
        sort.toggle(SortField::Price);
        assert_eq!(sort.key().to_string(), "price-asc");
        sort.toggle(SortField::Price);
        assert_eq!(sort.key().to_string(), "price-desc");
        sort.toggle(SortField::Name);
        assert_eq!(sort.key().to_string(), "name-asc");
    }

    #[test]
    fn test_set_key() {
        let mut sort = SortState::default();
        assert!(sort.set_key("name-desc"));
        assert_eq!(sort.field, SortField::Name);
        assert!(!sort.set_key("garbage"));
        assert_eq!(sort.field, SortField::Name);
    }

    #[test]
    fn test_sort_options_parse_back() {
        for (key, _) in sort_options() {
            let mut sort = SortState::default();
            assert!(sort.set_key(&key), "{key}");
        }
    }
}
