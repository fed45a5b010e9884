//! Набор фильтров каталога: категория, поиск, цена, наличие.
//!
//! Значения хранятся так, как их ввёл пользователь. Цена приводится к числу
//! только при синтезе запроса, сброс страницы тоже делает синтезатор.

/// Состояние фильтров каталога
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Пустая строка = все категории
    pub category: String,
    pub search: String,
    /// Сырой текст из поля ввода
    pub min_price: String,
    pub max_price: String,
    pub in_stock_only: bool,
}

/// Активный фильтр (для чипов над списком)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    Category,
    Search,
    MinPrice,
    MaxPrice,
    InStock,
}

impl FilterState {
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_min_price(&mut self, raw: impl Into<String>) {
        self.min_price = raw.into();
    }

    pub fn set_max_price(&mut self, raw: impl Into<String>) {
        self.max_price = raw.into();
    }

    pub fn set_in_stock_only(&mut self, value: bool) {
        self.in_stock_only = value;
    }

    /// Сбрасывает все поля к значениям по умолчанию
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Сбрасывает одно поле (крестик на чипе фильтра)
    pub fn clear_field(&mut self, field: FilterField) {
        match field {
            FilterField::Category => self.category.clear(),
            FilterField::Search => self.search.clear(),
            FilterField::MinPrice => self.min_price.clear(),
            FilterField::MaxPrice => self.max_price.clear(),
            FilterField::InStock => self.in_stock_only = false,
        }
    }

    pub fn category_filter(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn search_filter(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    pub fn min_price_value(&self) -> Option<f64> {
        parse_price(&self.min_price)
    }

    pub fn max_price_value(&self) -> Option<f64> {
        parse_price(&self.max_price)
    }

    /// Фильтры, которые реально попадут в запрос.
    ///
    /// Категория учитывается только если страница не задаёт её маршрутом.
    pub fn active_fields(&self, include_category: bool) -> Vec<FilterField> {
        let mut fields = Vec::new();
        if include_category && self.category_filter().is_some() {
            fields.push(FilterField::Category);
        }
        if self.search_filter().is_some() {
            fields.push(FilterField::Search);
        }
        if self.min_price_value().is_some() {
            fields.push(FilterField::MinPrice);
        }
        if self.max_price_value().is_some() {
            fields.push(FilterField::MaxPrice);
        }
        if self.in_stock_only {
            fields.push(FilterField::InStock);
        }
        fields
    }

    pub fn active_count(&self, include_category: bool) -> usize {
        self.active_fields(include_category).len()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Разбор цены из поля ввода.
///
/// Пустой, нечисловой, бесконечный или отрицательный ввод = ограничения нет.
/// Запятая принимается как десятичный разделитель.
pub fn parse_price(raw: &str) -> Option<f64> {
    let normalized = non_empty(raw)?.replace(',', ".");
    let value: f64 = normalized.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}
