//! Сортировка списков: поле + направление и их составной ключ (`price-asc`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Поле сортировки каталога
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
    Price,
    Name,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::CreatedAt, SortField::Price, SortField::Name];

    /// Имя поля так, как его ожидает backend (`sortBy`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Price => "price",
            SortField::Name => "name",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortField::CreatedAt),
            "price" => Ok(SortField::Price),
            "name" => Ok(SortField::Name),
            other => Err(format!("Unknown sort field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("Unknown sort direction: {}", other)),
        }
    }
}

/// Составной ключ сортировки для селектора: `"<field>-<direction>"`
///
/// По умолчанию `createdAt-desc` (сначала новые).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field.as_str(), self.direction.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .rsplit_once('-')
            .ok_or_else(|| format!("Invalid sort key: {}", s))?;
        Ok(Self {
            field: field.parse()?,
            direction: direction.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_display() {
        let key = SortKey::new(SortField::Price, SortDirection::Asc);
        assert_eq!(key.to_string(), "price-asc");
        assert_eq!(SortKey::default().to_string(), "createdAt-desc");
    }

    #[test]
    fn test_sort_key_parse() {
        let key: SortKey = "name-desc".parse().unwrap();
        assert_eq!(key.field, SortField::Name);
        assert_eq!(key.direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_key_parse_invalid() {
        assert!("price".parse::<SortKey>().is_err());
        assert!("rating-asc".parse::<SortKey>().is_err());
        assert!("price-up".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_field_wire_names() {
        assert_eq!(
            serde_json::to_string(&SortField::CreatedAt).unwrap(),
            "\"createdAt\""
        );
        assert_eq!(serde_json::to_string(&SortDirection::Asc).unwrap(), "\"asc\"");
    }
}
