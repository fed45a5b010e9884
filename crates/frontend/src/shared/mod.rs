pub mod api_utils;
pub mod catalog_query;
pub mod components;
pub mod icons;
pub mod number_format;
