use serde::{Deserialize, Serialize};

/// Варианты сортировки результатов поиска
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Исходный порядок каталога
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Duration,
}

impl SortKey {
    /// Получить код сортировки (как в query string)
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Duration => "duration",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Rating",
            SortKey::Duration => "Duration",
        }
    }

    /// Получить все варианты сортировки
    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::Relevance,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Rating,
            SortKey::Duration,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "relevance" => Some(SortKey::Relevance),
            "price-low" => Some(SortKey::PriceLow),
            "price-high" => Some(SortKey::PriceHigh),
            "rating" => Some(SortKey::Rating),
            "duration" => Some(SortKey::Duration),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
