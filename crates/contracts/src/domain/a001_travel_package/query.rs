//! Поиск, фильтрация и сортировка пакетов.
//!
//! Все функции чистые: работают над срезом каталога и не меняют его.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::aggregate::TravelPackage;
use crate::enums::SortKey;

pub const DEFAULT_PRICE_MIN: f64 = 0.0;
pub const DEFAULT_PRICE_MAX: f64 = 50_000.0;
pub const DEFAULT_DURATION_MIN: u32 = 1;
pub const DEFAULT_DURATION_MAX: u32 = 20;
pub const DEFAULT_MIN_RATING: f64 = 0.0;

/// Trait для типов данных, поддерживающих текстовый поиск
pub trait Searchable {
    /// Проверяет вхождение термина; `term_lower` уже приведён к нижнему регистру
    fn matches_term(&self, term_lower: &str) -> bool;
}

impl Searchable for TravelPackage {
    fn matches_term(&self, term_lower: &str) -> bool {
        self.text_fields()
            .any(|field| field.to_lowercase().contains(term_lower))
    }
}

/// Числовые фильтры поиска (границы включительно)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub price_min: f64,
    pub price_max: f64,
    pub duration_min: u32,
    pub duration_max: u32,
    /// Пакеты без рейтинга считаются имеющими рейтинг 0
    pub min_rating: f64,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            duration_min: DEFAULT_DURATION_MIN,
            duration_max: DEFAULT_DURATION_MAX,
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

impl SearchFilters {
    pub fn matches(&self, pkg: &TravelPackage) -> bool {
        let matches_price = pkg.price >= self.price_min && pkg.price <= self.price_max;
        let matches_duration =
            pkg.duration >= self.duration_min && pkg.duration <= self.duration_max;
        let matches_rating = pkg.rating_or_zero() >= self.min_rating;

        matches_price && matches_duration && matches_rating
    }
}

/// Полный поисковый запрос
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub query: String,
    /// Уточнения предыдущих поисков; сопоставляются так же, как `query`
    pub extra_terms: Vec<String>,
    pub filters: SearchFilters,
    pub sort: SortKey,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_extra_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Непустые термины в нижнем регистре: `query` и затем уточнения
    pub fn terms(&self) -> Vec<String> {
        std::iter::once(&self.query)
            .chain(self.extra_terms.iter())
            .filter(|term| !term.is_empty())
            .map(|term| term.to_lowercase())
            .collect()
    }

    pub fn has_text(&self) -> bool {
        !self.terms().is_empty()
    }
}

/// Проверяет текстовый критерий: любой термин в любом поле.
/// Пустой набор терминов пропускает всё.
pub fn matches_text<T: Searchable>(item: &T, terms_lower: &[String]) -> bool {
    terms_lower.is_empty() || terms_lower.iter().any(|term| item.matches_term(term))
}

/// Фильтрует и сортирует пакеты по запросу.
///
/// Порядок результата до сортировки совпадает с порядком каталога,
/// сортировка стабильная.
pub fn search<'a>(packages: &'a [TravelPackage], query: &SearchQuery) -> Vec<&'a TravelPackage> {
    let terms = query.terms();

    let mut results: Vec<&TravelPackage> = packages
        .iter()
        .filter(|pkg| matches_text(*pkg, &terms))
        .filter(|pkg| query.filters.matches(pkg))
        .collect();

    sort_packages(&mut results, query.sort);
    results
}

/// Стабильная сортировка по ключу; `Relevance` оставляет порядок как есть
pub fn sort_packages(items: &mut [&TravelPackage], sort: SortKey) {
    match sort {
        SortKey::Relevance => {}
        SortKey::PriceLow => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Duration => items.sort_by_key(|pkg| pkg.duration),
        SortKey::Rating => items.sort_by(|a, b| compare_rating_desc(a, b)),
    }
}

fn compare_rating_desc(a: &TravelPackage, b: &TravelPackage) -> Ordering {
    b.rating_or_zero().total_cmp(&a.rating_or_zero())
}
