use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::HashSet;
use thiserror::Error;

use super::aggregate::TravelPackage;
use super::query::{self, SearchQuery};
use crate::enums::RegionTab;

/// Сколько пакетов каждого региона показывается на главной
pub const FEATURED_PER_REGION: usize = 3;
/// Лимит выпадающего списка быстрого поиска
pub const SUGGEST_LIMIT: usize = 5;

/// Ошибки построения каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("Duplicate package id: {0}")]
    DuplicateId(u32),

    #[error("Invalid package '{slug}': {message}")]
    InvalidRecord { slug: String, message: String },
}

/// Политика для отсутствующего slug на странице деталей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlugFallback {
    /// Вернуть первый пакет каталога, пометив ответ как подстановку
    #[default]
    First,
    /// Сообщить об отсутствии
    NotFound,
}

/// Результат поиска пакета по slug с учётом политики подстановки
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlugLookup<'a> {
    Found(&'a TravelPackage),
    Fallback(&'a TravelPackage),
    NotFound,
}

impl<'a> SlugLookup<'a> {
    pub fn package(&self) -> Option<&'a TravelPackage> {
        match self {
            SlugLookup::Found(pkg) | SlugLookup::Fallback(pkg) => Some(pkg),
            SlugLookup::NotFound => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SlugLookup::Fallback(_))
    }
}

/// Подборка для главной страницы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedPackages {
    #[serde(rename = "southeastAsia")]
    pub southeast_asia: Vec<TravelPackage>,
    pub india: Vec<TravelPackage>,
}

/// Неизменяемая таблица пакетов с индексом по slug.
///
/// Строится один раз и передаётся потребителям явно.
#[derive(Debug, Clone, Default)]
pub struct PackageCatalog {
    packages: Vec<TravelPackage>,
    slug_index: HashMap<String, usize>,
}

impl PackageCatalog {
    /// Построить каталог с проверкой инвариантов
    pub fn new(packages: Vec<TravelPackage>) -> Result<Self, CatalogError> {
        let mut slug_index = HashMap::with_capacity(packages.len());
        let mut ids = HashSet::with_capacity(packages.len());

        for (idx, pkg) in packages.iter().enumerate() {
            pkg.validate().map_err(|message| CatalogError::InvalidRecord {
                slug: pkg.slug.clone(),
                message,
            })?;
            if !ids.insert(pkg.id) {
                return Err(CatalogError::DuplicateId(pkg.id.value()));
            }
            if slug_index.insert(pkg.slug.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateSlug(pkg.slug.clone()));
            }
        }

        Ok(Self {
            packages,
            slug_index,
        })
    }

    /// Разбор JSON-массива пакетов
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let packages: Vec<TravelPackage> = serde_json::from_str(json)?;
        Self::new(packages)
    }

    pub fn all(&self) -> &[TravelPackage] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Поиск с фильтрами и сортировкой
    pub fn search(&self, query: &SearchQuery) -> Vec<&TravelPackage> {
        query::search(&self.packages, query)
    }

    pub fn lookup_by_slug(&self, slug: &str) -> Option<&TravelPackage> {
        self.slug_index.get(slug).map(|&idx| &self.packages[idx])
    }

    /// Поиск по slug с применением политики подстановки
    pub fn resolve_slug(&self, slug: &str, fallback: SlugFallback) -> SlugLookup<'_> {
        if let Some(pkg) = self.lookup_by_slug(slug) {
            return SlugLookup::Found(pkg);
        }
        match (fallback, self.packages.first()) {
            (SlugFallback::First, Some(first)) => SlugLookup::Fallback(first),
            _ => SlugLookup::NotFound,
        }
    }

    /// Пакеты вкладки каталога в исходном порядке
    pub fn by_region_tab(&self, tab: RegionTab) -> Vec<&TravelPackage> {
        self.packages
            .iter()
            .filter(|pkg| tab.includes(&pkg.region))
            .collect()
    }

    /// Первые пакеты Юго-Восточной Азии и Индии для главной страницы
    pub fn featured(&self) -> FeaturedPackages {
        let take = |tab: RegionTab| -> Vec<TravelPackage> {
            self.by_region_tab(tab)
                .into_iter()
                .take(FEATURED_PER_REGION)
                .cloned()
                .collect()
        };

        FeaturedPackages {
            southeast_asia: take(RegionTab::SoutheastAsia),
            india: take(RegionTab::India),
        }
    }

    /// Быстрый поиск для выпадающего списка.
    /// Пустой (после trim) запрос не возвращает ничего.
    pub fn suggest(&self, input: &str, limit: usize) -> Vec<&TravelPackage> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let query = SearchQuery::new(trimmed)
            .with_filters(query::SearchFilters {
                price_min: 0.0,
                price_max: f64::INFINITY,
                duration_min: 0,
                duration_max: u32::MAX,
                min_rating: f64::NEG_INFINITY,
            });

        let mut results = self.search(&query);
        results.truncate(limit);
        results
    }
}
