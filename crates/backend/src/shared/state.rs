use contracts::domain::a001_travel_package::{PackageCatalog, SlugFallback};
use contracts::shared::pagination::DEFAULT_PAGE_SIZE;
use contracts::shared::sequence::QuerySequencer;
use std::sync::Arc;

use crate::domain::a001_travel_package::repository;
use crate::domain::a002_inquiry::sink::{self, InquirySink};
use crate::shared::config::Config;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PackageCatalog>,
    pub inquiries: Arc<dyn InquirySink>,
    /// Номера для поисковых запросов, пришедших без `seq`
    pub sequencer: Arc<QuerySequencer>,
    pub page_size: usize,
    pub slug_fallback: SlugFallback,
}

impl AppState {
    pub fn new(catalog: PackageCatalog, inquiries: Arc<dyn InquirySink>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            inquiries,
            sequencer: Arc::new(QuerySequencer::new()),
            page_size: DEFAULT_PAGE_SIZE,
            slug_fallback: SlugFallback::default(),
        }
    }

    /// Каталог и приёмник заявок по конфигурации
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog = repository::load_catalog(&config.catalog)?;
        let inquiries: Arc<dyn InquirySink> = Arc::from(sink::from_config(&config.inquiry)?);

        Ok(Self {
            page_size: config.catalog.page_size,
            slug_fallback: config.catalog.slug_fallback,
            ..Self::new(catalog, inquiries)
        })
    }
}
