use anyhow::Context;
use contracts::domain::a001_travel_package::PackageCatalog;

use crate::shared::config::{resolve_path, CatalogConfig};

/// Встроенный набор пакетов
const EMBEDDED_DATASET: &str = include_str!("../../../data/packages.json");

/// Загрузка каталога один раз при старте.
///
/// Если `dataset_path` задан, файл обязан существовать и быть корректным.
pub fn load_catalog(config: &CatalogConfig) -> anyhow::Result<PackageCatalog> {
    let catalog = match &config.dataset_path {
        Some(path) => {
            let resolved = resolve_path(path);
            tracing::info!("Loading package dataset from: {}", resolved.display());
            let contents = std::fs::read_to_string(&resolved)
                .with_context(|| format!("Failed to read dataset {}", resolved.display()))?;
            PackageCatalog::from_json(&contents)
                .with_context(|| format!("Invalid dataset {}", resolved.display()))?
        }
        None => {
            tracing::info!("Using embedded package dataset");
            PackageCatalog::from_json(EMBEDDED_DATASET).context("Invalid embedded dataset")?
        }
    };

    tracing::info!("Catalog loaded: {} packages", catalog.len());
    Ok(catalog)
}
