use contracts::domain::a001_travel_package::catalog::SUGGEST_LIMIT;
use contracts::domain::a001_travel_package::{
    FeaturedPackages, GalleryCategory, PackageCardDto, PackageCatalog, SearchQuery, SlugFallback,
    TravelPackage,
};
use contracts::domain::a002_inquiry::PackageSummary;
use contracts::enums::{RegionTab, SortKey};
use contracts::shared::pagination::{Paginated, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Размер страницы галереи не зависит от настройки каталога
pub const GALLERY_PAGE_SIZE: usize = DEFAULT_PAGE_SIZE;

/// Пункт выпадающего списка или вкладки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    pub code: String,
    pub name: String,
}

/// Вкладки каталога и варианты сортировки для клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogOptions {
    pub tabs: Vec<OptionItem>,
    pub sorts: Vec<OptionItem>,
}

/// Результат поиска для страницы поиска
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Номер запроса: переданный клиентом либо выданный сервером
    pub seq: u64,
    pub query: SearchQuery,
    #[serde(flatten)]
    pub page: Paginated<PackageCardDto>,
}

/// Страница деталей пакета
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDetail {
    pub package: TravelPackage,
    /// Предзаполнение формы заявки
    pub booking: PackageSummary,
    /// Запрошенный slug не найден, показан пакет по умолчанию
    pub fallback: bool,
}

fn cards(packages: &[&TravelPackage]) -> Vec<PackageCardDto> {
    packages.iter().map(|pkg| PackageCardDto::from(*pkg)).collect()
}

/// Вкладка каталога с пагинацией
pub fn list_by_tab(
    catalog: &PackageCatalog,
    tab: RegionTab,
    page: usize,
    page_size: usize,
) -> Paginated<PackageCardDto> {
    let packages = catalog.by_region_tab(tab);
    Paginated::from_items(&cards(&packages), page, page_size)
}

/// Поиск; без номера страницы возвращаются все совпадения одной страницей
pub fn search(
    catalog: &PackageCatalog,
    query: SearchQuery,
    page: Option<usize>,
    page_size: usize,
    seq: u64,
) -> SearchResults {
    let results = cards(&catalog.search(&query));

    let page = match page {
        Some(page) => Paginated::from_items(&results, page, page_size),
        None => Paginated::from_items(&results, 1, results.len().max(1)),
    };

    tracing::debug!(
        "Search '{}' (+{} refs, sort {}) -> {} packages",
        query.query,
        query.extra_terms.len(),
        query.sort,
        page.total
    );

    SearchResults { seq, query, page }
}

/// Вкладки и сортировки с подписями
pub fn options() -> CatalogOptions {
    let item = |code: &str, name: &str| OptionItem {
        code: code.to_string(),
        name: name.to_string(),
    };

    CatalogOptions {
        tabs: RegionTab::all()
            .iter()
            .map(|tab| item(tab.code(), tab.display_name()))
            .collect(),
        sorts: SortKey::all()
            .iter()
            .map(|sort| item(sort.code(), sort.display_name()))
            .collect(),
    }
}

/// Быстрый поиск для навигационной панели
pub fn suggest(catalog: &PackageCatalog, input: &str) -> Vec<PackageCardDto> {
    cards(&catalog.suggest(input, SUGGEST_LIMIT))
}

/// Подборка для главной страницы
pub fn featured(catalog: &PackageCatalog) -> FeaturedPackages {
    catalog.featured()
}

/// Детали пакета с учётом политики подстановки
pub fn detail(catalog: &PackageCatalog, slug: &str, fallback: SlugFallback) -> Option<PackageDetail> {
    let lookup = catalog.resolve_slug(slug, fallback);
    let fallback = lookup.is_fallback();
    if fallback {
        tracing::warn!("Package '{}' not found, serving fallback package", slug);
    }

    lookup.package().map(|pkg| PackageDetail {
        package: pkg.clone(),
        booking: pkg.summary(),
        fallback,
    })
}

/// Изображения галереи пакета постранично.
/// `None`, если пакета с таким slug нет (подстановка здесь не применяется).
pub fn gallery(
    catalog: &PackageCatalog,
    slug: &str,
    category: GalleryCategory,
    page: usize,
    page_size: usize,
) -> Option<Paginated<String>> {
    let pkg = catalog.lookup_by_slug(slug)?;
    Some(Paginated::from_items(pkg.gallery_images(category), page, page_size))
}
