use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_travel_package::{
    FeaturedPackages, GalleryCategory, PackageCardDto, SearchFilters, SearchQuery,
};
use contracts::enums::{RegionTab, SortKey};
use contracts::shared::pagination::Paginated;
use serde::Deserialize;

use crate::domain::a001_travel_package::service::{
    self, CatalogOptions, PackageDetail, SearchResults, GALLERY_PAGE_SIZE,
};
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TabParams {
    #[serde(alias = "region")]
    pub tab: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    /// Уточнения через запятую
    pub refs: Option<String>,
    pub sort: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub duration_min: Option<u32>,
    pub duration_max: Option<u32>,
    pub min_rating: Option<f64>,
    pub page: Option<usize>,
    pub seq: Option<u64>,
}

impl SearchParams {
    /// Запрос для движка; `None`, если граница фильтра не число (NaN, inf)
    fn into_query(self) -> Option<SearchQuery> {
        let bounds = [self.price_min, self.price_max, self.min_rating];
        if bounds.iter().flatten().any(|v| !v.is_finite()) {
            return None;
        }

        let defaults = SearchFilters::default();
        let filters = SearchFilters {
            price_min: self.price_min.unwrap_or(defaults.price_min),
            price_max: self.price_max.unwrap_or(defaults.price_max),
            duration_min: self.duration_min.unwrap_or(defaults.duration_min),
            duration_max: self.duration_max.unwrap_or(defaults.duration_max),
            min_rating: self.min_rating.unwrap_or(defaults.min_rating),
        };

        // Неизвестная сортировка = по релевантности
        let sort = self
            .sort
            .as_deref()
            .and_then(SortKey::from_code)
            .unwrap_or_default();

        let refs = self
            .refs
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        Some(
            SearchQuery::new(self.q.trim())
                .with_extra_terms(refs)
                .with_filters(filters)
                .with_sort(sort),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
}

/// GET /api/packages?tab=&page=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TabParams>,
) -> Json<Paginated<PackageCardDto>> {
    let tab = params
        .tab
        .as_deref()
        .map(RegionTab::from_query)
        .unwrap_or_default();

    Json(service::list_by_tab(
        &state.catalog,
        tab,
        params.page.unwrap_or(1),
        state.page_size,
    ))
}

/// GET /api/packages/options
pub async fn options() -> Json<CatalogOptions> {
    Json(service::options())
}

/// GET /api/packages/featured
pub async fn featured(State(state): State<AppState>) -> Json<FeaturedPackages> {
    Json(service::featured(&state.catalog))
}

/// GET /api/packages/search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, StatusCode> {
    let (client_seq, page) = (params.seq, params.page);
    let query = params.into_query().ok_or(StatusCode::BAD_REQUEST)?;
    let seq = client_seq.unwrap_or_else(|| state.sequencer.issue());

    Ok(Json(service::search(
        &state.catalog,
        query,
        page,
        state.page_size,
        seq,
    )))
}

/// GET /api/packages/suggest?q=
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Json<Vec<PackageCardDto>> {
    Json(service::suggest(&state.catalog, &params.q))
}

/// GET /api/package/:slug
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PackageDetail>, StatusCode> {
    match service::detail(&state.catalog, &slug, state.slug_fallback) {
        Some(v) => Ok(Json(v)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// GET /api/package/:slug/gallery/:category?page=
pub async fn gallery(
    State(state): State<AppState>,
    Path((slug, category)): Path<(String, String)>,
    Query(params): Query<PageParams>,
) -> Result<Json<Paginated<String>>, StatusCode> {
    let category = GalleryCategory::from_code(&category).ok_or(StatusCode::BAD_REQUEST)?;

    match service::gallery(
        &state.catalog,
        &slug,
        category,
        params.page.unwrap_or(1),
        GALLERY_PAGE_SIZE,
    ) {
        Some(v) => Ok(Json(v)),
        None => Err(StatusCode::NOT_FOUND),
    }
}
