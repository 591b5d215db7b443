//! Постраничный вывод поверх результатов каталога.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Размер страницы каталога и галереи по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Сколько соседних страниц показывать вокруг текущей
const VISIBLE_DELTA: usize = 2;

const ELLIPSIS: &str = "...";

/// Количество страниц (0 для пустого списка)
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Приводит номер страницы (с 1) к допустимому диапазону
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Срез `[(page-1)*size : page*size]`; за пределами списка пустой
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Элемент панели пагинации: номер страницы или разрыв
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(n) => serializer.serialize_u64(*n as u64),
            PageMarker::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMarker {
    Page(usize),
    Text(String),
}

impl<'de> Deserialize<'de> for PageMarker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawMarker::deserialize(deserializer)? {
            RawMarker::Page(n) => Ok(PageMarker::Page(n)),
            RawMarker::Text(s) if s == ELLIPSIS => Ok(PageMarker::Ellipsis),
            RawMarker::Text(s) => Err(D::Error::custom(format!("unexpected page marker: {s}"))),
        }
    }
}

/// Номера страниц для панели пагинации.
///
/// Первая и последняя страницы видны всегда, вокруг текущей показываются
/// соседние, разрывы заменяются многоточием. Для одной страницы панель пустая.
pub fn visible_pages(current: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let first_neighbour = current.saturating_sub(VISIBLE_DELTA).max(2);
    let last_neighbour = (current + VISIBLE_DELTA).min(total_pages - 1);

    let mut pages = vec![PageMarker::Page(1)];
    if current > VISIBLE_DELTA + 2 {
        pages.push(PageMarker::Ellipsis);
    }

    pages.extend((first_neighbour..=last_neighbour).map(PageMarker::Page));

    if current + VISIBLE_DELTA + 1 < total_pages {
        pages.push(PageMarker::Ellipsis);
    }
    pages.push(PageMarker::Page(total_pages));

    pages
}

/// Страница результатов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub visible_pages: Vec<PageMarker>,
}

impl<T: Clone> Paginated<T> {
    /// Нарезать полный список; номер страницы приводится к допустимому
    pub fn from_items(all: &[T], page: usize, page_size: usize) -> Self {
        let total = all.len();
        let total_pages = total_pages(total, page_size);
        let page = clamp_page(page, total_pages);

        Self {
            items: page_slice(all, page, page_size).to_vec(),
            total,
            page,
            page_size,
            total_pages,
            visible_pages: visible_pages(page, total_pages),
        }
    }
}
