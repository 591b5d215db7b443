use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::a002_inquiry::PackageSummary;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор туристического пакета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub u32);

impl PackageId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Туристический пакет (одна позиция каталога)
///
/// Обязательные поля участвуют в поиске и фильтрации, остальные нужны
/// только странице деталей и по умолчанию пустые.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: PackageId,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub nation: Vec<String>,
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub region: String,
    pub price: f64,
    pub duration: u32,
    /// Отсутствующий или некорректный рейтинг читается как `None`
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Gallery>,
    #[serde(rename = "relatedPackages", default)]
    pub related_packages: Vec<RelatedPackage>,
}

impl TravelPackage {
    /// Рейтинг для сравнения и фильтрации: отсутствующий считается нулём
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Все текстовые поля, по которым выполняется поиск
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.nation.iter().map(String::as_str))
            .chain(self.location.iter().map(String::as_str))
            .chain(std::iter::once(self.continent.as_str()))
            .chain(std::iter::once(self.region.as_str()))
    }

    /// Краткие данные пакета для заявки
    pub fn summary(&self) -> PackageSummary {
        PackageSummary {
            title: self.title.clone(),
            price: self.price,
            duration: self.duration,
        }
    }

    /// Изображения галереи выбранной категории
    pub fn gallery_images(&self, category: GalleryCategory) -> &[String] {
        match &self.gallery {
            Some(gallery) => gallery.images(category),
            None => &[],
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.slug.trim().is_empty() {
            return Err(format!("Package {} has an empty slug", self.id.value()));
        }
        if self.title.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("Price must be a non-negative number, got {}", self.price));
        }
        if self.duration < 1 {
            return Err("Duration must be at least one day".into());
        }
        Ok(())
    }
}

/// Сколько локаций показывается на карточке
const CARD_LOCATIONS: usize = 2;

/// Карточка пакета для списков (каталог, поиск, главная)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageCardDto {
    pub id: PackageId,
    pub slug: String,
    pub title: String,
    pub nation: Vec<String>,
    /// Первые локации маршрута
    pub locations: Vec<String>,
    /// Сколько локаций не поместилось на карточку
    pub more_locations: usize,
    pub region: String,
    pub price: f64,
    pub duration: u32,
    pub rating: Option<f64>,
    pub image: Option<String>,
    pub badge: String,
}

impl From<&TravelPackage> for PackageCardDto {
    fn from(pkg: &TravelPackage) -> Self {
        let badge = if pkg.region == "Southeast Asia" {
            "Popular"
        } else {
            "Heritage"
        };

        Self {
            id: pkg.id,
            slug: pkg.slug.clone(),
            title: pkg.title.clone(),
            nation: pkg.nation.clone(),
            locations: pkg.location.iter().take(CARD_LOCATIONS).cloned().collect(),
            more_locations: pkg.location.len().saturating_sub(CARD_LOCATIONS),
            region: pkg.region.clone(),
            price: pkg.price,
            duration: pkg.duration,
            rating: pkg.rating,
            image: pkg.image.clone(),
            badge: badge.to_string(),
        }
    }
}

/// День программы тура
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub meals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,
}

/// Категории галереи на странице деталей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Destination,
    Stay,
    Activity,
}

impl GalleryCategory {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "destination" => Some(GalleryCategory::Destination),
            "stay" => Some(GalleryCategory::Stay),
            "activity" => Some(GalleryCategory::Activity),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub destination: Vec<String>,
    #[serde(default)]
    pub stay: Vec<String>,
    #[serde(default)]
    pub activity: Vec<String>,
}

impl Gallery {
    pub fn images(&self, category: GalleryCategory) -> &[String] {
        match category {
            GalleryCategory::Destination => &self.destination,
            GalleryCategory::Stay => &self.stay,
            GalleryCategory::Activity => &self.activity,
        }
    }
}

/// Ссылка на похожий пакет
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedPackage {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// Рейтинг может прийти числом, строкой или мусором
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|r| r.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(rating: &str) -> String {
        format!(
            r#"{{"id": 7, "slug": "goa-1", "title": "Goa Beaches", "nation": ["India"],
                "location": ["Panaji", "Calangute"], "continent": "Asia", "region": "India",
                "price": 12000, "duration": 4{rating}}}"#
        )
    }

    #[test]
    fn test_optional_fields_default() {
        let pkg: TravelPackage = serde_json::from_str(&minimal_json("")).unwrap();
        assert_eq!(pkg.id, PackageId::new(7));
        assert_eq!(pkg.rating, None);
        assert_eq!(pkg.rating_or_zero(), 0.0);
        assert!(pkg.itinerary.is_empty());
        assert!(pkg.related_packages.is_empty());
        assert!(pkg.gallery_images(GalleryCategory::Stay).is_empty());
    }

    #[test]
    fn test_rating_is_lenient() {
        let numeric: TravelPackage = serde_json::from_str(&minimal_json(r#", "rating": 4.6"#)).unwrap();
        assert_eq!(numeric.rating, Some(4.6));

        let text: TravelPackage = serde_json::from_str(&minimal_json(r#", "rating": "4.2""#)).unwrap();
        assert_eq!(text.rating, Some(4.2));

        let garbage: TravelPackage =
            serde_json::from_str(&minimal_json(r#", "rating": "five stars""#)).unwrap();
        assert_eq!(garbage.rating, None);

        let null: TravelPackage = serde_json::from_str(&minimal_json(r#", "rating": null"#)).unwrap();
        assert_eq!(null.rating, None);
    }

    #[test]
    fn test_text_fields_cover_all_searchable_fields() {
        let pkg: TravelPackage = serde_json::from_str(&minimal_json("")).unwrap();
        let fields: Vec<&str> = pkg.text_fields().collect();
        assert_eq!(
            fields,
            vec!["Goa Beaches", "India", "Panaji", "Calangute", "Asia", "India"]
        );
    }

    #[test]
    fn test_validate() {
        let mut pkg: TravelPackage = serde_json::from_str(&minimal_json("")).unwrap();
        assert!(pkg.validate().is_ok());

        pkg.price = -1.0;
        assert!(pkg.validate().unwrap_err().contains("non-negative"));

        pkg.price = 100.0;
        pkg.duration = 0;
        assert!(pkg.validate().unwrap_err().contains("at least one day"));
    }

    #[test]
    fn test_card_truncates_locations() {
        let pkg: TravelPackage = serde_json::from_str(&minimal_json("")).unwrap();
        let card = PackageCardDto::from(&pkg);
        assert_eq!(card.locations, vec!["Panaji", "Calangute"]);
        assert_eq!(card.more_locations, 0);
        assert_eq!(card.badge, "Heritage");

        let mut longer = pkg.clone();
        longer.location.push("Anjuna".into());
        longer.region = "Southeast Asia".into();
        let card = PackageCardDto::from(&longer);
        assert_eq!(card.more_locations, 1);
        assert_eq!(card.badge, "Popular");
    }
}
