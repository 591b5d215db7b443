pub mod aggregate;
pub mod catalog;
pub mod query;

pub use aggregate::{
    Gallery, GalleryCategory, ItineraryDay, PackageCardDto, PackageId, RelatedPackage,
    TravelPackage,
};
pub use catalog::{CatalogError, FeaturedPackages, PackageCatalog, SlugFallback, SlugLookup};
pub use query::{SearchFilters, SearchQuery, Searchable};
