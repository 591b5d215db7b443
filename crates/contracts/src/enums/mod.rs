pub mod region_tab;
pub mod sort_key;

pub use region_tab::RegionTab;
pub use sort_key::SortKey;
