pub mod pagination;
pub mod sequence;
