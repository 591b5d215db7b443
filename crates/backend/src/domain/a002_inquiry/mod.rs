pub mod service;
pub mod sink;
