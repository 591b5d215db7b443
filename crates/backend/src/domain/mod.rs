pub mod a001_travel_package;
pub mod a002_inquiry;
