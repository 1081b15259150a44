// src/models.rs
pub mod default_map;
pub mod report_entry;

pub use default_map::DefaultMap;
pub use report_entry::ReportEntry;
