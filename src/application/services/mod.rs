//! Application services

pub mod export;

pub use export::ExportService;
