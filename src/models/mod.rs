pub mod catalog_file;
pub mod config;

pub use catalog_file::{load_catalog, CatalogFile, PaletteEntry};
pub use config::{AppConfig, CacheConfig};
