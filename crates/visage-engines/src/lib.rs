pub mod catalog;
pub mod config;
pub mod errors;

pub use catalog::{Engine, EngineEntity, Settings};

pub use config::{
    load_from_paths, load_settings, resolve_catalog, resolve_from_paths, CatalogFile, EngineEntry,
    LoadedCatalog, ResolvedSettingsWithSource, PRIMARY_CATALOG_PATH, SECONDARY_CATALOG_PATH,
};

pub use errors::{SettingsError, SettingsResult};
