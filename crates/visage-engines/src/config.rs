use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::catalog::{Engine, EngineEntity, Settings};
use crate::errors::{SettingsError, SettingsResult};

pub const PRIMARY_CATALOG_PATH: &str = "/etc/visage/engines.toml";
pub const SECONDARY_CATALOG_PATH: &str = "/usr/local/etc/visage/engines.toml";

/// Raw `engines.toml` contents before defaults are applied.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogFile {
    pub engines: Option<Vec<EngineEntry>>,
}

/// One `[[engines]]` table in a catalog file. `selected` may be
/// omitted and defaults to false; nothing about the entry is
/// validated beyond its TOML shape.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineEntry {
    pub engine: Engine,
    pub name: String,
    pub uuid: String,
    pub selected: Option<bool>,
}

impl EngineEntry {
    fn into_entity(self) -> EngineEntity {
        EngineEntity {
            engine: self.engine,
            name: self.name,
            uuid: self.uuid,
            is_selected: self.selected.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub contents: CatalogFile,
    pub source: PathBuf,
}

impl LoadedCatalog {
    pub fn new(contents: CatalogFile, source: PathBuf) -> Self {
        Self { contents, source }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Settings resolved from a catalog file, or from the built-in table
/// when no file defined any engines (`source` is None in that case).
#[derive(Debug, Clone)]
pub struct ResolvedSettingsWithSource {
    pub settings: Settings,
    pub source: Option<PathBuf>,
}

/// Resolves the catalog from the standard search paths.
pub fn load_settings() -> SettingsResult<ResolvedSettingsWithSource> {
    let sources = [
        PathBuf::from(PRIMARY_CATALOG_PATH),
        PathBuf::from(SECONDARY_CATALOG_PATH),
    ];
    resolve_from_paths(&sources)
}

/// Resolves the catalog, preferring an explicitly given file over the
/// standard search paths. Unlike the search paths, an explicit file
/// must exist.
pub fn resolve_catalog(explicit: Option<&Path>) -> SettingsResult<ResolvedSettingsWithSource> {
    match explicit {
        Some(path) => {
            let loaded = load_explicit(path)?;
            Ok(resolve_loaded(Some(loaded)))
        }
        None => load_settings(),
    }
}

pub fn load_from_paths(paths: &[PathBuf]) -> SettingsResult<Option<LoadedCatalog>> {
    for path in paths {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let parsed =
                    toml::from_str::<CatalogFile>(&contents).map_err(|err| {
                        SettingsError::ConfigParse {
                            path: path.clone(),
                            message: err.to_string(),
                        }
                    })?;
                return Ok(Some(LoadedCatalog::new(parsed, path.clone())));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => {
                return Err(SettingsError::ConfigRead {
                    path: path.clone(),
                    source: err,
                })
            }
        }
    }

    Ok(None)
}

pub fn resolve_from_paths(paths: &[PathBuf]) -> SettingsResult<ResolvedSettingsWithSource> {
    let loaded = load_from_paths(paths)?;
    Ok(resolve_loaded(loaded))
}

fn load_explicit(path: &Path) -> SettingsResult<LoadedCatalog> {
    let contents = fs::read_to_string(path).map_err(|source| SettingsError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed =
        toml::from_str::<CatalogFile>(&contents).map_err(|err| SettingsError::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
    Ok(LoadedCatalog::new(parsed, path.to_path_buf()))
}

fn resolve_loaded(loaded: Option<LoadedCatalog>) -> ResolvedSettingsWithSource {
    match loaded {
        Some(catalog) => {
            let source = catalog.source;
            match catalog.contents.engines {
                Some(entries) if !entries.is_empty() => {
                    debug!(path = %source.display(), "loaded engine catalog");
                    let engines = entries.into_iter().map(EngineEntry::into_entity).collect();
                    ResolvedSettingsWithSource {
                        settings: Settings::new(engines),
                        source: Some(source),
                    }
                }
                _ => {
                    debug!(
                        path = %source.display(),
                        "catalog file defines no engines; using built-in table"
                    );
                    ResolvedSettingsWithSource {
                        settings: Settings::builtin(),
                        source: None,
                    }
                }
            }
        }
        None => {
            debug!("no catalog file found; using built-in engine table");
            ResolvedSettingsWithSource {
                settings: Settings::builtin(),
                source: None,
            }
        }
    }
}
