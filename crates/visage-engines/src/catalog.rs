use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SettingsError, SettingsResult};

/// Face-recognition provider families the client can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Engine {
    Luna,
    Ntech,
    Tevian,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Engine::Luna => "Luna",
            Engine::Ntech => "Ntech",
            Engine::Tevian => "Tevian",
        };
        f.write_str(name)
    }
}

/// One catalog row: a provider variant plus the display label, the
/// opaque configuration UUID and the selection flag the settings
/// screen works with. Field names follow the client wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineEntity {
    pub engine: Engine,
    pub name: String,
    #[serde(rename = "UUID")]
    pub uuid: String,
    pub is_selected: bool,
}

struct BuiltinEngine {
    engine: Engine,
    name: &'static str,
    uuid: &'static str,
    selected: bool,
}

const BUILTIN_ENGINES: [BuiltinEngine; 4] = [
    BuiltinEngine {
        engine: Engine::Luna,
        name: "Vision Labs Platform",
        uuid: "2a2a5e3b-29c6-426f-97cc-d9e1fb701ad3",
        selected: true,
    },
    BuiltinEngine {
        engine: Engine::Ntech,
        name: "NTech Platform",
        uuid: "6cf3b728-4cf9-4262-b4b2-315c019515de",
        selected: false,
    },
    BuiltinEngine {
        engine: Engine::Tevian,
        name: "Tevian Platform",
        uuid: "3aac91d1-319f-46d8-bd52-35693457f498",
        selected: false,
    },
    // Facenet exposes the same API as Tevian and shares its variant.
    BuiltinEngine {
        engine: Engine::Tevian,
        name: "Facenet (ours)",
        uuid: "d733c7a4-7da4-47d4-aa25-289b9a479819",
        selected: false,
    },
];

/// The ordered engine catalog. Row order is declaration order and is
/// what the settings screen displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "Engines")]
    engines: Vec<EngineEntity>,
}

impl Settings {
    pub fn new(engines: Vec<EngineEntity>) -> Self {
        Self { engines }
    }

    /// The built-in default table shipped with the client.
    pub fn builtin() -> Self {
        let engines = BUILTIN_ENGINES
            .iter()
            .map(|row| EngineEntity {
                engine: row.engine,
                name: row.name.to_string(),
                uuid: row.uuid.to_string(),
                is_selected: row.selected,
            })
            .collect();
        Self { engines }
    }

    pub fn entries(&self) -> &[EngineEntity] {
        &self.engines
    }

    pub fn into_entries(self) -> Vec<EngineEntity> {
        self.engines
    }

    /// Looks an engine up by its UUID string (exact, case-sensitive).
    pub fn find(&self, uuid: &str) -> Option<&EngineEntity> {
        self.engines.iter().find(|entity| entity.uuid == uuid)
    }

    /// First selected entry, if any. Catalogs read from disk may carry
    /// zero or several selected rows; those are reported as-is.
    pub fn selected(&self) -> Option<&EngineEntity> {
        self.engines.iter().find(|entity| entity.is_selected)
    }

    /// Marks the engine with the given UUID selected and clears every
    /// other row. The catalog is left untouched when the UUID is
    /// unknown.
    pub fn select(&mut self, uuid: &str) -> SettingsResult<()> {
        if self.find(uuid).is_none() {
            return Err(SettingsError::UnknownEngine {
                uuid: uuid.to_string(),
            });
        }
        for entity in &mut self.engines {
            entity.is_selected = entity.uuid == uuid;
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builtin()
    }
}
