use std::path::PathBuf;

use visage_engines::{
    EngineEntity, ResolvedSettingsWithSource, Settings, SettingsError, SettingsResult,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ListOutcome {
    pub source: Option<PathBuf>,
    pub engines: Vec<EngineEntity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowOutcome {
    pub engine: EngineEntity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedOutcome {
    pub engine: Option<EngineEntity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOutcome {
    pub engine: EngineEntity,
    pub settings: Settings,
}

pub fn run_list(resolved: &ResolvedSettingsWithSource) -> ListOutcome {
    ListOutcome {
        source: resolved.source.clone(),
        engines: resolved.settings.entries().to_vec(),
    }
}

pub fn run_show(settings: &Settings, uuid: &str) -> SettingsResult<ShowOutcome> {
    let engine = settings
        .find(uuid)
        .cloned()
        .ok_or_else(|| SettingsError::UnknownEngine {
            uuid: uuid.to_string(),
        })?;
    Ok(ShowOutcome { engine })
}

pub fn run_selected(settings: &Settings) -> SelectedOutcome {
    SelectedOutcome {
        engine: settings.selected().cloned(),
    }
}

/// Applies the selection contract in memory; nothing is written back.
pub fn run_select(mut settings: Settings, uuid: &str) -> SettingsResult<SelectOutcome> {
    settings.select(uuid)?;
    let engine = settings
        .find(uuid)
        .cloned()
        .ok_or_else(|| SettingsError::UnknownEngine {
            uuid: uuid.to_string(),
        })?;
    Ok(SelectOutcome { engine, settings })
}
