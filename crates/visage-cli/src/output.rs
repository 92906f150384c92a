use std::error::Error;
use std::io::{self, Write};

use serde_json::json;

use visage_engines::{EngineEntity, SettingsError, SettingsResult};

use crate::cli::OutputMode;
use crate::commands::{ListOutcome, SelectOutcome, SelectedOutcome, ShowOutcome};

fn engine_line(entity: &EngineEntity) -> String {
    let marker = if entity.is_selected { '*' } else { ' ' };
    format!(
        "{marker} {:<38} {:<8} {}",
        entity.uuid, entity.engine, entity.name
    )
}

pub fn render_list(outcome: &ListOutcome, mode: OutputMode) -> SettingsResult<()> {
    match mode {
        OutputMode::Human => {
            for entity in &outcome.engines {
                println!("{}", engine_line(entity));
            }
        }
        OutputMode::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let payload = serde_json::to_string(&json!({
                "source": outcome.source.as_ref().map(|path| path.display().to_string()),
                "engines": outcome.engines,
            }))?;
            handle.write_all(payload.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}

pub fn render_show(outcome: &ShowOutcome, mode: OutputMode) -> SettingsResult<()> {
    match mode {
        OutputMode::Human => {
            let entity = &outcome.engine;
            println!("Engine:   {}", entity.engine);
            println!("Name:     {}", entity.name);
            println!("UUID:     {}", entity.uuid);
            println!("Selected: {}", entity.is_selected);
        }
        OutputMode::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let payload = serde_json::to_string(&outcome.engine)?;
            handle.write_all(payload.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}

pub fn render_selected(outcome: &SelectedOutcome, mode: OutputMode) -> SettingsResult<()> {
    match mode {
        OutputMode::Human => match &outcome.engine {
            Some(entity) => println!("{}", engine_line(entity)),
            None => println!("no engine selected"),
        },
        OutputMode::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let payload = serde_json::to_string(&json!({
                "selected": outcome.engine,
            }))?;
            handle.write_all(payload.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}

pub fn render_select(outcome: &SelectOutcome, mode: OutputMode) -> SettingsResult<()> {
    match mode {
        OutputMode::Human => {
            println!(
                "Selected {} ({})",
                outcome.engine.name, outcome.engine.uuid
            );
            for entity in outcome.settings.entries() {
                println!("{}", engine_line(entity));
            }
        }
        OutputMode::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let payload = serde_json::to_string(&outcome.settings)?;
            handle.write_all(payload.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}

pub fn render_error(err: &SettingsError, mode: OutputMode) {
    match mode {
        OutputMode::Human => {
            eprintln!("error: {}", err.human_message());
            if let Some(source) = err.source() {
                eprintln!("cause: {source}");
            }
        }
        OutputMode::Json => {
            let payload = json!({
                "success": false,
                "error": err.human_message(),
            });
            if let Ok(json) = serde_json::to_string(&payload) {
                println!("{json}");
            }
        }
    }
}
