use clap::Subcommand;
use pomoflow_core::{Action, SettingsPatch};

use crate::common;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current settings
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set one setting by key
    ///
    /// Keys: work-duration, short-break-duration, long-break-duration
    /// (minutes); auto-start-breaks, auto-start-pomodoros, sound-enabled
    /// (true/false).
    Set { key: String, value: String },
}

fn patch_for(key: &str, value: &str) -> Result<SettingsPatch, Box<dyn std::error::Error>> {
    let mut patch = SettingsPatch::default();
    match key {
        "work-duration" => patch.work_duration = Some(value.parse()?),
        "short-break-duration" => patch.short_break_duration = Some(value.parse()?),
        "long-break-duration" => patch.long_break_duration = Some(value.parse()?),
        "auto-start-breaks" => patch.auto_start_breaks = Some(value.parse()?),
        "auto-start-pomodoros" => patch.auto_start_pomodoros = Some(value.parse()?),
        "sound-enabled" => patch.sound_enabled = Some(value.parse()?),
        other => return Err(format!("unknown settings key: {other}").into()),
    }
    Ok(patch)
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = common::open_store()?;
    match action {
        SettingsAction::Show { json } => {
            let settings = &store.state().settings;
            if json {
                println!("{}", serde_json::to_string_pretty(settings)?);
            } else {
                println!("work-duration        {} min", settings.work_duration);
                println!("short-break-duration {} min", settings.short_break_duration);
                println!("long-break-duration  {} min", settings.long_break_duration);
                println!("auto-start-breaks    {}", settings.auto_start_breaks);
                println!("auto-start-pomodoros {}", settings.auto_start_pomodoros);
                println!("sound-enabled        {}", settings.sound_enabled);
            }
        }
        SettingsAction::Set { key, value } => {
            store.dispatch(Action::UpdateSettings(patch_for(&key, &value)?))?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_parse_into_patches() {
        let patch = patch_for("work-duration", "45").unwrap();
        assert_eq!(patch.work_duration, Some(45));
        let patch = patch_for("sound-enabled", "false").unwrap();
        assert_eq!(patch.sound_enabled, Some(false));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(patch_for("volume", "11").is_err());
    }
}
