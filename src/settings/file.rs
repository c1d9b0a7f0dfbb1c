//! Settings file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::Settings;
use crate::error::{Error, Result};

pub fn path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("classpass").join("settings.json"))
        .ok_or(Error::NoConfigDir)
}

pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut data = serde_json::to_string_pretty(settings)?;
    data.push('\n');
    fs::write(path, data)?;

    info!("settings saved to {}", path.display());
    Ok(())
}

/// Read settings, writing defaults first if the file does not exist yet.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        let settings = Settings::default();
        save(path, &settings)?;
        return Ok(settings);
    }

    let data = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&data)?;

    info!("settings loaded from {}", path.display());
    Ok(settings.sanitized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::Sampling;
    use crate::pass::{CharacterClass, ClassSet};

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = load(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            length: 40,
            classes: ClassSet::only(CharacterClass::Symbol),
            count: 3,
            sampling: Sampling::Modulo,
            to_clipboard: true,
        };

        save(&path, &settings).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn file_format_is_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "length": 24, "classes": { "lowercase": true, "uppercase": false, "digit": true, "symbol": false }, "sampling": "modulo" }"#,
        )
        .unwrap();

        let settings = load(&path).unwrap();
        assert_eq!(settings.length, 24);
        assert!(settings.classes.digit && !settings.classes.uppercase);
        assert_eq!(settings.sampling, Sampling::Modulo);
        // Missing keys take their defaults.
        assert_eq!(settings.count, 1);
        assert!(!settings.to_clipboard);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "74,19,false").unwrap();

        assert!(matches!(load(&path), Err(Error::SettingsFormat(_))));
    }
}
