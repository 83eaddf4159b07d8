use std::fs;
use std::path::Path;

use crate::config::Settings;
use crate::error::Result;

/// Load settings from a JSON file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable.
///
/// A bad settings file is never fatal: the degradation is reported on stderr
/// and the defaults apply for the rest of the run.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Settings {
    let path = path.as_ref();

    if !path.exists() {
        return Settings::default();
    }

    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!(
                "Could not read settings from {}: {}. Using defaults.",
                path.display(),
                e
            );
            Settings::default()
        }
    }
}

/// Save settings to a JSON file.
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModifierKey;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load_roundtrip() {
        let settings = Settings {
            require_modifier: true,
            modifier_key: ModifierKey::LeftShift,
            allow_when_full: false,
            ..Default::default()
        };

        let file = NamedTempFile::new().unwrap();
        save_settings(file.path(), &settings).unwrap();

        let reloaded = load_settings(file.path()).unwrap();
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = load_settings_or_default("no_such_settings_file.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        use std::io::Write;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let settings = load_settings_or_default(file.path());
        assert_eq!(settings, Settings::default());
    }
}
