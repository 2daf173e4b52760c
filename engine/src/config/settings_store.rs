use std::sync::Mutex;

use crate::error::ConfigError;
use super::{
    ConfigContentProvider, FileContentConfigProvider, MatchSettings, Validate,
};

/// Loads and saves [`MatchSettings`] as YAML, caching the last good value.
pub struct SettingsStore<P: ConfigContentProvider> {
    provider: P,
    cached: Mutex<Option<MatchSettings>>,
}

impl SettingsStore<FileContentConfigProvider> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<P: ConfigContentProvider> SettingsStore<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cached: Mutex::new(None),
        }
    }

    /// Missing content yields the defaults; unreadable or invalid content is
    /// an error.
    pub fn load(&self) -> Result<MatchSettings, ConfigError> {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(settings) = cached.as_ref() {
            return Ok(settings.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(MatchSettings::default());
        };

        let settings: MatchSettings = serde_yaml_ng::from_str(&content).map_err(ConfigError::Parse)?;
        settings.validate().map_err(ConfigError::Invalid)?;

        *cached = Some(settings.clone());
        Ok(settings)
    }

    pub fn save(&self, settings: &MatchSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::Invalid)?;

        let content = serde_yaml_ng::to_string(settings).map_err(ConfigError::Serialize)?;
        self.provider.set_config_content(&content)?;

        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        *cached = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;
    use crate::tictactoe::{Opponent, StrategyKind};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_settings_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_missing_file_gives_default_settings() {
        let store = SettingsStore::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(store.load().unwrap(), MatchSettings::default());
    }

    #[test]
    fn test_settings_survive_file_round_trip() {
        let file_path = get_temp_file_path();
        let settings = MatchSettings {
            opponent: Opponent::Computer(StrategyKind::Random),
            bot_delay_ms: 250,
            seed: Some(77),
        };

        let writer = SettingsStore::from_yaml_file(&file_path);
        writer.save(&settings).unwrap();

        let reader = SettingsStore::from_yaml_file(&file_path);
        let loaded = reader.load().unwrap();
        let _ = std::fs::remove_file(&file_path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_saved_yaml_uses_readable_names() {
        let store = SettingsStore::new(MemoryContentConfigProvider::default());
        store.save(&MatchSettings::default()).unwrap();

        let content = store.provider.get_config_content().unwrap().unwrap();
        assert!(content.contains("opponent: exhaustive_search"), "{}", content);
        assert!(content.contains("bot_delay_ms: 500"), "{}", content);
    }

    #[test]
    fn test_invalid_settings_cant_be_read() {
        let store = SettingsStore::new(MemoryContentConfigProvider::new(Some(
            "opponent: hard\nbot_delay_ms: 60000\n".to_string(),
        )));
        assert!(matches!(store.load(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let store = SettingsStore::new(MemoryContentConfigProvider::new(Some(
            "opponent: [unclosed".to_string(),
        )));
        assert!(matches!(store.load(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_settings_cant_be_saved() {
        let store = SettingsStore::new(MemoryContentConfigProvider::default());
        let settings = MatchSettings {
            bot_delay_ms: 20_000,
            ..MatchSettings::default()
        };
        assert!(matches!(store.save(&settings), Err(ConfigError::Invalid(_))));
        assert_eq!(store.provider.get_config_content().unwrap(), None);
    }
}
