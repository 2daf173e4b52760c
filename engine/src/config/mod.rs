mod content_provider;
mod settings;
mod settings_store;

pub use content_provider::{
    ConfigContentProvider, FileContentConfigProvider, MemoryContentConfigProvider,
};
pub use settings::{DEFAULT_BOT_DELAY_MS, MAX_BOT_DELAY_MS, MatchSettings};
pub use settings_store::SettingsStore;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
