mod settings;

pub use settings::{Config, ConfigError, EngineSettings, ServerSettings, EXAMPLE_CONFIG};
