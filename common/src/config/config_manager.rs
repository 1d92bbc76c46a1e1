use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config value. A missing source yields
/// `TConfig::default()`, which is not cached so a later write is picked up.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: RefCell::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct DelayConfig {
        delay_ms: u64,
    }

    impl Default for DelayConfig {
        fn default() -> Self {
            Self { delay_ms: 500 }
        }
    }

    impl Validate for DelayConfig {
        fn validate(&self) -> Result<(), String> {
            if self.delay_ms > 1000 {
                return Err("delay_ms must not exceed 1000".to_string());
            }
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<InMemoryConfigProvider, DelayConfig> {
        ConfigManager::new(
            InMemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = manager(None);
        assert_eq!(manager.get_config().unwrap(), DelayConfig::default());
    }

    #[test]
    fn test_reads_yaml_content() {
        let manager = manager(Some("delay_ms: 250\n"));
        assert_eq!(manager.get_config().unwrap(), DelayConfig { delay_ms: 250 });
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let manager = manager(Some("delay_ms: 5000\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("validation"), "{}", err);
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let manager = manager(Some("delay_ms: [not a number\n"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_set_config_writes_and_caches() {
        let manager = manager(None);
        let config = DelayConfig { delay_ms: 10 };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(
            manager.config_content_provider.get_config_content().unwrap(),
            Some("delay_ms: 10\n".to_string())
        );
    }

    #[test]
    fn test_set_config_refuses_invalid_value() {
        let manager = manager(None);
        assert!(manager.set_config(&DelayConfig { delay_ms: 2000 }).is_err());
        assert_eq!(manager.config_content_provider.get_config_content().unwrap(), None);
    }
}
