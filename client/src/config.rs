use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::TicTacToeSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
        }
    }
    CONFIG_FILE_NAME.to_string()
}

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&str>) -> ClientConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub use_prefix: bool,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct ClientConfig {
    pub game: TicTacToeSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::FirstPlayer;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: ClientConfig = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_logging_section_is_optional() {
        let serializer = YamlConfigSerializer::new();
        let config: ClientConfig = serializer
            .deserialize("game:\n  first_player: computer\n  thinking_delay_ms: 100\n")
            .unwrap();

        assert_eq!(config.game.first_player, FirstPlayer::Computer);
        assert_eq!(config.game.thinking_delay_ms, 100);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let file_path = get_temp_file_path();
        let config = ClientConfig {
            game: TicTacToeSettings {
                first_player: FirstPlayer::Computer,
                thinking_delay_ms: 0,
            },
            logging: LoggingConfig {
                use_prefix: true,
                verbose: true,
            },
        };

        let writer = get_config_manager(Some(file_path.as_str()));
        writer.set_config(&config).unwrap();

        let content = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(content.contains("first_player: computer"));

        let reader = get_config_manager(Some(file_path.as_str()));
        assert_eq!(reader.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let manager = get_config_manager(Some(get_temp_file_path().as_str()));
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_invalid_game_settings_fail_validation() {
        let config = ClientConfig {
            game: TicTacToeSettings {
                thinking_delay_ms: 60_000,
                ..TicTacToeSettings::default()
            },
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
