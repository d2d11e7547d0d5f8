//  ____  ____                 ____
// |  _ \|  _ \ __ _ ___ ___  / ___| ___ _ __
// | |_) | |_) / _` / __/ __|| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \| |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use dirs::config_dir;

use crate::error::{PassGenError, Result};
use crate::passgen::{DEFAULT_LENGTH, LeetRule, MIN_LENGTH, WordSource};

const CONFIG_FILE_NAME: &str = "config.json";

/// Length used when the program is started without any argument.
pub const NO_ARGS_LENGTH: usize = 18;

/// Settings read from `config.json`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_length: usize,
    pub no_args_length: usize,
    pub word_min_length: usize,
    pub word_source: WordSource,
    pub leet_rule: LeetRule,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            no_args_length: NO_ARGS_LENGTH,
            word_min_length: MIN_LENGTH,
            word_source: WordSource::default(),
            leet_rule: LeetRule::default(),
        }
    }
}

impl AppConfig {
    /// Switches both word-mode settings to the legacy behaviour.
    pub fn legacy(mut self) -> Self {
        self.word_source = WordSource::Indices;
        self.leet_rule = LeetRule::Index;
        self
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&config_data)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = fs::File::create(path)?;
        serde_json::to_writer_pretty(config_file, self)?;
        Ok(())
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf> {
    match config_dir() {
        Some(path) => Ok(path.join("rpassgen")),
        None => Err(PassGenError::ConfigDir(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// 加载配置文件，文件不存在或无法解析时使用默认值
pub fn load_config(path: Option<&Path>) -> AppConfig {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("{}, using default settings", e);
                return AppConfig::default();
            }
        },
    };

    if !path.exists() {
        log::debug!("No config file at {}", path.display());
        return AppConfig::default();
    }

    match AppConfig::load_from(&path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!(
                "Failed to load config {}: {}, using default settings",
                path.display(),
                e
            );
            AppConfig::default()
        }
    }
}
