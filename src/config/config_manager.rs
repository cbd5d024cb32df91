// ==========================================
// 学校值勤排班系统 - 配置管理器
// ==========================================
// 职责: 配置文件定位、加载、校验、快照
// 存储: JSON 文件 (不存在时使用默认配置)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::roster_config::RosterConfig;
use crate::config::roster_config_trait::RosterConfigReader;
use crate::domain::calendar::SchoolYear;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 显式指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "DUTY_ROSTER_CONFIG";

const CONFIG_DIR_NAME: &str = "duty-roster";
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: RosterConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用内存配置创建
    pub fn from_config(config: RosterConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 从指定文件加载 (文件必须存在)
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RosterConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        info!(path = %path.display(), "配置文件加载完成");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 按优先级定位并加载配置
    ///
    /// # 规则
    /// 1. explicit 参数 (文件必须存在)
    /// 2. 环境变量 DUTY_ROSTER_CONFIG (文件必须存在)
    /// 3. 用户配置目录下的 duty-roster/config.json (不存在时使用默认配置)
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let env_value = std::env::var(CONFIG_PATH_ENV).ok();
        match resolve_config_path(explicit, env_value.as_deref()) {
            ConfigLocation::Required(path) => Self::from_path(path),
            ConfigLocation::Optional(path) if path.exists() => Self::from_path(path),
            ConfigLocation::Optional(path) => {
                debug!(path = %path.display(), "配置文件不存在,使用默认配置");
                Ok(Self::default())
            }
            ConfigLocation::None => {
                debug!("无法确定用户配置目录,使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 用户配置目录下的默认配置路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// 配置来源文件 (默认配置时为 None)
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 获取当前配置的快照 (JSON 格式)
    ///
    /// # 用途
    /// - 随排班结果一并输出,便于复现
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

/// 配置文件位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// 显式指定,必须存在
    Required(PathBuf),
    /// 默认位置,可以不存在
    Optional(PathBuf),
    None,
}

/// 解析配置文件位置 (纯函数,便于测试)
pub fn resolve_config_path(explicit: Option<&Path>, env_value: Option<&str>) -> ConfigLocation {
    if let Some(path) = explicit {
        return ConfigLocation::Required(path.to_path_buf());
    }

    if let Some(value) = env_value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return ConfigLocation::Required(PathBuf::from(trimmed));
        }
    }

    match ConfigManager::default_config_path() {
        Some(path) => ConfigLocation::Optional(path),
        None => ConfigLocation::None,
    }
}

impl RosterConfigReader for ConfigManager {
    fn school_year(&self) -> SchoolYear {
        self.config.school_year()
    }

    fn last_day_marker(&self) -> String {
        self.config.last_day_marker()
    }

    fn exclusion_keywords(&self) -> Vec<String> {
        self.config.exclusion_keywords()
    }

    fn duty_names(&self) -> Vec<String> {
        self.config.duty_names()
    }

    fn default_room(&self) -> String {
        self.config.default_room()
    }
}
