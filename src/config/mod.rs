// ==========================================
// 学校值勤排班系统 - 配置层
// ==========================================
// 职责: 排班参数的加载与只读访问
// 存储: JSON 配置文件,缺省时使用内置默认值
// ==========================================

pub mod config_manager;
pub mod error;
pub mod roster_config;
pub mod roster_config_trait;

// 重导出核心配置管理器
pub use config_manager::{resolve_config_path, ConfigLocation, ConfigManager, CONFIG_PATH_ENV};
pub use error::{ConfigError, ConfigResult};
pub use roster_config::RosterConfig;
pub use roster_config_trait::RosterConfigReader;
