// ==========================================
// 学校值勤排班系统 - 排班配置对象
// ==========================================
// 职责: 学年区间、停课关键字、岗位目录等可覆写参数
// 格式: JSON,所有字段均有默认值,缺省字段按默认值补齐
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::engine::duty_catalog::{DEFAULT_DUTY_NAMES, DEFAULT_ROOM};
use crate::engine::school_day::DEFAULT_EXCLUSION_KEYWORDS;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 最后上课日事件的默认摘要标记
pub const DEFAULT_LAST_DAY_MARKER: &str = "Last Day of School";

fn default_school_year_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 3).unwrap_or(NaiveDate::MIN)
}

fn default_school_year_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 28).unwrap_or(NaiveDate::MIN)
}

fn default_last_day_marker() -> String {
    DEFAULT_LAST_DAY_MARKER.to_string()
}

fn default_exclusion_keywords() -> Vec<String> {
    DEFAULT_EXCLUSION_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_duty_names() -> Vec<String> {
    DEFAULT_DUTY_NAMES.iter().map(|n| n.to_string()).collect()
}

fn default_room() -> String {
    DEFAULT_ROOM.to_string()
}

/// 排班配置 (持久化对象)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// 学年首日
    #[serde(default = "default_school_year_start")]
    pub school_year_start: NaiveDate,

    /// 学年末日 (校历中有最后上课日事件时以事件为准)
    #[serde(default = "default_school_year_end")]
    pub school_year_end: NaiveDate,

    #[serde(default = "default_last_day_marker")]
    pub last_day_marker: String,

    /// 停课事件关键字 (摘要包含即停课,不区分大小写)
    #[serde(default = "default_exclusion_keywords")]
    pub exclusion_keywords: Vec<String>,

    /// 岗位目录,按 time_slot * 2 + position 排列
    #[serde(default = "default_duty_names")]
    pub duty_names: Vec<String>,

    #[serde(default = "default_room")]
    pub default_room: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            school_year_start: default_school_year_start(),
            school_year_end: default_school_year_end(),
            last_day_marker: default_last_day_marker(),
            exclusion_keywords: default_exclusion_keywords(),
            duty_names: default_duty_names(),
            default_room: default_room(),
        }
    }
}

impl RosterConfig {
    /// 校验配置
    ///
    /// # 规则
    /// - 学年首日不晚于末日
    /// - 默认教室不为空
    pub fn validate(&self) -> ConfigResult<()> {
        if self.school_year_start > self.school_year_end {
            return Err(ConfigError::Invalid {
                field: "school_year_start".to_string(),
                message: format!(
                    "学年首日 {} 晚于末日 {}",
                    self.school_year_start, self.school_year_end
                ),
            });
        }
        if self.default_room.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "default_room".to_string(),
                message: "默认教室不能为空".to_string(),
            });
        }
        Ok(())
    }
}
