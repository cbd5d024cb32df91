// ==========================================
// 学校值勤排班系统 - 排班配置读取 Trait
// ==========================================
// 职责: 定义排班引擎所需的配置读取接口 (不包含实现)
// 红线: 不包含配置写入
// ==========================================

use crate::config::roster_config::RosterConfig;
use crate::domain::calendar::SchoolYear;
use crate::engine::duty_catalog::DutyCatalog;
use crate::engine::school_day::SchoolDayClassifier;

// ==========================================
// RosterConfigReader Trait
// ==========================================
// 实现者: ConfigManager (JSON 文件) / RosterConfig (内存)
pub trait RosterConfigReader: Send + Sync {
    // ===== 学年 =====

    /// 获取学年区间 (未套用最后上课日事件)
    ///
    /// # 默认值
    /// - 2024-09-03 ~ 2025-06-28
    fn school_year(&self) -> SchoolYear;

    /// 获取最后上课日事件的摘要标记
    ///
    /// # 默认值
    /// - "Last Day of School"
    fn last_day_marker(&self) -> String;

    // ===== 上课日判定 =====

    /// 获取停课事件关键字
    ///
    /// # 默认值
    /// - ["PA Day", "Holiday", "Exam", "Summer School"]
    fn exclusion_keywords(&self) -> Vec<String>;

    // ===== 岗位目录 =====

    fn duty_names(&self) -> Vec<String>;

    /// # 默认值
    /// - "Various"
    fn default_room(&self) -> String;

    // ===== 组装 =====

    fn school_day_classifier(&self) -> SchoolDayClassifier {
        SchoolDayClassifier::new(self.exclusion_keywords())
    }

    fn duty_catalog(&self) -> DutyCatalog {
        DutyCatalog::new(self.duty_names(), self.default_room())
    }
}

impl RosterConfigReader for RosterConfig {
    fn school_year(&self) -> SchoolYear {
        SchoolYear::new(self.school_year_start, self.school_year_end)
    }

    fn last_day_marker(&self) -> String {
        self.last_day_marker.clone()
    }

    fn exclusion_keywords(&self) -> Vec<String> {
        self.exclusion_keywords.clone()
    }

    fn duty_names(&self) -> Vec<String> {
        self.duty_names.clone()
    }

    fn default_room(&self) -> String {
        self.default_room.clone()
    }
}
