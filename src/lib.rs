// ==========================================
// 学校值勤排班系统 - 核心库
// ==========================================
// 系统定位: 为教师生成学年 Day1/Day2 轮换值勤表
// 流程: 导入课表与校历 → 上课日判定 → 学期模板构建 → 投影到全年
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{JobType, LoadStatus, Rotation, Term};

// 领域实体
pub use domain::{Calendar, Day, Duty, DutyGrid, Holiday, SchoolYear, Teacher};

// 引擎
pub use engine::{
    DutyAssigner, DutyLedger, EligibilityFilter, FairnessSelector, SchoolDayClassifier,
    ScheduleProjector, TermTemplateBuilder,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "学校值勤排班系统";
