// ==========================================
// 学校值勤排班系统 - 导入层
// ==========================================
// 职责: 外部数据导入 (教师课表、校历事件)
// 支持: CSV, ICS
// ==========================================

// 模块声明
pub mod calendar_ics;
pub mod error;
pub mod teacher_csv;

// 重导出核心类型
pub use calendar_ics::CalendarIcsReader;
pub use error::{ImportError, ImportResult};
pub use teacher_csv::TeacherCsvReader;
