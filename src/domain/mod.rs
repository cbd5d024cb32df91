// ==========================================
// 学校值勤排班系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型 (教师、校历、值勤格网)
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod calendar;
pub mod teacher;
pub mod types;

// 重导出核心类型
pub use calendar::{
    Calendar, Day, Duty, DutyGrid, Holiday, SchoolYear, POSITIONS_PER_SLOT, TIME_SLOTS,
};
pub use teacher::{Teacher, TeacherRosterSummary};
pub use types::{JobType, LoadStatus, Rotation, Term};
