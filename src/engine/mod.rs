// ==========================================
// 学校值勤排班系统 - 引擎层
// ==========================================
// 职责: 实现排班业务规则 (上课日判定、资格过滤、公平选择、模板构建与投影)
// 红线: 引擎不做 I/O, 拒绝分配必须能给出原因
// ==========================================

pub mod duty_catalog;
pub mod eligibility;
pub mod fairness;
pub mod orchestrator;
pub mod projector;
pub mod school_day;
pub mod template_builder;
pub mod workload_core;

// 重导出核心引擎
pub use duty_catalog::DutyCatalog;
pub use eligibility::{EligibilityFilter, EligibilityVerdict};
pub use fairness::{DutyLedger, FairnessSelector};
pub use orchestrator::{AssignmentResult, AssignmentSummary, DutyAssigner};
pub use projector::{ProjectionReport, ScheduleProjector};
pub use school_day::SchoolDayClassifier;
pub use template_builder::{
    GridFillStats, TemplateBook, TemplateBuildResult, TermBuildReport, TermTemplate,
    TermTemplateBuilder,
};
pub use workload_core::{ExemptCourse, JobClassification, WorkloadCore};
