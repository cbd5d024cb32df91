// ==========================================
// 学校值勤排班系统 - 排班编排器
// ==========================================
// 用途: 协调校历初始化、模板构建、模板投影的执行顺序
// 流程: 账本清零 → 构建 (学期, 星期) 模板 → 投影到全部上课日
// ==========================================

use crate::config::RosterConfigReader;
use crate::domain::calendar::{Calendar, Holiday};
use crate::domain::teacher::Teacher;
use crate::engine::fairness::DutyLedger;
use crate::engine::projector::{ProjectionReport, ScheduleProjector};
use crate::engine::template_builder::{TemplateBook, TermBuildReport, TermTemplateBuilder};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

// ==========================================
// AssignmentResult - 排班结果
// ==========================================
#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub run_id: String,

    // TermTemplateBuilder 输出
    pub templates: TemplateBook,
    pub term_reports: Vec<TermBuildReport>,

    // ScheduleProjector 输出
    pub projection: ProjectionReport,
}

impl AssignmentResult {
    /// 模板构建阶段未排上的岗位数 (按轮换日计)
    pub fn unassigned_cells(&self) -> usize {
        self.term_reports
            .iter()
            .map(|r| r.stats.cells_unassigned)
            .sum()
    }

    pub fn summary(&self) -> AssignmentSummary {
        AssignmentSummary {
            run_id: self.run_id.clone(),
            templates_built: self.templates.len(),
            projected_days: self.projection.projected_days,
            days_without_template: self.projection.days_without_template.clone(),
            unassigned_cells: self.unassigned_cells(),
            term_reports: self.term_reports.clone(),
        }
    }
}

/// 可序列化的排班摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentSummary {
    pub run_id: String,
    pub templates_built: usize,
    pub projected_days: usize,
    pub days_without_template: Vec<NaiveDate>,
    pub unassigned_cells: usize,
    pub term_reports: Vec<TermBuildReport>,
}

// ==========================================
// DutyAssigner - 排班编排器
// ==========================================
pub struct DutyAssigner<C>
where
    C: RosterConfigReader,
{
    config: Arc<C>,
    builder: TermTemplateBuilder,
    projector: ScheduleProjector,
}

impl<C> DutyAssigner<C>
where
    C: RosterConfigReader,
{
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - config: 配置读取器
    pub fn new(config: Arc<C>) -> Self {
        Self {
            config,
            builder: TermTemplateBuilder::default(),
            projector: ScheduleProjector::new(),
        }
    }

    /// 按配置初始化学年校历
    ///
    /// # 规则
    /// 1. 学年区间取自配置;校历中有最后上课日事件时以其起始日为学年末日
    /// 2. 上课日按配置的停课关键字判定
    /// 3. 上课日填充配置岗位目录的空值勤格网
    pub fn prepare_calendar(&self, holidays: Vec<Holiday>) -> Calendar {
        let school_year = self
            .config
            .school_year()
            .with_last_day_from(&holidays, &self.config.last_day_marker());
        debug!(start = %school_year.start, end = %school_year.end, "学年区间");

        let mut calendar = Calendar::with_holidays(holidays);
        self.config.school_day_classifier().seed_calendar(
            &mut calendar,
            school_year,
            &self.config.duty_catalog(),
        );
        calendar
    }

    /// 执行完整排班流程
    ///
    /// # 参数
    /// - calendar: 已初始化的校历 (上课日格网将被覆盖)
    /// - teachers: 教师名册 (顺序即并列时的优先顺序)
    ///
    /// # 返回
    /// 排班结果;教师或校历为空时不排任何岗位,不报错
    pub fn assign(&self, calendar: &mut Calendar, teachers: &[Teacher]) -> AssignmentResult {
        let run_id = Uuid::new_v4().to_string();
        let _span = info_span!("duty_assignment", run_id = %run_id).entered();

        info!(
            days_count = calendar.days.len(),
            teachers_count = teachers.len(),
            "开始执行排班流程"
        );
        if teachers.is_empty() {
            warn!("教师名册为空,所有岗位将保持未排");
        }

        // ==========================================
        // 步骤1: 计数账本清零
        // ==========================================
        let mut ledger = DutyLedger::new(teachers.len());

        // ==========================================
        // 步骤2: TermTemplateBuilder - 构建学期模板
        // ==========================================
        debug!("步骤2: 构建学期模板");
        let build = self.builder.build_all(calendar, teachers, &mut ledger);

        // ==========================================
        // 步骤3: ScheduleProjector - 投影到全部上课日
        // ==========================================
        debug!("步骤3: 投影模板");
        let projection = self.projector.project(calendar, &build.book);

        let result = AssignmentResult {
            run_id,
            templates: build.book,
            term_reports: build.term_reports,
            projection,
        };

        info!(
            templates_built = result.templates.len(),
            projected_days = result.projection.projected_days,
            unassigned_cells = result.unassigned_cells(),
            "排班流程完成"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RosterConfig;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn short_year_config() -> RosterConfig {
        RosterConfig {
            school_year_start: date(2024, 9, 30),
            school_year_end: date(2024, 10, 13),
            ..RosterConfig::default()
        }
    }

    #[test]
    fn test_prepare_calendar_applies_last_day_marker() {
        let assigner = DutyAssigner::new(Arc::new(short_year_config()));
        let holidays = vec![Holiday::new(
            "Last Day of School",
            date(2024, 10, 4),
            date(2024, 10, 4),
            "",
        )];
        let calendar = assigner.prepare_calendar(holidays);
        assert_eq!(calendar.days.len(), 5);
        assert_eq!(calendar.school_days().count(), 5);
    }

    #[test]
    fn test_assign_with_empty_inputs() {
        let assigner = DutyAssigner::new(Arc::new(short_year_config()));

        let mut empty = Calendar::new();
        let result = assigner.assign(&mut empty, &[]);
        assert!(result.templates.is_empty());
        assert_eq!(result.unassigned_cells(), 0);

        let mut calendar = assigner.prepare_calendar(Vec::new());
        let result = assigner.assign(&mut calendar, &[]);
        assert_eq!(result.templates.len(), 5);
        assert_eq!(result.projection.projected_days, 10);
        assert!(calendar
            .school_days()
            .all(|d| d.duties.duties().all(|(_, _, duty)| duty.day1_teachers.is_empty()
                && duty.day2_teachers.is_empty())));
    }

    #[test]
    fn test_run_ids_are_unique() {
        let assigner = DutyAssigner::new(Arc::new(short_year_config()));
        let mut calendar = Calendar::new();
        let a = assigner.assign(&mut calendar, &[]);
        let b = assigner.assign(&mut calendar, &[]);
        assert_ne!(a.run_id, b.run_id);
        assert_eq!(a.summary().run_id, a.run_id);
    }
}
