// ==========================================
// 学校值勤排班系统 - 学期模板构建引擎
// ==========================================
// 职责: 为每个 (学期, 星期) 生成一对 Day1/Day2 值勤模板
// 输入: 已初始化的校历 + 教师名册 + 计数账本
// 输出: TemplateBook + 每学期构建报告
// 规则: 每学期开始前账本清零;同一学期内各星期共享计数
// ==========================================

use crate::domain::calendar::{Calendar, Day, DutyGrid};
use crate::domain::teacher::Teacher;
use crate::domain::types::{Rotation, Term};
use crate::engine::eligibility::EligibilityFilter;
use crate::engine::fairness::{DutyLedger, FairnessSelector};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// 排班的星期 (周一至周五)
pub const SCHOOL_WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

// ==========================================
// TermTemplate - 学期/星期值勤模板
// ==========================================
// 构建后只读,投影阶段不得修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermTemplate {
    pub term: Term,
    pub weekday: Weekday,
    pub sample_date: NaiveDate,
    pub day1: DutyGrid,
    pub day2: DutyGrid,
}

impl TermTemplate {
    /// 合并 Day1/Day2 两张格网
    ///
    /// 岗位描述取自 Day1 格网,Day1 名单取自 Day1 格网,Day2 名单取自 Day2 格网
    pub fn merged_grid(&self) -> DutyGrid {
        let mut merged = self.day1.placeholders();
        for (slot, pos, duty) in merged.duties_mut() {
            if let Some(day1) = self.day1.get(slot, pos) {
                duty.day1_teachers = day1.day1_teachers.clone();
            }
            if let Some(day2) = self.day2.get(slot, pos) {
                duty.day2_teachers = day2.day2_teachers.clone();
            }
        }
        merged
    }
}

// ==========================================
// TemplateBook - 模板簿
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateBook {
    templates: HashMap<(Term, Weekday), TermTemplate>,
}

impl TemplateBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template: TermTemplate) {
        self.templates
            .insert((template.term, template.weekday), template);
    }

    pub fn get(&self, term: Term, weekday: Weekday) -> Option<&TermTemplate> {
        self.templates.get(&(term, weekday))
    }

    /// 按日期所属 (学期, 星期) 取模板
    pub fn for_date(&self, date: NaiveDate) -> Option<&TermTemplate> {
        self.get(Term::of(date), date.weekday())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// 按 (学期, 星期) 顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &TermTemplate> + '_ {
        let mut templates: Vec<&TermTemplate> = self.templates.values().collect();
        templates.sort_by_key(|t| (t.term, t.weekday.num_days_from_monday()));
        templates.into_iter()
    }
}

// ==========================================
// 构建报告
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridFillStats {
    pub cells_assigned: usize,
    pub cells_unassigned: usize,
}

impl GridFillStats {
    fn absorb(&mut self, other: &GridFillStats) {
        self.cells_assigned += other.cells_assigned;
        self.cells_unassigned += other.cells_unassigned;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermBuildReport {
    pub term: Term,
    pub school_days: usize,
    pub templates_built: usize,
    pub stats: GridFillStats,
    /// 学期结束时的计数快照 (下标与教师名册一致)
    pub ledger: DutyLedger,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateBuildResult {
    pub book: TemplateBook,
    pub term_reports: Vec<TermBuildReport>,
}

impl TemplateBuildResult {
    pub fn unassigned_cells(&self) -> usize {
        self.term_reports
            .iter()
            .map(|r| r.stats.cells_unassigned)
            .sum()
    }
}

// ==========================================
// TermTemplateBuilder - 学期模板构建引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct TermTemplateBuilder {
    filter: EligibilityFilter,
    selector: FairnessSelector,
}

impl TermTemplateBuilder {
    pub fn new(filter: EligibilityFilter, selector: FairnessSelector) -> Self {
        Self { filter, selector }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 构建全部学期的模板
    ///
    /// # 规则
    /// 1. 按 T1..T4 依次处理,每学期开始前账本清零
    /// 2. 学期内按周一至周五处理,取该星期的第一个上课日作为样本
    /// 3. 样本格网复制两份,分别排 Day1 和 Day2
    ///
    /// # 参数
    /// - `calendar`: 已初始化的校历
    /// - `teachers`: 教师名册
    /// - `ledger`: 计数账本 (长度与名册不一致时重建)
    #[instrument(skip_all, fields(
        days_count = calendar.days.len(),
        teachers_count = teachers.len()
    ))]
    pub fn build_all(
        &self,
        calendar: &Calendar,
        teachers: &[Teacher],
        ledger: &mut DutyLedger,
    ) -> TemplateBuildResult {
        if ledger.counts().len() != teachers.len() {
            *ledger = DutyLedger::new(teachers.len());
        }

        let mut result = TemplateBuildResult::default();

        for term in Term::ALL {
            ledger.reset();

            let term_days: Vec<&Day> = calendar
                .school_days()
                .filter(|d| Term::of(d.date) == term)
                .collect();

            let report = self.build_term(term, &term_days, teachers, ledger, &mut result.book);
            info!(
                term = %term,
                school_days = report.school_days,
                templates = report.templates_built,
                assigned = report.stats.cells_assigned,
                unassigned = report.stats.cells_unassigned,
                "学期模板构建完成"
            );
            result.term_reports.push(report);
        }

        result
    }

    /// 构建单个学期 (不清零账本)
    pub fn build_term(
        &self,
        term: Term,
        term_days: &[&Day],
        teachers: &[Teacher],
        ledger: &mut DutyLedger,
        book: &mut TemplateBook,
    ) -> TermBuildReport {
        let mut stats = GridFillStats::default();
        let mut templates_built = 0;

        for weekday in SCHOOL_WEEKDAYS {
            let Some(sample) = term_days.iter().find(|d| d.date.weekday() == weekday) else {
                debug!(term = %term, weekday = ?weekday, "学期内无该星期的上课日");
                continue;
            };

            let blank = sample.duties.placeholders();
            let (day1, day1_stats) =
                self.fill_grid(blank.clone(), sample.date, Rotation::Day1, teachers, ledger);
            let (day2, day2_stats) =
                self.fill_grid(blank, sample.date, Rotation::Day2, teachers, ledger);
            stats.absorb(&day1_stats);
            stats.absorb(&day2_stats);

            book.insert(TermTemplate {
                term,
                weekday,
                sample_date: sample.date,
                day1,
                day2,
            });
            templates_built += 1;
        }

        TermBuildReport {
            term,
            school_days: term_days.len(),
            templates_built,
            stats,
            ledger: ledger.clone(),
        }
    }

    /// 为一张格网的某个轮换日排班
    ///
    /// 按 (time_slot, position) 顺序逐格处理;每格最多选一名教师,
    /// 无候选人时该格保持未排,不影响其他格。
    pub fn fill_grid(
        &self,
        mut grid: DutyGrid,
        date: NaiveDate,
        rotation: Rotation,
        teachers: &[Teacher],
        ledger: &mut DutyLedger,
    ) -> (DutyGrid, GridFillStats) {
        let mut stats = GridFillStats::default();

        for (time_slot, position, duty) in grid.duties_mut() {
            let eligible = self
                .filter
                .eligible_teachers(teachers, ledger, time_slot, date, rotation);

            match self.selector.select(eligible, ledger) {
                Some(idx) => {
                    duty.add_teacher(rotation, teachers[idx].name());
                    stats.cells_assigned += 1;
                }
                None => {
                    warn!(
                        date = %date,
                        rotation = %rotation,
                        time_slot,
                        position,
                        duty = %duty.name,
                        "NO_ELIGIBLE_TEACHER: 岗位未排"
                    );
                    stats.cells_unassigned += 1;
                }
            }
        }

        (grid, stats)
    }
}
