// ==========================================
// 学校值勤排班系统 - 值勤资格过滤引擎
// ==========================================
// 职责: 判定某教师能否承担某值勤岗位
// 输入: 教师 + 本学期已排值勤数 + 时段 + 日期 + 轮换日
// 输出: EligibilityVerdict (含拒绝原因)
// 红线: 同日 Day1/Day2 可由同一教师承担,不做相邻节次检查
// ==========================================

use crate::domain::teacher::Teacher;
use crate::domain::types::Rotation;
use crate::engine::fairness::DutyLedger;
use crate::engine::school_day::SchoolDayClassifier;
use crate::engine::workload_core::PERIODS_PER_DAY;
use chrono::NaiveDate;
use std::fmt;
use tracing::trace;

// ==========================================
// EligibilityVerdict - 资格判定结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityVerdict {
    Eligible,
    Weekend,
    ClassInPeriod { period_index: usize },
    DutyCapReached { assigned: u32, max: u32 },
    NoTimetable,
    Unnamed,
}

impl EligibilityVerdict {
    pub fn is_eligible(self) -> bool {
        matches!(self, EligibilityVerdict::Eligible)
    }
}

impl fmt::Display for EligibilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EligibilityVerdict::Eligible => write!(f, "ELIGIBLE"),
            EligibilityVerdict::Weekend => write!(f, "WEEKEND"),
            EligibilityVerdict::ClassInPeriod { period_index } => {
                write!(f, "CLASS_IN_PERIOD: period={}", period_index + 1)
            }
            EligibilityVerdict::DutyCapReached { assigned, max } => {
                write!(f, "DUTY_CAP_REACHED: assigned={} >= max={}", assigned, max)
            }
            EligibilityVerdict::NoTimetable => write!(f, "NO_TIMETABLE"),
            EligibilityVerdict::Unnamed => write!(f, "UNNAMED"),
        }
    }
}

// ==========================================
// EligibilityFilter - 值勤资格过滤引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct EligibilityFilter {
    // 无状态引擎,不需要注入依赖
}

impl EligibilityFilter {
    pub fn new() -> Self {
        Self {}
    }

    /// 时段对应的课表节次 (时段下标即节次下标,超出 10 节的时段无对应节次)
    pub fn period_for_slot(time_slot: usize) -> Option<usize> {
        (time_slot < PERIODS_PER_DAY).then_some(time_slot)
    }

    /// 判定资格并给出原因
    ///
    /// # 规则 (按顺序)
    /// 1. 周末 → WEEKEND
    /// 2. 对应节次有课 → CLASS_IN_PERIOD
    /// 3. 本学期已排 >= 上限 → DUTY_CAP_REACHED
    /// 4. 课表全空 → NO_TIMETABLE
    /// 5. 姓名为空 → UNNAMED (格网不收空名)
    /// 6. 否则 → ELIGIBLE
    pub fn check(
        &self,
        teacher: &Teacher,
        assigned_this_term: u32,
        time_slot: usize,
        date: NaiveDate,
        rotation: Rotation,
    ) -> EligibilityVerdict {
        let verdict = Self::evaluate(teacher, assigned_this_term, time_slot, date);
        trace!(
            teacher = teacher.name(),
            time_slot,
            date = %date,
            rotation = %rotation,
            verdict = %verdict,
            "资格判定"
        );
        verdict
    }

    fn evaluate(
        teacher: &Teacher,
        assigned_this_term: u32,
        time_slot: usize,
        date: NaiveDate,
    ) -> EligibilityVerdict {
        // 规则 1: 周末 (正常流程只处理上课日,这里兜底)
        if SchoolDayClassifier::is_weekend(date) {
            return EligibilityVerdict::Weekend;
        }

        // 规则 2: 当前时段有课
        if let Some(period_index) = Self::period_for_slot(time_slot) {
            if teacher.has_class_in_period(period_index) {
                return EligibilityVerdict::ClassInPeriod { period_index };
            }
        }

        // 规则 3: 学期上限
        let max = teacher.max_duties_per_term();
        if assigned_this_term >= max {
            return EligibilityVerdict::DutyCapReached {
                assigned: assigned_this_term,
                max,
            };
        }

        // 规则 4: 完全无课表的教职工不参与值勤
        if teacher.filled_periods() == 0 {
            return EligibilityVerdict::NoTimetable;
        }

        // 规则 5: 空名无法写入格网
        if teacher.name().trim().is_empty() {
            return EligibilityVerdict::Unnamed;
        }

        EligibilityVerdict::Eligible
    }

    pub fn can_assign(
        &self,
        teacher: &Teacher,
        assigned_this_term: u32,
        time_slot: usize,
        date: NaiveDate,
        rotation: Rotation,
    ) -> bool {
        self.check(teacher, assigned_this_term, time_slot, date, rotation)
            .is_eligible()
    }

    /// 筛选有资格的教师,返回其在 teachers 中的下标 (保持输入顺序)
    pub fn eligible_teachers(
        &self,
        teachers: &[Teacher],
        ledger: &DutyLedger,
        time_slot: usize,
        date: NaiveDate,
        rotation: Rotation,
    ) -> Vec<usize> {
        teachers
            .iter()
            .enumerate()
            .filter(|(idx, teacher)| {
                self.can_assign(teacher, ledger.assigned(*idx), time_slot, date, rotation)
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}
