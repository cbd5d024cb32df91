// ==========================================
// 学校值勤排班系统 - 教师领域模型
// ==========================================
// 红线: 负荷状态/岗位类型/值勤上限是课表的纯函数,
//       只能通过课表或岗位变更触发重算,不允许外部直接写入
// ==========================================

use crate::domain::types::{JobType, LoadStatus};
use crate::engine::workload_core::{WorkloadCore, PERIODS_PER_DAY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Teacher - 教师
// ==========================================
// 只实现 Serialize: 反序列化会绕过派生字段重算
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Teacher {
    name: String,
    schedule: Vec<String>, // 固定 10 节,空串表示空堂

    // ===== 派生字段 =====
    job_type: JobType,
    load_status: LoadStatus,
    filled_periods: usize,
    time_allocation: f64,
    exempt_from_duty: bool,
    max_duties_per_term: u32,
}

impl Teacher {
    /// 创建空课表教师
    pub fn new(name: impl Into<String>) -> Self {
        let mut teacher = Self {
            name: name.into(),
            schedule: vec![String::new(); PERIODS_PER_DAY],
            job_type: JobType::Regular,
            load_status: LoadStatus::NoLoad,
            filled_periods: 0,
            time_allocation: 0.0,
            exempt_from_duty: false,
            max_duties_per_term: 0,
        };
        teacher.refresh_derived();
        teacher
    }

    /// 按节次顺序创建教师 (超出 10 节的部分忽略)
    pub fn with_schedule<I, S>(name: impl Into<String>, periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut teacher = Self::new(name);
        for (idx, period) in periods.into_iter().take(PERIODS_PER_DAY).enumerate() {
            teacher.schedule[idx] = period.into();
        }
        teacher.refresh_derived();
        teacher
    }

    /// 设置单节课程并重算派生字段
    ///
    /// 下标越界时忽略,返回 false
    pub fn set_period(&mut self, period_index: usize, course: impl Into<String>) -> bool {
        if period_index >= PERIODS_PER_DAY {
            return false;
        }
        self.schedule[period_index] = course.into();
        self.refresh_derived();
        true
    }

    /// 人工覆写岗位类型 (如 HEAD)
    ///
    /// 只重算值勤上限;免值勤课程仍然把上限压为 0。
    /// 之后的课表变更会按课表重新分类,覆盖此处设置。
    pub fn set_job_type(&mut self, job_type: JobType) {
        self.job_type = job_type;
        self.max_duties_per_term =
            WorkloadCore::max_duties_per_term(self.job_type, self.load_status, self.exempt_from_duty);
    }

    fn refresh_derived(&mut self) {
        let classification = WorkloadCore::classify_job_type(&self.schedule);
        self.filled_periods = WorkloadCore::filled_periods(&self.schedule);
        self.load_status = LoadStatus::from_filled_periods(self.filled_periods);
        self.time_allocation = WorkloadCore::time_allocation(self.filled_periods);
        self.job_type = classification.job_type;
        self.exempt_from_duty = classification.exempt;
        self.max_duties_per_term =
            WorkloadCore::max_duties_per_term(self.job_type, self.load_status, self.exempt_from_duty);
    }

    // ==========================================
    // 只读访问
    // ==========================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> &[String] {
        &self.schedule
    }

    /// 指定节次是否有课 (越界视为无课)
    pub fn has_class_in_period(&self, period_index: usize) -> bool {
        self.schedule
            .get(period_index)
            .map(|p| !p.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    pub fn filled_periods(&self) -> usize {
        self.filled_periods
    }

    pub fn time_allocation(&self) -> f64 {
        self.time_allocation
    }

    pub fn is_exempt_from_duty(&self) -> bool {
        self.exempt_from_duty
    }

    pub fn max_duties_per_term(&self) -> u32 {
        self.max_duties_per_term
    }
}

// ==========================================
// TeacherRosterSummary - 教师名册统计
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeacherRosterSummary {
    pub total_teachers: usize,
    pub by_load_status: BTreeMap<String, usize>,
    pub by_job_type: BTreeMap<String, usize>,
    pub warnings: Vec<String>,
}

impl TeacherRosterSummary {
    pub fn from_teachers(teachers: &[Teacher]) -> Self {
        let mut summary = Self {
            total_teachers: teachers.len(),
            ..Self::default()
        };

        for teacher in teachers {
            *summary
                .by_load_status
                .entry(teacher.load_status().to_string())
                .or_insert(0) += 1;
            *summary
                .by_job_type
                .entry(teacher.job_type().to_string())
                .or_insert(0) += 1;

            if teacher.load_status() == LoadStatus::OverFullTime {
                summary.warnings.push(format!(
                    "{} has {} classes (over full-time load)",
                    teacher.name(),
                    teacher.filled_periods()
                ));
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_teacher_has_no_load() {
        let t = Teacher::new("Ada Lovelace");
        assert_eq!(t.schedule().len(), PERIODS_PER_DAY);
        assert_eq!(t.load_status(), LoadStatus::NoLoad);
        assert_eq!(t.job_type(), JobType::Regular);
        assert_eq!(t.max_duties_per_term(), 0);
    }

    #[test]
    fn test_full_time_regular_teacher() {
        let t = Teacher::with_schedule(
            "Grace Hopper",
            ["MPM2D", "ENG1D", "ENG2D", "SNC1W", "", "CHC2D", "", "MCR3U", "", ""],
        );
        assert_eq!(t.filled_periods(), 6);
        assert_eq!(t.load_status(), LoadStatus::FullTime);
        assert_eq!(t.max_duties_per_term(), 14);
        assert!((t.time_allocation() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_period_keeps_derived_fields_in_sync() {
        let mut t = Teacher::with_schedule("Alan Turing", ["MPM2D", "ENG1D"]);
        assert_eq!(t.load_status(), LoadStatus::TwoSixths);
        assert_eq!(t.max_duties_per_term(), 6);

        assert!(t.set_period(2, "SNC1W"));
        assert_eq!(t.load_status(), LoadStatus::ThreeSixths);
        assert_eq!(t.max_duties_per_term(), 7);

        assert!(t.set_period(3, "PPL1OP-01"));
        assert_eq!(t.job_type(), JobType::Gym);
        assert_eq!(t.max_duties_per_term(), 0);

        assert!(t.set_period(3, ""));
        assert_eq!(t.job_type(), JobType::Regular);
        assert_eq!(t.max_duties_per_term(), 7);
    }

    #[test]
    fn test_set_period_out_of_range_is_ignored() {
        let mut t = Teacher::new("Edsger Dijkstra");
        assert!(!t.set_period(10, "MPM2D"));
        assert_eq!(t.filled_periods(), 0);
    }

    #[test]
    fn test_job_type_override() {
        let mut t = Teacher::with_schedule("Barbara Liskov", ["MPM2D", "ENG1D", "SNC1W"]);
        t.set_job_type(JobType::Head);
        assert_eq!(t.max_duties_per_term(), 10);

        // 免值勤课程优先于人工覆写
        let mut exempt = Teacher::with_schedule("Ken Thompson", ["2LI-01", "ENG1D"]);
        exempt.set_job_type(JobType::Head);
        assert_eq!(exempt.max_duties_per_term(), 0);
    }

    #[test]
    fn test_has_class_in_period() {
        let t = Teacher::with_schedule("Dennis Ritchie", ["MPM2D", ""]);
        assert!(t.has_class_in_period(0));
        assert!(!t.has_class_in_period(1));
        assert!(!t.has_class_in_period(11));
    }

    #[test]
    fn test_roster_summary() {
        let teachers = vec![
            Teacher::with_schedule("A", ["1", "2", "3", "4", "5", "6", "7"]),
            Teacher::with_schedule("B", ["PPL1OP", "2"]),
            Teacher::new("C"),
        ];
        let summary = TeacherRosterSummary::from_teachers(&teachers);
        assert_eq!(summary.total_teachers, 3);
        assert_eq!(summary.by_load_status.get("OVER_FULL_TIME"), Some(&1));
        assert_eq!(summary.by_load_status.get("NO_LOAD"), Some(&1));
        assert_eq!(summary.by_job_type.get("GYM"), Some(&1));
        assert_eq!(summary.by_job_type.get("REGULAR"), Some(&2));
        assert_eq!(summary.warnings.len(), 1);
        assert!(summary.warnings[0].starts_with("A has 7 classes"));
    }
}
