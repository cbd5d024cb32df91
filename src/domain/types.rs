// ==========================================
// 学校值勤排班系统 - 领域类型定义
// ==========================================
// 红线: 封闭枚举 + 显式映射函数,不做裸整数比较
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 岗位类型 (Job Type)
// ==========================================
// 由课程代码推导,HEAD 只能通过人工覆写获得
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Regular,        // 普通任课教师
    Coop,           // 合作教育
    Gym,            // 体育
    Guidance,       // 辅导
    CreditRecovery, // 学分补修
    Head,           // 教研组长
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::Regular,
        JobType::Coop,
        JobType::Gym,
        JobType::Guidance,
        JobType::CreditRecovery,
        JobType::Head,
    ];
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobType::Regular => write!(f, "REGULAR"),
            JobType::Coop => write!(f, "COOP"),
            JobType::Gym => write!(f, "GYM"),
            JobType::Guidance => write!(f, "GUIDANCE"),
            JobType::CreditRecovery => write!(f, "CREDIT_RECOVERY"),
            JobType::Head => write!(f, "HEAD"),
        }
    }
}

// ==========================================
// 课时负荷 (Load Status)
// ==========================================
// 按已排课节数分桶,满负荷为 6 节
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadStatus {
    OverFullTime, // >6/6
    FullTime,     // 6/6
    FiveSixths,   // 5/6
    FourSixths,   // 4/6
    ThreeSixths,  // 3/6
    TwoSixths,    // 2/6
    OneSixth,     // 1/6
    NoLoad,       // 0/6
}

impl LoadStatus {
    pub const ALL: [LoadStatus; 8] = [
        LoadStatus::OverFullTime,
        LoadStatus::FullTime,
        LoadStatus::FiveSixths,
        LoadStatus::FourSixths,
        LoadStatus::ThreeSixths,
        LoadStatus::TwoSixths,
        LoadStatus::OneSixth,
        LoadStatus::NoLoad,
    ];

    /// 按已排课节数映射负荷状态
    ///
    /// # 规则
    /// - >=7 → OVER_FULL_TIME
    /// - 6..=1 → 对应 N/6 档
    /// - 0 → NO_LOAD
    pub fn from_filled_periods(filled_periods: usize) -> Self {
        match filled_periods {
            0 => LoadStatus::NoLoad,
            1 => LoadStatus::OneSixth,
            2 => LoadStatus::TwoSixths,
            3 => LoadStatus::ThreeSixths,
            4 => LoadStatus::FourSixths,
            5 => LoadStatus::FiveSixths,
            6 => LoadStatus::FullTime,
            _ => LoadStatus::OverFullTime,
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::OverFullTime => write!(f, "OVER_FULL_TIME"),
            LoadStatus::FullTime => write!(f, "FULL_TIME"),
            LoadStatus::FiveSixths => write!(f, "FIVE_SIXTHS"),
            LoadStatus::FourSixths => write!(f, "FOUR_SIXTHS"),
            LoadStatus::ThreeSixths => write!(f, "THREE_SIXTHS"),
            LoadStatus::TwoSixths => write!(f, "TWO_SIXTHS"),
            LoadStatus::OneSixth => write!(f, "ONE_SIXTH"),
            LoadStatus::NoLoad => write!(f, "NO_LOAD"),
        }
    }
}

// ==========================================
// 学期 (Term)
// ==========================================
// 每个学期是独立的值勤均衡周期
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    T1, // 9-10 月
    T2, // 11-1 月
    T3, // 2-3 月
    T4, // 4-6 月 (以及所有区间外日期)
}

impl Term {
    pub const ALL: [Term; 4] = [Term::T1, Term::T2, Term::T3, Term::T4];

    /// 按月份判定日期所属学期
    ///
    /// 区间外的月份 (7-8 月) 归入 T4
    pub fn of(date: NaiveDate) -> Self {
        match date.month() {
            9 | 10 => Term::T1,
            11 | 12 | 1 => Term::T2,
            2 | 3 => Term::T3,
            _ => Term::T4,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::T1 => write!(f, "T1"),
            Term::T2 => write!(f, "T2"),
            Term::T3 => write!(f, "T3"),
            Term::T4 => write!(f, "T4"),
        }
    }
}

// ==========================================
// 轮换日 (Rotation Day)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rotation {
    Day1,
    Day2,
}

impl Rotation {
    pub const ALL: [Rotation; 2] = [Rotation::Day1, Rotation::Day2];
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Day1 => write!(f, "DAY1"),
            Rotation::Day2 => write!(f, "DAY2"),
        }
    }
}
