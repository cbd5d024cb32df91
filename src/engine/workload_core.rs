// ==========================================
// 学校值勤排班系统 - 教师工作量 Core 纯函数库
// ==========================================
// 职责: 已排课节数、负荷状态、岗位类型、值勤上限的纯逻辑
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::types::{JobType, LoadStatus};

/// 课表固定节数 (含第 5、10 节选修节)
pub const PERIODS_PER_DAY: usize = 10;

/// 满负荷课时基数
pub const BASE_TEACHING_PERIODS: f64 = 6.0;

// ===== 值勤上限 =====
const GUIDANCE_MAX_DUTIES: u32 = 25;
const HEAD_MAX_DUTIES: u32 = 10;
const FULL_TIME_MAX_DUTIES: u32 = 14;
const FIVE_SIXTHS_MAX_DUTIES: u32 = 11;
const FOUR_SIXTHS_MAX_DUTIES: u32 = 9;
const THREE_SIXTHS_MAX_DUTIES: u32 = 7;
const TWO_SIXTHS_MAX_DUTIES: u32 = 6;
const NO_DUTIES: u32 = 0;

// ==========================================
// ExemptCourse - 免值勤课程族
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExemptCourse {
    Coop,
    Gym,
    Guidance,
    CreditRecovery,
    Library,
}

impl ExemptCourse {
    /// 课程族对应的岗位类型 (图书馆只免值勤,不决定岗位)
    pub fn job_type(self) -> Option<JobType> {
        match self {
            ExemptCourse::Coop => Some(JobType::Coop),
            ExemptCourse::Gym => Some(JobType::Gym),
            ExemptCourse::Guidance => Some(JobType::Guidance),
            ExemptCourse::CreditRecovery => Some(JobType::CreditRecovery),
            ExemptCourse::Library => None,
        }
    }
}

// 顺序即同一课程代码内的判定优先级
const EXEMPT_COURSE_CODES: &[(&str, ExemptCourse)] = &[
    ("1CO", ExemptCourse::Coop),
    ("PPL", ExemptCourse::Gym),
    ("2GU", ExemptCourse::Guidance),
    ("GLE", ExemptCourse::Guidance),
    ("1RC", ExemptCourse::CreditRecovery),
    ("RCR", ExemptCourse::CreditRecovery),
    ("2LI", ExemptCourse::Library),
];

/// 岗位分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobClassification {
    pub job_type: JobType,
    /// 课表中出现任一免值勤课程
    pub exempt: bool,
}

// ==========================================
// WorkloadCore - 纯函数工具类
// ==========================================
pub struct WorkloadCore;

impl WorkloadCore {
    /// 统计已排课节数
    ///
    /// # 规则
    /// - 8 个必修节: 非空即计数
    /// - 第 5、10 节: 仅在非空时计数
    ///
    /// 两条规则合起来即"非空节数"
    pub fn filled_periods(schedule: &[String]) -> usize {
        schedule
            .iter()
            .take(PERIODS_PER_DAY)
            .filter(|period| !period.trim().is_empty())
            .count()
    }

    /// 课时占比 (仅用于展示,不参与资格判定)
    pub fn time_allocation(filled_periods: usize) -> f64 {
        filled_periods as f64 / BASE_TEACHING_PERIODS
    }

    /// 课程代码归一化
    ///
    /// # 规则
    /// - 去除引号
    /// - 转大写
    /// - 取空格/逗号/连字符前的第一段
    pub fn normalize_course_code(raw: &str) -> String {
        let cleaned = raw.replace(['"', '\''], "").to_uppercase();
        cleaned
            .trim()
            .split([' ', ',', '-'])
            .next()
            .unwrap_or("")
            .to_string()
    }

    /// 判定单个课程代码所属的免值勤课程族
    pub fn exempt_course(code: &str) -> Option<ExemptCourse> {
        if code.is_empty() {
            return None;
        }
        EXEMPT_COURSE_CODES
            .iter()
            .find(|(marker, _)| code.contains(marker))
            .map(|(_, course)| *course)
    }

    /// 按课表判定岗位类型
    ///
    /// # 规则
    /// 1. 逐节扫描 (顺序敏感),单节内可有多门逗号分隔的课程
    /// 2. 命中任一免值勤课程 → exempt = true
    /// 3. 首个命中 COOP/GYM/GUIDANCE/CREDIT_RECOVERY 的课程决定岗位类型
    /// 4. 图书馆课程只免值勤,继续扫描
    /// 5. 无命中 → REGULAR
    pub fn classify_job_type(schedule: &[String]) -> JobClassification {
        let mut exempt = false;

        for period in schedule.iter().take(PERIODS_PER_DAY) {
            if period.trim().is_empty() {
                continue;
            }

            for course_entry in period.split(',') {
                let code = Self::normalize_course_code(course_entry);
                let Some(course) = Self::exempt_course(&code) else {
                    continue;
                };

                exempt = true;
                if let Some(job_type) = course.job_type() {
                    return JobClassification { job_type, exempt };
                }
            }
        }

        JobClassification {
            job_type: JobType::Regular,
            exempt,
        }
    }

    /// 计算学期值勤上限
    ///
    /// # 规则
    /// 1. 免值勤 → 0
    /// 2. GUIDANCE → 25
    /// 3. HEAD → 10
    /// 4. 其他按负荷状态: 6/6→14, 5/6→11, 4/6→9, 3/6→7, 2/6→6, 其余→0
    pub fn max_duties_per_term(job_type: JobType, load_status: LoadStatus, exempt: bool) -> u32 {
        if exempt {
            return NO_DUTIES;
        }

        match job_type {
            JobType::Guidance => GUIDANCE_MAX_DUTIES,
            JobType::Head => HEAD_MAX_DUTIES,
            _ => match load_status {
                LoadStatus::FullTime => FULL_TIME_MAX_DUTIES,
                LoadStatus::FiveSixths => FIVE_SIXTHS_MAX_DUTIES,
                LoadStatus::FourSixths => FOUR_SIXTHS_MAX_DUTIES,
                LoadStatus::ThreeSixths => THREE_SIXTHS_MAX_DUTIES,
                LoadStatus::TwoSixths => TWO_SIXTHS_MAX_DUTIES,
                LoadStatus::OverFullTime | LoadStatus::OneSixth | LoadStatus::NoLoad => NO_DUTIES,
            },
        }
    }
}
