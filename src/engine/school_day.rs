// ==========================================
// 学校值勤排班系统 - 上课日判定引擎
// ==========================================
// 职责: 判定日期是否为上课日,并初始化学年校历
// 输入: 日期 + 校历事件列表
// 输出: Day.is_school_day + 上课日的空值勤格网
// ==========================================

use crate::domain::calendar::{Calendar, Day, Holiday, SchoolYear};
use crate::engine::duty_catalog::DutyCatalog;
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, info, instrument};

/// 默认停课事件关键字
pub const DEFAULT_EXCLUSION_KEYWORDS: [&str; 4] = ["PA Day", "Holiday", "Exam", "Summer School"];

// ==========================================
// SchoolDayClassifier - 上课日判定引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct SchoolDayClassifier {
    exclusion_keywords: Vec<String>,
}

impl Default for SchoolDayClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSION_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }
}

impl SchoolDayClassifier {
    /// 构造函数
    ///
    /// # 参数
    /// - exclusion_keywords: 停课事件的摘要关键字
    pub fn new(exclusion_keywords: Vec<String>) -> Self {
        Self { exclusion_keywords }
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// 事件是否属于停课类别
    pub fn is_exclusionary(&self, holiday: &Holiday) -> bool {
        holiday.matches_any(&self.exclusion_keywords)
    }

    /// 判定上课日
    ///
    /// # 规则
    /// 1. 周六/周日 → 非上课日 (与事件数据无关)
    /// 2. 落在任一停课事件区间内 (两端均含) → 非上课日
    /// 3. 否则 → 上课日
    pub fn is_school_day(&self, date: NaiveDate, holidays: &[Holiday]) -> bool {
        if Self::is_weekend(date) {
            return false;
        }

        !holidays
            .iter()
            .any(|h| h.covers(date) && self.is_exclusionary(h))
    }

    /// 初始化学年校历
    ///
    /// 为学年内每个日期生成 Day;上课日填充目录中的空值勤格网。
    /// 会覆盖 calendar.days 的原有内容。
    #[instrument(skip(self, calendar, catalog), fields(
        start = %school_year.start,
        end = %school_year.end,
        holidays_count = calendar.holidays.len()
    ))]
    pub fn seed_calendar(
        &self,
        calendar: &mut Calendar,
        school_year: SchoolYear,
        catalog: &DutyCatalog,
    ) {
        let template_grid = catalog.seed_grid();

        let days: Vec<Day> = school_year
            .dates()
            .map(|date| {
                let is_school_day = self.is_school_day(date, &calendar.holidays);
                let mut day = Day::new(date, is_school_day);
                if is_school_day {
                    day.duties = template_grid.clone();
                } else {
                    debug!(date = %date, "非上课日,跳过值勤格网");
                }
                day
            })
            .collect();

        let school_days = days.iter().filter(|d| d.is_school_day).count();
        calendar.days = days;

        info!(
            days_count = calendar.days.len(),
            school_days_count = school_days,
            "校历初始化完成"
        );
    }
}
