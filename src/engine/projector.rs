// ==========================================
// 学校值勤排班系统 - 模板投影引擎
// ==========================================
// 职责: 把 (学期, 星期) 模板回放到学年内每个上课日
// 输入: 校历 (可写) + 只读模板簿
// 输出: 上课日值勤格网被整体覆盖
// 红线: 模板只读;同一 (学期, 星期) 的所有上课日得到相同格网
// ==========================================

use crate::domain::calendar::Calendar;
use crate::domain::types::Term;
use crate::engine::template_builder::TemplateBook;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{info, instrument, warn};

// ==========================================
// ProjectionReport - 投影报告
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectionReport {
    /// 已套用模板的上课日数
    pub projected_days: usize,
    /// 无对应模板、排班被清空的上课日
    pub days_without_template: Vec<NaiveDate>,
}

// ==========================================
// ScheduleProjector - 模板投影引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ScheduleProjector {
    // 无状态引擎
}

impl ScheduleProjector {
    pub fn new() -> Self {
        Self {}
    }

    /// 投影模板到全部上课日
    ///
    /// # 规则
    /// 1. 非上课日不处理
    /// 2. 按日期求 (学期, 星期) 取模板,格网整体替换为模板合并结果的深拷贝
    /// 3. 无模板的上课日: 保留岗位描述,清空排班
    ///
    /// 模板不变时重复投影结果不变
    #[instrument(skip_all, fields(
        days_count = calendar.days.len(),
        templates_count = book.len()
    ))]
    pub fn project(&self, calendar: &mut Calendar, book: &TemplateBook) -> ProjectionReport {
        let mut report = ProjectionReport::default();

        for day in calendar.days.iter_mut().filter(|d| d.is_school_day) {
            match book.for_date(day.date) {
                Some(template) => {
                    day.duties = template.merged_grid();
                    report.projected_days += 1;
                }
                None => {
                    warn!(
                        date = %day.date,
                        term = %Term::of(day.date),
                        weekday = ?day.date.weekday(),
                        "上课日无对应模板,清空排班"
                    );
                    day.duties = day.duties.placeholders();
                    report.days_without_template.push(day.date);
                }
            }
        }

        info!(
            projected_days = report.projected_days,
            days_without_template = report.days_without_template.len(),
            "模板投影完成"
        );
        report
    }
}
